//! 文本棋盘渲染

use draughts_protocol::{BoardState, Color};

/// 渲染为文本：8 行棋盘带行列标号，末尾一行走子方与回合数
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");

    for (row_idx, row) in state.board.rows().enumerate() {
        out.push_str(&row_idx.to_string());
        for tile in row {
            let c = match tile.occupant {
                Some(piece) => piece.display_char(),
                None if tile.pos.is_dark() => '·',
                None => ' ',
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }

    let side = match state.side_to_move {
        Color::White => "白方",
        Color::Black => "黑方",
    };
    out.push_str(&format!("走子方: {}  回合: {}", side, state.turn_number));
    out
}
