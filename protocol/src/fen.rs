//! FEN 格式解析和生成
//!
//! 国际跳棋（8x8）FEN 格式：
//! `<棋盘> <走子方> <回合数>`
//!
//! - 棋盘：8 段以 `/` 分隔，第一段为第 0 行
//! - 数字 `1`-`8` 表示连续空格，`b`/`w` 为黑/白兵，`B`/`W` 为黑/白王
//! - 走子方：`w` 或 `b`
//! - 回合数：非负十进制整数
//!
//! 示例：
//! `1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 w 1`

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, BoardState};
use crate::constants::BOARD_SIZE;
use crate::error::NotationError;
use crate::piece::{Color, Piece, Position};

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 w 1";

/// 空局面 FEN
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w 1";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为棋盘状态
    ///
    /// 依次检查字段数、棋盘、走子方、回合数，返回遇到的第一个错误。
    pub fn decode(fen: &str) -> Result<BoardState, NotationError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let [board_str, side_str, turn_str] = parts.as_slice() else {
            return Err(NotationError::malformed(format!(
                "Expected 3 fields, got {}",
                parts.len()
            )));
        };

        let board = Self::decode_board(board_str)?;
        let side_to_move = Self::decode_side(side_str)?;
        let turn_number = Self::decode_turn(turn_str)?;

        Ok(BoardState {
            board,
            side_to_move,
            turn_number,
        })
    }

    /// 解析棋盘部分
    pub fn decode_board(board_str: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::malformed(format!(
                "Expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;

            for c in row.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < BOARD_SIZE {
                        board.set(
                            Position::new_unchecked(row_idx as u8, col as u8),
                            Some(piece),
                        );
                    }
                    col += 1;
                } else {
                    return Err(NotationError::malformed(format!(
                        "Invalid character {:?} in row {}",
                        c, row_idx
                    )));
                }

                if col > BOARD_SIZE {
                    return Err(NotationError::malformed(format!(
                        "Row {} has too many columns",
                        row_idx
                    )));
                }
            }

            if col != BOARD_SIZE {
                return Err(NotationError::malformed(format!(
                    "Row {} has {} columns, expected {}",
                    row_idx, col, BOARD_SIZE
                )));
            }
        }

        Ok(board)
    }

    fn decode_side(token: &str) -> Result<Color, NotationError> {
        let mut chars = token.chars();
        let color = match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_fen_char(c),
            _ => None,
        };
        color.ok_or_else(|| NotationError::InvalidSideToken {
            token: token.to_string(),
        })
    }

    fn decode_turn(token: &str) -> Result<u32, NotationError> {
        let invalid = || NotationError::InvalidTurnToken {
            token: token.to_string(),
        };
        // u32::from_str 接受前导 `+`，这里只认纯数字
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse().map_err(|_| invalid())
    }

    /// 将棋盘状态转换为 FEN 字符串
    pub fn encode(state: &BoardState) -> String {
        format!(
            "{} {} {}",
            Self::encode_board(&state.board),
            state.side_to_move.to_fen_char(),
            state.turn_number
        )
    }

    /// 将棋盘转换为 FEN 棋盘部分，连续空格压缩为一个数字
    pub fn encode_board(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for tiles in board.rows() {
            let mut row = String::new();
            let mut empty_count = 0;

            for tile in tiles {
                match tile.occupant {
                    Some(piece) => {
                        if empty_count > 0 {
                            row.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }

    /// 解析初始局面
    pub fn initial() -> BoardState {
        BoardState::initial()
    }
}

impl FromStr for BoardState {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fen::decode(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Fen::encode(self))
    }
}
