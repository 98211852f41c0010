//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, TILE_COUNT};
use crate::piece::{Color, Piece, Position};

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: Position,
    pub occupant: Option<Piece>,
}

impl Tile {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，每个格子的 pos 与索引一致
    tiles: Vec<Tile>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        let tiles = (0..TILE_COUNT)
            .map(|index| Tile {
                pos: Position::new_unchecked(
                    (index / BOARD_SIZE) as u8,
                    (index % BOARD_SIZE) as u8,
                ),
                occupant: None,
            })
            .collect();
        Self { tiles }
    }

    /// 创建初始棋盘：黑方 12 子在第 0-2 行，白方 12 子在第 5-7 行，均在深色格
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for tile in board.tiles.iter_mut().filter(|t| t.pos.is_dark()) {
            tile.occupant = match tile.pos.row {
                0..=2 => Some(Piece::man(Color::Black)),
                5..=7 => Some(Piece::man(Color::White)),
                _ => None,
            };
        }
        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.tile(pos).and_then(|t| t.occupant)
    }

    /// 设置指定位置的棋子，越界位置被忽略
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.tiles[pos.to_index()].occupant = piece;
        }
    }

    /// 获取指定位置的格子
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        if pos.is_valid() {
            self.tiles.get(pos.to_index())
        } else {
            None
        }
    }

    /// 按行优先顺序的全部格子
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// 逐行迭代，每行 8 个格子
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(BOARD_SIZE)
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, color: Color) -> Vec<(Position, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        self.tiles
            .iter()
            .filter_map(|t| t.occupant.map(|piece| (t.pos, piece)))
            .collect()
    }

    /// 指定阵营的棋子数
    pub fn count(&self, color: Color) -> usize {
        self.tiles
            .iter()
            .filter(|t| matches!(t.occupant, Some(p) if p.color == color))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 完整的棋盘状态（包含走子方、回合数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub side_to_move: Color,
    /// 回合数，无上限
    pub turn_number: u32,
}

impl BoardState {
    /// 空局面：无子，白方走，第 1 回合
    pub fn empty() -> Self {
        Self::from_board(Board::empty(), Color::White, 1)
    }

    /// 初始局面
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Color::White, 1)
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, side_to_move: Color, turn_number: u32) -> Self {
        Self {
            board,
            side_to_move,
            turn_number,
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}
