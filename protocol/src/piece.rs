//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, TILE_COUNT};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 黑方（初始在上方，第 0-2 行）
    Black,
    /// 白方（初始在下方，第 5-7 行）
    White,
}

impl Color {
    /// 获取对方阵营
    pub fn opponent(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 获取 FEN 字符（走子方字段）
    pub fn to_fen_char(&self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// 从 FEN 字符解析，区分大小写
    pub fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'b' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }
}

/// 棋子
///
/// 棋子没有独立身份，只是格子上的值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    /// 是否已升王
    pub crowned: bool,
}

impl Piece {
    /// 创建新棋子
    pub fn new(color: Color, crowned: bool) -> Self {
        Self { color, crowned }
    }

    /// 普通兵
    pub fn man(color: Color) -> Self {
        Self::new(color, false)
    }

    /// 王
    pub fn king(color: Color) -> Self {
        Self::new(color, true)
    }

    /// 返回升王后的棋子
    pub fn crown(self) -> Self {
        Self {
            crowned: true,
            ..self
        }
    }

    /// 获取 FEN 字符（小写为兵，大写为王）
    pub fn to_fen_char(&self) -> char {
        let c = self.color.to_fen_char();
        if self.crowned {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// 从 FEN 字符解析，只接受 b/B/w/W
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let color = Color::from_fen_char(c.to_ascii_lowercase())?;
        Some(Piece::new(color, c.is_ascii_uppercase()))
    }

    /// 获取棋子显示字符
    pub fn display_char(&self) -> char {
        match (self.color, self.crowned) {
            (Color::Black, false) => '●',
            (Color::Black, true) => '◆',
            (Color::White, false) => '○',
            (Color::White, true) => '◇',
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)，第 0 行对应 FEN 的第一段
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let pos = Self { row, col };
        pos.is_valid().then_some(pos)
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 是否为深色格（初始局面中放子的格子）
    pub fn is_dark(&self) -> bool {
        (self.row ^ self.col) & 1 == 1
    }

    /// 转换为数组索引（按行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < TILE_COUNT {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
