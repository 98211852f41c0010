//! 协议常量定义

use std::time::Duration;

/// 协议版本号
pub const PROTOCOL_VERSION: u8 = 1;

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 8;

/// 棋盘格子总数
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 客户端标识长度
pub const CLIENT_ID_LEN: usize = 12;

/// 消息帧最大大小
pub const MAX_FRAME_SIZE: usize = 16 * 1024;

/// 连接超时（秒）
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// 连接超时 Duration
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(CONNECT_TIMEOUT_SECS);
