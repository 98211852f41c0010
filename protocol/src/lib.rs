//! 国际跳棋（8x8）共享协议库
//!
//! 包含:
//! - 棋子、格子、棋盘等核心数据结构
//! - FEN 格式的解析与生成
//! - 消息类型定义 (ClientMessage, ServerMessage)
//! - 传输层抽象 (Connector, Connection, Listener traits) 与帧编解码

mod board;
mod constants;
mod error;
mod fen;
mod message;
mod piece;
mod transport;

pub use board::{Board, BoardState, Tile};
pub use constants::*;
pub use error::{NotationError, ProtocolError, Result};
pub use fen::{Fen, EMPTY_FEN, INITIAL_FEN};
pub use message::{ClientMessage, ErrorCode, ServerMessage};
pub use piece::{Color, Piece, Position};
pub use transport::{
    Connection, Connector, FrameReader, FrameWriter, Listener, NetworkConfig, TcpConnection,
    TcpConnector, TcpListener,
};
