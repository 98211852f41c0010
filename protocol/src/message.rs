//! 消息类型定义
//!
//! 局面一律以 FEN 文本传输，双方只依赖 FEN 格式本身。

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::error::NotationError;
use crate::fen::Fen;

/// 错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// 客户端标识无效
    InvalidClientId,
    /// 局面无法解析
    InvalidPosition,
    /// 服务端内部错误
    Internal,
}

/// 客户端发送给服务端的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientMessage {
    /// 握手，附带本地持久化的客户端标识
    Hello { client_id: String },
    /// 发送局面
    Position { fen: String },
    /// 心跳请求
    Ping,
}

/// 服务端发送给客户端的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerMessage {
    /// 握手成功，回显客户端标识
    Welcome { client_id: String },
    /// 推送局面
    Position { fen: String },
    /// 错误
    Error { code: ErrorCode, message: String },
    /// 心跳响应
    Pong,
}

impl ClientMessage {
    /// 由棋盘状态构造局面消息
    pub fn position(state: &BoardState) -> Self {
        ClientMessage::Position {
            fen: Fen::encode(state),
        }
    }
}

impl ServerMessage {
    /// 由棋盘状态构造局面消息
    pub fn position(state: &BoardState) -> Self {
        ServerMessage::Position {
            fen: Fen::encode(state),
        }
    }

    /// 解析局面消息中的 FEN，非局面消息返回 None
    pub fn decode_position(&self) -> Option<Result<BoardState, NotationError>> {
        match self {
            ServerMessage::Position { fen } => Some(Fen::decode(fen)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::INITIAL_FEN;

    #[test]
    fn test_position_message_carries_fen() {
        let state = BoardState::initial();
        assert_eq!(
            ClientMessage::position(&state),
            ClientMessage::Position {
                fen: INITIAL_FEN.to_string()
            }
        );

        let msg = ServerMessage::position(&state);
        assert_eq!(msg.decode_position(), Some(Ok(state)));
        assert_eq!(ServerMessage::Pong.decode_position(), None);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let msg = ClientMessage::Hello {
            client_id: "V1StGXR8_Z5j".to_string(),
        };
        let bytes = bincode::serialize(&msg).unwrap();
        let parsed: ClientMessage = bincode::deserialize(&bytes).unwrap();
        assert_eq!(parsed, msg);
    }
}
