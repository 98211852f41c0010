//! 错误类型定义

use thiserror::Error;

/// FEN 解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 字段数、行数、列数不对或出现无法识别的字符
    #[error("Malformed FEN: {reason}")]
    MalformedGrammar { reason: String },

    /// 走子方字段不是 `w` 或 `b`
    #[error("Invalid side to move: {token:?}")]
    InvalidSideToken { token: String },

    /// 回合数字段不是非负十进制整数
    #[error("Invalid turn number: {token:?}")]
    InvalidTurnToken { token: String },
}

impl NotationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        NotationError::MalformedGrammar {
            reason: reason.into(),
        }
    }
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化错误（bincode）
    #[error("Bincode serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// 协议版本不匹配
    #[error("Protocol version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u8, actual: u8 },

    /// 帧大小超限
    #[error("Frame too large: {size} bytes (max: {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// 连接超时
    #[error("Connection timeout")]
    ConnectionTimeout,

    /// 连接已关闭
    #[error("Connection closed")]
    ConnectionClosed,

    /// 握手被拒绝
    #[error("Handshake rejected: {0}")]
    HandshakeRejected(String),

    /// 收到意外的消息
    #[error("Unexpected message: {0}")]
    UnexpectedMessage(String),

    /// FEN 解析错误
    #[error("Notation error: {0}")]
    Notation(#[from] NotationError),
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: ProtocolError = NotationError::InvalidSideToken {
            token: "x".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            ProtocolError::Notation(NotationError::InvalidSideToken { .. })
        ));

        let err: ProtocolError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ProtocolError::Io(_)));

        let bad: std::result::Result<String, _> = bincode::deserialize(&[0xff]);
        let err: ProtocolError = bad.unwrap_err().into();
        assert!(matches!(err, ProtocolError::Bincode(_)));
    }

    #[test]
    fn test_display() {
        let err = NotationError::malformed("Expected 8 rows, got 7");
        assert_eq!(err.to_string(), "Malformed FEN: Expected 8 rows, got 7");

        let err = ProtocolError::from(NotationError::InvalidTurnToken {
            token: "-1".to_string(),
        });
        assert_eq!(err.to_string(), "Notation error: Invalid turn number: \"-1\"");
    }
}
