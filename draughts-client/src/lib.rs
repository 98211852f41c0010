//! 国际跳棋客户端
//!
//! 包含:
//! - 客户端标识的生成与持久化
//! - 客户端设置
//! - 会话句柄（握手、局面收发）
//! - 文本棋盘渲染
//! - 命令行子命令

pub mod cli;
pub mod identity;
pub mod render;
pub mod session;
pub mod settings;

pub use identity::{ClientId, ClientIdError, IdentityStore};
pub use render::render_board;
pub use session::Session;
pub use settings::{ClientSettings, LogLevel};
