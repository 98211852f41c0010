//! 会话句柄
//!
//! 由调用方显式创建并持有，负责握手以及局面的收发。
//! 重连与重试策略不在这里处理。

use draughts_protocol::{
    BoardState, ClientMessage, Connection, Connector, Fen, NetworkConfig, ProtocolError, Result,
    ServerMessage, TcpConnection, TcpConnector,
};

use crate::identity::ClientId;

/// 已握手的会话
pub struct Session<C: Connection = TcpConnection> {
    conn: C,
    client_id: ClientId,
}

impl Session<TcpConnection> {
    /// 连接服务器并完成握手
    pub async fn connect(config: &NetworkConfig, client_id: &ClientId) -> Result<Self> {
        let addr = config.addr();
        let conn = TcpConnector.connect(&addr).await?;
        tracing::info!("已连接服务器: {}", addr);

        Self::from_connection(conn, client_id.clone()).await
    }
}

impl<C: Connection> Session<C> {
    /// 在已建立的连接上握手
    pub async fn from_connection(mut conn: C, client_id: ClientId) -> Result<Self> {
        conn.send(&ClientMessage::Hello {
            client_id: client_id.to_string(),
        })
        .await?;

        match conn.recv::<ServerMessage>().await? {
            ServerMessage::Welcome { client_id: echoed } if echoed == client_id.as_str() => {
                tracing::debug!("握手成功: {}", client_id);
                Ok(Self { conn, client_id })
            }
            ServerMessage::Welcome { client_id: echoed } => Err(ProtocolError::HandshakeRejected(
                format!("server answered for {:?}", echoed),
            )),
            ServerMessage::Error { code, message } => Err(ProtocolError::HandshakeRejected(
                format!("{:?}: {}", code, message),
            )),
            other => Err(ProtocolError::UnexpectedMessage(format!("{:?}", other))),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// 发送局面
    pub async fn send_position(&mut self, state: &BoardState) -> Result<()> {
        let msg = ClientMessage::position(state);
        tracing::debug!("发送局面: {:?}", msg);
        self.conn.send(&msg).await
    }

    /// 接收并解析局面
    pub async fn recv_position(&mut self) -> Result<BoardState> {
        match self.conn.recv::<ServerMessage>().await? {
            ServerMessage::Position { fen } => {
                tracing::debug!("收到局面: {}", fen);
                Ok(Fen::decode(&fen)?)
            }
            other => Err(ProtocolError::UnexpectedMessage(format!("{:?}", other))),
        }
    }

    /// 心跳
    pub async fn ping(&mut self) -> Result<()> {
        self.conn.send(&ClientMessage::Ping).await?;
        match self.conn.recv::<ServerMessage>().await? {
            ServerMessage::Pong => Ok(()),
            other => Err(ProtocolError::UnexpectedMessage(format!("{:?}", other))),
        }
    }

    /// 关闭会话
    pub async fn close(mut self) -> Result<()> {
        self.conn.close().await
    }
}
