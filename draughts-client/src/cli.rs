//! 命令行子命令
//!
//! 输出写入调用方提供的 `Write`，失败以 `Err` 返回，由 main 转成非零退出码。

use std::io::Write;

use anyhow::{bail, Context, Result};
use draughts_protocol::{BoardState, Fen, INITIAL_FEN};

use crate::render::render_board;
use crate::session::Session;
use crate::settings::ClientSettings;

pub const USAGE: &str = "\
用法:
  draughts show [FEN]      显示局面（默认初始局面）
  draughts check FEN...    校验 FEN
  draughts id              显示客户端标识
  draughts send [FEN]      发送局面到服务器并显示回传局面";

/// 分发子命令，`args` 不含程序名
pub async fn run<W: Write>(settings: &ClientSettings, args: &[String], out: &mut W) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };

    match command.as_str() {
        "show" => show(rest.first().map(String::as_str), out),
        "check" => check(rest, out),
        "id" => {
            let id = settings.identity_store()?.load_or_create()?;
            writeln!(out, "{}", id)?;
            Ok(())
        }
        "send" => send(settings, rest.first().map(String::as_str), out).await,
        other => {
            writeln!(out, "{}", USAGE)?;
            bail!("未知命令: {}", other)
        }
    }
}

fn parse_or_initial(fen: Option<&str>) -> Result<BoardState> {
    let fen = fen.unwrap_or(INITIAL_FEN);
    Fen::decode(fen).with_context(|| format!("无法解析 FEN: {}", fen))
}

/// 显示局面及其规范 FEN
pub fn show<W: Write>(fen: Option<&str>, out: &mut W) -> Result<()> {
    let state = parse_or_initial(fen)?;
    writeln!(out, "{}", render_board(&state))?;
    writeln!(out, "{}", Fen::encode(&state))?;
    Ok(())
}

/// 逐个校验 FEN，有任何无效时返回 Err
pub fn check<W: Write>(fens: &[String], out: &mut W) -> Result<()> {
    if fens.is_empty() {
        bail!("check 需要至少一个 FEN 参数");
    }

    let mut failed = 0;
    for fen in fens {
        match Fen::decode(fen) {
            Ok(_) => writeln!(out, "ok    {}", fen)?,
            Err(e) => {
                failed += 1;
                writeln!(out, "error {}: {}", fen, e)?;
            }
        }
    }

    if failed > 0 {
        bail!("{} 个 FEN 无效", failed);
    }
    Ok(())
}

/// 发送局面并显示服务器回传的局面
pub async fn send<W: Write>(
    settings: &ClientSettings,
    fen: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let state = parse_or_initial(fen)?;
    let client_id = settings.identity_store()?.load_or_create()?;

    let mut session = Session::connect(&settings.server, &client_id)
        .await
        .with_context(|| format!("无法连接服务器: {}", settings.server.addr()))?;
    session.send_position(&state).await?;
    tracing::info!("局面已发送: {}", Fen::encode(&state));

    let reply = session.recv_position().await?;
    writeln!(out, "{}", render_board(&reply))?;
    writeln!(out, "{}", Fen::encode(&reply))?;

    session.close().await?;
    Ok(())
}
