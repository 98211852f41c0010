//! 客户端标识存储
//!
//! 每个客户端安装只生成一次 12 位随机标识并持久化到本地，
//! 之后每次会话握手都携带同一标识。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use draughts_protocol::CLIENT_ID_LEN;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// URL 安全字符集
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// 标识格式错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientIdError {
    #[error("Client id must be {expected} characters, got {len}")]
    WrongLength { len: usize, expected: usize },

    #[error("Invalid character {0:?} in client id")]
    InvalidChar(char),
}

/// 客户端标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// 随机生成新标识
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..CLIENT_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    /// 校验并解析标识
    pub fn parse(s: &str) -> Result<Self, ClientIdError> {
        let len = s.chars().count();
        if len != CLIENT_ID_LEN {
            return Err(ClientIdError::WrongLength {
                len,
                expected: CLIENT_ID_LEN,
            });
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii() || !ALPHABET.contains(&(*c as u8))) {
            return Err(ClientIdError::InvalidChar(c));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 持久化的标识记录
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdentityRecord {
    client_id: String,
    created_at: DateTime<Utc>,
}

/// 标识存储
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    /// 使用指定文件创建存储
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认存储路径：<数据目录>/draughts/identity.json
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().context("无法获取应用数据目录")?;
        Ok(data_dir.join("draughts").join("identity.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取已保存的标识，不存在或无效时生成新标识并保存
    pub fn load_or_create(&self) -> Result<ClientId> {
        if let Some(id) = self.load() {
            return Ok(id);
        }

        let id = ClientId::generate();
        self.save(&id)?;
        tracing::info!("已生成新的客户端标识: {}", id);
        Ok(id)
    }

    fn load(&self) -> Option<ClientId> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("无法读取标识文件 {:?}: {}", self.path, e);
                return None;
            }
        };

        let record: IdentityRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("标识文件格式无效: {}，重新生成", e);
                return None;
            }
        };

        match ClientId::parse(&record.client_id) {
            Ok(id) => {
                tracing::debug!("已加载客户端标识 (创建于 {})", record.created_at);
                Some(id)
            }
            Err(e) => {
                tracing::warn!("已保存的标识无效: {}，重新生成", e);
                None
            }
        }
    }

    fn save(&self, id: &ClientId) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建目录: {:?}", parent))?;
        }

        let record = IdentityRecord {
            client_id: id.to_string(),
            created_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&record).context("序列化标识失败")?;

        fs::write(&self.path, content)
            .with_context(|| format!("写入文件失败: {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (IdentityStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = IdentityStore::new(temp_dir.path().join("nested").join("identity.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_generate() {
        for _ in 0..100 {
            let id = ClientId::generate();
            assert_eq!(id.as_str().len(), CLIENT_ID_LEN);
            assert_eq!(ClientId::parse(id.as_str()), Ok(id));
        }
    }

    #[test]
    fn test_parse() {
        assert!(ClientId::parse("V1StGXR8_Z5j").is_ok());
        assert_eq!(
            ClientId::parse("short"),
            Err(ClientIdError::WrongLength {
                len: 5,
                expected: CLIENT_ID_LEN
            })
        );
        assert_eq!(
            ClientId::parse("V1StGXR8 Z5j"),
            Err(ClientIdError::InvalidChar(' '))
        );
        assert_eq!(
            ClientId::parse("V1StGXR8éZ5j"),
            Err(ClientIdError::InvalidChar('é'))
        );
    }

    #[test]
    fn test_create_then_reload() {
        let (store, _temp_dir) = create_test_store();
        assert!(!store.path().exists());

        let first = store.load_or_create().unwrap();
        assert!(store.path().exists());

        let second = store.load_or_create().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_length_is_replaced() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{"client_id":"abc","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let id = store.load_or_create().unwrap();
        assert_ne!(id.as_str(), "abc");
        assert_eq!(store.load_or_create().unwrap(), id);
    }

    #[test]
    fn test_corrupt_file_is_replaced() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        let id = store.load_or_create().unwrap();
        assert_eq!(id.as_str().len(), CLIENT_ID_LEN);
    }

    #[test]
    fn test_existing_id_is_kept() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{"client_id":"V1StGXR8_Z5j","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(store.load_or_create().unwrap().as_str(), "V1StGXR8_Z5j");
    }
}
