//! 客户端设置
//!
//! 设置以 JSON 格式保存在 <配置目录>/draughts/settings.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use draughts_protocol::NetworkConfig;
use serde::{Deserialize, Serialize};

use crate::identity::IdentityStore;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// tracing 过滤指令中的级别名
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 客户端设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// 服务器地址
    pub server: NetworkConfig,
    /// 客户端标识文件，未设置时使用默认路径
    pub identity_path: Option<PathBuf>,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server: NetworkConfig::default(),
            identity_path: None,
            log_level: LogLevel::default(),
        }
    }
}

impl ClientSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("draughts");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认设置
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("无法获取配置目录，使用默认设置");
                Self::default()
            }
        }
    }

    /// 从指定文件加载设置，失败时使用默认设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 保存设置到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 按设置打开客户端标识存储
    pub fn identity_store(&self) -> Result<IdentityStore> {
        let path = match &self.identity_path {
            Some(path) => path.clone(),
            None => IdentityStore::default_path()?,
        };
        Ok(IdentityStore::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = ClientSettings::load_from(&temp_dir.path().join("settings.json"));
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("draughts").join("settings.json");

        let settings = ClientSettings {
            server: NetworkConfig {
                host: "example.org".to_string(),
                port: 4000,
            },
            identity_path: Some(temp_dir.path().join("id.json")),
            log_level: LogLevel::Debug,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(ClientSettings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"log_level":"Trace"}"#).unwrap();

        let settings = ClientSettings::load_from(&path);
        assert_eq!(settings.log_level, LogLevel::Trace);
        assert_eq!(settings.server, NetworkConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());
    }

    #[test]
    fn test_identity_store_path() {
        let settings = ClientSettings {
            identity_path: Some(PathBuf::from("/tmp/draughts-id.json")),
            ..ClientSettings::default()
        };
        let store = settings.identity_store().unwrap();
        assert_eq!(store.path(), Path::new("/tmp/draughts-id.json"));
    }
}
