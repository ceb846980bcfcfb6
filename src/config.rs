//! 配置加载
//!
//! 配置文件位于 `~/.config/stateview/config.toml`（其他平台通过 `dirs::config_dir()` 定位），
//! 文件不存在时使用默认值。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::component::words_list::{TITLE, WORDS};
use crate::markup::RenderOptions;
use crate::models::State;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// 是否转义标题与单词中的特殊字符
    pub escape_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

/// 单词列表的初始内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub title: String,
    pub initial: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            title: "Words".to_string(),
            initial: Vec::new(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stateview").join("config.toml")
    }

    /// 从默认路径加载
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// 从指定路径加载，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape_text: self.render.escape_text,
        }
    }

    /// 单词列表的初始 State
    pub fn initial_state(&self) -> State {
        State::new()
            .with(TITLE, self.words.title.clone())
            .with(WORDS, self.words.initial.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.render.escape_text);
        assert_eq!(config.words.title, "Words");
        assert!(config.words.initial.is_empty());
    }

    #[test]
    fn test_config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("stateview/config.toml"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[words]\ninitial = [\"one\", \"two\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.words.title, "Words");
        assert_eq!(config.words.initial, vec!["one", "two"]);
        assert!(config.render_options().escape_text);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render\nescape_text = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_initial_state() {
        let mut config = Config::default();
        config.words.title = "Title 1".to_string();
        config.words.initial = vec!["a".to_string()];

        let state = config.initial_state();

        assert_eq!(state.str_field(TITLE).unwrap(), Some("Title 1"));
        assert_eq!(state.string_list(WORDS).unwrap(), vec!["a"]);
    }
}
