use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::friction::Model;
use crate::rounding::DEFAULT_SIGFIG;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "colebrook.toml";

/// 비교표 출력 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 명령행에서 자릿수를 지정하지 않았을 때 사용할 소수 자릿수
    pub sigfig: u32,
    /// 표에 출력할 모델과 순서
    pub models: Vec<Model>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sigfig: DEFAULT_SIGFIG,
            models: Model::ALL.to_vec(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file i/o error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 반환한다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg = Self::from_toml(&content)?;
            log::debug!("Config.load | loaded '{}': {:?}", path.display(), cfg);
            Ok(cfg)
        } else {
            log::debug!("Config.load | '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
