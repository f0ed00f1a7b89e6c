use std::path::PathBuf;

use crate::config::{self, Config};
use crate::report::Report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 로드 오류
    Config(config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// 한 번의 실행에 필요한 입력값.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub reynolds: f64,
    pub roughness: f64,
    /// `None`이면 설정 파일의 값을 사용한다.
    pub sigfig: Option<u32>,
    pub config_path: PathBuf,
}

impl RunOptions {
    pub fn new(reynolds: f64, roughness: f64) -> Self {
        Self {
            reynolds,
            roughness,
            sigfig: None,
            config_path: PathBuf::from(config::DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정을 로드하고 비교표를 계산한다.
pub fn run(options: &RunOptions) -> Result<Report, AppError> {
    let cfg = Config::load(&options.config_path)?;
    let sigfig = options.sigfig.unwrap_or(cfg.sigfig);
    log::info!(
        "app.run | Re={} e/D={} sigfig={} models={}",
        options.reynolds,
        options.roughness,
        sigfig,
        cfg.models.len()
    );
    Ok(Report::evaluate(
        options.reynolds,
        options.roughness,
        sigfig,
        &cfg.models,
    ))
}

/// 로거를 초기화한다. `verbose`이면 debug 레벨, 아니면 `RUST_LOG`를 따른다.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // 테스트 등에서 이미 초기화된 경우는 무시한다.
    let _ = builder.try_init();
}
