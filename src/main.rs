use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colebrook::app::{self, RunOptions};
use colebrook::config::DEFAULT_CONFIG_PATH;

/// Colebrook-White 근사식으로 Darcy 마찰계수를 비교 계산한다.
#[derive(Parser)]
#[command(name = "colebrook")]
#[command(about = "Darcy friction factor from explicit Colebrook-White approximations")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Reynolds Number
    reynolds: i64,

    /// Relative Roughness of pipe
    relroughness: f64,

    /// OPTIONAL - Number of Significant Figures (Default=4)
    sigfig: Option<u32>,

    /// Config file path
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 인자를 파싱한 뒤 비교표를 출력한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_logging(cli.verbose);
    let options = RunOptions {
        reynolds: cli.reynolds as f64,
        roughness: cli.relroughness,
        sigfig: cli.sigfig,
        config_path: cli.config,
    };
    match app::run(&options) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
