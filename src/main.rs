use anyhow::Result;
use clap::Parser;
use console::style;
use log::{error, info};
use std::path::PathBuf;
use syno_thumb::component::SynoThumb;
use syno_thumb::config::Config;
use syno_thumb::init;
use syno_thumb::signal::setup_shutdown_signal;

/// Creates thumbnails ready to be used by a Synology system
#[derive(Parser)]
#[command(name = "syno-thumb")]
#[command(version, about, long_about = None)]
struct Cli {
    /// scans local path for images
    #[arg(short, long, default_value = "./")]
    dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init::init();

    if let Err(e) = run(&cli) {
        error!("執行失敗: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;

    let result = SynoThumb::new(config, shutdown_signal).run(&cli.dir)?;

    info!(
        "程式結束 - 成功: {}, 失敗: {}",
        result.processed,
        result.errors()
    );
    Ok(())
}
