use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use trio::StartScreen;
use trio::core::config;

#[derive(Parser)]
#[command(
    name = "trio",
    about = "Three-screen terminal demo: name echo, calculator, country list"
)]
struct Args {
    /// Screen to open at startup (overrides the config file)
    #[arg(short, long, value_enum)]
    screen: Option<StartScreen>,

    /// Log file path
    #[arg(long, default_value = "trio.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Trio starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        Default::default()
    });
    let resolved = config::resolve(file_config, args.screen.map(Into::into));

    trio::tui::run(resolved)
}
