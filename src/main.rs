use anyhow::Result;
use fileblame::config::{self, Config, DEFAULT_CONFIG_FILE};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// Always exits 0: failures are visible in the printed result codes.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_validated() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config.logging.level);
    if let Some(e) = config_error {
        warn!("Ignoring {}: {}", DEFAULT_CONFIG_FILE, e);
    }
    info!("fileblame v{}", env!("CARGO_PKG_VERSION"));

    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: fileblame <file>");
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match fileblame::report_file_usage(&path, config.list_policy(), &mut out) {
        Ok(report) if !report.is_complete() => {
            info!(stage = ?report.stage, "Report stopped early");
        }
        Ok(_) => {}
        Err(e) => error!("{}", e),
    }

    Ok(())
}
