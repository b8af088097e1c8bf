// Entrypoint for the CLI application.
// - Keeps `main` small: read configuration and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use anyhow::Context;
use pdf_toc_cli::{config::Config, ui};

fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines don't land in the middle of the screens;
    // raise with RUST_LOG=debug.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("Failed to read configuration")?;
    log::debug!("starting with {:?}", config);

    // Blocks until the user exits from either screen.
    ui::run(&config)?;
    Ok(())
}
