use clap::Parser;
use spaceapps_config::{CliArgs, Config, ConfigError};
use tracing::info;

mod app;
mod content;
mod faq;
mod logging;
mod page;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let mut config = load_config(&args)?;
    config.apply_cli_overrides(&args);

    if let Some(path) = logging::init(&config.log) {
        info!(path = %path.display(), "logging initialized");
    }
    info!(
        stars = config.background.star_count,
        blobs = config.background.blob_count,
        seed = ?config.background.seed,
        "configuration loaded"
    );

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// Load settings from `--config` or the platform config directory.
/// Without a home directory the built-in defaults are used.
fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let dir = match &args.config {
        Some(dir) => dir.clone(),
        None => match Config::default_dir() {
            Ok(dir) => dir,
            Err(ConfigError::NoConfigDir) => return Ok(Config::default()),
            Err(err) => return Err(err),
        },
    };
    Config::load_or_create(&dir)
}
