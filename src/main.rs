use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

use frameless_chrome::utils::{self, Config};
use frameless_chrome::window;

/// frameless - a borderless window with a custom title bar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window title
    #[arg(short, long)]
    title: Option<String>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Start maximized
    #[arg(short, long)]
    maximized: bool,

    /// Title bar icon
    #[arg(long, value_name = "PATH")]
    icon: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.window.title = title.clone();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.maximized {
            config.window.start_maximized = true;
        }
        if let Some(icon) = &self.icon {
            config.title_bar.icon_path = icon.clone();
        }
        if self.debug {
            config.general.log_level = "debug".to_string();
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let mut config = utils::load_config().context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid command-line options")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or(config.general.log_level.as_str()))
        .format_timestamp_millis()
        .init();

    info!("Starting frameless v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = window::run(config) {
        error!("Window failed: {}", e);
        return Err(e.into());
    }

    info!("Window closed");
    Ok(())
}
