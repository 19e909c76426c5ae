use anyhow::Result;
use clap::Parser;
use gc_core::config::{PlotterConfig, PlotterMode, load_config};

pub mod cli;
pub mod creation;
pub mod demo;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    let mut config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        log::warn!(
            "config {} not found, using defaults",
            cli.config.display()
        );
        PlotterConfig::default()
    };

    if let Some(ref mode) = cli.mode {
        config.mode = match mode.as_str() {
            "basic" => PlotterMode::Basic,
            "grayscale" => PlotterMode::Grayscale,
            _ => {
                log::warn!("unknown mode '{mode}', keeping {:?}", config.mode);
                config.mode
            }
        };
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.validate()?;

    demo::run_all(&cli.out, &config)
}
