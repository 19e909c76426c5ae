use std::path::PathBuf;

use clap::Parser;

/// gridcii — character-grid rendering engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Output directory for demo artifacts.
    #[arg(short, long, default_value = "demo")]
    pub out: PathBuf,

    /// Rendering mode override: basic or grayscale.
    #[arg(long)]
    pub mode: Option<String>,

    /// Canvas width override.
    #[arg(long)]
    pub width: Option<i32>,

    /// Canvas height override.
    #[arg(long)]
    pub height: Option<i32>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
