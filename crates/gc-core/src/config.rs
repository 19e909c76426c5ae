use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::palette::PALETTE_COMPACT;

/// Rendering mode tag. A closed set — construction dispatches on it.
///
/// # Example
/// ```
/// use gc_core::config::PlotterMode;
/// let mode = PlotterMode::default();
/// assert!(matches!(mode, PlotterMode::Grayscale));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlotterMode {
    /// Raw character brushes.
    Basic,
    /// Brightness brushes quantized through a palette.
    #[default]
    Grayscale,
}

/// Validated construction record handed to the core.
///
/// The loader validates once; the core trusts these invariants and does
/// not re-validate them.
///
/// # Example
/// ```
/// use gc_core::config::PlotterConfig;
/// let config = PlotterConfig::default();
/// assert_eq!(config.width, 100);
/// assert_eq!(config.height, 50);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlotterConfig {
    /// Canvas width in cells, >= 0.
    pub width: i32,
    /// Canvas height in cells, >= 0.
    pub height: i32,
    /// Background character for fresh canvases.
    pub background: char,
    /// Brightness ramp, lightest to densest. Never empty.
    pub palette: String,
    /// Rendering mode the dispatcher selects on.
    pub mode: PlotterMode,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            background: '.',
            palette: PALETTE_COMPACT.to_string(),
            mode: PlotterMode::Grayscale,
        }
    }
}

impl PlotterConfig {
    /// Check the record's invariants.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for negative dimensions or an empty
    /// palette.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width < 0 || self.height < 0 {
            return Err(CoreError::Config(format!(
                "dimensions must be non-negative, got {}x{}",
                self.width, self.height
            )));
        }
        if self.palette.is_empty() {
            return Err(CoreError::Config("palette must not be empty".into()));
        }
        Ok(())
    }
}

/// On-disk shape: every field optional, merged over the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    width: Option<i32>,
    height: Option<i32>,
    background: Option<char>,
    palette: Option<String>,
    mode: Option<PlotterMode>,
}

/// Load a configuration from a TOML file and validate it.
///
/// Absent keys keep their default values.
///
/// # Errors
/// Fails when the file cannot be read, is not valid TOML, or violates the
/// record invariants.
///
/// # Example
/// ```no_run
/// use gc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<PlotterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = PlotterConfig::default();
    if let Some(v) = file.width {
        config.width = v;
    }
    if let Some(v) = file.height {
        config.height = v;
    }
    if let Some(v) = file.background {
        config.background = v;
    }
    if let Some(v) = file.palette {
        config.palette = v;
    }
    if let Some(v) = file.mode {
        config.mode = v;
    }

    config.validate()?;
    log::debug!(
        "config loaded: {}x{} mode={:?} palette_len={}",
        config.width,
        config.height,
        config.mode,
        config.palette.chars().count()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_merges_over_defaults() {
        let file: ConfigFile = toml::from_str("width = 32\nmode = \"basic\"").unwrap();
        let mut config = PlotterConfig::default();
        if let Some(v) = file.width {
            config.width = v;
        }
        if let Some(v) = file.mode {
            config.mode = v;
        }
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 50);
        assert_eq!(config.mode, PlotterMode::Basic);
    }

    #[test]
    fn full_file_parses() {
        let toml = "width = 20\nheight = 10\nbackground = \" \"\npalette = \" #\"\nmode = \"grayscale\"";
        let file: ConfigFile = toml::from_str(toml).unwrap();
        assert_eq!(file.background, Some(' '));
        assert_eq!(file.palette.as_deref(), Some(" #"));
    }

    #[test]
    fn validate_rejects_bad_records() {
        let negative = PlotterConfig {
            width: -1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let empty_palette = PlotterConfig {
            palette: String::new(),
            ..Default::default()
        };
        assert!(empty_palette.validate().is_err());

        assert!(PlotterConfig::default().validate().is_ok());
    }

    #[test]
    fn load_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plotter.toml");
        std::fs::write(&path, "width = 8\nheight = 4\npalette = \" .#\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 4);
        assert_eq!(config.palette, " .#");
        assert_eq!(config.mode, PlotterMode::Grayscale);
    }
}
