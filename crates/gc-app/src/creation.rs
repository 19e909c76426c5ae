use gc_core::canvas::Canvas;
use gc_core::config::{PlotterConfig, PlotterMode};
use gc_core::palette::Palette;
use gc_draw::ShapePlotter;
use gc_tone::TonePlotter;

/// The two rendering surfaces the dispatcher can construct. A closed
/// tagged variant: callers pattern-match on it instead of downcasting.
pub enum PlotterKind {
    /// Raw character brushes.
    Basic(ShapePlotter),
    /// Brightness brushes over a palette.
    Grayscale(TonePlotter),
}

impl PlotterKind {
    /// Build the surface selected solely by the config's mode tag.
    ///
    /// The record arrives validated — dimensions and palette are trusted.
    #[must_use]
    pub fn from_config(config: &PlotterConfig) -> Self {
        let canvas = Canvas::new(config.width, config.height, config.background);
        match config.mode {
            PlotterMode::Basic => Self::Basic(ShapePlotter::new(canvas)),
            PlotterMode::Grayscale => {
                let palette = Palette::from(config.palette.as_str());
                Self::Grayscale(TonePlotter::new(canvas, palette))
            }
        }
    }

    /// The canvas of whichever surface was constructed.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        match self {
            Self::Basic(plotter) => plotter.canvas(),
            Self::Grayscale(plotter) => plotter.canvas(),
        }
    }
}
