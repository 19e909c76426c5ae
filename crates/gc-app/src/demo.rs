//! Demonstration driver: sequences drawing calls over both surfaces and
//! writes text artifacts into the output directory.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use gc_core::canvas::Canvas;
use gc_core::config::PlotterConfig;
use gc_core::palette::{PALETTE_BLOCKS, PALETTE_STANDARD, Palette};
use gc_draw::{ShapePlotter, min_max_colors};
use gc_tone::TonePlotter;

use crate::creation::PlotterKind;

/// Run every demo. Each writes one artifact; the fill comparison also
/// verifies that both strategies agree.
pub fn run_all(out_dir: &Path, config: &PlotterConfig) -> Result<()> {
    log::info!("running demos into {}", out_dir.display());

    demo_basic(out_dir)?;
    demo_grayscale(out_dir)?;
    demo_gradients(out_dir)?;
    demo_from_config(out_dir, config)?;
    demo_regions(out_dir)?;
    demo_filters(out_dir)?;
    demo_palettes(out_dir)?;
    compare_fills(out_dir)?;

    log::info!("all demos finished");
    Ok(())
}

fn save(canvas: &Canvas, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(name);
    canvas
        .save_to_file(&path)
        .with_context(|| format!("saving {name}"))?;
    log::info!("  wrote {}", path.display());
    Ok(())
}

fn demo_basic(out_dir: &Path) -> Result<()> {
    log::info!("basic plotter");
    let mut plotter = ShapePlotter::with_size(40, 20, ' ');
    plotter.draw_rectangle(2, 2, 15, 8, '#', false);
    plotter.draw_line(5, 12, 35, 12, '-');
    plotter.draw_circle(20, 5, 4, '*', false);
    plotter.draw_triangle(30, 3, 35, 8, 25, 8, '@', false);
    save(plotter.canvas(), out_dir, "basic_plotter.txt")
}

fn demo_grayscale(out_dir: &Path) -> Result<()> {
    log::info!("grayscale plotter");
    let mut plotter = TonePlotter::with_size(40, 20, ' ', Palette::default());
    plotter.draw_circle(8, 6, 5, 1.0, true);
    plotter.draw_circle(20, 6, 5, 0.6, true);
    plotter.draw_circle(32, 6, 5, 0.3, true);
    plotter.draw_triangle(10, 12, 10, 18, 20, 12, 0.9, true);
    plotter.draw_rectangle(24, 13, 38, 18, 0.5, false);
    save(plotter.canvas(), out_dir, "grayscale_plotter.txt")
}

fn demo_gradients(out_dir: &Path) -> Result<()> {
    log::info!("gradients and statistics");
    let mut plotter = TonePlotter::with_size(60, 24, ' ', Palette::default());
    plotter.draw_linear_gradient(0, 0, 59, 23, 0.0, 1.0);
    plotter.draw_radial_gradient(30, 12, 8, 1.0, 0.0);

    log::info!("  average brightness {:.3}", plotter.average_brightness());
    let (min, max) = plotter.min_max_brightness();
    log::info!("  brightness range [{min:.3}, {max:.3}]");

    let histogram = plotter.shapes().color_histogram(None);
    if let Some((rarest, commonest)) = min_max_colors(&histogram) {
        log::info!("  rarest '{rarest}', commonest '{commonest}'");
    }

    save(plotter.canvas(), out_dir, "gradients.txt")
}

fn demo_from_config(out_dir: &Path, config: &PlotterConfig) -> Result<()> {
    log::info!("construction from config ({:?})", config.mode);
    match PlotterKind::from_config(config) {
        PlotterKind::Basic(mut plotter) => {
            let (w, h) = (plotter.canvas().width(), plotter.canvas().height());
            plotter.draw_rectangle(0, 0, w - 1, h - 1, '#', false);
            plotter.draw_line(0, 0, w - 1, h - 1, '\\');
            save(plotter.canvas(), out_dir, "from_config.txt")
        }
        PlotterKind::Grayscale(mut plotter) => {
            let (w, h) = (plotter.canvas().width(), plotter.canvas().height());
            plotter.draw_rectangle(0, 0, w - 1, h - 1, 1.0, false);
            plotter.draw_circle(w / 2, h / 2, h.min(w) / 3, 0.7, true);
            save(plotter.canvas(), out_dir, "from_config.txt")
        }
    }
}

fn demo_regions(out_dir: &Path) -> Result<()> {
    log::info!("region extract and paste");
    let mut plotter = ShapePlotter::with_size(48, 16, '.');
    plotter.draw_circle(7, 7, 5, '#', false);
    plotter.flood_fill(7, 7, '+');

    let stamp = plotter.extract_region(1, 1, 13, 13);
    plotter.paste_region(&stamp, 16, 1);
    plotter.paste_region(&stamp, 31, 1);
    // Clipped on purpose: only the stamp's left edge lands on canvas.
    plotter.paste_region(&stamp, 44, 1);
    save(plotter.canvas(), out_dir, "regions.txt")
}

fn demo_filters(out_dir: &Path) -> Result<()> {
    log::info!("convolution filters");
    let mut plotter = TonePlotter::with_size(40, 20, ' ', Palette::default());
    plotter.draw_rectangle(4, 4, 35, 16, 1.0, false);
    plotter.draw_circle(20, 10, 5, 0.8, true);

    plotter.apply_box_blur(3)?;
    save(plotter.canvas(), out_dir, "box_blur.txt")?;

    // Even size: normalized to 5 before the kernel is built.
    plotter.apply_gaussian_blur(4)?;
    save(plotter.canvas(), out_dir, "gaussian_blur.txt")?;

    plotter.apply_threshold(0.2);
    save(plotter.canvas(), out_dir, "threshold.txt")?;

    plotter.invert_brightness();
    save(plotter.canvas(), out_dir, "inverted.txt")
}

fn demo_palettes(out_dir: &Path) -> Result<()> {
    log::info!("palette migration");
    let mut plotter = TonePlotter::with_size(40, 20, ' ', Palette::default());
    plotter.draw_radial_gradient(20, 10, 9, 1.0, 0.0);
    save(plotter.canvas(), out_dir, "palette_compact.txt")?;

    plotter.set_palette(PALETTE_STANDARD.chars().collect());
    save(plotter.canvas(), out_dir, "palette_standard.txt")?;

    plotter.set_palette(PALETTE_BLOCKS.chars().collect());
    save(plotter.canvas(), out_dir, "palette_blocks.txt")
}

fn compare_fills(out_dir: &Path) -> Result<()> {
    log::info!("flood fill vs scanline fill");
    let scene = || {
        let mut plotter = ShapePlotter::with_size(100, 40, ' ');
        plotter.draw_circle(50, 20, 18, '#', false);
        plotter.draw_rectangle(10, 5, 90, 35, '#', false);
        plotter
    };

    let mut flood = scene();
    let started = Instant::now();
    flood.flood_fill(50, 20, '*');
    let flood_time = started.elapsed();

    let mut scan = scene();
    let started = Instant::now();
    scan.scanline_fill(50, 20, '*');
    let scan_time = started.elapsed();

    log::info!("  flood {flood_time:?}, scanline {scan_time:?}");
    if flood.canvas().render() != scan.canvas().render() {
        anyhow::bail!("fill strategies disagree");
    }
    save(scan.canvas(), out_dir, "fill_comparison.txt")
}
