use gc_core::canvas::Canvas;
use gc_core::palette::Palette;
use gc_core::traits::Surface;
use gc_draw::ShapePlotter;

/// Grayscale plotter: the shape-plotting vocabulary with brightness
/// brushes in [0.0, 1.0], quantized through an ordered character palette.
///
/// Wraps a [`ShapePlotter`] and never touches the buffer directly except
/// through palette-aware read/write helpers. Brightness arguments follow
/// the palette contract: the caller supplies values already clamped to
/// [0.0, 1.0].
///
/// # Example
/// ```
/// use gc_core::palette::Palette;
/// use gc_tone::TonePlotter;
///
/// let mut plotter = TonePlotter::with_size(10, 5, ' ', Palette::from(" .:#@"));
/// plotter.draw_line(0, 0, 9, 0, 1.0);
/// assert_eq!(plotter.canvas().cell(0, 0), '@');
/// ```
pub struct TonePlotter {
    pub(crate) shapes: ShapePlotter,
    pub(crate) palette: Palette,
}

impl TonePlotter {
    /// Take exclusive ownership of an existing canvas.
    #[must_use]
    pub fn new(canvas: Canvas, palette: Palette) -> Self {
        Self {
            shapes: ShapePlotter::new(canvas),
            palette,
        }
    }

    /// Create a plotter over a fresh canvas.
    #[must_use]
    pub fn with_size(width: i32, height: i32, background: char, palette: Palette) -> Self {
        Self::new(Canvas::new(width, height, background), palette)
    }

    /// The owned canvas.
    #[inline]
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        self.shapes.canvas()
    }

    /// The underlying shape plotter, for raw character drawing.
    #[inline]
    #[must_use]
    pub fn shapes(&self) -> &ShapePlotter {
        &self.shapes
    }

    /// Mutable access to the underlying shape plotter.
    #[inline]
    pub fn shapes_mut(&mut self) -> &mut ShapePlotter {
        &mut self.shapes
    }

    /// The active palette.
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Give the canvas back, consuming the plotter.
    #[must_use]
    pub fn into_canvas(self) -> Canvas {
        self.shapes.into_canvas()
    }

    /// Line at a single brightness.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brightness: f64) {
        let brush = self.palette.char_for(brightness);
        self.shapes.draw_line(x1, y1, x2, y2, brush);
    }

    /// Rectangle at a single brightness.
    pub fn draw_rectangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        brightness: f64,
        fill: bool,
    ) {
        let brush = self.palette.char_for(brightness);
        self.shapes.draw_rectangle(x1, y1, x2, y2, brush, fill);
    }

    /// Triangle at a single brightness.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        brightness: f64,
        fill: bool,
    ) {
        let brush = self.palette.char_for(brightness);
        self.shapes.draw_triangle(x1, y1, x2, y2, x3, y3, brush, fill);
    }

    /// Circle at a single brightness.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, brightness: f64, fill: bool) {
        let brush = self.palette.char_for(brightness);
        self.shapes.draw_circle(cx, cy, radius, brush, fill);
    }

    /// Breadth-first fill at a single brightness.
    pub fn flood_fill(&mut self, x: i32, y: i32, brightness: f64) {
        let brush = self.palette.char_for(brightness);
        self.shapes.flood_fill(x, y, brush);
    }

    /// Scanline fill at a single brightness.
    pub fn scanline_fill(&mut self, x: i32, y: i32, brightness: f64) {
        let brush = self.palette.char_for(brightness);
        self.shapes.scanline_fill(x, y, brush);
    }

    /// Palette-derived brightness of one pixel. Returns 0.0 when the pixel
    /// is out of bounds or its character is absent from the palette.
    #[must_use]
    pub fn pixel_brightness(&self, x: i32, y: i32) -> f64 {
        if !self.canvas().in_bounds(x, y) {
            return 0.0;
        }
        self.palette
            .brightness_of(self.canvas().cell(x, y))
            .unwrap_or(0.0)
    }

    /// Clipped single-pixel write through the palette.
    pub fn set_pixel_brightness(&mut self, x: i32, y: i32, brightness: f64) {
        if self.shapes.canvas().in_bounds(x, y) {
            let ch = self.palette.char_for(brightness);
            self.shapes.canvas_mut().set_cell(x, y, ch);
        }
    }

    /// Mean brightness over palette-recognized pixels. Pixels whose
    /// character is absent from the palette contribute nothing; an empty
    /// count yields 0.0.
    #[must_use]
    pub fn average_brightness(&self) -> f64 {
        let inverse = self.palette.inverse();
        let canvas = self.canvas();

        let mut total = 0.0;
        let mut count = 0u32;
        let mut cursor = canvas.cursor();
        for _ in 0..canvas.size() {
            if let Some(&b) = inverse.get(&cursor.get()) {
                total += b;
                count += 1;
            }
            cursor.advance();
        }

        if count > 0 { total / f64::from(count) } else { 0.0 }
    }

    /// Minimum and maximum brightness over palette-recognized pixels.
    /// (0.0, 0.0) for an empty canvas.
    #[must_use]
    pub fn min_max_brightness(&self) -> (f64, f64) {
        let canvas = self.canvas();
        if canvas.size() == 0 {
            return (0.0, 0.0);
        }

        let inverse = self.palette.inverse();
        let mut min = 1.0f64;
        let mut max = 0.0f64;
        let mut cursor = canvas.cursor();
        for _ in 0..canvas.size() {
            if let Some(&b) = inverse.get(&cursor.get()) {
                min = min.min(b);
                max = max.max(b);
            }
            cursor.advance();
        }
        (min, max)
    }

    /// Transient brightness matrix, height x width. Pixels whose character
    /// is absent from the palette are recorded as 0.0.
    #[must_use]
    pub fn brightness_matrix(&self) -> Vec<Vec<f64>> {
        let inverse = self.palette.inverse();
        let canvas = self.canvas();

        let mut matrix = vec![vec![0.0; canvas.width() as usize]; canvas.height() as usize];
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if let Some(&b) = inverse.get(&canvas.cell(x, y)) {
                    matrix[y as usize][x as usize] = b;
                }
            }
        }
        matrix
    }

    /// Scale every recognized pixel's brightness by `factor`, clamped to
    /// [0.0, 1.0]. Unrecognized pixels are left unchanged.
    pub fn adjust_brightness(&mut self, factor: f64) {
        self.repaint_recognized(|b| (b * factor).clamp(0.0, 1.0));
    }

    /// Binarize recognized pixels: brightness 1.0 when old >= `threshold`,
    /// else 0.0.
    pub fn apply_threshold(&mut self, threshold: f64) {
        self.repaint_recognized(|b| if b >= threshold { 1.0 } else { 0.0 });
    }

    /// Recognized pixels become 1 - old.
    pub fn invert_brightness(&mut self) {
        self.repaint_recognized(|b| 1.0 - b);
    }

    fn repaint_recognized(&mut self, transform: impl Fn(f64) -> f64) {
        let inverse = self.palette.inverse();
        for y in 0..self.canvas().height() {
            for x in 0..self.canvas().width() {
                let old = self.canvas().cell(x, y);
                if let Some(&b) = inverse.get(&old) {
                    let ch = self.palette.char_for(transform(b));
                    self.shapes.canvas_mut().set_cell(x, y, ch);
                }
            }
        }
    }

    /// Replace the palette, preserving each pixel's derived brightness
    /// rather than its raw character.
    ///
    /// No-op when `ramp` is empty. The brightness matrix is captured under
    /// the current palette first, then the palette is swapped and every
    /// pixel is repainted from the captured matrix — the order matters.
    pub fn set_palette(&mut self, ramp: Vec<char>) {
        if ramp.is_empty() {
            return;
        }

        let matrix = self.brightness_matrix();
        self.palette = Palette::new(ramp);

        for y in 0..self.canvas().height() {
            for x in 0..self.canvas().width() {
                let ch = self.palette.char_for(matrix[y as usize][x as usize]);
                self.shapes.canvas_mut().set_cell(x, y, ch);
            }
        }
        log::debug!("palette migrated, {} entries", self.palette.len());
    }
}

impl Surface for TonePlotter {
    type Brush = f64;

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: f64) {
        Self::draw_line(self, x1, y1, x2, y2, brush);
    }

    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: f64, fill: bool) {
        Self::draw_rectangle(self, x1, y1, x2, y2, brush, fill);
    }

    fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        brush: f64,
        fill: bool,
    ) {
        Self::draw_triangle(self, x1, y1, x2, y2, x3, y3, brush, fill);
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, brush: f64, fill: bool) {
        Self::draw_circle(self, cx, cy, radius, brush, fill);
    }

    fn flood_fill(&mut self, x: i32, y: i32, brush: f64) {
        Self::flood_fill(self, x, y, brush);
    }

    fn scanline_fill(&mut self, x: i32, y: i32, brush: f64) {
        Self::scanline_fill(self, x, y, brush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> Palette {
        Palette::from(" #")
    }

    #[test]
    fn brightness_brushes_resolve_through_palette() {
        let mut plotter = TonePlotter::with_size(6, 6, ' ', Palette::from(" .:#@"));
        plotter.draw_line(0, 0, 5, 0, 1.0);
        plotter.draw_line(0, 1, 5, 1, 0.5);
        plotter.draw_line(0, 2, 5, 2, 0.0);
        assert_eq!(plotter.canvas().cell(0, 0), '@');
        assert_eq!(plotter.canvas().cell(0, 1), ':');
        assert_eq!(plotter.canvas().cell(0, 2), ' ');
    }

    #[test]
    fn threshold_is_identity_on_binary_palette() {
        // A 2-entry palette is already binary: thresholding changes nothing.
        let mut plotter = TonePlotter::with_size(10, 10, ' ', binary());
        plotter.draw_circle(5, 5, 3, 1.0, true);
        let before = plotter.canvas().render();
        plotter.apply_threshold(0.5);
        assert_eq!(plotter.canvas().render(), before);
    }

    #[test]
    fn palette_migration_preserves_brightness() {
        let mut plotter = TonePlotter::with_size(10, 10, ' ', Palette::from(" +@"));
        plotter.flood_fill(0, 0, 0.5);
        assert_eq!(plotter.canvas().cell(0, 0), '+');
        assert!((plotter.pixel_brightness(0, 0) - 0.5).abs() < 1e-12);

        plotter.set_palette(" .:-=+*#%@".chars().collect());
        assert_eq!(plotter.palette().len(), 10);
        for y in 0..10 {
            for x in 0..10 {
                let b = plotter.pixel_brightness(x, y);
                // Within one quantization step of the captured 0.5.
                assert!((b - 0.5).abs() <= 1.0 / 9.0 + 1e-12, "({x}, {y}) -> {b}");
                assert!((b - 4.0 / 9.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn set_palette_with_empty_ramp_is_noop() {
        let mut plotter = TonePlotter::with_size(4, 4, ' ', binary());
        plotter.draw_rectangle(0, 0, 3, 3, 1.0, false);
        let before = plotter.canvas().render();
        plotter.set_palette(Vec::new());
        assert_eq!(plotter.palette().len(), 2);
        assert_eq!(plotter.canvas().render(), before);
    }

    #[test]
    fn adjust_leaves_unrecognized_pixels_alone() {
        let mut plotter = TonePlotter::with_size(3, 1, '?', binary());
        plotter.set_pixel_brightness(0, 0, 1.0);
        plotter.adjust_brightness(0.2);
        assert_eq!(plotter.canvas().cell(0, 0), ' '); // 1.0 * 0.2 quantizes to 0
        assert_eq!(plotter.canvas().cell(1, 0), '?'); // not in palette
    }

    #[test]
    fn invert_flips_recognized_pixels() {
        let mut plotter = TonePlotter::with_size(2, 1, ' ', binary());
        plotter.set_pixel_brightness(0, 0, 1.0);
        plotter.invert_brightness();
        assert_eq!(plotter.canvas().cell(0, 0), ' ');
        assert_eq!(plotter.canvas().cell(1, 0), '#');
    }

    #[test]
    fn statistics_skip_unrecognized_pixels() {
        let mut plotter = TonePlotter::with_size(4, 1, '?', binary());
        plotter.set_pixel_brightness(0, 0, 1.0);
        plotter.set_pixel_brightness(1, 0, 0.0);
        // Two '?' cells contribute nothing.
        assert!((plotter.average_brightness() - 0.5).abs() < 1e-12);
        assert_eq!(plotter.min_max_brightness(), (0.0, 1.0));

        let matrix = plotter.brightness_matrix();
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[0][2], 0.0);
    }

    #[test]
    fn empty_canvas_statistics() {
        let plotter = TonePlotter::with_size(0, 0, ' ', binary());
        assert_eq!(plotter.average_brightness(), 0.0);
        assert_eq!(plotter.min_max_brightness(), (0.0, 0.0));
    }

    #[test]
    fn pixel_brightness_out_of_bounds_is_zero() {
        let plotter = TonePlotter::with_size(2, 2, '#', binary());
        assert_eq!(plotter.pixel_brightness(-1, 0), 0.0);
        assert_eq!(plotter.pixel_brightness(0, 0), 1.0);
    }

    #[test]
    fn surface_trait_resolves_brightness_brushes() {
        fn frame<S: Surface>(surface: &mut S, brush: S::Brush) {
            surface.draw_rectangle(0, 0, 3, 3, brush, false);
        }
        let mut plotter = TonePlotter::with_size(4, 4, ' ', binary());
        frame(&mut plotter, 1.0);
        assert_eq!(plotter.canvas().cell(0, 0), '#');
    }
}
