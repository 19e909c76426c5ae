//! Gradient rendering over the brightness palette.

use crate::plotter::TonePlotter;

impl TonePlotter {
    /// Diagonal linear gradient across the rectangle (x1, y1)-(x2, y2).
    ///
    /// For each in-bounds pixel the ratio is the mean of its normalized
    /// x-progress and y-progress; brightness interpolates from `start` to
    /// `end`.
    ///
    /// CONTRACT: x1 == x2 or y1 == y2 divides by zero — degenerate
    /// rectangles are a caller error, not validated here.
    ///
    /// # Example
    /// ```
    /// use gc_core::palette::Palette;
    /// use gc_tone::TonePlotter;
    ///
    /// let mut plotter = TonePlotter::with_size(10, 10, ' ', Palette::from(" .:#@"));
    /// plotter.draw_linear_gradient(0, 0, 9, 9, 0.0, 1.0);
    /// assert_eq!(plotter.canvas().cell(0, 0), ' ');
    /// assert_eq!(plotter.canvas().cell(9, 9), '@');
    /// ```
    pub fn draw_linear_gradient(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        start: f64,
        end: f64,
    ) {
        let width = x2 - x1;
        let height = y2 - y1;

        for y in y1..=y2 {
            for x in x1..=x2 {
                if !self.canvas().in_bounds(x, y) {
                    continue;
                }

                let x_ratio = f64::from(x - x1) / f64::from(width);
                let y_ratio = f64::from(y - y1) / f64::from(height);
                let ratio = (x_ratio + y_ratio) / 2.0;

                let brightness = start + ratio * (end - start);
                self.set_pixel_brightness(x, y, brightness);
            }
        }
    }

    /// Radial gradient centered on (cx, cy): brightness interpolates from
    /// `center` to `edge` by distance/radius. Pixels beyond the radius are
    /// untouched.
    pub fn draw_radial_gradient(&mut self, cx: i32, cy: i32, radius: i32, center: f64, edge: f64) {
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                if !self.canvas().in_bounds(x, y) {
                    continue;
                }

                let dx = x - cx;
                let dy = y - cy;
                let distance = f64::from(dx * dx + dy * dy).sqrt();
                if distance > f64::from(radius) {
                    continue;
                }

                let ratio = distance / f64::from(radius);
                let brightness = center + ratio * (edge - center);
                self.set_pixel_brightness(x, y, brightness);
            }
        }
    }
}
