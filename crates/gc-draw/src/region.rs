//! Rectangular region extraction and blitting.

use gc_core::canvas::Canvas;

use crate::plotter::ShapePlotter;

impl ShapePlotter {
    /// Copy a rectangle out into a detached canvas of size
    /// (x2 - x1 + 1) x (y2 - y1 + 1).
    ///
    /// Only in-bounds source pixels are copied; positions that fall
    /// outside the source leave the destination's background (' ')
    /// untouched.
    ///
    /// # Example
    /// ```
    /// use gc_draw::ShapePlotter;
    /// let mut plotter = ShapePlotter::with_size(6, 6, '.');
    /// plotter.draw_rectangle(1, 1, 4, 4, '#', false);
    /// let region = plotter.extract_region(1, 1, 4, 4);
    /// assert_eq!(region.width(), 4);
    /// assert_eq!(region.cell(0, 0), '#');
    /// ```
    #[must_use]
    pub fn extract_region(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Canvas {
        let width = x2 - x1 + 1;
        let height = y2 - y1 + 1;
        let mut region = Canvas::new(width, height, ' ');

        for y in 0..height {
            for x in 0..width {
                let src_x = x1 + x;
                let src_y = y1 + y;
                if self.canvas.in_bounds(src_x, src_y) {
                    region.set_cell(x, y, self.canvas.cell(src_x, src_y));
                }
            }
        }
        region
    }

    /// Blit a region onto this canvas at offset (x, y).
    ///
    /// Destination pixels outside this canvas are skipped; the source is
    /// never clipped — the caller passes a region already sized correctly.
    pub fn paste_region(&mut self, region: &Canvas, x: i32, y: i32) {
        for ry in 0..region.height() {
            for rx in 0..region.width() {
                let dest_x = x + rx;
                let dest_y = y + ry;
                if self.canvas.in_bounds(dest_x, dest_y) {
                    self.canvas.set_cell(dest_x, dest_y, region.cell(rx, ry));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_copies_in_bounds_pixels() {
        let mut plotter = ShapePlotter::with_size(4, 4, '.');
        plotter.draw_line(0, 0, 3, 3, '#');
        let region = plotter.extract_region(0, 0, 1, 1);
        assert_eq!(region.render(), "#.\n.#\n");
    }

    #[test]
    fn extract_leaves_background_for_out_of_range_sources() {
        let plotter = ShapePlotter::with_size(2, 2, 'x');
        let region = plotter.extract_region(1, 1, 3, 3);
        // Only (1, 1) of the source exists; the rest stays ' '.
        assert_eq!(region.render(), "x  \n   \n   \n");
    }

    #[test]
    fn paste_clips_destination() {
        let mut plotter = ShapePlotter::with_size(4, 4, '.');
        let mut stamp = Canvas::new(2, 2, '#');
        stamp.set_cell(0, 0, 'o');
        plotter.paste_region(&stamp, 3, 3);
        assert_eq!(plotter.canvas().cell(3, 3), 'o');
        // The other three stamp pixels fell off the canvas.
        let histogram = plotter.color_histogram(None);
        assert_eq!(histogram.get(&'#'), None);
    }

    #[test]
    fn extract_then_paste_round_trips() {
        let mut plotter = ShapePlotter::with_size(8, 8, '.');
        plotter.draw_circle(3, 3, 2, '#', true);
        let region = plotter.extract_region(1, 1, 5, 5);

        let mut other = ShapePlotter::with_size(8, 8, '.');
        other.paste_region(&region, 1, 1);
        for y in 1..=5 {
            for x in 1..=5 {
                assert_eq!(
                    other.canvas().cell(x, y),
                    plotter.canvas().cell(x, y),
                    "({x}, {y})"
                );
            }
        }
    }
}
