//! Region fill strategies: breadth-first and scanline.
//!
//! Both replace every 4-connected pixel equal to the seed's original color
//! and produce byte-identical final canvases; the scanline variant fills
//! maximal horizontal runs and propagates row-boundary segments instead of
//! visiting every pixel individually.

use std::collections::VecDeque;

use gc_core::canvas::Canvas;

use crate::plotter::ShapePlotter;

/// Horizontal run pending processing: row plus an inclusive column range.
/// The range is a hint, not a guarantee — the adjacent row's matching span
/// may be wider or narrower than the run that spawned it.
struct Segment {
    row: i32,
    x_start: i32,
    x_end: i32,
}

impl ShapePlotter {
    /// 4-connected breadth-first fill from (x, y).
    ///
    /// No-op when the seed is out of bounds or already carries the fill
    /// brush.
    ///
    /// # Example
    /// ```
    /// use gc_draw::ShapePlotter;
    /// let mut plotter = ShapePlotter::with_size(5, 5, '.');
    /// plotter.draw_rectangle(0, 0, 4, 4, '#', false);
    /// plotter.flood_fill(2, 2, '*');
    /// assert_eq!(plotter.canvas().cell(2, 2), '*');
    /// assert_eq!(plotter.canvas().cell(0, 0), '#');
    /// ```
    pub fn flood_fill(&mut self, x: i32, y: i32, fill_brush: char) {
        if !self.canvas.in_bounds(x, y) {
            return;
        }
        let target = self.canvas.cell(x, y);
        if target == fill_brush {
            return;
        }

        let mut pixels = VecDeque::new();
        pixels.push_back((x, y));

        while let Some((cx, cy)) = pixels.pop_front() {
            if !self.canvas.in_bounds(cx, cy) || self.canvas.cell(cx, cy) != target {
                continue;
            }
            self.canvas.set_cell(cx, cy, fill_brush);

            pixels.push_back((cx + 1, cy));
            pixels.push_back((cx - 1, cy));
            pixels.push_back((cx, cy + 1));
            pixels.push_back((cx, cy - 1));
        }
    }

    /// Scanline fill: same final result as [`ShapePlotter::flood_fill`],
    /// asymptotically faster.
    ///
    /// Fills the maximal horizontal run through the seed, then works an
    /// explicit segment stack. Each popped segment is rescanned for
    /// contiguous target-colored sub-runs, every sub-run is re-extended
    /// beyond the popped hint range as far as the target color continues,
    /// and the rows above and below are scanned for new runs only within
    /// the extended sub-run's span.
    pub fn scanline_fill(&mut self, x: i32, y: i32, fill_brush: char) {
        if !self.canvas.in_bounds(x, y) {
            return;
        }
        let target = self.canvas.cell(x, y);
        if target == fill_brush {
            return;
        }

        let (x_start, x_end) = row_run(&self.canvas, x, y, target);
        for i in x_start..=x_end {
            self.canvas.set_cell(i, y, fill_brush);
        }

        let mut segments: Vec<Segment> = Vec::new();
        if y > 0 {
            segments.push(Segment { row: y - 1, x_start, x_end });
        }
        if y < self.canvas.height() - 1 {
            segments.push(Segment { row: y + 1, x_start, x_end });
        }

        let mut popped = 0usize;
        while let Some(Segment { row, x_start, x_end }) = segments.pop() {
            popped += 1;
            let mut x = x_start;
            while x <= x_end {
                // Skip pixels already filled or never matching.
                if self.canvas.cell(x, row) != target {
                    x += 1;
                    continue;
                }

                let (run_start, run_end) = row_run(&self.canvas, x, row, target);
                for i in run_start..=run_end {
                    self.canvas.set_cell(i, row, fill_brush);
                }

                if row > 0 {
                    push_runs(&self.canvas, row - 1, run_start, run_end, target, &mut segments);
                }
                if row < self.canvas.height() - 1 {
                    push_runs(&self.canvas, row + 1, run_start, run_end, target, &mut segments);
                }

                x = run_end + 1;
            }
        }
        log::trace!("scanline fill processed {popped} segments");
    }
}

/// Maximal contiguous run of `target` through (x, y) on its row. The cell
/// at (x, y) must already match `target`.
fn row_run(canvas: &Canvas, x: i32, y: i32, target: char) -> (i32, i32) {
    let mut left = canvas.row_cursor(y);
    left.seek(x);
    while left.column() >= 0 && left.get() == target {
        left.retreat();
    }

    let mut right = canvas.row_cursor(y);
    right.seek(x);
    while right.column() < canvas.width() && right.get() == target {
        right.advance();
    }

    (left.column() + 1, right.column() - 1)
}

/// Push every contiguous target-colored run of `row` within
/// [x_start, x_end] as a new segment.
fn push_runs(
    canvas: &Canvas,
    row: i32,
    x_start: i32,
    x_end: i32,
    target: char,
    segments: &mut Vec<Segment>,
) {
    let mut x = x_start;
    while x <= x_end {
        if canvas.cell(x, row) == target {
            let run_start = x;
            while x <= x_end && canvas.cell(x, row) == target {
                x += 1;
            }
            segments.push(Segment {
                row,
                x_start: run_start,
                x_end: x - 1,
            });
        } else {
            x += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_plotter() -> ShapePlotter {
        let mut plotter = ShapePlotter::with_size(16, 12, '.');
        plotter.draw_rectangle(1, 1, 14, 10, '#', false);
        plotter.draw_circle(8, 5, 3, '#', false);
        plotter
    }

    #[test]
    fn flood_and_scanline_produce_identical_canvases() {
        let mut bfs = ring_plotter();
        let mut scan = ring_plotter();

        bfs.flood_fill(2, 2, '*');
        scan.scanline_fill(2, 2, '*');
        assert_eq!(bfs.canvas().render(), scan.canvas().render());

        // Inner region of the circle, separately.
        bfs.flood_fill(8, 5, 'o');
        scan.scanline_fill(8, 5, 'o');
        assert_eq!(bfs.canvas().render(), scan.canvas().render());
    }

    #[test]
    fn fills_agree_on_concave_shapes() {
        // A U-shaped cavity forces segment re-extension past the hint range.
        let build = || {
            let mut plotter = ShapePlotter::with_size(12, 8, '.');
            plotter.draw_line(2, 1, 2, 6, '#');
            plotter.draw_line(9, 1, 9, 6, '#');
            plotter.draw_line(2, 6, 9, 6, '#');
            plotter.draw_line(5, 1, 5, 4, '#');
            plotter
        };
        let mut bfs = build();
        let mut scan = build();
        bfs.flood_fill(3, 5, '*');
        scan.scanline_fill(3, 5, '*');
        assert_eq!(bfs.canvas().render(), scan.canvas().render());
    }

    #[test]
    fn fill_is_noop_when_seed_matches_brush() {
        let mut plotter = ShapePlotter::with_size(4, 4, '.');
        plotter.flood_fill(1, 1, '.');
        plotter.scanline_fill(1, 1, '.');
        assert!(plotter.canvas().cells().iter().all(|&c| c == '.'));
    }

    #[test]
    fn fill_ignores_out_of_bounds_seed() {
        let mut plotter = ShapePlotter::with_size(4, 4, '.');
        plotter.flood_fill(-1, 0, '#');
        plotter.scanline_fill(4, 0, '#');
        assert!(plotter.canvas().cells().iter().all(|&c| c == '.'));
    }

    #[test]
    fn fill_respects_boundaries() {
        let mut plotter = ShapePlotter::with_size(8, 8, '.');
        plotter.draw_rectangle(2, 2, 5, 5, '#', false);
        plotter.scanline_fill(0, 0, '*');
        // Outside filled, border and interior untouched.
        assert_eq!(plotter.canvas().cell(0, 0), '*');
        assert_eq!(plotter.canvas().cell(7, 7), '*');
        assert_eq!(plotter.canvas().cell(2, 2), '#');
        assert_eq!(plotter.canvas().cell(3, 3), '.');
    }

    #[test]
    fn whole_canvas_fill() {
        let mut bfs = ShapePlotter::with_size(6, 6, '.');
        let mut scan = ShapePlotter::with_size(6, 6, '.');
        bfs.flood_fill(3, 3, '#');
        scan.scanline_fill(3, 3, '#');
        assert_eq!(bfs.canvas().render(), scan.canvas().render());
        assert!(bfs.canvas().cells().iter().all(|&c| c == '#'));
    }
}
