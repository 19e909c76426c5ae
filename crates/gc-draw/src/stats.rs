//! Character occurrence statistics over a canvas.

use std::collections::BTreeMap;

use crate::plotter::ShapePlotter;

impl ShapePlotter {
    /// Count occurrences per character within a rectangular region,
    /// defaulting to the whole canvas. Out-of-bounds positions are
    /// skipped. Keys are ordered by character code.
    ///
    /// # Example
    /// ```
    /// use gc_draw::ShapePlotter;
    /// let mut plotter = ShapePlotter::with_size(4, 4, '.');
    /// plotter.draw_line(0, 0, 3, 0, '#');
    /// let histogram = plotter.color_histogram(None);
    /// assert_eq!(histogram[&'#'], 4);
    /// assert_eq!(histogram[&'.'], 12);
    /// ```
    #[must_use]
    pub fn color_histogram(&self, region: Option<(i32, i32, i32, i32)>) -> BTreeMap<char, usize> {
        let (x1, y1, x2, y2) = region.unwrap_or((
            0,
            0,
            self.canvas.width() - 1,
            self.canvas.height() - 1,
        ));

        let mut histogram = BTreeMap::new();
        for y in y1..=y2 {
            for x in x1..=x2 {
                if self.canvas.in_bounds(x, y) {
                    *histogram.entry(self.canvas.cell(x, y)).or_insert(0) += 1;
                }
            }
        }
        histogram
    }
}

/// The least- and most-frequent characters of a histogram, or `None` for
/// an empty one.
///
/// Ties resolve to the first-encountered key in ascending character order
/// (the histogram's keys are ordered).
#[must_use]
pub fn min_max_colors(histogram: &BTreeMap<char, usize>) -> Option<(char, char)> {
    let mut entries = histogram.iter();
    let (&first, &first_count) = entries.next()?;

    let mut min = (first, first_count);
    let mut max = (first, first_count);
    for (&ch, &count) in entries {
        if count < min.1 {
            min = (ch, count);
        }
        if count > max.1 {
            max = (ch, count);
        }
    }
    Some((min.0, max.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_region_and_whole_canvas() {
        let mut plotter = ShapePlotter::with_size(5, 5, '.');
        plotter.draw_rectangle(0, 0, 4, 4, '#', false);

        let whole = plotter.color_histogram(None);
        assert_eq!(whole[&'#'], 16);
        assert_eq!(whole[&'.'], 9);

        let inner = plotter.color_histogram(Some((1, 1, 3, 3)));
        assert_eq!(inner.get(&'#'), None);
        assert_eq!(inner[&'.'], 9);
    }

    #[test]
    fn histogram_skips_out_of_bounds_positions() {
        let plotter = ShapePlotter::with_size(3, 3, '.');
        let histogram = plotter.color_histogram(Some((-2, -2, 10, 10)));
        assert_eq!(histogram[&'.'], 9);
    }

    #[test]
    fn min_max_resolves_ties_to_first_key() {
        let mut histogram = BTreeMap::new();
        histogram.insert('b', 3);
        histogram.insert('a', 3);
        histogram.insert('c', 1);
        // 'c' is the unique minimum; 'a' and 'b' tie for maximum and the
        // lower character code wins.
        assert_eq!(min_max_colors(&histogram), Some(('c', 'a')));
    }

    #[test]
    fn min_max_of_empty_histogram_is_none() {
        assert_eq!(min_max_colors(&BTreeMap::new()), None);
    }

    #[test]
    fn min_max_single_entry() {
        let mut histogram = BTreeMap::new();
        histogram.insert('z', 7);
        assert_eq!(min_max_colors(&histogram), Some(('z', 'z')));
    }
}
