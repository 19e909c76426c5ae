/// Polymorphic drawing surface: the geometry vocabulary shared by every
/// plotter.
///
/// Brush resolution is fixed at construction — a basic plotter passes raw
/// characters through, a grayscale plotter quantizes a brightness into its
/// palette. Callers pick the concrete surface once and never downcast.
///
/// All coordinates may lie outside the canvas: implementations silently
/// clip out-of-bounds pixels rather than failing.
///
/// # Example
/// ```
/// use gc_core::traits::Surface;
///
/// fn frame<S: Surface>(surface: &mut S, w: i32, h: i32, brush: S::Brush) {
///     surface.draw_rectangle(0, 0, w - 1, h - 1, brush, false);
/// }
/// ```
pub trait Surface {
    /// Value a drawing primitive writes, resolved to a cell character by
    /// the implementation.
    type Brush: Copy;

    /// Plot a line segment between two endpoints, both included.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Self::Brush);

    /// Stroke or fill an axis-aligned rectangle.
    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Self::Brush, fill: bool);

    /// Stroke or fill a triangle given its three vertices.
    #[allow(clippy::too_many_arguments)]
    fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        brush: Self::Brush,
        fill: bool,
    );

    /// Stroke or fill a circle.
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, brush: Self::Brush, fill: bool);

    /// Breadth-first 4-connected fill from a seed cell.
    fn flood_fill(&mut self, x: i32, y: i32, brush: Self::Brush);

    /// Segment-stack 4-connected fill, equivalent result to
    /// [`Surface::flood_fill`].
    fn scanline_fill(&mut self, x: i32, y: i32, brush: Self::Brush);
}
