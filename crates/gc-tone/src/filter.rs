//! Convolution filters over the brightness matrix.
//!
//! Kernels are square with a validated odd size; the blur entry points
//! normalize even requests by incrementing before construction. Sampling
//! uses reflective boundary handling: a coordinate c beyond 0 maps to -c,
//! and beyond the upper bound L to 2L - c - 1 (mirror, not clamp or wrap).

use gc_core::error::CoreError;

use crate::plotter::TonePlotter;

/// Square convolution kernel, weights stored flat row-major.
///
/// # Example
/// ```
/// use gc_tone::filter::Kernel;
/// let kernel = Kernel::box_filter(3).unwrap();
/// assert_eq!(kernel.size(), 3);
/// assert!(Kernel::box_filter(4).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// The single validating constructor: every kernel passes through
    /// here, so an even size can never reach convolution.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidKernel`] when `size` is even.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self, CoreError> {
        if size % 2 == 0 {
            return Err(CoreError::InvalidKernel { size });
        }
        debug_assert_eq!(weights.len(), size * size, "kernel weight count");
        Ok(Self { size, weights })
    }

    /// Uniform kernel with every weight 1/size².
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidKernel`] when `size` is even.
    pub fn box_filter(size: usize) -> Result<Self, CoreError> {
        let value = 1.0 / (size * size) as f64;
        Self::new(size, vec![value; size * size])
    }

    /// Gaussian kernel exp(-(x² + y²) / 2σ²), normalized to sum 1.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidKernel`] when `size` is even.
    pub fn gaussian(size: usize, sigma: f64) -> Result<Self, CoreError> {
        if size % 2 == 0 {
            return Err(CoreError::InvalidKernel { size });
        }

        let center = (size / 2) as i32;
        let mut weights = Vec::with_capacity(size * size);
        let mut sum = 0.0;
        for i in 0..size as i32 {
            for j in 0..size as i32 {
                let x = i - center;
                let y = j - center;
                let w = (-f64::from(x * x + y * y) / (2.0 * sigma * sigma)).exp();
                weights.push(w);
                sum += w;
            }
        }
        for w in &mut weights {
            *w /= sum;
        }

        Self::new(size, weights)
    }

    /// Kernel side length. Always odd.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at kernel row `ky`, column `kx`.
    #[inline(always)]
    #[must_use]
    pub fn weight(&self, ky: usize, kx: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }
}

/// Mirror an out-of-range coordinate back into [0, len).
#[inline(always)]
fn reflect(mut c: i32, len: i32) -> i32 {
    if c < 0 {
        c = -c;
    }
    if c >= len {
        c = 2 * len - c - 1;
    }
    c
}

impl TonePlotter {
    /// Convolve the canvas's brightness matrix with `kernel`.
    ///
    /// Every pixel's size x size neighborhood is sampled with reflective
    /// boundary handling; a coordinate still out of range after reflection
    /// contributes nothing. Each weighted sum is clamped to [0.0, 1.0].
    #[must_use]
    pub fn convolve(&self, kernel: &Kernel) -> Vec<Vec<f64>> {
        let width = self.canvas().width();
        let height = self.canvas().height();
        let matrix = self.brightness_matrix();

        let size = kernel.size() as i32;
        let offset = size / 2;
        let mut result = vec![vec![0.0; width as usize]; height as usize];

        for y in 0..height {
            for x in 0..width {
                let mut sum = 0.0;
                for ky in 0..size {
                    for kx in 0..size {
                        let src_x = reflect(x + kx - offset, width);
                        let src_y = reflect(y + ky - offset, height);
                        if self.canvas().in_bounds(src_x, src_y) {
                            sum += matrix[src_y as usize][src_x as usize]
                                * kernel.weight(ky as usize, kx as usize);
                        }
                    }
                }
                result[y as usize][x as usize] = sum.clamp(0.0, 1.0);
            }
        }
        result
    }

    /// Box blur. An even `size` is incremented by one before kernel
    /// construction.
    ///
    /// # Errors
    /// Propagates [`CoreError::InvalidKernel`] from kernel construction.
    pub fn apply_box_blur(&mut self, size: usize) -> Result<(), CoreError> {
        let size = if size % 2 == 0 { size + 1 } else { size };
        let kernel = Kernel::box_filter(size)?;
        self.apply_kernel(&kernel);
        Ok(())
    }

    /// Gaussian blur with σ = size/3. An even `size` is incremented by one
    /// before kernel construction.
    ///
    /// # Errors
    /// Propagates [`CoreError::InvalidKernel`] from kernel construction.
    pub fn apply_gaussian_blur(&mut self, size: usize) -> Result<(), CoreError> {
        let size = if size % 2 == 0 { size + 1 } else { size };
        let sigma = size as f64 / 3.0;
        let kernel = Kernel::gaussian(size, sigma)?;
        self.apply_kernel(&kernel);
        Ok(())
    }

    fn apply_kernel(&mut self, kernel: &Kernel) {
        let result = self.convolve(kernel);
        for (y, row) in result.iter().enumerate() {
            for (x, &brightness) in row.iter().enumerate() {
                self.set_pixel_brightness(x as i32, y as i32, brightness);
            }
        }
    }
}
