use std::collections::HashMap;

/// 10 characters — compact, good contrast. The engine default.
pub const PALETTE_COMPACT: &str = " .:-=+*#%@";

/// 70 characters — Paul Bourke extended, best tonal resolution.
pub const PALETTE_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Unicode blocks — pseudo-pixels.
pub const PALETTE_BLOCKS: &str = " ░▒▓█";

/// Ordered character ramp approximating monotonic brightness.
///
/// Index i represents brightness i/(N-1) for a ramp of length N. The ramp
/// is non-empty for every palette the engine constructs — the configuration
/// collaborator validates that before any palette exists.
///
/// # Example
/// ```
/// use gc_core::palette::Palette;
/// let palette = Palette::from(" .:#@");
/// assert_eq!(palette.char_for(0.0), ' ');
/// assert_eq!(palette.char_for(1.0), '@');
/// assert_eq!(palette.brightness_of('@'), Some(1.0));
/// assert_eq!(palette.brightness_of('?'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    ramp: Vec<char>,
}

impl Palette {
    /// Build a palette from an ordered ramp, lightest to densest.
    #[must_use]
    pub fn new(ramp: Vec<char>) -> Self {
        debug_assert!(!ramp.is_empty(), "palette must not be empty");
        Self { ramp }
    }

    /// Ramp length N.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ramp.len()
    }

    /// True for a zero-length ramp. Never the case for validated input.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ramp.is_empty()
    }

    /// The ordered ramp.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.ramp
    }

    /// Map a brightness to its ramp character: index = floor(b * (N - 1)).
    ///
    /// CONTRACT: the caller supplies `brightness` already clamped to
    /// [0.0, 1.0]. Out-of-range values produce an out-of-range index and
    /// are a caller error, not validated here.
    #[inline(always)]
    #[must_use]
    pub fn char_for(&self, brightness: f64) -> char {
        let idx = (brightness * (self.ramp.len() - 1) as f64) as usize;
        self.ramp[idx]
    }

    /// Brightness of a character, or `None` when it is not in the ramp.
    ///
    /// Duplicate characters resolve to the highest index (last write wins).
    #[must_use]
    pub fn brightness_of(&self, ch: char) -> Option<f64> {
        self.ramp
            .iter()
            .rposition(|&c| c == ch)
            .map(|i| i as f64 / (self.ramp.len() - 1) as f64)
    }

    /// Inverse mapping, derived by scanning the ramp in index order.
    ///
    /// When a character repeats, the entry from the highest index
    /// overwrites earlier ones — last write wins is the binding contract.
    ///
    /// # Example
    /// ```
    /// use gc_core::palette::Palette;
    /// let palette = Palette::from(" x x");
    /// let inverse = palette.inverse();
    /// assert_eq!(inverse[&'x'], 1.0);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> HashMap<char, f64> {
        let span = (self.ramp.len() - 1) as f64;
        let mut map = HashMap::with_capacity(self.ramp.len());
        for (i, &ch) in self.ramp.iter().enumerate() {
            map.insert(ch, i as f64 / span);
        }
        map
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(PALETTE_COMPACT)
    }
}

impl From<&str> for Palette {
    fn from(ramp: &str) -> Self {
        Self::new(ramp.chars().collect())
    }
}
