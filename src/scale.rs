//! Linear range remapping: the numeric primitive under every other encoding.

use num_traits::Float;

/// A closed numeric interval `[min, max]`.
///
/// Ranges are plain value types; `min` and `max` are kept exactly as given
/// (no implicit sorting), so reversed ranges are supported and invert the
/// mapping direction in [`scale_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Range<T> {
    /// The normalized `[0, 1]` interval.
    pub fn unit() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Signed width of the range (`max - min`).
    pub fn span(&self) -> T {
        self.max - self.min
    }
}

/// Remaps `value` from `from` into `to` with a pure affine transform.
///
/// The fraction of `from` that `value` represents is carried into `to`:
/// `to.min + ((value - from.min) / from.span()) * to.span()`.
///
/// # No clamping
///
/// Out-of-range inputs map proportionally beyond `to`; callers that need
/// bounded output must clamp explicitly.
///
/// # Degenerate ranges
///
/// A collapsed `from` range (`max == min`) divides by zero and yields a
/// non-finite result. This is intentionally not guarded: a non-finite output
/// is the caller's signal to skip rendering that data point.
///
/// # Examples
///
/// ```rust
/// use vizenc::{Range, scale_value};
///
/// let from = Range::new(0.0, 100.0);
/// let to = Range::new(0.0, 1.0);
///
/// assert_eq!(scale_value(0.0, &from, &to), 0.0);
/// assert_eq!(scale_value(50.0, &from, &to), 0.5);
/// assert_eq!(scale_value(100.0, &from, &to), 1.0);
///
/// // Out-of-range values are not clamped
/// assert_eq!(scale_value(150.0, &from, &to), 1.5);
/// assert_eq!(scale_value(-50.0, &from, &to), -0.5);
/// ```
///
/// ## Arbitrary target intervals
///
/// ```rust
/// use vizenc::{Range, scale_value};
///
/// // Correlations in [-1, 1] mapped onto [0, 1] for a color lookup
/// let correlation = Range::new(-1.0, 1.0);
/// assert_eq!(scale_value(0.0, &correlation, &Range::unit()), 0.5);
///
/// // Reversed target inverts the mapping
/// let reversed = Range::new(1.0, 0.0);
/// assert_eq!(scale_value(25.0, &Range::new(0.0, 100.0), &reversed), 0.75);
/// ```
pub fn scale_value<T: Float>(value: T, from: &Range<T>, to: &Range<T>) -> T {
    let fraction = (value - from.min) / from.span();
    to.min + fraction * to.span()
}
