//! NaN-safe extrema helpers shared by the density and marker encoders.
//!
//! Missing observations arrive as `NaN`; these helpers treat `NaN` as absent
//! rather than letting it poison a whole min/max reduction.

use crate::scale::Range;
use num_traits::Float;

/// Minimum of two values, ignoring `NaN`.
///
/// Returns the other operand when one is `NaN`, and `NaN` only when both are.
///
/// # Examples
///
/// ```rust
/// use vizenc::safe_min;
///
/// assert_eq!(safe_min(3.0, 5.0), 3.0);
/// assert_eq!(safe_min(f64::NAN, 5.0), 5.0);
/// assert!(safe_min(f64::NAN, f64::NAN).is_nan());
/// ```
pub fn safe_min<T: Float>(a: T, b: T) -> T {
    if a.is_nan() {
        b
    } else if b.is_nan() {
        a
    } else {
        a.min(b)
    }
}

/// Maximum of two values, ignoring `NaN`.
///
/// Returns the other operand when one is `NaN`, and `NaN` only when both are.
///
/// # Examples
///
/// ```rust
/// use vizenc::safe_max;
///
/// assert_eq!(safe_max(3.0, 5.0), 5.0);
/// assert_eq!(safe_max(3.0, f64::NAN), 3.0);
/// ```
pub fn safe_max<T: Float>(a: T, b: T) -> T {
    if a.is_nan() {
        b
    } else if b.is_nan() {
        a
    } else {
        a.max(b)
    }
}

/// The `[min, max]` extent of the finite values in `values`.
///
/// `NaN` and infinite entries are skipped. Returns `None` when no finite
/// value remains.
///
/// # Examples
///
/// ```rust
/// use vizenc::{Range, finite_extent};
///
/// let extent = finite_extent(&[3.0, f64::NAN, -1.0, 7.0]).unwrap();
/// assert_eq!(extent, Range::new(-1.0, 7.0));
///
/// assert!(finite_extent::<f64>(&[]).is_none());
/// assert!(finite_extent(&[f64::NAN]).is_none());
/// ```
pub fn finite_extent<T: Float>(values: &[T]) -> Option<Range<T>> {
    let mut extent: Option<Range<T>> = None;
    for &value in values {
        if !value.is_finite() {
            continue;
        }
        extent = Some(match extent {
            None => Range::new(value, value),
            Some(range) => Range::new(range.min.min(value), range.max.max(value)),
        });
    }
    extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_min_max_ignore_nan() {
        assert_eq!(safe_min(f64::NAN, 2.0), 2.0);
        assert_eq!(safe_min(2.0, f64::NAN), 2.0);
        assert_eq!(safe_max(f64::NAN, 2.0), 2.0);
        assert_eq!(safe_max(2.0, f64::NAN), 2.0);
    }

    #[test]
    fn test_safe_min_max_both_nan() {
        assert!(safe_min(f64::NAN, f64::NAN).is_nan());
        assert!(safe_max(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn test_finite_extent_single_value() {
        assert_eq!(finite_extent(&[4.0]), Some(Range::new(4.0, 4.0)));
    }

    #[test]
    fn test_finite_extent_skips_infinities() {
        let extent = finite_extent(&[f64::INFINITY, 1.0, 2.0, f64::NEG_INFINITY]).unwrap();
        assert_eq!(extent, Range::new(1.0, 2.0));
    }
}
