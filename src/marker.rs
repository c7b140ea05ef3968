//! Area-preserving marker sizing for bubble-style weight encodings.
//!
//! Perceived importance tracks marker *area*, not diameter. Raw weights are
//! handed to the renderer unchanged; a single `sizeref` scalar tells its
//! area-sizing mode how to turn them into pixels so that the largest weight
//! fills a marker of exactly the requested maximum size and every other
//! weight covers proportional ink.

use crate::stats::safe_max;

/// Default on-screen size of the largest marker, in pixels.
pub const DEFAULT_MAX_MARKER_SIZE: f64 = 40.0;
/// Default floor below which markers stop shrinking, in pixels.
///
/// Not consulted by the sizing math here: the floor is pass-through
/// configuration for the renderer's `sizemin`, exported alongside the
/// maximum so callers configure both from one place.
pub const DEFAULT_MIN_MARKER_SIZE: f64 = 6.0;

/// Computes the area-mode size reference for a set of weights.
///
/// `sizeref = 2 * max(weights) / max_size^2`. A smaller `sizeref` yields a
/// bigger circle; the squaring is what makes area, not diameter, track the
/// weight. `NaN` weights are ignored; an empty or all-`NaN` set yields 0.
///
/// The maximum must be global across every marker sharing one visual scale.
/// Callers that split their markers into groups decide for themselves
/// whether groups share a `sizeref` (comparable across groups) or each
/// compute their own (comparable only within a group); this layer always
/// reduces over exactly the slice it is given.
///
/// # Examples
///
/// ```rust
/// use vizenc::{area_sizeref, rendered_diameter};
///
/// let weights = [0.1, 0.25, 0.5];
/// let sizeref = area_sizeref(&weights, 40.0);
///
/// // The heaviest marker renders at exactly the maximum size
/// assert_eq!(rendered_diameter(0.5, sizeref), 40.0);
///
/// // Halving a weight halves the area: diameter shrinks by sqrt(2)
/// let full = rendered_diameter(0.5, sizeref);
/// let half = rendered_diameter(0.25, sizeref);
/// assert!((full / half - 2.0f64.sqrt()).abs() < 1e-12);
/// ```
pub fn area_sizeref(weights: &[f64], max_size: f64) -> f64 {
    let max_weight = weights.iter().copied().fold(f64::NAN, safe_max);
    if !max_weight.is_finite() {
        return 0.0;
    }
    (2.0 * max_weight) / (max_size * max_size)
}

/// The on-screen diameter a weight renders at under area sizing.
///
/// Inverts the `sizeref` relation: `diameter = sqrt(2 * weight / sizeref)`.
/// This is what an area-mode renderer computes internally; it is exposed so
/// size encodings can be reasoned about (and tested) without one.
pub fn rendered_diameter(weight: f64, sizeref: f64) -> f64 {
    (2.0 * weight / sizeref).sqrt()
}
