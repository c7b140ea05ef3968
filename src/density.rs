//! Kernel density estimation and the evaluation grid it runs on.
//!
//! The estimator is deliberately dumb: mean kernel response over the samples
//! at each grid point. All the domain knowledge lives in the grid builders,
//! which widen the observed range far enough to cover a highlighted
//! prediction value and its error band, and in the flat-tail trim that keeps
//! long zero plateaus out of the rendered curve.

use crate::scale::Range;
use crate::stats::{finite_extent, safe_max, safe_min};

/// Smoothing kernels for density estimation.
///
/// # Examples
///
/// ```rust
/// use vizenc::Kernel;
///
/// let epa = Kernel::Epanechnikov { bandwidth: 2.0 };
/// // Compact support: zero outside |v| <= bandwidth
/// assert_eq!(epa.evaluate(3.0), 0.0);
/// assert_eq!(epa.evaluate(0.0), 0.75 / 2.0);
///
/// let gauss = Kernel::Gaussian;
/// // Peak value is 1 / sqrt(2 pi)
/// assert!((gauss.evaluate(0.0) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// Parabolic kernel with compact support `[-bandwidth, bandwidth]`:
    /// `0.75 (1 - u²) / k` for `u = v / k`, `|u| <= 1`, else 0.
    Epanechnikov { bandwidth: f64 },
    /// Standard normal kernel, unbounded support:
    /// `(1 / sqrt(2 pi)) e^(-v² / 2)`.
    Gaussian,
}

impl Kernel {
    /// Kernel response at offset `v` from the sample.
    pub fn evaluate(self, v: f64) -> f64 {
        match self {
            Kernel::Epanechnikov { bandwidth } => {
                let u = v / bandwidth;
                if u.abs() <= 1.0 {
                    0.75 * (1.0 - u * u) / bandwidth
                } else {
                    0.0
                }
            }
            Kernel::Gaussian => {
                let p = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
                p * (-v * v / 2.0).exp()
            }
        }
    }
}

/// A kernel paired with the grid it evaluates on.
///
/// Estimation is pure: the same estimator applied to the same samples always
/// produces the same curve, so callers may re-estimate every frame.
///
/// # Examples
///
/// ```rust
/// use vizenc::{DensityEstimator, Kernel};
///
/// let grid = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
/// let kde = DensityEstimator::new(Kernel::Gaussian, grid);
///
/// let curve = kde.estimate(&[0.0]);
/// // Symmetric around the single sample, peaked at it
/// assert_eq!(curve[1].1, curve[3].1);
/// assert!(curve[2].1 > curve[1].1);
///
/// // An empty sample set yields zero density everywhere
/// assert!(kde.estimate(&[]).iter().all(|&(_, d)| d == 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DensityEstimator {
    kernel: Kernel,
    grid: Vec<f64>,
}

impl DensityEstimator {
    pub fn new(kernel: Kernel, grid: Vec<f64>) -> Self {
        Self { kernel, grid }
    }

    /// Estimates the density curve for `samples` as `(x, density)` pairs.
    ///
    /// Density at each grid point is the mean kernel response over all
    /// samples. Empty samples produce a uniformly zero curve rather than a
    /// `NaN` one.
    pub fn estimate(&self, samples: &[f64]) -> Vec<(f64, f64)> {
        self.grid
            .iter()
            .map(|&x| {
                if samples.is_empty() {
                    return (x, 0.0);
                }
                let total: f64 = samples.iter().map(|&v| self.kernel.evaluate(x - v)).sum();
                (x, total / samples.len() as f64)
            })
            .collect()
    }
}

/// A highlighted prediction value and its uncertainty spread (typically the
/// model's mean absolute error), which the density domain must cover even
/// when it lies outside the observed samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusBand {
    pub value: f64,
    pub spread: f64,
}

/// The observed and padded ranges a density curve is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityDomain {
    /// Extent of the finite observations.
    pub observed: Range<f64>,
    /// Observed extent widened by `delta` and stretched over the focus band.
    pub total: Range<f64>,
    /// Padding applied on each side: the larger of one unit and a tenth of
    /// the span between the extrema and the focus band edges.
    pub delta: f64,
}

/// Computes the evaluation domain for a density curve.
///
/// The observed extent (NaN-ignoring) is expanded on both sides by
/// `delta = max(1, (max(x_max, v + s) - min(x_min, v - s)) / 10)` so the
/// curve visually extends past the data, and past the focus band when one is
/// given. A focus whose value is not finite is treated as absent. The total
/// minimum is floored at zero; the quantities plotted on these curves are
/// non-negative.
///
/// # Examples
///
/// ```rust
/// use vizenc::{density_domain, FocusBand};
///
/// let values = [4.0, 6.0, 10.0];
/// let domain = density_domain(&values, None);
/// assert_eq!(domain.delta, 1.0); // span / 10 < 1, so the floor applies
/// assert_eq!(domain.total.min, 3.0);
/// assert_eq!(domain.total.max, 11.0);
///
/// // A focus band outside the samples stretches the domain over it
/// let focus = FocusBand { value: 40.0, spread: 5.0 };
/// let domain = density_domain(&values, Some(focus));
/// assert!(domain.total.max > 45.0);
/// ```
pub fn density_domain(values: &[f64], focus: Option<FocusBand>) -> DensityDomain {
    let observed = finite_extent(values).unwrap_or_else(|| Range::new(0.0, 0.0));

    match focus {
        Some(band) if band.value.is_finite() => {
            let high = safe_max(observed.max, band.value + band.spread);
            let low = safe_min(observed.min, band.value - band.spread);
            let delta = safe_max(1.0, (high - low) / 10.0);

            let total_min = safe_max(
                0.0,
                safe_min(band.value - band.spread - delta, observed.min - delta),
            );
            let total_max = safe_max(band.value + band.spread + delta, observed.max + delta);
            DensityDomain {
                observed,
                total: Range::new(total_min, total_max),
                delta,
            }
        }
        _ => {
            let delta = safe_max(1.0, observed.span() / 10.0);
            let total_min = safe_max(0.0, observed.min - delta);
            let total_max = observed.max + delta;
            DensityDomain {
                observed,
                total: Range::new(total_min, total_max),
                delta,
            }
        }
    }
}

/// Builds the evaluation grid over `total`.
///
/// The step is the integer ceiling of a tenth of the span; grid points are
/// computed from the index rather than accumulated, and the maximum is
/// appended whenever the step does not land on it exactly. A collapsed range
/// yields a single point.
///
/// # Examples
///
/// ```rust
/// use vizenc::{density_ticks, Range};
///
/// let ticks = density_ticks(&Range::new(0.0, 95.0));
/// assert_eq!(ticks.first(), Some(&0.0));
/// assert_eq!(ticks.last(), Some(&95.0)); // max included despite step 10
/// ```
pub fn density_ticks(total: &Range<f64>) -> Vec<f64> {
    let step = (total.span() / 10.0).ceil();
    if !(step > 0.0) {
        return vec![total.min];
    }

    let mut ticks = Vec::new();
    let mut index = 0usize;
    loop {
        let tick = total.min + step * index as f64;
        if tick >= total.max {
            break;
        }
        ticks.push(tick);
        index += 1;
    }
    ticks.push(total.max);
    ticks
}

/// Trims leading and trailing all-zero regions of a density curve down to a
/// single zero padding point on each side.
///
/// An entirely zero curve has nothing to frame and trims to empty.
///
/// # Examples
///
/// ```rust
/// use vizenc::trim_flat_tails;
///
/// let curve = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.3), (3.0, 0.0), (4.0, 0.0)];
/// assert_eq!(
///     trim_flat_tails(&curve),
///     &[(1.0, 0.0), (2.0, 0.3), (3.0, 0.0)]
/// );
/// ```
pub fn trim_flat_tails(curve: &[(f64, f64)]) -> &[(f64, f64)] {
    let first = match curve.iter().position(|&(_, density)| density != 0.0) {
        Some(index) => index,
        None => return &curve[..0],
    };
    let last = curve
        .iter()
        .rposition(|&(_, density)| density != 0.0)
        .unwrap_or(first);

    let start = first.saturating_sub(1);
    let end = (last + 1).min(curve.len() - 1);
    &curve[start..=end]
}
