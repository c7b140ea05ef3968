use super::scheme::ColorScheme;
use crate::error::EncodingError;
use crate::scale::{Range, scale_value};

/// A single entry in a color scale's stop table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// Normalized position in `[0, 1]`.
    pub position: f64,
    /// RGB hex color at this position.
    pub color: String,
}

/// An ordered stop table mapping normalized positions to colors.
///
/// Positions are non-decreasing, starting at `0` and ending at `1`. Scales
/// are immutable once built; resolving a value never mutates or memoizes.
///
/// # Examples
///
/// ```rust
/// use vizenc::{ColorScale, ColorScheme, Range};
///
/// let scale = ColorScale::uniform(&["#313695", "#ffffbf", "#a50026"]).unwrap();
///
/// // Correlations in [-1, 1]: -1 lands on the first stop
/// let from = Range::new(-1.0, 1.0);
/// let color = scale.resolve(Some(-1.0), &from, ColorScheme::Light);
/// assert_eq!(color, "#313695");
///
/// // Missing values resolve to the scheme background, not an error
/// let color = scale.resolve(None, &from, ColorScheme::Dark);
/// assert_eq!(color, "#000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Builds a scale distributing `colors` evenly over `[0, 1]`.
    ///
    /// Each color lands at `i / n` except the last, which is pinned to `1`.
    /// Fewer than 2 colors is an error: a scale with a single stop would
    /// corrupt every downstream lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vizenc::ColorScale;
    ///
    /// let scale = ColorScale::uniform(&["#000", "#888", "#fff"]).unwrap();
    /// let positions: Vec<f64> = scale.stops().iter().map(|s| s.position).collect();
    /// assert_eq!(positions, vec![0.0, 1.0 / 3.0, 1.0]);
    ///
    /// assert!(ColorScale::uniform(&["#000"]).is_err());
    /// ```
    pub fn uniform<S: AsRef<str>>(colors: &[S]) -> Result<Self, EncodingError> {
        let n = colors.len();
        if n < 2 {
            return Err(EncodingError::NotEnoughColors {
                required: 2,
                actual: n,
            });
        }

        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, color)| ColorStop {
                position: if i == n - 1 { 1.0 } else { i as f64 / n as f64 },
                color: color.as_ref().to_string(),
            })
            .collect();
        Ok(Self { stops })
    }

    /// Builds a scale that compresses the first half of `colors` into
    /// `[0, split)` and spreads the second half over `[split, 1]`.
    ///
    /// Useful when the low end of the domain is dense and the high end
    /// sparse: the compressed half keeps resolution where the data crowds.
    /// `split` is a caller-supplied constant (the anomaly heatmap uses `0.2`
    /// for its 0–5 conviction scale). Fewer than 3 colors is an error, since
    /// both halves need at least one stop and the lookup needs a gradient to
    /// compress.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vizenc::ColorScale;
    ///
    /// let scale = ColorScale::compressed(&["#a00", "#d55", "#fea", "#ffe"], 0.2).unwrap();
    /// let positions: Vec<f64> = scale.stops().iter().map(|s| s.position).collect();
    /// assert_eq!(positions, vec![0.0, 0.1, 0.2, 1.0]);
    /// ```
    pub fn compressed<S: AsRef<str>>(colors: &[S], split: f64) -> Result<Self, EncodingError> {
        let n = colors.len();
        if n < 3 {
            return Err(EncodingError::NotEnoughColors {
                required: 3,
                actual: n,
            });
        }

        let (lower, upper) = colors.split_at(n / 2);
        let lower_step = split / lower.len() as f64;
        let upper_step = (1.0 - split) / upper.len() as f64;

        let mut stops = Vec::with_capacity(n);
        for (i, color) in lower.iter().enumerate() {
            stops.push(ColorStop {
                position: lower_step * i as f64,
                color: color.as_ref().to_string(),
            });
        }
        for (i, color) in upper.iter().enumerate() {
            stops.push(ColorStop {
                position: if i == upper.len() - 1 {
                    1.0
                } else {
                    split + upper_step * i as f64
                },
                color: color.as_ref().to_string(),
            });
        }
        Ok(Self { stops })
    }

    /// The ordered stop table.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Resolves a scalar to a stop color.
    ///
    /// `value` is remapped from `from` into `[0, 1]` and the first stop whose
    /// position is at or above the scaled value wins (ties resolve to the
    /// earliest qualifying stop). The search keys on stop positions only; a
    /// stop's color is never inspected.
    ///
    /// Two sentinel cases resolve to the scheme background instead of a stop:
    /// - `None` (missing data), which is intentional and not an error;
    /// - a scaled value above every stop (out of range past the maximum).
    ///
    /// A degenerate `from` range produces a non-finite scaled value, which
    /// never satisfies the stop search and therefore also falls back to the
    /// scheme background.
    pub fn resolve(&self, value: Option<f64>, from: &Range<f64>, scheme: ColorScheme) -> &str {
        let Some(value) = value else {
            return scheme.background();
        };

        let scaled = scale_value(value, from, &Range::unit());
        match self.stops.iter().find(|stop| stop.position >= scaled) {
            Some(stop) => &stop.color,
            None => scheme.background(),
        }
    }
}
