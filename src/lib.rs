//! Visual encoding library
//!
//! `vizenc` turns tabular model-explainability data (feature importances,
//! correlations, influence weights, case distances) into the visual
//! parameters a plotting engine consumes: colors, axis tick labels, density
//! curves, marker size scalars, and neighbor graphs. It focuses on the
//! mathematical core of that translation; rendering, layout, and palette
//! tables live with the caller.
//!
//! # Core Concepts
//!
//! ## Scaling
//!
//! Every encoding starts with [`scale_value`], a pure linear remap between
//! two [`Range`]s. There is no clamping and no guard against collapsed
//! ranges: out-of-range inputs map proportionally outside the target, and a
//! degenerate source range produces a non-finite result the caller treats as
//! "skip this point".
//!
//! ## Colors
//!
//! A [`ColorScale`] is an ordered stop table over `[0, 1]`. Values remap into
//! it through [`scale_value`]; missing values resolve to the background of
//! the active [`ColorScheme`], which is derived exactly once from the
//! `(is_dark, is_print)` display flags and passed explicitly everywhere.
//! [`text_color_for`] picks a readable foreground for any background, either
//! as raw black/white or as the semantic text token of the matching scheme.
//!
//! ## Density, size, neighbors
//!
//! [`DensityEstimator`] smooths a sample of scalars into an `(x, density)`
//! curve over a caller-built grid ([`density_domain`], [`density_ticks`]).
//! [`area_sizeref`] converts weights into an area-proportional marker size
//! reference. [`neighbor_graph`] adapts a pairwise distance matrix into the
//! sorted neighbor lists a nearest-neighbor-seeded projection expects.
//!
//! All operations are synchronous pure functions over immutable inputs; no
//! function retains state between calls, so everything may be recomputed per
//! frame with identical results.
//!
//! # Examples
//!
//! ## Coloring a correlation cell
//!
//! ```rust
//! use vizenc::{ColorScale, ColorScheme, ContrastMode, Range, text_color_for};
//!
//! let scheme = ColorScheme::from_flags(false, false);
//! let scale = ColorScale::uniform(&["#313695", "#ffffbf", "#a50026"])?;
//!
//! let correlations = Range::new(-1.0, 1.0);
//! let cell = scale.resolve(Some(-1.0), &correlations, scheme);
//! let label = text_color_for(cell, ContrastMode::BlackWhite);
//!
//! assert_eq!(cell, "#313695");
//! assert_eq!(label, "#FFF");
//! # Ok::<(), vizenc::EncodingError>(())
//! ```
//!
//! ## A density curve around a prediction
//!
//! ```rust
//! use vizenc::{density_domain, density_ticks, DensityEstimator, FocusBand, Kernel};
//!
//! let values = [12.0, 14.0, 15.0, 15.5, 19.0];
//! let focus = FocusBand { value: 22.0, spread: 1.5 };
//!
//! let domain = density_domain(&values, Some(focus));
//! let ticks = density_ticks(&domain.total);
//! let kde = DensityEstimator::new(Kernel::Epanechnikov { bandwidth: 2.0 }, ticks);
//!
//! let curve = kde.estimate(&values);
//! assert!(curve.iter().all(|&(_, density)| density >= 0.0));
//! ```
//!
//! ## Seeding a projection from trainee distances
//!
//! ```rust
//! use std::collections::HashMap;
//! use vizenc::neighbor_graph;
//!
//! let mut distances = HashMap::new();
//! distances.insert(
//!     "0".to_string(),
//!     HashMap::from([("0".to_string(), 0.0), ("1".to_string(), 2.5)]),
//! );
//! distances.insert(
//!     "1".to_string(),
//!     HashMap::from([("0".to_string(), 2.5), ("1".to_string(), 0.0)]),
//! );
//!
//! let graph = neighbor_graph(&distances);
//! assert_eq!(graph[0].indices, vec![0, 1]);
//! ```

pub mod color;
pub mod density;
pub mod error;
pub mod label;
pub mod marker;
pub mod neighbors;
pub mod scale;
pub mod stats;

pub use color::{
    ColorScale, ColorScheme, ColorStop, ContrastMode, SemanticColors, contrasting_text_color,
    contrasting_text_color_opt, text_color_for, text_color_for_opt,
};
pub use density::{
    DensityDomain, DensityEstimator, FocusBand, Kernel, density_domain, density_ticks,
    trim_flat_tails,
};
pub use error::EncodingError;
pub use label::{
    CategoryTicks, DEFAULT_TICK_LIMIT, ScreenSize, TickFormat, WRAP_MAX_CATEGORIES_LG,
    WRAP_MAX_CATEGORIES_MD, WRAP_MAX_CATEGORIES_SM, category_axis_ticks, format_category_tick,
};
pub use marker::{
    DEFAULT_MAX_MARKER_SIZE, DEFAULT_MIN_MARKER_SIZE, area_sizeref, rendered_diameter,
};
pub use neighbors::{NeighborList, neighbor_graph};
pub use num_traits::Float;
pub use scale::{Range, scale_value};
pub use stats::{finite_extent, safe_max, safe_min};
