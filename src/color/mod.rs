//! Color encodings: scheme resolution, stop-table color scales, and
//! contrast-aware text colors.
//!
//! The light/dark [`ColorScheme`] is derived exactly once from display-mode
//! flags and threaded explicitly through every lookup; no function in this
//! module re-derives it from booleans.

pub mod contrast;
pub mod scale;
pub mod scheme;

pub use contrast::{
    ContrastMode, contrasting_text_color, contrasting_text_color_opt, perceived_brightness_opt,
    text_color_for, text_color_for_opt,
};
pub use scale::{ColorScale, ColorStop};
pub use scheme::{ColorScheme, DARK_SEMANTIC_COLORS, LIGHT_SEMANTIC_COLORS, SemanticColors};
