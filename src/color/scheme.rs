/// Light/dark rendering context for a chart.
///
/// The scheme is derived once from the two display-mode flags and then passed
/// explicitly to every color lookup. Print output always renders light, even
/// when the surrounding UI is dark.
///
/// # Examples
///
/// ```rust
/// use vizenc::ColorScheme;
///
/// assert_eq!(ColorScheme::from_flags(false, false), ColorScheme::Light);
/// assert_eq!(ColorScheme::from_flags(true, false), ColorScheme::Dark);
///
/// // Print forces light regardless of the dark flag
/// assert_eq!(ColorScheme::from_flags(true, true), ColorScheme::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Resolves the scheme from display-mode flags: dark iff `is_dark` is set
    /// and `is_print` is not.
    pub fn from_flags(is_dark: bool, is_print: bool) -> Self {
        if is_dark && !is_print {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// The scheme's background color.
    ///
    /// This doubles as the sentinel returned when a color lookup has no data
    /// to encode (missing values, out-of-range stops).
    pub fn background(self) -> &'static str {
        match self {
            ColorScheme::Light => "#fff",
            ColorScheme::Dark => "#000",
        }
    }

    /// The scheme's semantic color tokens.
    pub fn semantic_colors(self) -> &'static SemanticColors {
        match self {
            ColorScheme::Light => &LIGHT_SEMANTIC_COLORS,
            ColorScheme::Dark => &DARK_SEMANTIC_COLORS,
        }
    }
}

/// Semantic color tokens shared with the surrounding UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub divider: &'static str,
    pub background: BackgroundColors,
    pub text: TextColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColors {
    pub default: &'static str,
    pub paper: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Token table for the light scheme.
pub const LIGHT_SEMANTIC_COLORS: SemanticColors = SemanticColors {
    primary: "#1c64f2",
    secondary: "#6b7280",
    divider: "#e5e7eb",
    background: BackgroundColors {
        default: "#fff",
        paper: "#f9fafb",
    },
    text: TextColors {
        primary: "#111928",
        secondary: "#6b7280",
    },
};

/// Token table for the dark scheme.
pub const DARK_SEMANTIC_COLORS: SemanticColors = SemanticColors {
    primary: "#76a9fa",
    secondary: "#9ca3af",
    divider: "#374151",
    background: BackgroundColors {
        default: "#000",
        paper: "#111928",
    },
    text: TextColors {
        primary: "#f9fafb",
        secondary: "#9ca3af",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::contrast::{ContrastMode, text_color_for};

    #[test]
    fn test_scheme_from_flags() {
        assert_eq!(ColorScheme::from_flags(false, false), ColorScheme::Light);
        assert_eq!(ColorScheme::from_flags(false, true), ColorScheme::Light);
        assert_eq!(ColorScheme::from_flags(true, false), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_flags(true, true), ColorScheme::Light);
    }

    #[test]
    fn test_background_sentinels() {
        assert_eq!(ColorScheme::Light.background(), "#fff");
        assert_eq!(ColorScheme::Dark.background(), "#000");
    }

    #[test]
    fn test_text_tokens_contrast_with_their_background() {
        // The primary text token of each scheme must itself be readable on
        // that scheme's default background.
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let tokens = scheme.semantic_colors();
            let readable = text_color_for(tokens.background.default, ContrastMode::SemanticTokens);
            assert_eq!(readable, tokens.text.primary);
        }
    }
}
