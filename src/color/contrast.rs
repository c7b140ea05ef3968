use super::scheme::ColorScheme;

/// Brightness threshold (0–255 scale) above which a background counts as
/// light and takes dark text.
const LIGHT_BACKGROUND_THRESHOLD: f64 = 128.0;

/// How a readable foreground color is chosen for a given background.
///
/// Callers pick the strategy per use site: raw black/white for ink on
/// arbitrary cells (heatmap annotations), semantic tokens when the text must
/// match the surrounding UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    /// Plain `"#000"` / `"#FFF"` from perceived brightness.
    BlackWhite,
    /// The `text.primary` token of whichever scheme suits the background:
    /// light tokens over bright backgrounds, dark tokens over dark ones.
    SemanticTokens,
}

/// Decodes a hex color into `[r, g, b, a]` channels.
///
/// Accepts 3, 4, 6, and 8 hex-digit forms, with or without a leading `#`.
/// Short forms double each digit (`#abc` → `#aabbcc`). Alpha defaults to 255
/// when absent. Returns `None` for any other shape.
fn decode_hex_opt(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return None;
    }

    let expanded: Vec<u8> = match digits.len() {
        3 | 4 => digits.bytes().flat_map(|b| [b, b]).collect(),
        6 | 8 => digits.bytes().collect(),
        _ => return None,
    };

    let mut channels = [0u8, 0, 0, 255];
    for (slot, pair) in channels.iter_mut().zip(expanded.chunks_exact(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *slot = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(channels)
}

/// Perceived brightness of a hex color on a 0–255 scale, weighting the RGB
/// channels as `0.299 R + 0.587 G + 0.114 B`.
///
/// Returns `None` when the color cannot be decoded.
///
/// # Examples
///
/// ```rust
/// use vizenc::color::perceived_brightness_opt;
///
/// assert_eq!(perceived_brightness_opt("#000"), Some(0.0));
/// assert_eq!(perceived_brightness_opt("#ffffff"), Some(255.0));
/// assert_eq!(perceived_brightness_opt("not a color"), None);
/// ```
pub fn perceived_brightness_opt(hex: &str) -> Option<f64> {
    let [r, g, b, _] = decode_hex_opt(hex)?;
    Some((r as f64 * 299.0 + g as f64 * 587.0 + b as f64 * 114.0) / 1000.0)
}

/// Chooses black or white text for the given background color.
///
/// Returns `None` when the background cannot be decoded.
pub fn contrasting_text_color_opt(background: &str) -> Option<&'static str> {
    let brightness = perceived_brightness_opt(background)?;
    if brightness >= LIGHT_BACKGROUND_THRESHOLD {
        Some("#000")
    } else {
        Some("#FFF")
    }
}

/// Chooses black or white text for the given background color.
///
/// # Examples
///
/// ```rust
/// use vizenc::contrasting_text_color;
///
/// assert_eq!(contrasting_text_color("#ffd700"), "#000"); // gold is bright
/// assert_eq!(contrasting_text_color("#1c64f2"), "#FFF"); // blue is dark
/// assert_eq!(contrasting_text_color("#fff"), "#000");
/// ```
pub fn contrasting_text_color(background: &str) -> &'static str {
    contrasting_text_color_opt(background).unwrap()
}

/// Resolves a readable text color for `background` under the chosen strategy.
///
/// Returns `None` when the background cannot be decoded.
pub fn text_color_for_opt(background: &str, mode: ContrastMode) -> Option<&'static str> {
    let brightness = perceived_brightness_opt(background)?;
    let needs_dark_text = brightness >= LIGHT_BACKGROUND_THRESHOLD;

    let color = match mode {
        ContrastMode::BlackWhite => {
            if needs_dark_text {
                "#000"
            } else {
                "#FFF"
            }
        }
        ContrastMode::SemanticTokens => {
            let scheme = if needs_dark_text {
                ColorScheme::Light
            } else {
                ColorScheme::Dark
            };
            scheme.semantic_colors().text.primary
        }
    };
    Some(color)
}

/// Resolves a readable text color for `background` under the chosen strategy.
///
/// # Examples
///
/// ```rust
/// use vizenc::{ContrastMode, text_color_for};
///
/// assert_eq!(text_color_for("#fff", ContrastMode::BlackWhite), "#000");
/// assert_eq!(text_color_for("#fff", ContrastMode::SemanticTokens), "#111928");
/// assert_eq!(text_color_for("#000", ContrastMode::SemanticTokens), "#f9fafb");
/// ```
pub fn text_color_for(background: &str, mode: ContrastMode) -> &'static str {
    text_color_for_opt(background, mode).unwrap()
}
