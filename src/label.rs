//! Category tick labels: head/tail truncation and the responsive wrap policy.
//!
//! Long category labels are summarized as their first and last
//! whitespace-bounded chunks. Whether the two chunks stack (`<br />`) or stay
//! inline depends on how crowded the axis is at the current breakpoint.

/// Default character budget before a label is summarized.
pub const DEFAULT_TICK_LIMIT: usize = 15;

/// Most categories that still allow wrapped labels on a small container.
pub const WRAP_MAX_CATEGORIES_SM: usize = 10;
/// Most categories that still allow wrapped labels on a medium container.
pub const WRAP_MAX_CATEGORIES_MD: usize = 20;
/// Most categories that still allow wrapped labels on a large container.
pub const WRAP_MAX_CATEGORIES_LG: usize = 25;

/// Separator between the head and tail chunks when wrapping is on.
const WRAP_SEPARATOR: &str = "...<br />";
/// Separator between the head and tail chunks when wrapping is off.
const INLINE_SEPARATOR: &str = " ... ";

/// Options for [`format_category_tick`].
#[derive(Debug, Clone)]
pub struct TickFormat<'a> {
    /// Character budget; labels shorter than this pass through unchanged.
    pub limit: usize,
    /// Stack the head and tail chunks with a `<br />` instead of inline dots.
    pub wrap: bool,
    /// Literal substrings replaced by a single space before chunking, for
    /// labels whose word boundaries use another delimiter (e.g. `"|"`).
    pub replacements: &'a [&'a str],
}

impl Default for TickFormat<'_> {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TICK_LIMIT,
            wrap: true,
            replacements: &[],
        }
    }
}

/// Container width classes, from smallest-inclusive flags.
///
/// Mirrors the usual min-width media-query trio: `lg_up` implies a large
/// container, otherwise `md_up` a medium one, otherwise `sm_up` a small one.
/// All flags off means the container is below the smallest breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSize {
    pub sm_up: bool,
    pub md_up: bool,
    pub lg_up: bool,
}

/// Tick text and positions for a category axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTicks {
    pub text: Vec<String>,
    pub positions: Vec<usize>,
}

/// Summarizes a long label as its first and last chunks.
///
/// Labels shorter than `format.limit` pass through unchanged, as does any
/// label under a zero limit (a zero budget disables summarizing rather than
/// producing empty chunks). Longer labels
/// are chunked greedily left to right into runs of at most `limit` characters
/// ending at a whitespace boundary (the boundary character is consumed); a
/// window with no whitespace at all cuts at exactly `limit` characters. The
/// first and last chunks are trimmed, empties dropped, and the survivors
/// joined with `"...<br />"` when wrapping, `" ... "` otherwise.
///
/// # Examples
///
/// ```rust
/// use vizenc::{format_category_tick, TickFormat};
///
/// let format = TickFormat::default();
///
/// // Short labels pass through
/// assert_eq!(format_category_tick("Example A", &format), "Example A");
///
/// // Long labels keep their head and tail
/// let label = "Example A, Example B, Example C, Example D, Example E, Example F";
/// assert_eq!(
///     format_category_tick(label, &format),
///     "Example A,...<br />Example F"
/// );
///
/// // Alternate delimiters are normalized to spaces first
/// let format = TickFormat { replacements: &["|"], ..TickFormat::default() };
/// assert_eq!(
///     format_category_tick("condiments sauces and seasonings|condiments", &format),
///     "condiments...<br />condiments"
/// );
/// ```
pub fn format_category_tick(text: &str, format: &TickFormat) -> String {
    if format.limit == 0 || text.chars().count() < format.limit {
        return text.to_string();
    }

    let mut cleaned = text.to_string();
    for delimiter in format.replacements {
        cleaned = cleaned.replace(delimiter, " ");
    }

    let chunks = chunk_greedy(&cleaned, format.limit);
    let head = chunks.first().map(|c| c.trim()).unwrap_or("");
    let tail = chunks.last().map(|c| c.trim()).unwrap_or("");

    let separator = if format.wrap {
        WRAP_SEPARATOR
    } else {
        INLINE_SEPARATOR
    };
    [head, tail]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Splits `text` into maximal runs of at most `limit` characters, each ending
/// at a whitespace boundary or end-of-string. The boundary whitespace is
/// consumed, not emitted. A window without any whitespace falls back to a
/// fixed-length cut.
fn chunk_greedy(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars.len() - pos <= limit {
            chunks.push(chars[pos..].iter().collect());
            break;
        }

        let window_end = pos + limit;
        let boundary = (pos + 1..=window_end).rev().find(|&j| chars[j].is_whitespace());
        match boundary {
            Some(j) => {
                chunks.push(chars[pos..j].iter().collect());
                pos = j + 1;
            }
            None => {
                chunks.push(chars[pos..window_end].iter().collect());
                pos = window_end;
            }
        }
    }

    chunks
}

/// Whether wrapped labels fit `category_count` simultaneous categories at the
/// given container size.
///
/// Denser axes stop wrapping at smaller breakpoints so stacked labels cannot
/// overlap. Below the smallest breakpoint the policy abstains (`None`) and
/// the formatter's own default applies.
///
/// # Examples
///
/// ```rust
/// use vizenc::{label::wrap_categories, ScreenSize};
///
/// let md = ScreenSize { sm_up: true, md_up: true, lg_up: false };
/// assert_eq!(wrap_categories(md, 18), Some(true));
/// assert_eq!(wrap_categories(md, 23), Some(false));
///
/// let below_sm = ScreenSize::default();
/// assert_eq!(wrap_categories(below_sm, 18), None);
/// ```
pub fn wrap_categories(screen: ScreenSize, category_count: usize) -> Option<bool> {
    if screen.lg_up {
        Some(category_count <= WRAP_MAX_CATEGORIES_LG)
    } else if screen.md_up {
        Some(category_count <= WRAP_MAX_CATEGORIES_MD)
    } else if screen.sm_up {
        Some(category_count <= WRAP_MAX_CATEGORIES_SM)
    } else {
        None
    }
}

/// Formats every category for an axis, applying the responsive wrap policy.
///
/// Tick positions are the category indices. The `wrap` flag in `format` is
/// used only when the policy abstains (below the smallest breakpoint).
///
/// # Examples
///
/// ```rust
/// use vizenc::{category_axis_ticks, ScreenSize, TickFormat};
///
/// let categories = ["sepal length", "sepal width", "petal length"];
/// let screen = ScreenSize { sm_up: true, md_up: true, lg_up: true };
/// let ticks = category_axis_ticks(&categories, &TickFormat::default(), screen);
///
/// assert_eq!(ticks.positions, vec![0, 1, 2]);
/// assert_eq!(ticks.text[0], "sepal length");
/// ```
pub fn category_axis_ticks(
    categories: &[&str],
    format: &TickFormat,
    screen: ScreenSize,
) -> CategoryTicks {
    let wrap = wrap_categories(screen, categories.len()).unwrap_or(format.wrap);
    let format = TickFormat {
        wrap,
        ..format.clone()
    };

    CategoryTicks {
        text: categories
            .iter()
            .map(|category| format_category_tick(category, &format))
            .collect(),
        positions: (0..categories.len()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_unchanged() {
        let formatted = format_category_tick("Example A", &TickFormat::default());
        assert_eq!(formatted, "Example A");
    }

    #[test]
    fn test_zero_limit_passes_labels_through() {
        // A zero budget must not summarize; the chunker has no room to make
        // progress under it.
        let format = TickFormat {
            limit: 0,
            ..TickFormat::default()
        };
        assert_eq!(format_category_tick("ab", &format), "ab");
        assert_eq!(format_category_tick("", &format), "");
        assert_eq!(
            format_category_tick("Example A, Example B", &format),
            "Example A, Example B"
        );
    }

    #[test]
    fn test_label_at_limit_is_summarized() {
        // Exactly `limit` characters is not "shorter than" the limit.
        let label = "123456789012345";
        let formatted = format_category_tick(label, &TickFormat::default());
        assert_eq!(formatted, "123456789012345...<br />123456789012345");
    }

    #[test]
    fn test_head_and_tail_joined_by_wrap_separator() {
        let label = "Example A, Example B, Example C, Example D, Example E, Example F";
        let formatted = format_category_tick(label, &TickFormat::default());
        assert_eq!(formatted, "Example A,...<br />Example F");
    }

    #[test]
    fn test_inline_separator_when_wrap_disabled() {
        let label = "Example A, Example B, Example C, Example D, Example E, Example F";
        let format = TickFormat {
            wrap: false,
            ..TickFormat::default()
        };
        assert_eq!(
            format_category_tick(label, &format),
            "Example A, ... Example F"
        );
    }

    #[test]
    fn test_replacements_restore_word_boundaries() {
        let format = TickFormat {
            replacements: &["|"],
            ..TickFormat::default()
        };
        let formatted =
            format_category_tick("condiments sauces and seasonings|condiments", &format);
        assert_eq!(formatted, "condiments...<br />condiments");
    }

    #[test]
    fn test_no_whitespace_chunks_by_fixed_length() {
        let chunks = chunk_greedy("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(chunks, vec!["abcdefghij", "klmnopqrst", "uvwxyz"]);
    }

    #[test]
    fn test_chunk_boundary_whitespace_is_consumed() {
        let chunks = chunk_greedy("Example A, Example B, Example F", 15);
        assert_eq!(chunks, vec!["Example A,", "Example B,", "Example F"]);
    }

    #[test]
    fn test_chunk_at_exact_limit_followed_by_whitespace() {
        // A run of exactly `limit` characters whose next character is a
        // space cuts cleanly at the limit.
        let chunks = chunk_greedy("123456789012345 tail", 15);
        assert_eq!(chunks, vec!["123456789012345", "tail"]);
    }

    #[test]
    fn test_wrap_thresholds_per_breakpoint() {
        let sm = ScreenSize {
            sm_up: true,
            md_up: false,
            lg_up: false,
        };
        let md = ScreenSize {
            sm_up: true,
            md_up: true,
            lg_up: false,
        };
        let lg = ScreenSize {
            sm_up: true,
            md_up: true,
            lg_up: true,
        };

        assert_eq!(wrap_categories(sm, WRAP_MAX_CATEGORIES_SM), Some(true));
        assert_eq!(wrap_categories(sm, WRAP_MAX_CATEGORIES_SM + 1), Some(false));
        assert_eq!(wrap_categories(md, WRAP_MAX_CATEGORIES_MD), Some(true));
        assert_eq!(wrap_categories(md, WRAP_MAX_CATEGORIES_MD + 1), Some(false));
        assert_eq!(wrap_categories(lg, WRAP_MAX_CATEGORIES_LG), Some(true));
        assert_eq!(wrap_categories(lg, WRAP_MAX_CATEGORIES_LG + 1), Some(false));
        assert_eq!(wrap_categories(ScreenSize::default(), 5), None);
    }

    #[test]
    fn test_category_axis_ticks_disable_wrap_on_dense_axes() {
        let categories: Vec<String> = (0..12)
            .map(|i| format!("category number {i} with a long name"))
            .collect();
        let refs: Vec<&str> = categories.iter().map(String::as_str).collect();
        let sm = ScreenSize {
            sm_up: true,
            md_up: false,
            lg_up: false,
        };

        // 12 categories exceed the small-container threshold: inline dots.
        let ticks = category_axis_ticks(&refs, &TickFormat::default(), sm);
        assert!(ticks.text.iter().all(|t| !t.contains("<br />")));
        assert_eq!(ticks.positions, (0..12).collect::<Vec<_>>());

        // The same axis wraps on a large container.
        let lg = ScreenSize {
            sm_up: true,
            md_up: true,
            lg_up: true,
        };
        let ticks = category_axis_ticks(&refs, &TickFormat::default(), lg);
        assert!(ticks.text.iter().all(|t| t.contains("<br />")));
    }

    #[test]
    fn test_format_is_idempotent_across_calls() {
        let label = "Example A, Example B, Example C, Example D, Example E, Example F";
        let format = TickFormat::default();
        assert_eq!(
            format_category_tick(label, &format),
            format_category_tick(label, &format)
        );
    }
}
