//! Display-width helpers for rendering option labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of a string.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate `s` to at most `max_width` display columns, appending `tail`
/// when anything was cut.
///
/// Wide characters (CJK, fullwidth forms) count as two columns. If even the
/// tail does not fit, as much of the tail as fits is returned.
pub fn truncate_to_width(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = display_width(tail);
    if tail_width >= max_width {
        let mut out = String::new();
        let mut used = 0;
        for c in tail.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max_width {
                break;
            }
            out.push(c);
            used += w;
        }
        return out;
    }

    let budget = max_width - tail_width;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("abc", 10, "…"), "abc");
        assert_eq!(truncate_to_width("abc", 3, "…"), "abc");
    }

    #[test]
    fn long_strings_are_cut_with_tail() {
        assert_eq!(truncate_to_width("abcdef", 4, "…"), "abc…");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("日本語"), 6);
        // Budget of 5 leaves 4 columns for content, fitting two wide chars.
        assert_eq!(truncate_to_width("日本語です", 5, "…"), "日本…");
    }

    #[test]
    fn tiny_budget_degrades_to_tail_prefix() {
        assert_eq!(truncate_to_width("abcdef", 0, "…"), "");
        assert_eq!(truncate_to_width("abcdef", 1, "…"), "…");
    }
}
