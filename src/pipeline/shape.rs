//! Arabic glyph shaping and bidirectional reordering for terminal display.
//!
//! Stored text keeps logical character order with isolated code points —
//! that is what searchable files and RTL-aware renderers (browsers, editors)
//! want. Terminals without bidi support render it backwards and disjointed,
//! so the legacy output applies two transforms:
//!
//! 1. **Reshape** — replace each letter with its contextual presentation
//!    form (initial/medial/final/isolated) so the script joins correctly.
//! 2. **Reorder** — run the UAX#9 bidirectional algorithm per line and emit
//!    the characters in visual order.
//!
//! The reshaper is configuration-free here (ligature and Harakat handling at
//! the crate defaults) and is built once lazily.

use ar_reshaper::ArabicReshaper;
use once_cell::sync::Lazy;
use unicode_bidi::BidiInfo;

static RESHAPER: Lazy<ArabicReshaper> = Lazy::new(ArabicReshaper::default);

/// Produce the display form of one logical line: reshape, then bidi-reorder.
pub fn display_form(line: &str) -> String {
    reorder_line(&RESHAPER.reshape(line))
}

/// Reorder one line of text into visual order using UAX#9.
///
/// The input must be a single line (no `\n`); the line processor guarantees
/// this by splitting pages before shaping.
pub fn reorder_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(line, None);
    if info.paragraphs.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    for para in &info.paragraphs {
        out.push_str(&info.reorder_line(para, para.range.clone()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_stays_empty() {
        assert_eq!(display_form(""), "");
        assert_eq!(reorder_line(""), "");
    }

    #[test]
    fn ltr_ascii_is_unchanged() {
        assert_eq!(display_form("abc 123"), "abc 123");
        assert_eq!(reorder_line("hello world"), "hello world");
    }

    #[test]
    fn reshape_produces_presentation_forms() {
        // "بسم" — isolated letters must become joined presentation forms
        // (Arabic Presentation Forms A/B, U+FB50..U+FEFF).
        let shaped = RESHAPER.reshape("بسم");
        assert!(
            shaped
                .chars()
                .any(|c| ('\u{FB50}'..='\u{FEFF}').contains(&c)),
            "expected presentation forms, got: {shaped:?}"
        );
    }

    #[test]
    fn pure_rtl_line_is_reversed() {
        // Three already-shaped presentation-form letters: visual order for a
        // pure RTL run is the exact reverse of logical order.
        let logical = "\u{FEB3}\u{FEE0}\u{FEE1}";
        let visual: String = logical.chars().rev().collect();
        assert_eq!(reorder_line(logical), visual);
    }

    #[test]
    fn display_form_keeps_char_parity_for_digits() {
        // Digits embedded in RTL text must survive reordering.
        let line = "رقم 1234";
        let displayed = display_form(line);
        assert!(displayed.contains("1234"));
    }
}
