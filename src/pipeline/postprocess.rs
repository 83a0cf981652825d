//! Post-processing: deterministic cleanup of the assembled documents.
//!
//! The line filter blanks noise lines in place, so the joined document can
//! carry long runs of empty lines. [`collapse_blank_lines`] squeezes every
//! such run down to a single blank line, which is what separates pages and
//! paragraphs in the final files. The rule is a pure `&str → String`
//! function with no shared state.
//!
//! [`remove_bidi_marks`] strips explicit Unicode direction controls from the
//! display text for environments where stray marks break copy-paste. It is
//! wired to the `strip_bidi_marks` config switch, off by default.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Collapse every run of 2+ consecutive newlines to exactly one blank line.
///
/// Idempotent: applying it twice yields the same result as once, because no
/// replacement can create a new `\n{2,}` run.
pub fn collapse_blank_lines(text: &str) -> String {
    RE_BLANK_RUNS.replace_all(text, "\n\n").to_string()
}

static RE_BIDI_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{200e}\u{200f}\u{202a}-\u{202e}]").unwrap());

/// Remove Unicode bidirectional control characters (LRM, RLM, LRE, RLE,
/// PDF, LRO, RLO) for pure reading.
pub fn remove_bidi_marks(text: &str) -> String {
    RE_BIDI_MARKS.replace_all(text, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_squeezes_runs_to_one_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn collapse_is_idempotent() {
        let inputs = [
            "",
            "\n",
            "\n\n\n",
            "a\n\n\n\nb\n\n\n\n\nc",
            "بسم الله\n\n\nالرحمن الرحيم\n",
            "no newlines at all",
        ];
        for s in inputs {
            let once = collapse_blank_lines(s);
            let twice = collapse_blank_lines(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn collapse_never_increases_line_count() {
        let inputs = ["a\n\n\n\nb", "\n\n", "x", "a\nb\nc"];
        for s in inputs {
            let out = collapse_blank_lines(s);
            assert!(
                out.lines().count() <= s.lines().count(),
                "line count grew for {s:?}"
            );
        }
    }

    #[test]
    fn collapse_leaves_no_long_blank_runs() {
        let out = collapse_blank_lines("a\n\n\n\n\n\n\nb\n\n\nc");
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn collapse_handles_all_blank_document() {
        // A document of only separators must collapse to whitespace that the
        // emptiness check then treats as "no text extracted".
        let out = collapse_blank_lines("\n\n\n\n\n");
        assert_eq!(out, "\n\n");
        assert!(out.trim().is_empty());
    }

    #[test]
    fn bidi_marks_are_stripped() {
        let input = "\u{202b}مرحبا\u{202c} world\u{200f}";
        assert_eq!(remove_bidi_marks(input), "مرحبا world");
    }

    #[test]
    fn bidi_strip_leaves_clean_text_alone() {
        let input = "بسم الله الرحمن الرحيم";
        assert_eq!(remove_bidi_marks(input), input);
    }
}
