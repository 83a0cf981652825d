//! Output types: the extracted document texts, run statistics, and the set
//! of files one run produces.
//!
//! Everything here is serde-serialisable so embedders can log a run summary
//! as JSON. The texts themselves are plain `String`s — one raw document and
//! one display document, both already blank-line-collapsed by the driver.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Result of one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// The recognised document in logical character order. Feeds the two
    /// plain-text files and the Markdown/HTML renditions.
    pub raw_text: String,

    /// The reshaped, bidi-reordered document for terminals without RTL
    /// support. Feeds the legacy-terminal file only.
    pub display_text: String,

    /// Counters and timings for the run.
    pub stats: ExtractionStats,
}

impl ExtractionOutput {
    /// True when no usable text came out of the document — the caller should
    /// report "no text extracted" and write no files.
    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// Counters and timings accumulated over one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages rasterised from the PDF.
    pub total_pages: usize,
    /// Lines that passed the minimum-length filter across all pages.
    pub kept_lines: usize,
    /// Lines blanked out as sub-threshold noise.
    pub dropped_lines: usize,
    /// Wall-clock time spent in pdfium.
    pub render_duration_ms: u64,
    /// Wall-clock time spent in tesseract (all pages).
    pub ocr_duration_ms: u64,
    /// Total run time including post-processing.
    pub total_duration_ms: u64,
}

/// The five files one run writes, derived from the input path by stripping
/// its extension and appending a fixed suffix per artifact.
///
/// `processing` and `reading` receive identical raw text. Almost certainly
/// one of them was meant to carry the display text instead, but downstream
/// scripts have come to rely on both names holding the raw variant, so the
/// duplicate write is kept deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSet {
    /// `<base>_processing.txt` — raw document text.
    pub processing: PathBuf,
    /// `<base>_reading.txt` — raw document text (duplicate of `processing`).
    pub reading: PathBuf,
    /// `<base>_legacy_terminal.txt` — reshaped + bidi-reordered text.
    pub legacy_terminal: PathBuf,
    /// `<base>.md` — raw text in an RTL Markdown wrapper.
    pub markdown: PathBuf,
    /// `<base>.html` — raw text in a standalone RTL HTML document.
    pub html: PathBuf,
}

impl OutputSet {
    /// Derive the output paths for a given input PDF.
    ///
    /// ```rust
    /// use pdf2ara::OutputSet;
    /// use std::path::Path;
    ///
    /// let set = OutputSet::for_input(Path::new("scans/Report_2024.pdf"));
    /// assert_eq!(set.markdown, Path::new("scans/Report_2024.md"));
    /// assert_eq!(
    ///     set.processing,
    ///     Path::new("scans/Report_2024_processing.txt")
    /// );
    /// ```
    pub fn for_input(pdf_path: &Path) -> Self {
        let base = pdf_path.with_extension("");
        Self {
            processing: with_suffix(&base, "_processing.txt"),
            reading: with_suffix(&base, "_reading.txt"),
            legacy_terminal: with_suffix(&base, "_legacy_terminal.txt"),
            markdown: with_suffix(&base, ".md"),
            html: with_suffix(&base, ".html"),
        }
    }

    /// All five paths in write order.
    pub fn paths(&self) -> [&Path; 5] {
        [
            &self.processing,
            &self.reading,
            &self.legacy_terminal,
            &self.markdown,
            &self.html,
        ]
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = base.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}
