//! Error types for the pdf2ara library.
//!
//! The taxonomy mirrors the two failure domains of the pipeline:
//!
//! * **Conversion-domain errors** (bad path, unreadable file, corrupt PDF,
//!   pdfium binding or rasterisation failure) — [`extract`](crate::extract::extract)
//!   catches these, logs them, and returns an *empty* result so the caller
//!   exits cleanly with a "no text extracted" message and writes no files.
//!
//! * **Everything else** (`RecognitionFailed`, `OutputWriteFailed`,
//!   `InvalidConfig`) — returned as `Err(ExtractError)` and treated as fatal.
//!
//! Callers that drive the pipeline stages directly (via [`crate::pipeline`])
//! receive the conversion-domain variants as ordinary `Err` values; only the
//! top-level driver applies the catch-and-empty policy.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the pdf2ara library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// pdfium returned an error while rendering a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Install pdfium or point PDFIUM_LIB_PATH at a directory containing\n\
libpdfium for your platform."
    )]
    PdfiumBindingFailed(String),

    // ── OCR errors ────────────────────────────────────────────────────────
    /// The tesseract engine failed on a page.
    ///
    /// Recognition failures are fatal: the run terminates rather than
    /// producing a document with silently missing pages.
    #[error(
        "OCR failed on page {page}: {detail}\n\
Check that tesseract is installed and the requested language data is\n\
present (e.g. apt install tesseract-ocr tesseract-ocr-ara)."
    )]
    RecognitionFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not write one of the output files.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// Whether this error belongs to the conversion (rasterisation) domain.
    ///
    /// Conversion-domain failures abort the run by yielding an empty result
    /// rather than propagating; see the module docs.
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            ExtractError::FileNotFound { .. }
                | ExtractError::PermissionDenied { .. }
                | ExtractError::NotAPdf { .. }
                | ExtractError::CorruptPdf { .. }
                | ExtractError::RasterisationFailed { .. }
                | ExtractError::PdfiumBindingFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_failure_display() {
        let e = ExtractError::RecognitionFailed {
            page: 3,
            detail: "engine crashed".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 3"), "got: {msg}");
        assert!(msg.contains("engine crashed"));
    }

    #[test]
    fn not_a_pdf_display_shows_magic() {
        let e = ExtractError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"hell",
        };
        assert!(e.to_string().contains("notes.txt"));
    }

    #[test]
    fn rasterisation_display_is_one_based() {
        let e = ExtractError::RasterisationFailed {
            page: 7,
            detail: "bitmap allocation failed".into(),
        };
        assert!(e.to_string().contains("page 7"));
    }

    #[test]
    fn conversion_domain_classification() {
        let conv = ExtractError::CorruptPdf {
            path: PathBuf::from("x.pdf"),
            detail: "bad xref".into(),
        };
        assert!(conv.is_conversion_error());

        let fatal = ExtractError::RecognitionFailed {
            page: 1,
            detail: "boom".into(),
        };
        assert!(!fatal.is_conversion_error());

        let io = ExtractError::OutputWriteFailed {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(!io.is_conversion_error());
    }
}
