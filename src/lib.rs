//! # pdf2ara
//!
//! Extract Arabic text from scanned PDFs via OCR, producing plain-text,
//! Markdown, and HTML renditions.
//!
//! ## Why this crate?
//!
//! Text-layer extractors (pdftotext, pdf-extract) return nothing useful for
//! scanned Arabic books — the pages are images, and even where a text layer
//! exists it is usually mojibake from a legacy encoding. This crate
//! rasterises each page and runs tesseract's Arabic model over it, then
//! fixes up the two places where Arabic output goes wrong downstream:
//! glyph joining (shaping) and right-to-left display order (bidi), both
//! applied only to the variant aimed at terminals that cannot do it
//! themselves.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path and %PDF magic
//!  ├─ 2. Render   rasterise pages via pdfium at 300 DPI
//!  ├─ 3. OCR      tesseract, lang=ara, page segmentation mode 6
//!  ├─ 4. Lines    trim, drop sub-threshold noise, shape+reorder display copy
//!  ├─ 5. Collapse squeeze blank-line runs to single separators
//!  └─ 6. Output   <base>_processing.txt, <base>_reading.txt,
//!                 <base>_legacy_terminal.txt, <base>.md, <base>.html
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2ara::{extract_to_files, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     match extract_to_files("book.pdf", &config)? {
//!         Some(set) => println!("wrote {}", set.markdown.display()),
//!         None => println!("No text extracted."),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2ara` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2ara = { version = "0.3", default-features = false }
//! ```
//!
//! ## External engines
//!
//! Two native engines must be present at runtime: a pdfium shared library
//! (system path or `PDFIUM_LIB_PATH`) and the `tesseract` binary with the
//! `ara` language data installed.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod templates;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::ExtractError;
pub use extract::{extract, extract_to_files, title_for, write_outputs};
pub use output::{ExtractionOutput, ExtractionStats, OutputSet};
pub use progress::{ExtractionProgress, NoopProgress};
