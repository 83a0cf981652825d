//! Pipeline stages for scanned-PDF text extraction.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap an
//! implementation (e.g. a different OCR backend) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ ocr ──▶ lines ──▶ postprocess
//! (path)    (pdfium)  (tesseract) (filter+shape) (collapse blanks)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path (existence, readability,
//!    `%PDF` magic bytes)
//! 2. [`render`] — rasterise every page to an image at the configured DPI
//! 3. [`ocr`]    — recognise each page image as newline-delimited text lines
//! 4. [`lines`]  — trim and length-filter lines, building parallel raw and
//!    display sequences with page separators; [`shape`] supplies the
//!    reshaped + bidi-reordered display form
//! 5. [`postprocess`] — collapse blank-line runs in the assembled documents
//!
//! The stages run strictly in order, each consuming the previous stage's
//! full output. There is no pipelining and no concurrency: the only slow
//! parts are the external pdfium and tesseract calls, and both block until
//! complete.

pub mod input;
pub mod lines;
pub mod ocr;
pub mod postprocess;
pub mod render;
pub mod shape;
