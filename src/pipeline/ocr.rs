//! OCR recognition: page image → newline-delimited text via tesseract.
//!
//! `rusty-tesseract` drives the tesseract command-line binary, so the engine
//! contract is exactly the classic one: a language model name plus a page
//! segmentation mode. Mode 6 ("assume a single uniform block of text") is
//! what works on full-page Arabic book scans — automatic segmentation tends
//! to shred connected script into spurious columns.
//!
//! The adapter performs no normalisation of the recognised text: case,
//! diacritics, digits, and spacing pass through exactly as the engine
//! produced them. Line filtering is the next stage's job.
//!
//! Each page image is written to a temporary PNG for the engine; PNG because
//! it is lossless — JPEG artefacts around glyph edges measurably hurt
//! recognition of dotted Arabic letters.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;
use tracing::debug;

/// Recognise the text on one rasterised page.
///
/// Returns the engine's raw output: physical text lines delimited by `\n`.
/// Any engine failure is fatal ([`ExtractError::RecognitionFailed`]); there
/// is no retry and no per-page skip — a document with silently missing pages
/// is worse than no document.
pub fn recognize_page(
    page: &DynamicImage,
    config: &ExtractionConfig,
    page_num: usize,
) -> Result<String, ExtractError> {
    let fail = |detail: String| ExtractError::RecognitionFailed {
        page: page_num,
        detail,
    };

    // Hand the page to tesseract through a temp file rather than in-memory
    // pixels: the CLI wants a path, and the file lives only for this call.
    let tmp = tempfile::Builder::new()
        .prefix("pdf2ara-page-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| fail(format!("temp image: {}", e)))?;

    page.save_with_format(tmp.path(), image::ImageFormat::Png)
        .map_err(|e| fail(format!("temp image encode: {}", e)))?;

    let image = Image::from_path(tmp.path()).map_err(|e| fail(e.to_string()))?;

    let args = Args {
        lang: config.language.clone(),
        config_variables: HashMap::new(),
        dpi: Some(config.dpi as i32),
        psm: Some(config.page_seg_mode as i32),
        oem: Some(3),
    };

    let text = rusty_tesseract::image_to_string(&image, &args)
        .map_err(|e| fail(e.to_string()))?;

    debug!(
        "Page {}: recognised {} chars over {} lines",
        page_num,
        text.chars().count(),
        text.lines().count()
    );

    Ok(text)
}
