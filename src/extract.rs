//! Extraction entry points.
//!
//! [`extract`] runs the full pipeline and returns the two document texts in
//! memory; [`extract_to_files`] additionally writes the five output files
//! next to the input PDF. Both are synchronous — the pipeline is a single
//! forward pass with no concurrency, and the only slow parts (pdfium,
//! tesseract) block until done.
//!
//! ## Failure policy
//!
//! Rasterisation-domain failures (missing file, not a PDF, pdfium errors)
//! are caught here, logged, and turned into an *empty* result: the caller
//! sees the same "no text extracted" outcome as a blank document, and no
//! files are written. OCR engine failures are fatal and propagate as `Err`.
//! An empty result itself is not an error.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::{ExtractionOutput, ExtractionStats, OutputSet};
use crate::pipeline::{input, lines::LineBuffer, ocr, postprocess, render};
use crate::templates;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Run the OCR pipeline over a scanned PDF and return the document texts.
///
/// # Returns
/// `Ok(ExtractionOutput)` — possibly empty; check
/// [`ExtractionOutput::is_empty`] before using the texts.
///
/// # Errors
/// Only OCR engine failures surface as `Err`. Input and rasterisation
/// problems yield an empty output instead (see module docs).
pub fn extract(
    pdf_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let total_start = Instant::now();
    let pdf_path = pdf_path.as_ref();
    info!("Starting extraction: {}", pdf_path.display());

    if let Some(ref cb) = config.progress {
        cb.on_rasterise_start(config.dpi);
    }

    // ── Step 1+2: Resolve input and rasterise pages ──────────────────────
    let render_start = Instant::now();
    let images = match input::resolve_pdf(pdf_path)
        .and_then(|path| render::rasterize_pages(&path, config))
    {
        Ok(images) => images,
        Err(e) => {
            // Conversion-domain failure: abort by returning empty results.
            // The caller detects emptiness and exits cleanly, writing nothing.
            error!("Error converting PDF to images: {}", e);
            return Ok(ExtractionOutput::default());
        }
    };
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    let total_pages = images.len();
    info!("Rendered {} pages in {}ms", total_pages, render_duration_ms);

    if let Some(ref cb) = config.progress {
        cb.on_ocr_start(total_pages);
    }

    // ── Step 3+4: Recognise and filter, page by page ─────────────────────
    let ocr_start = Instant::now();
    let mut buffer = LineBuffer::new();

    for (idx, image) in images.iter().enumerate() {
        let page_num = idx + 1;
        let text = ocr::recognize_page(image, config, page_num)?;

        if let Some(ref cb) = config.progress {
            cb.on_page_recognized(page_num, total_pages, &text);
        }

        let tally = buffer.push_page(&text, config.min_line_length);
        debug!(
            "Page {}: kept {} lines, dropped {}",
            page_num, tally.kept, tally.dropped
        );

        if let Some(ref cb) = config.progress {
            cb.on_page_complete(page_num, total_pages, tally.kept);
        }
    }
    let ocr_duration_ms = ocr_start.elapsed().as_millis() as u64;

    // ── Step 5: Post-process the assembled documents ─────────────────────
    let raw_text = postprocess::collapse_blank_lines(&buffer.raw_text());
    let mut display_text = postprocess::collapse_blank_lines(&buffer.display_text());
    if config.strip_bidi_marks {
        display_text = postprocess::remove_bidi_marks(&display_text);
    }

    let stats = ExtractionStats {
        total_pages,
        kept_lines: buffer.kept_lines(),
        dropped_lines: buffer.dropped_lines(),
        render_duration_ms,
        ocr_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Extraction complete: {} pages, {} lines kept, {}ms total",
        stats.total_pages, stats.kept_lines, stats.total_duration_ms
    );

    Ok(ExtractionOutput {
        raw_text,
        display_text,
        stats,
    })
}

/// Run [`extract`] and write the five output files next to the input PDF.
///
/// Returns `Ok(None)` without touching the filesystem when the extracted
/// raw text is empty or whitespace-only; otherwise returns the paths that
/// were written.
pub fn extract_to_files(
    pdf_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<Option<OutputSet>, ExtractError> {
    let pdf_path = pdf_path.as_ref();
    let output = extract(pdf_path, config)?;

    if output.is_empty() {
        info!("No text extracted from {}", pdf_path.display());
        return Ok(None);
    }

    write_outputs(&output, pdf_path).map(Some)
}

/// Write the five output artifacts for an already-extracted document.
///
/// File writes are independent and non-atomic: a failure mid-way leaves the
/// files written so far in place.
pub fn write_outputs(
    output: &ExtractionOutput,
    pdf_path: &Path,
) -> Result<OutputSet, ExtractError> {
    let set = OutputSet::for_input(pdf_path);
    let title = title_for(pdf_path);

    // Raw OCR text for normal reading — written to both .txt files; the
    // duplicate is inherited behaviour (see OutputSet docs).
    write_file(&set.processing, &output.raw_text)?;
    write_file(&set.reading, &output.raw_text)?;
    // Reshaped/bidi version for terminals without RTL support.
    write_file(&set.legacy_terminal, &output.display_text)?;
    // Markdown and HTML use the raw text (not bidi, not reshaped).
    write_file(
        &set.markdown,
        &templates::markdown_document(&output.raw_text, &title),
    )?;
    write_file(
        &set.html,
        &templates::html_document(&output.raw_text, &title),
    )?;

    info!("Wrote 5 output files for {}", pdf_path.display());
    Ok(set)
}

/// Derive the document title from the input path: the filename without its
/// extension, verbatim.
pub fn title_for(pdf_path: &Path) -> String {
    pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Arabic OCR Output".to_string())
}

fn write_file(path: &Path, content: &str) -> Result<(), ExtractError> {
    std::fs::write(path, content).map_err(|e| ExtractError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_extension_only() {
        assert_eq!(title_for(Path::new("/scans/Report_2024.pdf")), "Report_2024");
        assert_eq!(title_for(Path::new("book.PDF")), "book");
        assert_eq!(title_for(Path::new("archive.2019.pdf")), "archive.2019");
    }

    #[test]
    fn title_falls_back_for_pathological_input() {
        assert_eq!(title_for(Path::new("/")), "Arabic OCR Output");
    }
}
