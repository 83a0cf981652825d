//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! ## Why render size is computed per page
//!
//! Tesseract accuracy depends on physical resolution, not pixel count, so we
//! translate the configured DPI into a per-page pixel size from the page's
//! dimensions in PDF points (1 pt = 1/72 in). Book scans are usually uniform,
//! but mixed-size documents (inserts, fold-outs) render correctly this way
//! instead of being stretched to a fixed width.
//!
//! ## Library binding
//!
//! pdfium is a shared library resolved at runtime: `PDFIUM_LIB_PATH` wins if
//! set, otherwise the system library path is searched. Binding failures are
//! conversion-domain errors — the driver catches them and exits cleanly.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rasterise all pages of a PDF into images, in page order.
pub fn rasterize_pages(
    pdf_path: &Path,
    config: &ExtractionConfig,
) -> Result<Vec<DynamicImage>, ExtractError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| ExtractError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: format!("{:?}", e),
        })?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let mut images = Vec::with_capacity(total_pages);

    for (idx, page) in pages.iter().enumerate() {
        let scale = config.dpi as f32 / 72.0;
        let width_px = (page.width().value * scale).round().max(1.0) as i32;
        let height_px = (page.height().value * scale).round().max(1.0) as i32;

        let render_config = PdfRenderConfig::new()
            .set_target_width(width_px)
            .set_maximum_height(height_px);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| ExtractError::RasterisationFailed {
                    page: idx + 1,
                    detail: format!("{:?}", e),
                })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} → {}x{} px",
            idx + 1,
            image.width(),
            image.height()
        );

        images.push(image);
    }

    Ok(images)
}

/// Bind to the pdfium shared library.
///
/// `PDFIUM_LIB_PATH` points at a directory containing the platform library;
/// without it the system loader paths are searched.
fn bind_pdfium() -> Result<Pdfium, ExtractError> {
    let bindings = match std::env::var_os("PDFIUM_LIB_PATH") {
        Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
            &PathBuf::from(dir),
        )),
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| ExtractError::PdfiumBindingFailed(format!("{:?}", e)))?;

    Ok(Pdfium::new(bindings))
}
