//! Configuration types for the OCR extraction pipeline.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share a config between the library entry points, serialise the
//! interesting parts for logging, and diff two runs to understand why their
//! outputs differ.

use crate::error::ExtractError;
use crate::progress::ExtractionProgress;
use std::fmt;
use std::sync::Arc;

/// Configuration for one extraction run.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2ara::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .dpi(300)
///     .min_line_length(8)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–600. Default: 300.
    ///
    /// 300 DPI is the classic sweet spot for tesseract on book scans; Arabic
    /// glyphs lose their dots and diacritics below ~200 DPI. Raising it past
    /// 400 mostly costs memory and time for no recognition gain.
    pub dpi: u32,

    /// Tesseract language model. Default: `"ara"`.
    pub language: String,

    /// Tesseract page segmentation mode. Default: 6 (assume a single uniform
    /// block of text), which suits full-page book scans with no columns.
    pub page_seg_mode: u32,

    /// Minimum line length in characters, measured after trimming. Default: 8.
    ///
    /// Shorter lines are treated as OCR noise (page numbers, specks, ornament
    /// fragments) and replaced with empty strings rather than removed, so the
    /// raw and display line sequences keep identical length and page-separator
    /// positions.
    pub min_line_length: usize,

    /// Strip Unicode bidi control characters from the display text. Default: false.
    ///
    /// The reshaped/reordered terminal text can carry explicit bidi marks
    /// (U+200E..U+202E) that confuse copy-paste into other tools. Off by
    /// default to keep the legacy-terminal output byte-faithful.
    pub strip_bidi_marks: bool,

    /// Optional per-page progress callback. The CLI installs one that prints
    /// plain status lines to stdout.
    pub progress: Option<Arc<dyn ExtractionProgress>>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            language: "ara".to_string(),
            page_seg_mode: 6,
            min_line_length: 8,
            strip_bidi_marks: false,
            progress: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("dpi", &self.dpi)
            .field("language", &self.language)
            .field("page_seg_mode", &self.page_seg_mode)
            .field("min_line_length", &self.min_line_length)
            .field("strip_bidi_marks", &self.strip_bidi_marks)
            .field(
                "progress",
                &self.progress.as_ref().map(|_| "<dyn ExtractionProgress>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.config.language = lang.into();
        self
    }

    pub fn page_seg_mode(mut self, psm: u32) -> Self {
        self.config.page_seg_mode = psm.min(13);
        self
    }

    pub fn min_line_length(mut self, chars: usize) -> Self {
        self.config.min_line_length = chars;
        self
    }

    pub fn strip_bidi_marks(mut self, v: bool) -> Self {
        self.config.strip_bidi_marks = v;
        self
    }

    pub fn progress(mut self, cb: Arc<dyn ExtractionProgress>) -> Self {
        self.config.progress = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(ExtractError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.language.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "Language must not be empty".into(),
            ));
        }
        if c.page_seg_mode > 13 {
            return Err(ExtractError::InvalidConfig(format!(
                "Page segmentation mode must be 0–13, got {}",
                c.page_seg_mode
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_parameters() {
        let config = ExtractionConfig::default();
        assert_eq!(config.dpi, 300);
        assert_eq!(config.language, "ara");
        assert_eq!(config.page_seg_mode, 6);
        assert_eq!(config.min_line_length, 8);
        assert!(!config.strip_bidi_marks);
        assert!(config.progress.is_none());
    }

    #[test]
    fn builder_clamps_dpi() {
        let config = ExtractionConfig::builder().dpi(10_000).build().unwrap();
        assert_eq!(config.dpi, 600);

        let config = ExtractionConfig::builder().dpi(1).build().unwrap();
        assert_eq!(config.dpi, 72);
    }

    #[test]
    fn builder_clamps_psm() {
        let config = ExtractionConfig::builder().page_seg_mode(99).build().unwrap();
        assert_eq!(config.page_seg_mode, 13);
    }

    #[test]
    fn empty_language_rejected() {
        let result = ExtractionConfig::builder().language("").build();
        assert!(matches!(result, Err(ExtractError::InvalidConfig(_))));
    }

    #[test]
    fn debug_does_not_require_callback_debug() {
        let config = ExtractionConfig::builder()
            .progress(Arc::new(crate::progress::NoopProgress))
            .build()
            .unwrap();
        let dbg = format!("{config:?}");
        assert!(dbg.contains("ExtractionProgress"));
    }
}
