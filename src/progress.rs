//! Progress-callback trait for per-page extraction events.
//!
//! Inject an `Arc<dyn ExtractionProgress>` via
//! [`crate::config::ExtractionConfigBuilder::progress`] to receive events as
//! the pipeline works through the document. The CLI uses this to print the
//! plain per-page status lines; library embedders can forward the events to
//! whatever reporting channel the host application uses, without the library
//! knowing anything about it.
//!
//! All methods have default no-op implementations so implementors only
//! override what they care about. The pipeline is strictly sequential, so
//! events for page *n* always arrive before any event for page *n + 1*.

/// Called by the extraction pipeline as it processes the document.
pub trait ExtractionProgress: Send + Sync {
    /// Called once before rasterisation begins.
    ///
    /// # Arguments
    /// * `dpi` — the resolution pages will be rendered at
    fn on_rasterise_start(&self, dpi: u32) {
        let _ = dpi;
    }

    /// Called once after rasterisation, before the first OCR call.
    ///
    /// # Arguments
    /// * `total_pages` — number of page images produced
    fn on_ocr_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after the OCR engine returns for a page, before line filtering.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `raw_text`    — the unfiltered recognised text for the page
    fn on_page_recognized(&self, page_num: usize, total_pages: usize, raw_text: &str) {
        let _ = (page_num, total_pages, raw_text);
    }

    /// Called when a page has been filtered into the line buffer.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages
    /// * `kept_lines`  — lines on this page that passed the length filter
    fn on_page_complete(&self, page_num: usize, total_pages: usize, kept_lines: usize) {
        let _ = (page_num, total_pages, kept_lines);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgress;

impl ExtractionProgress for NoopProgress {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct TrackingProgress {
        recognized: Arc<AtomicUsize>,
        completed: Arc<AtomicUsize>,
        kept_total: Arc<AtomicUsize>,
    }

    impl ExtractionProgress for TrackingProgress {
        fn on_page_recognized(&self, _page: usize, _total: usize, _raw: &str) {
            self.recognized.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_complete(&self, _page: usize, _total: usize, kept: usize) {
            self.completed.fetch_add(1, Ordering::SeqCst);
            self.kept_total.fetch_add(kept, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgress;
        cb.on_rasterise_start(300);
        cb.on_ocr_start(5);
        cb.on_page_recognized(1, 5, "some text");
        cb.on_page_complete(1, 5, 12);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingProgress {
            recognized: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
            kept_total: Arc::new(AtomicUsize::new(0)),
        };

        tracker.on_rasterise_start(300);
        tracker.on_ocr_start(2);
        tracker.on_page_recognized(1, 2, "page one");
        tracker.on_page_complete(1, 2, 4);
        tracker.on_page_recognized(2, 2, "page two");
        tracker.on_page_complete(2, 2, 3);

        assert_eq!(tracker.recognized.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completed.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.kept_total.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ExtractionProgress> = Arc::new(NoopProgress);
        cb.on_ocr_start(10);
        cb.on_page_complete(1, 10, 0);
    }
}
