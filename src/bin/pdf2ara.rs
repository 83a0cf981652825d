//! CLI binary for pdf2ara.
//!
//! A thin shim over the library crate: maps the two flags onto
//! `ExtractionConfig`, installs a stdout progress printer, and reports the
//! written files. All diagnostics the user is meant to read go to stdout as
//! plain lines; tracing output (off unless `--verbose`) goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2ara::{extract_to_files, ExtractionConfig, ExtractionProgress};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract with defaults (300 DPI, lang=ara)
  pdf2ara book.pdf

  # Dump the raw per-page OCR text while extracting
  pdf2ara book.pdf --debug

OUTPUT FILES (written next to the input):
  <base>_processing.txt       raw OCR text
  <base>_reading.txt          raw OCR text (same content)
  <base>_legacy_terminal.txt  reshaped + bidi-reordered text
  <base>.md                   raw text in an RTL Markdown wrapper
  <base>.html                 raw text as a standalone RTL HTML page

REQUIREMENTS:
  tesseract with Arabic data:  apt install tesseract-ocr tesseract-ocr-ara
  pdfium shared library:       system path, or PDFIUM_LIB_PATH=/dir/with/libpdfium

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Directory containing the pdfium shared library
  PDF2ARA_DEBUG     Same as --debug
  PDF2ARA_VERBOSE   Same as --verbose
"#;

/// Extract Arabic text from a scanned PDF via OCR.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2ara",
    version,
    about = "Extract Arabic text from a scanned PDF via OCR",
    long_about = "Rasterise every page of a scanned PDF, recognise the Arabic text with \
tesseract, and write plain-text, Markdown, and HTML renditions next to the input file.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the scanned PDF.
    #[arg(default_value = "MYPDF.pdf")]
    input: PathBuf,

    /// Dump the raw OCR text of every page to stdout.
    #[arg(long, env = "PDF2ARA_DEBUG")]
    debug: bool,

    /// Enable DEBUG-level tracing logs (stderr).
    #[arg(short, long, env = "PDF2ARA_VERBOSE")]
    verbose: bool,
}

/// Stdout progress printer — the plain status lines a batch operator expects.
struct ConsoleProgress {
    debug: bool,
}

impl ExtractionProgress for ConsoleProgress {
    fn on_rasterise_start(&self, dpi: u32) {
        println!("Converting PDF pages to images (DPI={dpi})...");
    }

    fn on_ocr_start(&self, total_pages: usize) {
        println!("OCR extracting {total_pages} pages...");
    }

    fn on_page_recognized(&self, page_num: usize, _total_pages: usize, raw_text: &str) {
        if self.debug {
            println!("\n--- RAW OCR PAGE {page_num} ---\n{raw_text}\n----------------------\n");
        }
    }

    fn on_page_complete(&self, page_num: usize, total_pages: usize, _kept_lines: usize) {
        println!("Processed page {page_num}/{total_pages}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library logs are suppressed by default; progress lines on stdout are
    // the user-facing feedback. --verbose opens the tracing firehose.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = ExtractionConfig::builder()
        .progress(Arc::new(ConsoleProgress { debug: cli.debug })
            as Arc<dyn ExtractionProgress>)
        .build()
        .context("Invalid configuration")?;

    // ── Run extraction ───────────────────────────────────────────────────
    match extract_to_files(&cli.input, &config).context("Extraction failed")? {
        Some(set) => {
            println!("\nDone! Files saved as:");
            println!("  {} (raw)", set.processing.display());
            println!("  {} (raw)", set.reading.display());
            println!("  {} (reshaped/bidi)", set.legacy_terminal.display());
            println!("  {}", set.markdown.display());
            println!("  {}", set.html.display());
        }
        None => {
            println!("No text extracted. Exiting.");
        }
    }

    Ok(())
}
