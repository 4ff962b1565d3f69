//! Scan detection over PDF files
//!
//! This crate opens a PDF with lopdf, extracts document metadata and per-page
//! statistics in a single pass, and hands the aggregates to
//! `scandetect-engine` for classification. One call analyzes one document from
//! start to finish; the document handle is scoped to the call and released on
//! every exit path.

pub mod error;
pub mod metadata;
pub mod pages;

pub use error::AnalysisError;
pub use scandetect_types::DocumentAnalysis;

use std::path::Path;

use lopdf::Document;
use scandetect_engine::ScanClassifier;
use scandetect_types::{FontSummary, PageAggregate};
use tracing::debug;

/// Analyze a PDF on disk.
///
/// Fails with `InvalidInput` before any parsing when the path is missing or
/// not a file, and with `DocumentUnreadable` when lopdf cannot open it. There
/// are no partial results: either a complete `DocumentAnalysis` comes back or
/// an error does.
pub fn analyze_file(path: &Path) -> Result<DocumentAnalysis, AnalysisError> {
    if !path.is_file() {
        return Err(AnalysisError::InvalidInput(path.to_path_buf()));
    }

    let doc =
        Document::load(path).map_err(|e| AnalysisError::DocumentUnreadable(e.to_string()))?;
    analyze_document(&doc)
}

/// Analyze an in-memory PDF.
pub fn analyze_bytes(bytes: &[u8]) -> Result<DocumentAnalysis, AnalysisError> {
    let doc =
        Document::load_mem(bytes).map_err(|e| AnalysisError::DocumentUnreadable(e.to_string()))?;
    analyze_document(&doc)
}

fn analyze_document(doc: &Document) -> Result<DocumentAnalysis, AnalysisError> {
    // An encrypted document parses but cannot be inspected; classify nothing.
    if doc.is_encrypted() {
        return Err(AnalysisError::DocumentUnreadable(
            "document is encrypted".to_string(),
        ));
    }

    let metadata = metadata::extract_metadata(doc);
    let (facts, skipped) = pages::collect_page_facts(doc);
    let pages = PageAggregate::from_pages(&facts, skipped);
    let fonts = FontSummary::from_pages(&facts);

    debug!(
        total_pages = pages.total_pages,
        total_images = pages.total_images,
        unique_fonts = fonts.unique_font_count,
        skipped_pages = skipped,
        "document extracted"
    );

    let classification = ScanClassifier::new().classify(&metadata, &pages, &fonts);

    Ok(DocumentAnalysis {
        metadata,
        pages,
        fonts,
        classification,
    })
}
