//! Scan score calculation
//!
//! Pure classification of a PDF as scanned or digital-native from already
//! extracted inputs: document metadata, page statistics, and font presence.
//! No I/O happens here; extraction lives in `scandetect-pdf`.

pub mod keywords;
mod rules;

use scandetect_types::{ClassificationResult, DocumentMetadata, FontSummary, PageAggregate};

/// ScanClassifier entry point
pub struct ScanClassifier;

impl ScanClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a document from its extracted facts.
    ///
    /// Deterministic: identical inputs always produce an identical result.
    /// The score is fixed by the first matching rule of the cascade and is
    /// always one of 0, 20, or 100.
    pub fn classify(
        &self,
        metadata: &DocumentMetadata,
        pages: &PageAggregate,
        fonts: &FontSummary,
    ) -> ClassificationResult {
        let ctx = rules::RuleContext {
            metadata,
            pages,
            fonts,
        };
        let rule = rules::evaluate(&ctx);

        let mut reasons = vec![rule.reason.to_string()];
        if pages.skipped_pages > 0 {
            // Caveat only; skipped pages never change the score.
            reasons.push(format!(
                "{} unreadable page(s) treated as empty",
                pages.skipped_pages
            ));
        }

        let pdf_type = rules::assign_pdf_type(rule.is_scanned, pages);
        ClassificationResult::new(rule.is_scanned, rule.score, pdf_type, reasons)
    }
}

impl Default for ScanClassifier {
    fn default() -> Self {
        Self::new()
    }
}
