//! Shared types for PDF scan detection
//!
//! This crate holds the data model passed between the extraction layer and the
//! scoring engine: per-document metadata, per-page facts, document-level
//! aggregates, and the final classification record.

pub mod types;

pub use types::{
    ClassificationResult, DocumentAnalysis, DocumentMetadata, FontSummary, PageAggregate,
    PageFacts, PdfType, MIN_TEXT_LEN,
};
