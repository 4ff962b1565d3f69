//! Ordered decision cascade for scan classification
//!
//! The cascade is an explicit list of (predicate, outcome) pairs evaluated in
//! order; the first matching rule fixes the score and verdict. Keeping the
//! rules as data makes the precedence contract visible and testable on its
//! own.

use crate::keywords;
use scandetect_types::{DocumentMetadata, FontSummary, PageAggregate, PdfType};

/// A page averaging fewer characters than this is treated as textless.
const NEAR_ZERO_TEXT_DENSITY: f64 = 10.0;

pub(crate) struct RuleContext<'a> {
    pub metadata: &'a DocumentMetadata,
    pub pages: &'a PageAggregate,
    pub fonts: &'a FontSummary,
}

pub(crate) struct Rule {
    pub is_scanned: bool,
    pub score: u8,
    pub reason: &'static str,
    applies: fn(&RuleContext<'_>) -> bool,
}

fn producer_names_scanner(ctx: &RuleContext<'_>) -> bool {
    keywords::contains_any(&ctx.metadata.producer, keywords::SCANNER_KEYWORDS)
}

fn creator_names_scanner(ctx: &RuleContext<'_>) -> bool {
    keywords::contains_any(&ctx.metadata.creator, keywords::SCANNER_KEYWORDS)
}

fn fontless_with_images(ctx: &RuleContext<'_>) -> bool {
    !ctx.fonts.has_fonts && ctx.pages.total_images > 0
}

fn every_page_image_only(ctx: &RuleContext<'_>) -> bool {
    // Exact comparison: the ratio is derived from integer counts, so 1.0 is
    // reached precisely when every page is image-only.
    ctx.pages.total_pages > 0 && ctx.pages.image_only_ratio == 1.0
}

fn near_zero_text_with_images(ctx: &RuleContext<'_>) -> bool {
    ctx.pages.avg_text_per_page < NEAR_ZERO_TEXT_DENSITY && ctx.pages.total_images > 0
}

fn authored_by_document_software(ctx: &RuleContext<'_>) -> bool {
    keywords::contains_any(&ctx.metadata.creator, keywords::DOCUMENT_SOFTWARE_KEYWORDS)
        || keywords::contains_any(&ctx.metadata.producer, keywords::DOCUMENT_SOFTWARE_KEYWORDS)
}

fn embedded_fonts_present(ctx: &RuleContext<'_>) -> bool {
    ctx.fonts.unique_font_count > 0
}

fn always(_ctx: &RuleContext<'_>) -> bool {
    true
}

/// Residual outcome when no other rule fires: neither a scan signal nor a
/// clear digital-native signal.
const RESIDUAL: Rule = Rule {
    is_scanned: false,
    score: 20,
    reason: "no definitive scan indicator found",
    applies: always,
};

/// The cascade, in precedence order. Scan signals come before the
/// digital-native sub-classification, so a producer string matching both
/// keyword tables is classified as a scan.
const CASCADE: &[Rule] = &[
    Rule {
        is_scanned: true,
        score: 100,
        reason: "producer identifies a scanning device",
        applies: producer_names_scanner,
    },
    Rule {
        is_scanned: true,
        score: 100,
        reason: "creator identifies scanning software",
        applies: creator_names_scanner,
    },
    Rule {
        is_scanned: true,
        score: 100,
        reason: "no embedded fonts but images present",
        applies: fontless_with_images,
    },
    Rule {
        is_scanned: true,
        score: 100,
        reason: "every page is image-only",
        applies: every_page_image_only,
    },
    Rule {
        is_scanned: true,
        score: 100,
        reason: "near-zero text density with images present",
        applies: near_zero_text_with_images,
    },
    Rule {
        is_scanned: false,
        score: 0,
        reason: "produced by document-authoring software",
        applies: authored_by_document_software,
    },
    Rule {
        is_scanned: false,
        score: 0,
        reason: "embedded font information present",
        applies: embedded_fonts_present,
    },
    RESIDUAL,
];

/// First matching rule wins; the residual catch-all guarantees a match.
pub(crate) fn evaluate(ctx: &RuleContext<'_>) -> &'static Rule {
    CASCADE
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .unwrap_or(&RESIDUAL)
}

/// Page-composition label, independent of the score.
pub(crate) fn assign_pdf_type(is_scanned: bool, pages: &PageAggregate) -> PdfType {
    match (is_scanned, pages.text_pages, pages.image_only_pages) {
        (true, 0, _) => PdfType::PureScan,
        (true, _, _) => PdfType::OcrProcessedScan,
        (false, _, 0) => PdfType::DigitalNative,
        (false, _, _) => PdfType::Mixed,
    }
}
