use std::collections::BTreeSet;

/// Minimum trimmed character count for a page to count as carrying real text.
///
/// Fixed policy threshold: changing it reclassifies existing documents, so it
/// stays at 10.
pub const MIN_TEXT_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentMetadata {
    pub producer: String, // Info dictionary /Producer, empty when absent
    pub creator: String,  // Info dictionary /Creator, empty when absent
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageFacts {
    pub page_number: u32, // 1-based, lopdf page numbering
    pub text_length: usize, // chars in the trimmed extracted text
    pub image_count: usize, // embedded raster XObjects referenced by the page
    pub font_names: BTreeSet<String>,
}

impl PageFacts {
    /// A page that could not be read is treated as carrying nothing.
    pub fn empty(page_number: u32) -> Self {
        Self {
            page_number,
            text_length: 0,
            image_count: 0,
            font_names: BTreeSet::new(),
        }
    }

    pub fn has_meaningful_text(&self) -> bool {
        self.text_length > MIN_TEXT_LEN
    }

    /// At least one image and no text above the threshold.
    pub fn is_image_only(&self) -> bool {
        self.image_count > 0 && !self.has_meaningful_text()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageAggregate {
    pub total_pages: u32,
    pub text_pages: u32,       // pages with has_meaningful_text
    pub image_only_pages: u32, // pages with images but no meaningful text
    pub total_images: u64,
    pub avg_text_per_page: f64,
    pub image_only_ratio: f64,
    pub skipped_pages: u32, // unreadable pages substituted with PageFacts::empty
}

impl PageAggregate {
    /// Fold per-page facts into document-level statistics.
    ///
    /// `skipped_pages` counts pages the extraction layer replaced with
    /// `PageFacts::empty` after a read failure; those pages are already present
    /// in `pages` and contribute zeroes to every statistic.
    pub fn from_pages(pages: &[PageFacts], skipped_pages: u32) -> Self {
        let total_pages = pages.len() as u32;
        let text_pages = pages.iter().filter(|p| p.has_meaningful_text()).count() as u32;
        let image_only_pages = pages.iter().filter(|p| p.is_image_only()).count() as u32;
        let total_images = pages.iter().map(|p| p.image_count as u64).sum();
        let total_text: usize = pages.iter().map(|p| p.text_length).sum();

        // Empty documents must not divide by zero; both ratios become 0.0.
        let (avg_text_per_page, image_only_ratio) = if total_pages > 0 {
            (
                total_text as f64 / total_pages as f64,
                image_only_pages as f64 / total_pages as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_pages,
            text_pages,
            image_only_pages,
            total_images,
            avg_text_per_page,
            image_only_ratio,
            skipped_pages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FontSummary {
    pub font_names: BTreeSet<String>, // union across all pages
    pub unique_font_count: usize,
    pub has_fonts: bool,
}

impl FontSummary {
    pub fn from_pages(pages: &[PageFacts]) -> Self {
        let font_names: BTreeSet<String> = pages
            .iter()
            .flat_map(|p| p.font_names.iter().cloned())
            .collect();
        let unique_font_count = font_names.len();
        Self {
            font_names,
            unique_font_count,
            has_fonts: unique_font_count > 0,
        }
    }
}

/// Page-composition label, assigned independently of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PdfType {
    PureScan,
    OcrProcessedScan,
    Mixed,
    DigitalNative,
}

impl PdfType {
    pub fn label(&self) -> &'static str {
        match self {
            PdfType::PureScan => "pure scan",
            PdfType::OcrProcessedScan => "OCR-processed scan",
            PdfType::Mixed => "mixed",
            PdfType::DigitalNative => "digital native",
        }
    }
}

impl std::fmt::Display for PdfType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassificationResult {
    pub is_scanned: bool,
    pub scan_score: u8, // always one of 0, 20, 100
    pub confidence: f64, // scan_score / 100.0
    pub pdf_type: PdfType,
    pub reasons: Vec<String>, // deciding rule first, caveats after
}

impl ClassificationResult {
    /// Build a result; `confidence` is derived from the score and never set
    /// independently.
    pub fn new(is_scanned: bool, scan_score: u8, pdf_type: PdfType, reasons: Vec<String>) -> Self {
        debug_assert!(scan_score <= 100);
        debug_assert!(!reasons.is_empty());
        Self {
            is_scanned,
            scan_score,
            confidence: scan_score as f64 / 100.0,
            pdf_type,
            reasons,
        }
    }
}

/// Full per-document report: inputs to the classifier plus its verdict.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentAnalysis {
    pub metadata: DocumentMetadata,
    pub pages: PageAggregate,
    pub fonts: FontSummary,
    pub classification: ClassificationResult,
}
