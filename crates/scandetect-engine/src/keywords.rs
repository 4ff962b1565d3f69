//! Keyword tables for producer/creator matching
//!
//! Both tables are matched case-insensitively as plain substrings, no
//! tokenization. The two sets are disjoint by construction; the cascade checks
//! scanner signals first, so a term must never appear in both.

/// Scanner hardware brands, capture software, and generic scan terms.
pub const SCANNER_KEYWORDS: &[&str] = &[
    "scan",
    "scanner",
    "scanning",
    "scanned",
    "ocr",
    "image",
    "capture",
    "digitiz",
    // Scanner hardware brands
    "canon",
    "epson",
    "hp",
    "xerox",
    "ricoh",
    "konica",
    "brother",
    "fujitsu",
    "sindoh",
    "kyocera",
    // Scan capture software
    "adobe scan",
    "camscanner",
    "scansnap",
    "paperport",
    "abbyy",
    "readiris",
    "omnipage",
    // Korean terms seen in court-auction scans
    "스캔",
    "스캐너",
    "복사기",
];

/// Office suites, PDF converters, and typesetting systems.
pub const DOCUMENT_SOFTWARE_KEYWORDS: &[&str] = &[
    // Office suites
    "microsoft",
    "word",
    "excel",
    "powerpoint",
    "office",
    "libreoffice",
    "openoffice",
    "pages",
    "numbers",
    // PDF generators
    "acrobat",
    "pdfcreator",
    "cutepdf",
    "primopdf",
    "ghostscript",
    "wkhtmltopdf",
    "chrome",
    // Hancom office (Korean documents)
    "hancom",
    "hwp",
    "한글",
    "한컴",
    // Typesetting
    "latex",
    "tex",
    "writer",
];

/// Case-insensitive substring match of any keyword in `field`.
pub fn contains_any(field: &str, keywords: &[&str]) -> bool {
    let lower = field.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}
