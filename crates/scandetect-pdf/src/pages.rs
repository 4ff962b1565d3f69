//! Per-page fact collection: text length, image references, font names
//!
//! One pass over the page tree in page order. A page whose text extraction
//! fails is logged and substituted with an empty page so a single corrupt
//! page does not block classification of the rest of the document.

use std::collections::BTreeSet;

use lopdf::{Document, Object, ObjectId};
use scandetect_types::PageFacts;
use tracing::warn;

use crate::error::AnalysisError;

/// Collect one `PageFacts` per page, plus the count of unreadable pages that
/// were substituted with `PageFacts::empty`.
pub fn collect_page_facts(doc: &Document) -> (Vec<PageFacts>, u32) {
    let mut facts = Vec::new();
    let mut skipped = 0u32;

    for (number, page_id) in doc.get_pages() {
        match read_page(doc, number, page_id) {
            Ok(page) => facts.push(page),
            Err(error) => {
                warn!(page = number, %error, "treating unreadable page as empty");
                skipped += 1;
                facts.push(PageFacts::empty(number));
            }
        }
    }

    (facts, skipped)
}

fn read_page(doc: &Document, number: u32, page_id: ObjectId) -> Result<PageFacts, AnalysisError> {
    let text = doc
        .extract_text(&[number])
        .map_err(|e| AnalysisError::PageUnreadable {
            page: number,
            detail: e.to_string(),
        })?;

    Ok(PageFacts {
        page_number: number,
        // Trim strips leading/trailing whitespace only; internal whitespace
        // still counts toward the length.
        text_length: text.trim().chars().count(),
        image_count: count_page_images(doc, page_id),
        font_names: page_font_names(doc, page_id),
    })
}

/// Count XObject resources on the page whose stream subtype is `Image`.
///
/// `/Resources` is an inheritable page-tree attribute and scanner output
/// often hangs it off the parent `Pages` node, so inherited resource
/// dictionaries are consulted alongside the page's own — the same walk
/// lopdf's font lookup performs. No de-duplication by content: an asset
/// reused on several pages counts once per page that references it.
fn count_page_images(doc: &Document, page_id: ObjectId) -> usize {
    let (direct, inherited) = doc.get_page_resources(page_id);

    let mut count = direct.map_or(0, |resources| count_image_xobjects(doc, resources));
    for resources_id in inherited {
        if let Ok(resources) = doc.get_dictionary(resources_id) {
            count += count_image_xobjects(doc, resources);
        }
    }
    count
}

fn count_image_xobjects(doc: &Document, resources: &lopdf::Dictionary) -> usize {
    let xobjects = match resources.get(b"XObject") {
        Ok(obj) => match deref_dictionary(doc, obj) {
            Some(dict) => dict,
            None => return 0,
        },
        Err(_) => return 0,
    };

    xobjects
        .iter()
        .filter(|(_, obj)| is_image_xobject(doc, obj))
        .count()
}

fn is_image_xobject(doc: &Document, obj: &Object) -> bool {
    let stream = match obj {
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Stream(stream)) => stream,
            _ => return false,
        },
        Object::Stream(stream) => stream,
        _ => return false,
    };

    matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
}

/// Font names used on the page, preferring `/BaseFont` over the resource key.
fn page_font_names(doc: &Document, page_id: ObjectId) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for (resource_name, font) in doc.get_page_fonts(page_id) {
        let name = match font.get(b"BaseFont") {
            Ok(Object::Name(base)) => String::from_utf8_lossy(base).to_string(),
            _ => String::from_utf8_lossy(&resource_name).to_string(),
        };
        names.insert(name);
    }
    names
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a lopdf::Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}
