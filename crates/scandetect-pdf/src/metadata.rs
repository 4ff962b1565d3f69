//! Document metadata extraction from the trailer Info dictionary

use lopdf::{Document, Object};
use scandetect_types::DocumentMetadata;

/// Read `/Producer` and `/Creator` from the Info dictionary.
///
/// A missing Info dictionary or missing entries normalize to empty strings;
/// keyword matching treats absence and emptiness the same way.
pub fn extract_metadata(doc: &Document) -> DocumentMetadata {
    let info = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| deref_dictionary(doc, obj));

    match info {
        Some(dict) => DocumentMetadata {
            producer: info_string(doc, dict, b"Producer"),
            creator: info_string(doc, dict, b"Creator"),
        },
        None => DocumentMetadata::default(),
    }
}

fn info_string(doc: &Document, dict: &lopdf::Dictionary, key: &[u8]) -> String {
    match dict.get(key) {
        Ok(obj) => object_to_string(doc, obj).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a lopdf::Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_to_string(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).trim().to_string()),
        Object::Reference(reference) => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_string(doc, inner)),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed (common for Korean
/// producer strings), lossy UTF-8/PDFDocEncoding otherwise.
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units).trim().to_string()
    } else {
        String::from_utf8_lossy(bytes).trim().to_string()
    }
}
