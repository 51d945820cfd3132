//! PDF text extraction adapter.
//!
//! Thin wrapper over `lopdf` that turns a PDF byte stream into the plain
//! text the extraction pass consumes. Extraction is per-page and
//! best-effort: a page that fails to decode produces a warning, not a hard
//! error, because scanned forms routinely carry broken content streams.

use lopdf::{Document, Object};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read PDF document: {0}")]
    Unreadable(#[from] lopdf::Error),
}

/// Text pulled from one document, with whatever metadata the file carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    pub info: DocumentInfo,
    /// Per-page decode problems, in page order.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: Option<String>,
}

/// Extract the text of every page of a PDF held in memory.
///
/// Fails only when the document itself cannot be parsed; individual page
/// failures degrade to warnings and an empty page.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, PdfError> {
    let doc = Document::load_mem(bytes)?;
    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    let mut warnings = Vec::new();
    for page_no in pages.keys() {
        match doc.extract_text(&[*page_no]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                if !page_text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Err(err) => {
                warn!(page = *page_no, %err, "failed to extract page text");
                warnings.push(format!("page {page_no}: {err}"));
            }
        }
    }

    let info = document_info(&doc);
    debug!(
        page_count,
        bytes = text.len(),
        warnings = warnings.len(),
        "extracted PDF text"
    );

    Ok(ExtractedText {
        text,
        page_count,
        info,
        warnings,
    })
}

/// Read Title and Producer out of the trailer's Info dictionary, if present.
fn document_info(doc: &Document) -> DocumentInfo {
    let Some(dict) = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| match obj {
            Object::Reference(id) => doc.get_dictionary(*id).ok(),
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        })
    else {
        return DocumentInfo::default();
    };

    DocumentInfo {
        title: string_entry(dict, b"Title"),
        producer: string_entry(dict, b"Producer"),
    }
}

fn string_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    let value = dict.get(key).ok()?.as_str().ok()?;
    let text = String::from_utf8_lossy(value).trim().to_string();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    fn one_page_pdf(lines: &[&str], title: Option<&str>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 750.into()]),
        ];
        for line in lines {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(*line)],
            ));
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title),
                "Producer" => Object::string_literal("unit test"),
            });
            doc.trailer.set("Info", info_id);
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize PDF");
        bytes
    }

    #[test]
    fn extracts_text_and_page_count() {
        let bytes = one_page_pdf(&["INSPECTION FORM", "Operator Name:"], None);
        let extracted = extract_text(&bytes).expect("extract");
        assert_eq!(extracted.page_count, 1);
        assert!(extracted.text.contains("INSPECTION FORM"));
        assert!(extracted.text.contains("Operator Name:"));
        assert!(extracted.warnings.is_empty());
    }

    #[test]
    fn reads_info_dictionary_metadata() {
        let bytes = one_page_pdf(&["hello"], Some("Daily Inspection"));
        let extracted = extract_text(&bytes).expect("extract");
        assert_eq!(extracted.info.title.as_deref(), Some("Daily Inspection"));
        assert_eq!(extracted.info.producer.as_deref(), Some("unit test"));
    }

    #[test]
    fn missing_info_dictionary_yields_defaults() {
        let bytes = one_page_pdf(&["hello"], None);
        let extracted = extract_text(&bytes).expect("extract");
        assert_eq!(extracted.info, DocumentInfo::default());
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let result = extract_text(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Unreadable(_))));
    }
}
