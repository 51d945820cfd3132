//! Section & field extraction for scanned safety-form text.
//!
//! Converts the raw text of one document into a structured outline of
//! sections and typed field candidates, plus a quick summary (title,
//! description, element/frequency guesses, confidence score). The whole
//! pass is pure, synchronous computation: no I/O, no shared state, and no
//! error paths — every malformed input degrades to an explicit default.

pub mod fields;
pub mod patterns;
pub mod sections;
pub mod title;

use corpath_core::{AnalysisSummary, DetectedField, Frequency};
use tracing::{debug, info};

/// Output of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub analysis: AnalysisSummary,
    pub fields: Vec<DetectedField>,
}

const MAX_CONFIDENCE: u32 = 95;
const EMPTY_CONFIDENCE: u8 = 30;
const FIELD_COUNT_BONUS_CAP: u32 = 20;

/// Title keyword → COR element number, used as a quick cross-signal for the
/// classifier. Checked in order; first hit wins.
const ELEMENT_HINTS: &[(&str, u8)] = &[
    ("hazard", 2),
    ("protective equipment", 6),
    ("ppe", 6),
    ("maintenance", 7),
    ("training", 8),
    ("orientation", 8),
    ("toolbox", 8),
    ("inspection", 9),
    ("incident", 10),
    ("investigation", 10),
    ("near miss", 10),
    ("emergency", 11),
    ("evacuation", 11),
    ("policy", 1),
];

/// Frequency keywords, most specific first.
const FREQUENCY_HINTS: &[(&str, Frequency)] = &[
    ("pre-shift", Frequency::PreUse),
    ("pre-use", Frequency::PreUse),
    ("pre use", Frequency::PreUse),
    ("daily", Frequency::Daily),
    ("weekly", Frequency::Weekly),
    ("monthly", Frequency::Monthly),
    ("quarterly", Frequency::Quarterly),
    ("annual", Frequency::Annually),
];

/// Analyze one document's extracted text.
///
/// Deterministic and idempotent: identical `(text, page_count, file_name)`
/// inputs produce identical output.
pub fn analyze_document(text: &str, page_count: usize, file_name: &str) -> DocumentAnalysis {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let form_title = title::detect_title(&lines, file_name);
    let mut scan = sections::detect_sections(&lines);
    let synthesized_default = scan.header_lines.is_empty();
    let fields = fields::detect_fields(&lines, &mut scan);

    let confidence_score = confidence_score(&fields);
    let suggested_cor_element = guess_element(&form_title);
    let suggested_frequency = guess_frequency(&form_title, text);

    let mut processing_notes = vec![format!(
        "Scanned {} line(s) across {} page(s)",
        lines.len(),
        page_count
    )];
    if synthesized_default {
        processing_notes.push(format!(
            "No section headers found; fields grouped under \"{}\"",
            sections::DEFAULT_SECTION_TITLE
        ));
    } else {
        processing_notes.push(format!("Detected {} section(s)", scan.sections.len()));
    }
    processing_notes.push(format!("Detected {} field candidate(s)", fields.len()));

    debug!(
        sections = scan.sections.len(),
        fields = fields.len(),
        "extraction pass complete"
    );
    info!(
        title = %form_title,
        confidence = confidence_score,
        "analyzed document"
    );

    let analysis = AnalysisSummary {
        form_title,
        form_description: describe(file_name, page_count),
        suggested_cor_element,
        suggested_frequency,
        detected_sections: scan.sections,
        processing_notes,
        confidence_score,
    };

    DocumentAnalysis { analysis, fields }
}

/// Overall score: average field confidence plus a small bonus for field
/// count, capped below full certainty. Zero fields floor at 30.
fn confidence_score(fields: &[DetectedField]) -> u8 {
    if fields.is_empty() {
        return EMPTY_CONFIDENCE;
    }
    let avg = fields
        .iter()
        .map(|f| f.type_confidence as f64)
        .sum::<f64>()
        / fields.len() as f64;
    let bonus = (fields.len() as u32 * 2).min(FIELD_COUNT_BONUS_CAP);
    ((avg + bonus as f64).round() as u32).min(MAX_CONFIDENCE) as u8
}

fn describe(file_name: &str, page_count: usize) -> String {
    if page_count == 1 {
        format!("Imported from {file_name} (1 page)")
    } else {
        format!("Imported from {file_name} ({page_count} pages)")
    }
}

fn guess_element(form_title: &str) -> Option<u8> {
    let title_lc = form_title.to_lowercase();
    ELEMENT_HINTS
        .iter()
        .find(|(kw, _)| title_lc.contains(kw))
        .map(|(_, el)| *el)
}

fn guess_frequency(form_title: &str, text: &str) -> Option<Frequency> {
    let title_lc = form_title.to_lowercase();
    if let Some((_, f)) = FREQUENCY_HINTS.iter().find(|(kw, _)| title_lc.contains(kw)) {
        return Some(*f);
    }
    let text_lc = text.to_lowercase();
    FREQUENCY_HINTS
        .iter()
        .find(|(kw, _)| text_lc.contains(kw))
        .map(|(_, f)| *f)
}
