//! Section outline detection.
//!
//! One pass over the trimmed, non-empty lines builds an ordered list of
//! sections. If no header-like line exists anywhere, a single default
//! "Form Fields" section is synthesized at order 0 so every field always has
//! a valid section to land in.

use corpath_core::DetectedSection;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::title::is_all_caps;

pub const DEFAULT_SECTION_TITLE: &str = "Form Fields";

const MIN_HEADER_LEN: usize = 3;
const MAX_HEADER_LEN: usize = 100;

/// `Section 3:` / `PART II -` / `Step 1.` prefix, with the numbering token
/// and trailing separator.
static SECTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:section|part|step)\s*(?:\d+|[ivxlcdm]+\b)?\s*[:.\-]?\s*")
        .expect("static section prefix pattern")
});

static WORD_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:section|part|step)\b").expect("static word prefix pattern"));

/// `1. GENERAL INFORMATION` — a leading number then a capital. A trailing
/// colon marks a numbered field label instead, so those are excluded here.
static NUMBERED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+[A-Z][^:]*$").expect("static numbered header pattern"));

/// `IV. Emergency Contacts`
static ROMAN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[IVXLCDM]+[.)]\s+\S").expect("static roman header pattern"));

/// Result of the section pass: the outline plus the line indices that were
/// consumed as headers (the field pass skips them).
pub struct SectionScan {
    pub sections: Vec<DetectedSection>,
    pub header_lines: Vec<usize>,
}

pub fn is_section_header(line: &str) -> bool {
    let len = line.chars().count();
    if len < MIN_HEADER_LEN || len > MAX_HEADER_LEN {
        return false;
    }
    WORD_PREFIX.is_match(line)
        || NUMBERED_HEADER.is_match(line)
        || is_all_caps(line)
        || ROMAN_HEADER.is_match(line)
}

/// Strip a `section/part/step <num>[:.-]` prefix from a header line. Lines
/// without that prefix pass through unchanged; a prefix-only line falls back
/// to the original trimmed text.
pub fn strip_section_prefix(line: &str) -> String {
    let trimmed = line.trim();
    if !WORD_PREFIX.is_match(trimmed) {
        return trimmed.to_string();
    }
    let stripped = SECTION_PREFIX.replace(trimmed, "").trim().to_string();
    if stripped.is_empty() {
        trimmed.to_string()
    } else {
        stripped
    }
}

/// Scan all lines once and build the section outline.
pub fn detect_sections(lines: &[&str]) -> SectionScan {
    let mut sections: Vec<DetectedSection> = Vec::new();
    let mut header_lines = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !is_section_header(line) {
            continue;
        }
        let order = sections.len();
        sections.push(DetectedSection {
            id: format!("section_{order}"),
            title: strip_section_prefix(line),
            order,
            field_ids: Vec::new(),
        });
        header_lines.push(i);
    }

    if sections.is_empty() {
        sections.push(DetectedSection {
            id: "section_0".to_string(),
            title: DEFAULT_SECTION_TITLE.to_string(),
            order: 0,
            field_ids: Vec::new(),
        });
    }

    SectionScan {
        sections,
        header_lines,
    }
}

/// Fuzzy substring match between a header's stripped title and the detected
/// section titles: case-insensitive, either-direction containment.
pub fn resolve_section_index(sections: &[DetectedSection], header_line: &str) -> Option<usize> {
    let needle = strip_section_prefix(header_line).to_lowercase();
    if needle.is_empty() {
        return None;
    }
    sections.iter().position(|s| {
        let title = s.title.to_lowercase();
        title.contains(&needle) || needle.contains(&title)
    })
}
