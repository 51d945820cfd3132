//! Field candidate detection, type classification, and option harvesting.

use corpath_core::{slug, DetectedField, FieldOption, FieldType, ValidationRules};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::patterns::FIELD_TYPE_PATTERNS;
use crate::sections::{self, SectionScan};

/// Lines of context (label line inclusive) consulted for type detection and
/// option harvesting.
const CONTEXT_WINDOW: usize = 5;

const MIN_LABEL_LEN: usize = 2;
const MAX_LABEL_LEN: usize = 150;
/// Labels ending in `?` beyond this length are treated as instructions, not
/// field labels.
const MAX_QUESTION_LABEL_LEN: usize = 80;

const MAX_OPTION_LEN: usize = 100;

/// Label-extraction patterns, tried in order; first match wins.
static LABEL_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // "Label: ____"
        Regex::new(r"^(.+?):\s*_{3,}\s*$").expect("static label pattern"),
        // "Label ____"
        Regex::new(r"^(.+?)\s+_{3,}\s*$").expect("static label pattern"),
        // "Label:"
        Regex::new(r"^(.+?):\s*$").expect("static label pattern"),
        // "3. Label" (numbered, without a trailing colon)
        Regex::new(r"^\d+[.)]\s*(.+?)\s*$").expect("static label pattern"),
    ]
});

/// Extract a candidate label from a line, or `None` if no pattern matches or
/// the candidate fails the length heuristics.
pub fn extract_label(line: &str) -> Option<String> {
    for pattern in LABEL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            let label = caps.get(1)?.as_str().trim();
            let len = label.chars().count();
            if len < MIN_LABEL_LEN || len > MAX_LABEL_LEN {
                return None;
            }
            if label.ends_with('?') && len > MAX_QUESTION_LABEL_LEN {
                return None;
            }
            return Some(label.to_string());
        }
    }
    None
}

/// Classify a label against the ordered pattern table.
///
/// Returns the type, a confidence (85 when the label itself matched, 65 when
/// only the surrounding context did, 50 for the `text` fallback), and any
/// options harvested from the context for choice-like types.
pub fn detect_field_type(
    label: &str,
    context: &[&str],
) -> (FieldType, u8, Option<Vec<FieldOption>>) {
    let label_lc = label.to_lowercase();
    let context_lc = context.join(" ").to_lowercase();

    for group in FIELD_TYPE_PATTERNS.iter() {
        let label_hit = group.patterns.iter().any(|p| p.is_match(&label_lc));
        let context_hit = label_hit || group.patterns.iter().any(|p| p.is_match(&context_lc));
        if !context_hit {
            continue;
        }
        let confidence = if label_hit { 85 } else { 65 };

        let mut field_type = group.field_type;
        let mut options = None;
        if matches!(field_type, FieldType::Dropdown | FieldType::Checkbox) {
            let harvested = harvest_options(context);
            if !harvested.is_empty() {
                field_type = if harvested.len() <= 5 {
                    FieldType::Radio
                } else {
                    FieldType::Dropdown
                };
                options = Some(harvested);
            }
        }
        return (field_type, confidence, options);
    }

    (FieldType::Text, 50, None)
}

/// Harvest enumerated options from bullet/checkbox context lines.
pub fn harvest_options(context: &[&str]) -> Vec<FieldOption> {
    let mut options = Vec::new();
    for line in context {
        let trimmed = line.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else { continue };
        if !matches!(first, '[' | '(' | '□' | '☐' | '•' | '-' | '*') {
            continue;
        }
        let mut rest = chars.as_str().to_string();

        // Drop the matching close of a checkbox bracket, e.g. "[ ] Yes".
        let close = match first {
            '[' => Some(']'),
            '(' => Some(')'),
            _ => None,
        };
        if let Some(close) = close
            && let Some(pos) = rest.find(close)
        {
            rest.remove(pos);
        }

        let mut label = rest.trim();
        // Strip a checked marker ("[x] Yes") when it stands alone.
        if let Some(stripped) = strip_checked_marker(label) {
            label = stripped;
        }
        let label = label.trim();
        if !label.is_empty() && label.chars().count() < MAX_OPTION_LEN {
            options.push(FieldOption::from_label(label));
        }
    }
    options
}

fn strip_checked_marker(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if !matches!(first, 'x' | 'X' | '✓' | '✔') {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Attach validation rules derived from the resolved type and the label text.
pub fn generate_validation(field_type: FieldType, label: &str) -> ValidationRules {
    let mut rules = ValidationRules::default();
    match field_type {
        FieldType::Email => {
            rules.pattern = Some(r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string());
            rules.custom_message = Some("Enter a valid email address".to_string());
        }
        FieldType::Phone => {
            rules.pattern = Some(r"^[0-9+()\s.\-]{7,}$".to_string());
            rules.custom_message = Some("Enter a valid phone number".to_string());
        }
        FieldType::Number => rules.min_value = Some(0.0),
        FieldType::Textarea => rules.max_length = Some(1000),
        FieldType::Text => rules.max_length = Some(255),
        _ => {}
    }
    let label_lc = label.to_lowercase();
    rules.required = label.contains('*') || label_lc.contains("required");
    rules
}

/// Second pass over the lines: skip header lines (re-resolving the current
/// section on each), turn every label-like line into a typed field, and
/// append field codes to the owning section.
pub fn detect_fields(lines: &[&str], scan: &mut SectionScan) -> Vec<DetectedField> {
    let mut fields: Vec<DetectedField> = Vec::new();
    let mut current_section = 0usize;
    let mut field_order = 0usize;

    for (i, line) in lines.iter().enumerate() {
        if scan.header_lines.contains(&i) {
            if let Some(idx) = sections::resolve_section_index(&scan.sections, line) {
                current_section = idx;
            }
            field_order = 0;
            continue;
        }

        let Some(label) = extract_label(line) else {
            continue;
        };

        let end = (i + CONTEXT_WINDOW).min(lines.len());
        let context = &lines[i..end];

        let (field_type, confidence, options) = detect_field_type(&label, context);
        let validation = generate_validation(field_type, &label);

        let mut code = slug::field_code(&label);
        if code.is_empty() || fields.iter().any(|f| f.field_code == code) {
            code = format!("field_{}", fields.len());
        }

        let section = &mut scan.sections[current_section];
        section.field_ids.push(code.clone());

        fields.push(DetectedField {
            field_code: code,
            detected_label: label,
            suggested_type: field_type,
            type_confidence: confidence,
            suggested_options: options,
            suggested_validation: validation,
            section_label: section.title.clone(),
            section_order: current_section,
            field_order,
            user_label: None,
            user_type: None,
        });
        field_order += 1;
    }

    fields
}
