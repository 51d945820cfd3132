//! Field-type pattern table.
//!
//! The table is a first-match, not a best-match, structure: declaration
//! order determines classification precedence (`date` is tried before
//! `number`, `signature` before `worker_select`). Reordering entries changes
//! classification outcomes, so the order below is load-bearing.
//!
//! Patterns are matched against pre-lowercased label and context text.

use corpath_core::FieldType;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct TypePatterns {
    pub field_type: FieldType,
    pub patterns: Vec<Regex>,
}

fn group(field_type: FieldType, patterns: &[&str]) -> TypePatterns {
    TypePatterns {
        field_type,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("static field pattern"))
            .collect(),
    }
}

/// Ordered field-type classification table.
pub static FIELD_TYPE_PATTERNS: Lazy<Vec<TypePatterns>> = Lazy::new(|| {
    vec![
        group(
            FieldType::Date,
            &[
                r"\bdate\b",
                r"\bd\.?o\.?b\.?\b",
                r"\b(?:mm|dd|yyyy)\b",
                r"\bexpir(?:y|ation)\b",
            ],
        ),
        group(FieldType::Time, &[r"\btime\b", r"\bam/pm\b", r"\bo'clock\b"]),
        group(
            FieldType::Signature,
            &[
                r"signature",
                r"\bsign(?:ed)?\s+(?:here|by|off)\b",
                r"\binitials?\b",
            ],
        ),
        group(
            FieldType::YesNo,
            &[r"yes\s*/\s*no(?:[^/]|$)", r"\by\s*/\s*n(?:[^/]|$)", r"\(y/n\)"],
        ),
        group(
            FieldType::YesNoNa,
            &[r"yes\s*/\s*no\s*/\s*n/?a", r"\by\s*/\s*n\s*/\s*n/?a"],
        ),
        group(
            FieldType::Checkbox,
            &[
                r"check\s*all",
                r"select\s+all",
                r"\btick\b",
                r"check\s*box",
                r"☐|□",
            ],
        ),
        group(
            FieldType::Number,
            &[
                r"number\s+of",
                r"\bqty\b",
                r"\bquantity\b",
                r"\bcount\b",
                r"\btotal\b",
                r"\bamount\b",
                r"\bage\b",
                r"#",
            ],
        ),
        group(
            FieldType::Phone,
            &[
                r"\bphone\b",
                r"\bcell\b",
                r"\bmobile\b",
                r"\bfax\b",
                r"\btel(?:ephone)?\b",
            ],
        ),
        group(FieldType::Email, &[r"e-?mail"]),
        group(
            FieldType::Dropdown,
            &[
                r"select\s+one",
                r"choose\s+(?:one|from)",
                r"\bdropdown\b",
                r"pick\s+one",
            ],
        ),
        group(
            FieldType::Textarea,
            &[
                r"\bcomments?\b",
                r"\bdescription\b",
                r"\bdescribe\b",
                r"\bdetails?\b",
                r"\bexplain\b",
                r"\bnotes?\b",
                r"\bsummary\b",
                r"\bobservations?\b",
            ],
        ),
        group(
            FieldType::Photo,
            &[
                r"\bphoto\b",
                r"\bpicture\b",
                r"\bimage\b",
                r"attach\s+(?:a\s+)?(?:photo|picture|image)",
            ],
        ),
        group(
            FieldType::Gps,
            &[
                r"\bgps\b",
                r"\bcoordinates?\b",
                r"\blatitude\b",
                r"\blongitude\b",
            ],
        ),
        group(
            FieldType::WorkerSelect,
            &[
                r"\bemployee\b",
                r"\bworker\b",
                r"\bsupervisor\b",
                r"\bforeman\b",
                r"completed\s+by",
                r"inspected\s+by",
            ],
        ),
        group(
            FieldType::EquipmentSelect,
            &[
                r"\bequipment\b",
                r"\bmachine(?:ry)?\b",
                r"\bvehicle\b",
                r"\btool\b",
                r"unit\s*(?:no\b|number\b|#)",
            ],
        ),
        group(
            FieldType::Rating,
            &[
                r"\brating\b",
                r"\brate\b",
                r"\bscore\b",
                r"scale\s+of",
                r"1\s*(?:-|to)\s*(?:5|10)\b",
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn label_type(label: &str) -> Option<FieldType> {
        let lc = label.to_lowercase();
        FIELD_TYPE_PATTERNS
            .iter()
            .find(|g| g.patterns.iter().any(|p| p.is_match(&lc)))
            .map(|g| g.field_type)
    }

    #[test]
    fn table_declares_sixteen_types_in_order() {
        let order: Vec<FieldType> = FIELD_TYPE_PATTERNS.iter().map(|g| g.field_type).collect();
        assert_eq!(
            order,
            vec![
                FieldType::Date,
                FieldType::Time,
                FieldType::Signature,
                FieldType::YesNo,
                FieldType::YesNoNa,
                FieldType::Checkbox,
                FieldType::Number,
                FieldType::Phone,
                FieldType::Email,
                FieldType::Dropdown,
                FieldType::Textarea,
                FieldType::Photo,
                FieldType::Gps,
                FieldType::WorkerSelect,
                FieldType::EquipmentSelect,
                FieldType::Rating,
            ]
        );
    }

    #[test]
    fn signature_wins_over_worker_select() {
        // "supervisor" also matches worker_select, but signature is declared
        // earlier in the table.
        assert_eq!(label_type("Supervisor Signature:"), Some(FieldType::Signature));
    }

    #[test]
    fn date_wins_over_number() {
        assert_eq!(label_type("Date of Inspection"), Some(FieldType::Date));
    }

    #[test]
    fn phone_number_is_phone_not_number() {
        assert_eq!(label_type("Phone Number:"), Some(FieldType::Phone));
    }

    #[test]
    fn yes_no_na_not_shadowed_by_yes_no() {
        assert_eq!(label_type("Guard rails in place? Yes/No/NA"), Some(FieldType::YesNoNa));
        assert_eq!(label_type("Permit on site? Yes/No"), Some(FieldType::YesNo));
    }

    #[test]
    fn unmatched_label_has_no_entry() {
        assert_eq!(label_type("Project"), None);
    }
}
