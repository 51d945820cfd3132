//! Shared value types for the form-analysis pipeline.
//!
//! Everything here is a transient computation result: one analysis run
//! produces fresh values and nothing is mutated across calls. Persistence
//! and user overrides live in the downstream layer.

use serde::{Deserialize, Serialize};

use crate::slug;

/// Digital form field types the extractor can suggest.
///
/// Serialised as snake_case strings (`yes_no_na`, `worker_select`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Date,
    Time,
    Signature,
    YesNo,
    YesNoNa,
    Checkbox,
    Radio,
    Dropdown,
    Number,
    Phone,
    Email,
    Photo,
    Gps,
    WorkerSelect,
    EquipmentSelect,
    Rating,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Time => "time",
            Self::Signature => "signature",
            Self::YesNo => "yes_no",
            Self::YesNoNa => "yes_no_na",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Dropdown => "dropdown",
            Self::Number => "number",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Photo => "photo",
            Self::Gps => "gps",
            Self::WorkerSelect => "worker_select",
            Self::EquipmentSelect => "equipment_select",
            Self::Rating => "rating",
        }
    }
}

/// How often a form is expected to be filled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    PreUse,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreUse => "pre_use",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
        }
    }
}

/// An enumerated choice harvested from bullet/checkbox lines.
///
/// `value` is derived from `label` and stable for a given label input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    /// Build an option from a human-readable label.
    pub fn from_label(label: &str) -> Self {
        Self {
            value: slug::option_value(label),
            label: label.to_string(),
        }
    }
}

/// Validation rules attached to a suggested field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// An ordered grouping of fields discovered during the line scan.
///
/// Sections are append-only for the duration of one analysis pass: field
/// codes are pushed onto `field_ids` as fields are discovered after the
/// header, and no section is ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSection {
    pub id: String,
    pub title: String,
    pub order: usize,
    pub field_ids: Vec<String>,
}

/// A typed field candidate produced from one matched label line.
///
/// Immutable after creation within a single analysis run. The `user_*`
/// overrides are populated by the downstream review layer, never by the
/// extractor itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedField {
    /// Unique within one analysis run; collisions fall back to `field_<n>`.
    pub field_code: String,
    pub detected_label: String,
    pub suggested_type: FieldType,
    /// 0–100.
    pub type_confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_options: Option<Vec<FieldOption>>,
    pub suggested_validation: ValidationRules,
    pub section_label: String,
    /// Index into the `detected_sections` array of the same run.
    pub section_order: usize,
    pub field_order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<FieldType>,
}

impl DetectedField {
    /// The label the classifier should score: user override when present,
    /// otherwise the detected one.
    pub fn effective_label(&self) -> &str {
        self.user_label.as_deref().unwrap_or(&self.detected_label)
    }
}

/// Aggregate summary of one extraction pass. Pure computed output with no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub form_title: String,
    pub form_description: String,
    /// Quick title-based guess at the COR element (1–14), used by the
    /// classifier as a cross-signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_cor_element: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_frequency: Option<Frequency>,
    pub detected_sections: Vec<DetectedSection>,
    pub processing_notes: Vec<String>,
    /// 30–95.
    pub confidence_score: u8,
}

/// An audit question linked to a suggested COR element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedQuestion {
    pub question_id: String,
    pub question: String,
    /// 0–100.
    pub relevance_score: u8,
}

/// One ranked COR-element suggestion with human-auditable justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorElementSuggestion {
    /// 1–14.
    pub element_number: u8,
    pub element_name: String,
    /// 0–100, clamped.
    pub confidence: u8,
    pub reasoning: String,
    pub related_questions: Vec<RelatedQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serialises_snake_case() {
        let json = serde_json::to_string(&FieldType::YesNoNa).unwrap();
        assert_eq!(json, "\"yes_no_na\"");
        let json = serde_json::to_string(&FieldType::WorkerSelect).unwrap();
        assert_eq!(json, "\"worker_select\"");
    }

    #[test]
    fn field_type_as_str_matches_serde_name() {
        let all = [
            FieldType::Text,
            FieldType::Textarea,
            FieldType::Date,
            FieldType::Time,
            FieldType::Signature,
            FieldType::YesNo,
            FieldType::YesNoNa,
            FieldType::Checkbox,
            FieldType::Radio,
            FieldType::Dropdown,
            FieldType::Number,
            FieldType::Phone,
            FieldType::Email,
            FieldType::Photo,
            FieldType::Gps,
            FieldType::WorkerSelect,
            FieldType::EquipmentSelect,
            FieldType::Rating,
        ];
        for ty in all {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn option_from_label_derives_stable_value() {
        let a = FieldOption::from_label("Not Applicable");
        let b = FieldOption::from_label("Not Applicable");
        assert_eq!(a, b);
        assert_eq!(a.value, "not_applicable");
        assert_eq!(a.label, "Not Applicable");
    }

    #[test]
    fn effective_label_prefers_user_override() {
        let mut field = DetectedField {
            field_code: "site_name".to_string(),
            detected_label: "Site Name".to_string(),
            suggested_type: FieldType::Text,
            type_confidence: 50,
            suggested_options: None,
            suggested_validation: ValidationRules::default(),
            section_label: "Form Fields".to_string(),
            section_order: 0,
            field_order: 0,
            user_label: None,
            user_type: None,
        };
        assert_eq!(field.effective_label(), "Site Name");
        field.user_label = Some("Project Site".to_string());
        assert_eq!(field.effective_label(), "Project Site");
    }

    #[test]
    fn validation_rules_omit_empty_fields_in_json() {
        let rules = ValidationRules::default();
        assert_eq!(serde_json::to_string(&rules).unwrap(), "{}");

        let rules = ValidationRules {
            required: true,
            max_length: Some(255),
            ..Default::default()
        };
        let json = serde_json::to_string(&rules).unwrap();
        assert!(json.contains("\"required\":true"));
        assert!(json.contains("\"max_length\":255"));
        assert!(!json.contains("pattern"));
    }
}
