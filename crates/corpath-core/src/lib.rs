pub mod slug;
pub mod types;

pub use types::{
    AnalysisSummary, CorElementSuggestion, DetectedField, DetectedSection, FieldOption, FieldType,
    Frequency, RelatedQuestion, ValidationRules,
};
