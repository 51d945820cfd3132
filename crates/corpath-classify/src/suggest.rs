//! Ranked COR-element suggestion scoring.
//!
//! Scores the combined textual evidence of one analyzed document against
//! every element's keyword profile and returns the strongest candidates with
//! human-auditable reasoning. Weighted keyword matching, not best-match
//! retrieval: several elements can legitimately score high for one form.

use std::cmp::Reverse;

use corpath_core::{AnalysisSummary, CorElementSuggestion, DetectedField, RelatedQuestion};
use tracing::debug;

use crate::elements::{element, ELEMENTS};
use crate::questions::{questions_for, QuestionCategory};

const PRIMARY_WEIGHT: u32 = 30;
const SECONDARY_WEIGHT: u32 = 10;
const FORM_TYPE_WEIGHT: u32 = 25;
const CROSS_SIGNAL_WEIGHT: u32 = 20;

/// Suggestions below this confidence are not emitted.
const SUGGESTION_FLOOR: u8 = 20;
/// Ranked confidences never claim full certainty.
const CONFIDENCE_CEILING: u32 = 95;
const MAX_SUGGESTIONS: usize = 5;
const MAX_REASONS: usize = 3;

const QUESTION_WORD_WEIGHT: u32 = 15;
const EVIDENCE_WEIGHT: u32 = 20;
const DOCUMENTATION_BONUS: u32 = 10;
/// Related questions must score strictly above this to be kept.
const QUESTION_FLOOR: u32 = 20;
const MAX_RELATED_QUESTIONS: usize = 5;

/// Threshold for the standalone single-element predicate.
const MATCH_THRESHOLD: u8 = 30;

/// Standalone single-element check, independent of the ranked pipeline.
///
/// Uses primary/secondary weights only (no form-type or cross-signal
/// component) and its own threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMatch {
    pub matches: bool,
    pub confidence: u8,
    pub reasons: Vec<String>,
}

/// Lowercase combined evidence: title, full text, and field labels
/// (preferring user overrides).
fn combined_text(analysis: &AnalysisSummary, fields: &[DetectedField], full_text: &str) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.effective_label()).collect();
    format!("{} {} {}", analysis.form_title, full_text, labels.join(" ")).to_lowercase()
}

/// Rank the COR elements this document most likely supports.
///
/// Returns at most five suggestions, sorted by confidence descending, each
/// with confidence in [20, 95] and up to three recorded reasons.
pub fn suggest_elements(
    analysis: &AnalysisSummary,
    fields: &[DetectedField],
    full_text: &str,
) -> Vec<CorElementSuggestion> {
    let combined = combined_text(analysis, fields, full_text);
    let title_lc = analysis.form_title.to_lowercase();

    let mut suggestions: Vec<CorElementSuggestion> = Vec::new();
    for el in &ELEMENTS {
        let mut score: u32 = 0;
        let mut reasons: Vec<String> = Vec::new();

        for kw in el.primary {
            if combined.contains(kw) {
                score += PRIMARY_WEIGHT;
                reasons.push(format!("matched keyword \"{kw}\""));
            }
        }
        // Secondary keywords corroborate but are too generic to cite.
        for kw in el.secondary {
            if combined.contains(kw) {
                score += SECONDARY_WEIGHT;
            }
        }
        for ft in el.form_types {
            if title_lc.contains(ft) {
                score += FORM_TYPE_WEIGHT;
                reasons.push(format!("form title resembles a {ft} form"));
            }
        }
        if analysis.suggested_cor_element == Some(el.number) {
            score += CROSS_SIGNAL_WEIGHT;
            reasons.push("title scan independently pointed at this element".to_string());
        }

        let confidence = score.min(CONFIDENCE_CEILING) as u8;
        if confidence < SUGGESTION_FLOOR {
            continue;
        }

        let reasoning = if reasons.is_empty() {
            format!("General keyword overlap with {}", el.name)
        } else {
            reasons
                .iter()
                .take(MAX_REASONS)
                .cloned()
                .collect::<Vec<_>>()
                .join("; ")
        };

        suggestions.push(CorElementSuggestion {
            element_number: el.number,
            element_name: el.name.to_string(),
            confidence,
            reasoning,
            related_questions: related_questions(el.number, &combined),
        });
    }

    // Stable sort: ties keep element-number order.
    suggestions.sort_by_key(|s| Reverse(s.confidence));
    suggestions.truncate(MAX_SUGGESTIONS);
    debug!(
        candidates = suggestions.len(),
        top = suggestions.first().map(|s| s.element_number),
        "ranked element suggestions"
    );
    suggestions
}

/// Score an element's audit questions against the combined text and return
/// the most relevant ones.
fn related_questions(element_number: u8, combined: &str) -> Vec<RelatedQuestion> {
    let mut related: Vec<RelatedQuestion> = Vec::new();

    for q in questions_for(element_number) {
        let mut score: u32 = 0;

        let text_lc = q.text.to_lowercase();
        let mut words: Vec<&str> = text_lc
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.chars().count() > 4)
            .collect();
        words.sort_unstable();
        words.dedup();
        for word in words {
            if combined.contains(word) {
                score += QUESTION_WORD_WEIGHT;
            }
        }

        for ev in q.evidence {
            if combined.contains(ev) {
                score += EVIDENCE_WEIGHT;
            }
        }

        if q.category == QuestionCategory::Documentation {
            score += DOCUMENTATION_BONUS;
        }

        if score > QUESTION_FLOOR {
            related.push(RelatedQuestion {
                question_id: q.id.to_string(),
                question: q.text.to_string(),
                relevance_score: score.min(100) as u8,
            });
        }
    }

    related.sort_by_key(|q| Reverse(q.relevance_score));
    related.truncate(MAX_RELATED_QUESTIONS);
    related
}

/// Check one element in isolation against raw text fields.
///
/// Unknown element numbers produce a non-match with a descriptive reason
/// rather than an error.
pub fn matches_element(number: u8, title: &str, text: &str, labels: &[&str]) -> ElementMatch {
    let Some(el) = element(number) else {
        return ElementMatch {
            matches: false,
            confidence: 0,
            reasons: vec![format!("unknown element number {number}")],
        };
    };

    let combined = format!("{} {} {}", title, text, labels.join(" ")).to_lowercase();
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    for kw in el.primary {
        if combined.contains(kw) {
            score += PRIMARY_WEIGHT;
            reasons.push(format!("matched keyword \"{kw}\""));
        }
    }
    for kw in el.secondary {
        if combined.contains(kw) {
            score += SECONDARY_WEIGHT;
        }
    }

    let confidence = score.min(100) as u8;
    ElementMatch {
        matches: confidence >= MATCH_THRESHOLD,
        confidence,
        reasons,
    }
}
