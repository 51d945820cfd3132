//! Vertical card display for analysis results.
//!
//! Renders one document analysis as a grouped, human-readable card:
//! summary, sections, field candidates, and ranked element suggestions.

use corpath_classify::{questions_for, ELEMENTS};
use corpath_core::{CorElementSuggestion, DetectedField};
use corpath_extract::DocumentAnalysis;

const MAX_LIST_ITEMS: usize = 10;

// ── Public API ──

/// Print one analyzed document as a vertical card.
pub fn print_analysis_card(result: &DocumentAnalysis, suggestions: &[CorElementSuggestion]) {
    let analysis = &result.analysis;

    println!("=== {} ===", analysis.form_title);
    if !analysis.form_description.is_empty() {
        println!("{}", analysis.form_description);
    }
    println!();

    println!("Summary");
    println!("  {:<22} {}", "confidence", analysis.confidence_score);
    if let Some(el) = analysis.suggested_cor_element {
        println!("  {:<22} element {}", "title hint", el);
    }
    if let Some(freq) = analysis.suggested_frequency {
        println!("  {:<22} {:?}", "frequency", freq);
    }
    for note in &analysis.processing_notes {
        println!("  {:<22} {}", "note", note);
    }
    println!();

    println!("Sections ({})", analysis.detected_sections.len());
    for section in &analysis.detected_sections {
        println!(
            "  {}. {} ({} fields)",
            section.order + 1,
            section.title,
            section.field_ids.len()
        );
    }
    println!();

    print_fields(&result.fields);
    print_suggestions(suggestions);
}

/// Print the full element taxonomy with its reference questions.
pub fn print_elements() {
    for el in &ELEMENTS {
        println!("{:>2}. {}", el.number, el.name);
        for q in questions_for(el.number) {
            println!("      {:<5} {}", q.id, q.text);
        }
    }
}

// ── Section rendering ──

fn print_fields(fields: &[DetectedField]) {
    println!("Fields ({})", fields.len());
    let show = fields.len().min(MAX_LIST_ITEMS);
    for field in &fields[..show] {
        print!(
            "  {:<30} {:<12} {}%",
            field.effective_label(),
            field.suggested_type.as_str(),
            field.type_confidence
        );
        if let Some(options) = &field.suggested_options {
            print!("  [{} options]", options.len());
        }
        println!();
    }
    if fields.len() > MAX_LIST_ITEMS {
        println!("  ... and {} more", fields.len() - MAX_LIST_ITEMS);
    }
    println!();
}

fn print_suggestions(suggestions: &[CorElementSuggestion]) {
    println!("Element Suggestions ({})", suggestions.len());
    for s in suggestions {
        println!(
            "  [{:>2}] {:<38} {}%",
            s.element_number, s.element_name, s.confidence
        );
        println!("       {}", s.reasoning);
        for q in &s.related_questions {
            println!("       {:<5} {} ({}%)", q.question_id, q.question, q.relevance_score);
        }
    }
}
