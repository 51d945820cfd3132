//! COR-element classification for analyzed safety forms.
//!
//! Takes the output of an extraction pass (plus the raw document text) and
//! ranks which of the fourteen COR audit elements the document most likely
//! provides evidence for. Pure keyword scoring over static reference data;
//! no I/O and no model inference.

pub mod elements;
pub mod questions;
pub mod suggest;

pub use elements::{element, CorElement, ELEMENTS, ELEMENT_COUNT};
pub use questions::{questions_for, AuditQuestion, QuestionCategory, AUDIT_QUESTIONS};
pub use suggest::{matches_element, suggest_elements, ElementMatch};
