//! Identifier normalisation for detected fields and options.
//!
//! Two flavours with deliberately different rules:
//!
//! - [`option_value`]: lowercase with whitespace runs collapsed to a single
//!   underscore. Punctuation is kept so `"N/A"` → `"n/a"` stays
//!   distinguishable from `"na"`.
//! - [`field_code`]: lowercase with every non-alphanumeric run collapsed to a
//!   single underscore and leading/trailing underscores trimmed, suitable as
//!   a stable machine key.
//!
//! Both are idempotent: applying them to their own output changes nothing.

/// Derive an option value from its label: lowercase, whitespace → underscore.
pub fn option_value(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_ws = false;
    for ch in label.trim().chars() {
        if ch.is_whitespace() {
            in_ws = true;
            continue;
        }
        if in_ws && !out.is_empty() {
            out.push('_');
        }
        in_ws = false;
        out.extend(ch.to_lowercase());
    }
    out
}

/// Derive a field code from a label: lowercase, non-alphanumeric runs →
/// single underscore, trimmed.
pub fn field_code(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_value_lowercases_and_underscores() {
        assert_eq!(option_value("Yes"), "yes");
        assert_eq!(option_value("Not Applicable"), "not_applicable");
        assert_eq!(option_value("Fair   Condition"), "fair_condition");
    }

    #[test]
    fn option_value_keeps_punctuation() {
        assert_eq!(option_value("N/A"), "n/a");
        assert_eq!(option_value("Pass / Fail"), "pass_/_fail");
    }

    #[test]
    fn option_value_trims_surrounding_whitespace() {
        assert_eq!(option_value("  Yes  "), "yes");
    }

    #[test]
    fn option_value_idempotent() {
        for input in ["Yes", "Not Applicable", "N/A", "  Mixed  Case "] {
            let once = option_value(input);
            assert_eq!(option_value(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn field_code_strips_punctuation() {
        assert_eq!(field_code("Supervisor Signature:"), "supervisor_signature");
        assert_eq!(field_code("Date of Inspection"), "date_of_inspection");
        assert_eq!(field_code("Unit # (if known)"), "unit_if_known");
    }

    #[test]
    fn field_code_collapses_separator_runs() {
        assert_eq!(field_code("a -- b"), "a_b");
        assert_eq!(field_code("__already__coded__"), "already_coded");
    }

    #[test]
    fn field_code_empty_for_symbol_only_input() {
        assert_eq!(field_code("***"), "");
        assert_eq!(field_code(""), "");
    }

    #[test]
    fn field_code_idempotent() {
        for input in ["Supervisor Signature:", "Unit #", "plain"] {
            let once = field_code(input);
            assert_eq!(field_code(&once), once, "not idempotent for {input:?}");
        }
    }
}
