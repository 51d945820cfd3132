//! Form title detection.

/// Keywords that mark a line as a likely form title.
const TITLE_KEYWORDS: &[&str] = &["form", "checklist", "report", "inspection"];

/// Scan at most the first 10 non-empty lines for a title candidate, falling
/// back to a title derived from the file name.
pub fn detect_title(lines: &[&str], file_name: &str) -> String {
    for line in lines.iter().take(10) {
        if is_title_line(line) {
            return line.trim().to_string();
        }
    }
    title_from_file_name(file_name)
}

fn is_title_line(line: &str) -> bool {
    if is_all_caps(line) {
        return true;
    }
    let lc = line.to_lowercase();
    TITLE_KEYWORDS.iter().any(|kw| lc.contains(kw))
}

pub(crate) fn is_all_caps(line: &str) -> bool {
    line.chars().any(|c| c.is_alphabetic()) && !line.chars().any(|c| c.is_lowercase())
}

/// Derive a title-cased string from a file name: extension dropped,
/// separators replaced by spaces.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let words: Vec<String> = stem
        .split(['-', '_', '.', ' '])
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect();
    if words.is_empty() {
        "Untitled Form".to_string()
    } else {
        words.join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_line_becomes_title() {
        let lines = ["SITE SAFETY ORIENTATION", "Name: ____"];
        assert_eq!(detect_title(&lines, "x.pdf"), "SITE SAFETY ORIENTATION");
    }

    #[test]
    fn keyword_line_becomes_title() {
        let lines = ["Weekly Toolbox Checklist", "Name: ____"];
        assert_eq!(detect_title(&lines, "x.pdf"), "Weekly Toolbox Checklist");
    }

    #[test]
    fn scan_window_stops_after_ten_lines() {
        let mut lines = vec!["plain line"; 10];
        lines.push("LATE ALL CAPS TITLE");
        assert_eq!(detect_title(&lines, "daily-log.pdf"), "Daily Log");
    }

    #[test]
    fn file_name_fallback_title_cases_separators() {
        assert_eq!(detect_title(&[], "night_audit_form.pdf"), "Night Audit Form");
        assert_eq!(title_from_file_name("crane-pre-use.PDF"), "Crane Pre Use");
        assert_eq!(title_from_file_name("scan 0041.pdf"), "Scan 0041");
    }

    #[test]
    fn empty_file_name_yields_placeholder() {
        assert_eq!(title_from_file_name(""), "Untitled Form");
        assert_eq!(title_from_file_name("...."), "Untitled Form");
    }

    #[test]
    fn all_caps_requires_alphabetic_content() {
        assert!(!is_all_caps("_____"));
        assert!(!is_all_caps("1234"));
        assert!(is_all_caps("PPE LOG 2024"));
    }
}
