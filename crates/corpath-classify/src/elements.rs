//! The 14-element COR audit taxonomy with keyword profiles.
//!
//! Read-only reference data, initialised once and never mutated. Keywords
//! are stored lowercase because they are matched against pre-lowercased
//! combined text.

/// One COR audit element with its keyword profile.
///
/// `primary` keywords are strong evidence (+30 each), `secondary` are weak
/// corroboration (+10, no reason recorded), `form_types` are form-name
/// fragments matched against the document title only (+25).
pub struct CorElement {
    pub number: u8,
    pub name: &'static str,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub form_types: &'static [&'static str],
}

pub const ELEMENT_COUNT: usize = 14;

pub static ELEMENTS: [CorElement; ELEMENT_COUNT] = [
    CorElement {
        number: 1,
        name: "Health and Safety Policy",
        primary: &[
            "health and safety policy",
            "safety policy",
            "policy statement",
            "management commitment",
        ],
        secondary: &["policy", "commitment", "responsibilities", "accountability"],
        form_types: &["policy acknowledgement", "policy review"],
    },
    CorElement {
        number: 2,
        name: "Hazard Assessment and Control",
        primary: &[
            "hazard assessment",
            "hazard identification",
            "risk assessment",
            "job hazard analysis",
            "field level hazard",
        ],
        secondary: &[
            "hazard",
            "risk",
            "severity",
            "likelihood",
            "control measures",
            "priority",
        ],
        form_types: &[
            "hazard assessment",
            "job hazard analysis",
            "jha",
            "flha",
            "risk assessment",
        ],
    },
    CorElement {
        number: 3,
        name: "Safe Work Practices",
        primary: &["safe work practice", "safe work practices"],
        secondary: &["practice", "guideline", "do not", "prohibited"],
        form_types: &["safe work practice", "practice review"],
    },
    CorElement {
        number: 4,
        name: "Safe Job Procedures",
        primary: &["safe job procedure", "job procedure", "step by step"],
        secondary: &["procedure", "steps", "sequence", "task breakdown"],
        form_types: &["safe job procedure", "procedure review"],
    },
    CorElement {
        number: 5,
        name: "Company Safety Rules",
        primary: &["safety rules", "company rules", "rule violation"],
        secondary: &["rules", "disciplinary", "enforcement", "violation"],
        form_types: &["rule acknowledgement", "disciplinary action"],
    },
    CorElement {
        number: 6,
        name: "Personal Protective Equipment",
        primary: &["personal protective equipment", "ppe"],
        secondary: &[
            "hard hat",
            "safety glasses",
            "gloves",
            "respirator",
            "hearing protection",
            "fall protection",
            "footwear",
        ],
        form_types: &["ppe inspection", "ppe issue", "equipment issue"],
    },
    CorElement {
        number: 7,
        name: "Preventive Maintenance",
        primary: &[
            "preventive maintenance",
            "preventative maintenance",
            "maintenance record",
            "work order",
        ],
        secondary: &["maintenance", "service", "repair", "lubrication", "mechanic"],
        form_types: &["maintenance log", "work order", "equipment service"],
    },
    CorElement {
        number: 8,
        name: "Training and Communication",
        primary: &[
            "training record",
            "orientation",
            "toolbox talk",
            "safety meeting",
            "tailgate meeting",
        ],
        secondary: &[
            "training",
            "instructor",
            "competency",
            "attendees",
            "certificate",
            "sign-in",
        ],
        form_types: &[
            "training record",
            "orientation checklist",
            "toolbox talk",
            "meeting minutes",
        ],
    },
    CorElement {
        number: 9,
        name: "Workplace Inspections",
        primary: &[
            "workplace inspection",
            "site inspection",
            "formal inspection",
            "inspection checklist",
        ],
        secondary: &[
            "inspection",
            "deficiency",
            "corrective action",
            "inspector",
            "walkthrough",
        ],
        form_types: &["inspection checklist", "site inspection", "vehicle inspection"],
    },
    CorElement {
        number: 10,
        name: "Incident Investigation and Reporting",
        primary: &[
            "incident investigation",
            "accident investigation",
            "incident report",
            "near miss",
        ],
        secondary: &[
            "incident",
            "accident",
            "injury",
            "witness",
            "root cause",
            "first aid",
        ],
        form_types: &["incident report", "investigation report", "near miss report"],
    },
    CorElement {
        number: 11,
        name: "Emergency Preparedness",
        primary: &[
            "emergency response",
            "emergency preparedness",
            "evacuation",
            "emergency drill",
        ],
        secondary: &["emergency", "fire", "muster", "alarm", "rescue"],
        form_types: &["emergency response plan", "evacuation drill", "drill record"],
    },
    CorElement {
        number: 12,
        name: "Statistics and Records",
        primary: &["safety statistics", "records management", "frequency rate"],
        secondary: &["statistics", "records", "trend", "lost time", "summary"],
        form_types: &["statistics summary", "monthly summary"],
    },
    CorElement {
        number: 13,
        name: "Legislation",
        primary: &[
            "occupational health and safety act",
            "ohs regulation",
            "legislation",
            "regulatory compliance",
        ],
        secondary: &["regulation", "code", "compliance", "legal requirement"],
        form_types: &["compliance checklist", "legislation review"],
    },
    CorElement {
        number: 14,
        name: "Occupational Health",
        primary: &[
            "occupational health",
            "industrial hygiene",
            "hearing test",
            "exposure monitoring",
        ],
        secondary: &["exposure", "noise", "dust", "ergonomic", "wellness", "hygiene"],
        form_types: &["exposure assessment", "health monitoring", "hygiene survey"],
    },
];

/// Look up an element by its 1–14 number.
pub fn element(number: u8) -> Option<&'static CorElement> {
    ELEMENTS.iter().find(|e| e.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_run_one_through_fourteen() {
        for (i, el) in ELEMENTS.iter().enumerate() {
            assert_eq!(el.number as usize, i + 1);
        }
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(element(2).map(|e| e.name), Some("Hazard Assessment and Control"));
        assert_eq!(element(14).map(|e| e.name), Some("Occupational Health"));
        assert!(element(0).is_none());
        assert!(element(15).is_none());
    }

    #[test]
    fn keywords_are_lowercase() {
        for el in &ELEMENTS {
            for kw in el.primary.iter().chain(el.secondary).chain(el.form_types) {
                assert_eq!(*kw, kw.to_lowercase(), "element {}", el.number);
            }
        }
    }

    #[test]
    fn every_element_has_a_non_empty_profile() {
        for el in &ELEMENTS {
            assert!(!el.primary.is_empty(), "element {}", el.number);
            assert!(!el.secondary.is_empty(), "element {}", el.number);
            assert!(!el.form_types.is_empty(), "element {}", el.number);
        }
    }
}
