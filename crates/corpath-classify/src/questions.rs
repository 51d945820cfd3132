//! Static audit-question reference, keyed by COR element.
//!
//! A condensed subset of the COR audit protocol: each question carries the
//! evidence types an auditor accepts and whether it is verified by
//! documentation, interview, or observation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCategory {
    Documentation,
    Interview,
    Observation,
}

pub struct AuditQuestion {
    pub id: &'static str,
    pub element: u8,
    pub text: &'static str,
    pub category: QuestionCategory,
    pub evidence: &'static [&'static str],
}

use QuestionCategory::{Documentation, Interview, Observation};

pub static AUDIT_QUESTIONS: &[AuditQuestion] = &[
    AuditQuestion {
        id: "1.1",
        element: 1,
        text: "Does the company have a written health and safety policy signed by senior management?",
        category: Documentation,
        evidence: &["signed policy", "policy statement"],
    },
    AuditQuestion {
        id: "1.2",
        element: 1,
        text: "Are workers aware of the policy and their responsibilities under it?",
        category: Interview,
        evidence: &["orientation record", "acknowledgement"],
    },
    AuditQuestion {
        id: "2.1",
        element: 2,
        text: "Are hazard assessments completed for the work being performed?",
        category: Documentation,
        evidence: &["hazard assessment", "flha", "job hazard analysis"],
    },
    AuditQuestion {
        id: "2.2",
        element: 2,
        text: "Are identified hazards prioritized by severity and likelihood?",
        category: Documentation,
        evidence: &["risk matrix", "priority rating"],
    },
    AuditQuestion {
        id: "2.3",
        element: 2,
        text: "Are controls implemented for identified hazards in the field?",
        category: Observation,
        evidence: &["control measures", "corrective action"],
    },
    AuditQuestion {
        id: "3.1",
        element: 3,
        text: "Are written safe work practices available for hazardous activities?",
        category: Documentation,
        evidence: &["safe work practice", "practice manual"],
    },
    AuditQuestion {
        id: "4.1",
        element: 4,
        text: "Are safe job procedures developed for critical tasks?",
        category: Documentation,
        evidence: &["safe job procedure", "task list"],
    },
    AuditQuestion {
        id: "5.1",
        element: 5,
        text: "Are company safety rules communicated and enforced consistently?",
        category: Interview,
        evidence: &["rule acknowledgement", "disciplinary record"],
    },
    AuditQuestion {
        id: "6.1",
        element: 6,
        text: "Is required personal protective equipment identified, provided, and worn?",
        category: Observation,
        evidence: &["ppe inspection", "equipment issue record"],
    },
    AuditQuestion {
        id: "6.2",
        element: 6,
        text: "Is personal protective equipment inspected and maintained?",
        category: Documentation,
        evidence: &["ppe inspection", "inspection checklist"],
    },
    AuditQuestion {
        id: "7.1",
        element: 7,
        text: "Is there a preventive maintenance program for tools, equipment, and vehicles?",
        category: Documentation,
        evidence: &["maintenance record", "work order", "service log"],
    },
    AuditQuestion {
        id: "7.2",
        element: 7,
        text: "Are defective tools and equipment tagged and removed from service?",
        category: Observation,
        evidence: &["lockout tag", "defect report"],
    },
    AuditQuestion {
        id: "8.1",
        element: 8,
        text: "Do new workers receive a documented safety orientation before starting work?",
        category: Documentation,
        evidence: &["orientation checklist", "training record"],
    },
    AuditQuestion {
        id: "8.2",
        element: 8,
        text: "Are regular safety meetings or toolbox talks held and recorded?",
        category: Documentation,
        evidence: &["meeting minutes", "toolbox talk", "sign-in sheet"],
    },
    AuditQuestion {
        id: "9.1",
        element: 9,
        text: "Are formal workplace inspections carried out at an established frequency?",
        category: Documentation,
        evidence: &["inspection checklist", "inspection report"],
    },
    AuditQuestion {
        id: "9.2",
        element: 9,
        text: "Are deficiencies found during inspections assigned and corrected?",
        category: Documentation,
        evidence: &["corrective action", "follow-up record"],
    },
    AuditQuestion {
        id: "10.1",
        element: 10,
        text: "Are incidents and near misses reported and investigated?",
        category: Documentation,
        evidence: &["incident report", "investigation report", "near miss"],
    },
    AuditQuestion {
        id: "10.2",
        element: 10,
        text: "Do investigations identify root causes and assign corrective actions?",
        category: Documentation,
        evidence: &["root cause", "corrective action"],
    },
    AuditQuestion {
        id: "11.1",
        element: 11,
        text: "Is there a written emergency response plan for each work site?",
        category: Documentation,
        evidence: &["emergency response plan", "muster point map"],
    },
    AuditQuestion {
        id: "11.2",
        element: 11,
        text: "Are emergency drills conducted and evaluated?",
        category: Documentation,
        evidence: &["drill record", "evacuation drill"],
    },
    AuditQuestion {
        id: "12.1",
        element: 12,
        text: "Are safety statistics collected, analyzed, and communicated?",
        category: Documentation,
        evidence: &["statistics summary", "trend report"],
    },
    AuditQuestion {
        id: "13.1",
        element: 13,
        text: "Is current health and safety legislation available and accessible to workers?",
        category: Observation,
        evidence: &["legislation library", "compliance checklist"],
    },
    AuditQuestion {
        id: "14.1",
        element: 14,
        text: "Are occupational health exposures monitored and controlled?",
        category: Documentation,
        evidence: &["exposure assessment", "hearing test", "monitoring record"],
    },
];

/// All reference questions for one element, in declaration order.
pub fn questions_for(element: u8) -> impl Iterator<Item = &'static AuditQuestion> {
    AUDIT_QUESTIONS.iter().filter(move |q| q.element == element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_has_at_least_one_question() {
        for el in 1..=14u8 {
            assert!(questions_for(el).next().is_some(), "element {el}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = AUDIT_QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn ids_are_prefixed_by_element() {
        for q in AUDIT_QUESTIONS {
            let prefix = format!("{}.", q.element);
            assert!(q.id.starts_with(&prefix), "{} vs element {}", q.id, q.element);
        }
    }
}
