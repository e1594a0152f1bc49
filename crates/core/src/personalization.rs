use serde::Serialize;

use crate::matcher::{contains_any, normalize_input};
use crate::models::PersonalizationContext;

/// Phrases by which a user opts in to having their stored profile used.
pub const SELF_REFERENCE_PHRASES: &[&str] = &[
    "my info",
    "my medical",
    "my health",
    "my condition",
    "my allerg",
    "my medication",
    "my meds",
    "my profile",
    "my record",
    "my history",
    "about me",
];

pub const CARDIAC_TERMS: &[&str] = &["chest", "heart", "cardiac"];
pub const ALLERGY_TERMS: &[&str] = &[
    "allerg",
    "rash",
    "swelling",
    "swollen",
    "hives",
    "breath",
    "anaphyla",
    "stung",
    "bee sting",
    "wasp sting",
    "insect sting",
];
pub const RESPIRATORY_TERMS: &[&str] = &["breath", "wheez", "asthma", "inhaler", "cough"];
pub const GLYCEMIC_TERMS: &[&str] = &[
    "sugar", "diabet", "insulin", "faint", "dizzy", "confus", "shaky", "unconscious",
];
pub const SEIZURE_TERMS: &[&str] = &["seizure", "convuls", "fitting", "epilep"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosedField {
    Demographics,
    Condition,
    Allergies,
    Medications,
    EmergencyContact,
}

/// When a field may be disclosed, judged against the emergency text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Always,
    TextMentions(&'static [&'static str]),
}

impl Trigger {
    pub fn admits(self, normalized_text: &str) -> bool {
        match self {
            Self::Always => true,
            Self::TextMentions(terms) => contains_any(normalized_text, terms),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisclosureRule {
    pub field: DisclosedField,
    pub trigger: Trigger,
}

/// A stored condition is surfaced only when it belongs to a known family and
/// the emergency text mentions that family's symptoms.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub family: &'static str,
    pub condition_terms: &'static [&'static str],
    pub trigger: Trigger,
}

pub const DISCLOSURE_RULES: &[DisclosureRule] = &[
    DisclosureRule {
        field: DisclosedField::Demographics,
        trigger: Trigger::Always,
    },
    DisclosureRule {
        field: DisclosedField::Condition,
        trigger: Trigger::Always,
    },
    DisclosureRule {
        field: DisclosedField::Allergies,
        trigger: Trigger::TextMentions(ALLERGY_TERMS),
    },
    DisclosureRule {
        field: DisclosedField::Medications,
        trigger: Trigger::TextMentions(CARDIAC_TERMS),
    },
    DisclosureRule {
        field: DisclosedField::EmergencyContact,
        trigger: Trigger::Always,
    },
];

pub const CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        family: "heart",
        condition_terms: &[
            "heart",
            "cardiac",
            "coronary",
            "angina",
            "arrhythm",
            "atrial",
            "hypertension",
            "blood pressure",
            "pacemaker",
        ],
        trigger: Trigger::TextMentions(CARDIAC_TERMS),
    },
    ConditionRule {
        family: "respiratory",
        condition_terms: &["asthma", "copd", "emphysema", "bronch", "lung"],
        trigger: Trigger::TextMentions(RESPIRATORY_TERMS),
    },
    ConditionRule {
        family: "diabetes",
        condition_terms: &["diabet", "hypoglyc", "insulin"],
        trigger: Trigger::TextMentions(GLYCEMIC_TERMS),
    },
    ConditionRule {
        family: "seizure",
        condition_terms: &["epilep", "seizure"],
        trigger: Trigger::TextMentions(SEIZURE_TERMS),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disclosure {
    pub field: DisclosedField,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisclosureResult {
    pub requested: bool,
    pub disclosures: Vec<Disclosure>,
}

impl DisclosureResult {
    pub fn discloses(&self, field: DisclosedField) -> bool {
        self.disclosures.iter().any(|d| d.field == field)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PersonalizationComposer {
    self_reference: &'static [&'static str],
    rules: &'static [DisclosureRule],
    conditions: &'static [ConditionRule],
}

impl Default for PersonalizationComposer {
    fn default() -> Self {
        Self::standard()
    }
}

impl PersonalizationComposer {
    pub const fn standard() -> Self {
        Self {
            self_reference: SELF_REFERENCE_PHRASES,
            rules: DISCLOSURE_RULES,
            conditions: CONDITION_RULES,
        }
    }

    pub fn is_requested(&self, emergency_text: &str) -> bool {
        contains_any(&normalize_input(emergency_text), self.self_reference)
    }

    pub fn evaluate(
        &self,
        emergency_text: &str,
        context: &PersonalizationContext,
    ) -> DisclosureResult {
        let normalized = normalize_input(emergency_text);
        if !contains_any(&normalized, self.self_reference) {
            return DisclosureResult::default();
        }

        let mut disclosures = Vec::new();
        for rule in self.rules {
            if !rule.trigger.admits(&normalized) {
                continue;
            }
            match rule.field {
                DisclosedField::Demographics => {
                    if let Some(line) = demographics_line(context) {
                        disclosures.push(disclosure(rule.field, line));
                    }
                }
                DisclosedField::Condition => {
                    for line in self.condition_lines(&normalized, context) {
                        disclosures.push(disclosure(rule.field, line));
                    }
                }
                DisclosedField::Allergies => {
                    if let Some(allergies) = context.allergies() {
                        disclosures.push(disclosure(
                            rule.field,
                            format!("Known allergies: {allergies}. Avoid these and tell responders."),
                        ));
                    }
                }
                DisclosedField::Medications => {
                    if let Some(medications) = context.medications() {
                        disclosures.push(disclosure(
                            rule.field,
                            format!(
                                "Current medications: {medications}. Tell responders before any drug is given."
                            ),
                        ));
                    }
                }
                DisclosedField::EmergencyContact => {
                    if let Some(line) = contact_line(context) {
                        disclosures.push(disclosure(rule.field, line));
                    }
                }
            }
        }

        DisclosureResult {
            requested: true,
            disclosures,
        }
    }

    /// The prefix placed before the guidance, or `None` when nothing may be
    /// disclosed.
    pub fn compose(&self, emergency_text: &str, context: &PersonalizationContext) -> Option<String> {
        let result = self.evaluate(emergency_text, context);
        if result.disclosures.is_empty() {
            return None;
        }

        let mut prefix = String::from("Personal medical context:\n");
        for item in &result.disclosures {
            prefix.push_str("- ");
            prefix.push_str(&item.line);
            prefix.push('\n');
        }
        prefix.push('\n');
        Some(prefix)
    }

    fn condition_lines(&self, normalized_text: &str, context: &PersonalizationContext) -> Vec<String> {
        context
            .conditions()
            .filter_map(|condition| {
                let lower = condition.to_lowercase();
                let rule = self
                    .conditions
                    .iter()
                    .find(|rule| contains_any(&lower, rule.condition_terms))?;
                rule.trigger.admits(normalized_text).then(|| {
                    format!(
                        "Relevant condition: {condition} ({} history). Tell responders.",
                        rule.family
                    )
                })
            })
            .collect()
    }
}

fn disclosure(field: DisclosedField, line: String) -> Disclosure {
    Disclosure { field, line }
}

fn demographics_line(context: &PersonalizationContext) -> Option<String> {
    match (context.age, context.sex()) {
        (Some(age), Some(sex)) => Some(format!("Patient: {age} years old, {sex}.")),
        (Some(age), None) => Some(format!("Patient: {age} years old.")),
        (None, Some(sex)) => Some(format!("Patient: {sex}.")),
        (None, None) => None,
    }
}

fn contact_line(context: &PersonalizationContext) -> Option<String> {
    match (context.contact_name(), context.contact_phone()) {
        (Some(name), Some(phone)) => Some(format!("Emergency contact: {name} ({phone}).")),
        (Some(name), None) => Some(format!("Emergency contact: {name}.")),
        (None, Some(phone)) => Some(format!("Emergency contact phone: {phone}.")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PersonalizationContext {
        PersonalizationContext {
            conditions: vec![
                "Coronary artery disease".to_string(),
                "Type 1 diabetes".to_string(),
                "Migraine".to_string(),
            ],
            allergies: Some("peanuts".to_string()),
            medications: Some("warfarin".to_string()),
            emergency_contact_name: Some("Sam Rivera".to_string()),
            emergency_contact_phone: Some("555-0134".to_string()),
            age: Some(58),
            sex: Some("female".to_string()),
        }
    }

    #[test]
    fn nothing_is_disclosed_without_self_reference() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("chest pain and swelling", &profile());
        assert!(!result.requested);
        assert!(result.disclosures.is_empty());
        assert_eq!(composer.compose("chest pain and swelling", &profile()), None);
    }

    #[test]
    fn self_reference_is_case_insensitive() {
        let composer = PersonalizationComposer::standard();
        assert!(composer.is_requested("Use MY MEDICAL record"));
        assert!(composer.is_requested("tell them about me"));
        assert!(!composer.is_requested("my friend is hurt"));
    }

    #[test]
    fn allergies_require_allergy_words() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("check my info, he has a cut", &profile());
        assert!(result.requested);
        assert!(!result.discloses(DisclosedField::Allergies));

        let result = composer.evaluate("check my info, there is a rash", &profile());
        assert!(result.discloses(DisclosedField::Allergies));
    }

    #[test]
    fn words_containing_sting_do_not_disclose_allergies() {
        let composer = PersonalizationComposer::standard();
        for text in [
            "my info: existing back pain",
            "my info: he was testing the ladder and fell",
            "my info: lasting headache",
        ] {
            let result = composer.evaluate(text, &profile());
            assert!(result.requested, "{text}");
            assert!(!result.discloses(DisclosedField::Allergies), "{text}");
        }

        for text in ["my info: I got stung", "my info: a wasp sting on my hand"] {
            let result = composer.evaluate(text, &profile());
            assert!(result.discloses(DisclosedField::Allergies), "{text}");
        }
    }

    #[test]
    fn medications_require_cardiac_words() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("my info: I have a rash", &profile());
        assert!(!result.discloses(DisclosedField::Medications));

        let result = composer.evaluate("my info: my chest hurts", &profile());
        assert!(result.discloses(DisclosedField::Medications));
    }

    #[test]
    fn conditions_are_gated_by_their_family() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("about me: chest pain", &profile());
        let lines = result
            .disclosures
            .iter()
            .filter(|d| d.field == DisclosedField::Condition)
            .map(|d| d.line.as_str())
            .collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Coronary artery disease"));

        let result = composer.evaluate("about me: feeling dizzy", &profile());
        assert!(result
            .disclosures
            .iter()
            .any(|d| d.line.contains("Type 1 diabetes")));
        assert!(!result.disclosures.iter().any(|d| d.line.contains("Coronary")));
    }

    #[test]
    fn unclassified_conditions_are_never_disclosed() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("my medical history: migraine and chest pain", &profile());
        assert!(!result.disclosures.iter().any(|d| d.line.contains("Migraine")));
    }

    #[test]
    fn contact_is_always_last() {
        let composer = PersonalizationComposer::standard();
        let result = composer.evaluate("my info: chest pain with swelling", &profile());
        let fields = result.disclosures.iter().map(|d| d.field).collect::<Vec<_>>();
        assert_eq!(fields.first(), Some(&DisclosedField::Demographics));
        assert_eq!(fields.last(), Some(&DisclosedField::EmergencyContact));
        assert!(fields.contains(&DisclosedField::Allergies));
        assert!(fields.contains(&DisclosedField::Medications));
    }

    #[test]
    fn compose_formats_prefix_block() {
        let composer = PersonalizationComposer::standard();
        let prefix = composer.compose("my info please", &profile()).unwrap();
        assert_eq!(
            prefix,
            "Personal medical context:\n- Patient: 58 years old, female.\n- Emergency contact: Sam Rivera (555-0134).\n\n"
        );
    }

    #[test]
    fn empty_profile_composes_nothing() {
        let composer = PersonalizationComposer::standard();
        let empty = PersonalizationContext::default();
        assert!(composer.evaluate("my info", &empty).requested);
        assert_eq!(composer.compose("my info", &empty), None);
    }
}
