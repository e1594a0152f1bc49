use serde::{Deserialize, Serialize};

use crate::matcher::MatchPhase;

/// A trigger key paired with its payload. Tables are ordered slices of these,
/// and the order is the matching priority.
pub type KeywordEntry<'a, P> = (&'a str, P);

/// Trigger key to numbered, newline-delimited first-aid steps.
pub type KnowledgeEntry = KeywordEntry<'static, &'static str>;

/// Clarifying questions in triage order.
pub type FollowUpQuestionSet = &'static [&'static str];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Normal,
    Recommended,
    Critical,
}

impl Urgency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "normal" | "low" => Some(Self::Normal),
            "recommended" | "medium" => Some(Self::Recommended),
            "critical" | "high" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Recommended => "recommended",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyRecommendation {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub category: &'static str,
    pub urgency: Urgency,
}

/// Medical profile supplied by the caller. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalizationContext {
    pub conditions: Vec<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub age: Option<u16>,
    pub sex: Option<String>,
}

impl PersonalizationContext {
    pub fn allergies(&self) -> Option<&str> {
        non_blank(self.allergies.as_deref())
    }

    pub fn medications(&self) -> Option<&str> {
        non_blank(self.medications.as_deref())
    }

    pub fn contact_name(&self) -> Option<&str> {
        non_blank(self.emergency_contact_name.as_deref())
    }

    pub fn contact_phone(&self) -> Option<&str> {
        non_blank(self.emergency_contact_phone.as_deref())
    }

    pub fn sex(&self) -> Option<&str> {
        non_blank(self.sex.as_deref())
    }

    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.conditions
            .iter()
            .map(|condition| condition.trim())
            .filter(|condition| !condition.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions().next().is_none()
            && self.allergies().is_none()
            && self.medications().is_none()
            && self.contact_name().is_none()
            && self.contact_phone().is_none()
            && self.age.is_none()
            && self.sex().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Everything the resolver decided for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceOutcome {
    /// Personalization prefix, if any, followed by the guidance.
    pub text: String,
    /// The guidance alone.
    pub guidance: &'static str,
    pub matched_key: Option<String>,
    pub phase: Option<MatchPhase>,
    pub personalized: bool,
    pub safe_fallback: bool,
}

impl GuidanceOutcome {
    pub fn used_default(&self) -> bool {
        self.matched_key.is_none()
    }
}
