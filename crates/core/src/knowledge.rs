use std::collections::HashMap;

use serde::Serialize;

use crate::error::GuidanceError;
use crate::knowledge_data::{
    DEFAULT_QUESTIONS, DEFAULT_SUPPLIES, GENERIC_GUIDANCE, GUIDANCE_ENTRIES,
    GUIDANCE_SUPPLY_ENTRIES, QUESTION_ENTRIES, SUPPLY_ENTRIES,
};
use crate::matcher::KeywordTable;
use crate::models::{FollowUpQuestionSet, SupplyRecommendation};

pub type GuidanceTable = KeywordTable<'static, &'static str>;
pub type QuestionTable = KeywordTable<'static, FollowUpQuestionSet>;
pub type SupplyTable = KeywordTable<'static, &'static [SupplyRecommendation]>;

/// The static tables every classifier reads from.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    pub guidance: GuidanceTable,
    pub questions: QuestionTable,
    /// Keyed by words a caller or victim would use.
    pub supplies: SupplyTable,
    /// Keyed by phrases from the guidance texts themselves.
    pub guidance_supplies: SupplyTable,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStats {
    pub guidance_keys: usize,
    pub distinct_guidance_texts: usize,
    pub question_keys: usize,
    pub supply_keys: usize,
    pub guidance_supply_keys: usize,
    pub default_questions: usize,
    pub default_supplies: usize,
}

static STANDARD: KnowledgeBase = KnowledgeBase::new(
    KeywordTable::new(GUIDANCE_ENTRIES, &GENERIC_GUIDANCE),
    KeywordTable::new(QUESTION_ENTRIES, &DEFAULT_QUESTIONS),
    KeywordTable::new(SUPPLY_ENTRIES, &DEFAULT_SUPPLIES),
    KeywordTable::new(GUIDANCE_SUPPLY_ENTRIES, &DEFAULT_SUPPLIES),
);

impl KnowledgeBase {
    pub const fn new(
        guidance: GuidanceTable,
        questions: QuestionTable,
        supplies: SupplyTable,
        guidance_supplies: SupplyTable,
    ) -> Self {
        Self {
            guidance,
            questions,
            supplies,
            guidance_supplies,
        }
    }

    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD
    }

    /// Checks key hygiene, payload presence, synonym consistency and supply
    /// ordering across all three tables.
    pub fn validate(&self) -> Result<KnowledgeStats, GuidanceError> {
        validate_table("guidance", &self.guidance, |text| !text.trim().is_empty())?;
        if self.guidance.default_payload().trim().is_empty() {
            return Err(GuidanceError::EmptyPayload {
                table: "guidance",
                key: "<default>".to_string(),
            });
        }

        validate_table("questions", &self.questions, |questions| {
            !questions.is_empty() && questions.iter().all(|q| !q.trim().is_empty())
        })?;
        validate_table("supplies", &self.supplies, |items| !items.is_empty())?;
        validate_table("guidance_supplies", &self.guidance_supplies, |items| {
            !items.is_empty()
        })?;

        for (key, items) in self
            .supplies
            .entries()
            .iter()
            .chain(self.guidance_supplies.entries())
            .chain(std::iter::once(&("<default>", *self.supplies.default_payload())))
        {
            if items.windows(2).any(|pair| pair[0].urgency < pair[1].urgency) {
                return Err(GuidanceError::UnorderedSupplies {
                    key: key.to_string(),
                });
            }
        }

        let mut distinct = self
            .guidance
            .entries()
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>();
        distinct.sort_unstable();
        distinct.dedup();

        Ok(KnowledgeStats {
            guidance_keys: self.guidance.len(),
            distinct_guidance_texts: distinct.len(),
            question_keys: self.questions.len(),
            supply_keys: self.supplies.len(),
            guidance_supply_keys: self.guidance_supplies.len(),
            default_questions: self.questions.default_payload().len(),
            default_supplies: self.supplies.default_payload().len(),
        })
    }
}

fn validate_table<P: PartialEq>(
    table_name: &'static str,
    table: &KeywordTable<'static, P>,
    payload_ok: impl Fn(&P) -> bool,
) -> Result<(), GuidanceError> {
    if table.is_empty() {
        return Err(GuidanceError::EmptyTable { table: table_name });
    }

    let mut seen: HashMap<&str, &P> = HashMap::new();
    for (key, payload) in table.entries() {
        if key.is_empty() || key.trim() != *key || key.to_lowercase() != *key {
            return Err(GuidanceError::InvalidKey {
                table: table_name,
                key: key.to_string(),
            });
        }
        if !payload_ok(payload) {
            return Err(GuidanceError::EmptyPayload {
                table: table_name,
                key: key.to_string(),
            });
        }
        if let Some(previous) = seen.insert(*key, payload) {
            if previous != payload {
                return Err(GuidanceError::ConflictingEntry {
                    table: table_name,
                    key: key.to_string(),
                });
            }
        }
    }

    Ok(())
}
