use crate::knowledge::{KnowledgeBase, QuestionTable};
use crate::matcher::MatchStrategy;

/// Clarifying questions for the emergency, in the order they should be asked.
pub fn follow_up_questions(emergency_text: &str) -> Vec<String> {
    questions_from(&KnowledgeBase::standard().questions, emergency_text)
}

pub fn questions_from(table: &QuestionTable, emergency_text: &str) -> Vec<String> {
    table
        .classify(emergency_text, MatchStrategy::ExactOnly)
        .payload()
        .iter()
        .map(|question| question.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_data::{BREATHING_STATUS_QUESTION, DEFAULT_QUESTIONS};
    use crate::matcher::KeywordTable;

    #[test]
    fn unconscious_and_not_breathing_asks_about_breathing_first() {
        let questions = follow_up_questions("unconscious person not breathing");
        assert_eq!(questions.first().map(String::as_str), Some(BREATHING_STATUS_QUESTION));
    }

    #[test]
    fn unknown_emergency_gets_four_default_questions() {
        let questions = follow_up_questions("something odd happened");
        assert_eq!(questions.len(), 4);
        assert_eq!(questions, DEFAULT_QUESTIONS);
    }

    #[test]
    fn questions_keep_authored_order() {
        const ENTRIES: &[(&str, &[&str])] = &[("burn", &["zeta?", "alpha?", "mid?"])];
        let table = KeywordTable::new(ENTRIES, &DEFAULT_QUESTIONS);
        assert_eq!(questions_from(&table, "burn"), vec!["zeta?", "alpha?", "mid?"]);
    }

    #[test]
    fn no_frequency_fallback_for_questions() {
        // "hypo" has no exact key but would score against "hypotherm".
        let questions = follow_up_questions("hypo episode");
        assert_eq!(questions, DEFAULT_QUESTIONS);
    }
}
