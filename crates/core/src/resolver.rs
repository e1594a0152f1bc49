use tracing::warn;

use crate::error::GuidanceError;
use crate::knowledge::KnowledgeBase;
use crate::matcher::MatchStrategy;
use crate::models::{GuidanceOutcome, PersonalizationContext};
use crate::personalization::PersonalizationComposer;

/// Returned whenever the pipeline itself fails. Must always tell the reader to
/// contact emergency services.
pub const SAFE_FALLBACK_GUIDANCE: &str = "We could not prepare specific guidance for this situation.
1. Call emergency services (911 or your local emergency number) now.
2. Stay with the person and follow the dispatcher's instructions until help arrives.";

#[derive(Debug, Clone, Copy)]
pub struct GuidanceResolver<'k> {
    knowledge: &'k KnowledgeBase,
    composer: PersonalizationComposer,
}

impl Default for GuidanceResolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl GuidanceResolver<'static> {
    pub fn standard() -> Self {
        Self::new(KnowledgeBase::standard(), PersonalizationComposer::standard())
    }
}

impl<'k> GuidanceResolver<'k> {
    pub fn new(knowledge: &'k KnowledgeBase, composer: PersonalizationComposer) -> Self {
        Self {
            knowledge,
            composer,
        }
    }

    pub fn knowledge(&self) -> &'k KnowledgeBase {
        self.knowledge
    }

    pub fn try_resolve(
        &self,
        emergency_text: &str,
        context: Option<&PersonalizationContext>,
    ) -> Result<GuidanceOutcome, GuidanceError> {
        let classification = self
            .knowledge
            .guidance
            .classify(emergency_text, MatchStrategy::ExactThenScored);
        let guidance = *classification.payload();
        if guidance.trim().is_empty() {
            return Err(GuidanceError::EmptyPayload {
                table: "guidance",
                key: classification.key().unwrap_or("<default>").to_string(),
            });
        }

        let prefix = context.and_then(|context| self.composer.compose(emergency_text, context));
        let personalized = prefix.is_some();
        let mut text = prefix.unwrap_or_default();
        text.push_str(guidance);

        Ok(GuidanceOutcome {
            text,
            guidance,
            matched_key: classification.key().map(ToString::to_string),
            phase: classification.phase(),
            personalized,
            safe_fallback: false,
        })
    }

    /// Like `try_resolve`, but any failure becomes the safe fallback.
    pub fn resolve_detailed(
        &self,
        emergency_text: &str,
        context: Option<&PersonalizationContext>,
    ) -> GuidanceOutcome {
        self.try_resolve(emergency_text, context)
            .unwrap_or_else(|error| {
                warn!(error = %error, "guidance resolution failed, returning safe fallback");
                GuidanceOutcome {
                    text: SAFE_FALLBACK_GUIDANCE.to_string(),
                    guidance: SAFE_FALLBACK_GUIDANCE,
                    matched_key: None,
                    phase: None,
                    personalized: false,
                    safe_fallback: true,
                }
            })
    }

    pub fn resolve(&self, emergency_text: &str, context: Option<&PersonalizationContext>) -> String {
        self.resolve_detailed(emergency_text, context).text
    }
}

pub fn resolve_guidance(emergency_text: &str, context: Option<&PersonalizationContext>) -> String {
    GuidanceResolver::standard().resolve(emergency_text, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_data::{CHOKING, GENERIC_GUIDANCE, HEAD_INJURY};
    use crate::matcher::{KeywordTable, MatchPhase};

    fn peanut_profile() -> PersonalizationContext {
        PersonalizationContext {
            allergies: Some("peanuts".to_string()),
            emergency_contact_name: Some("Ana".to_string()),
            emergency_contact_phone: Some("555-0101".to_string()),
            ..PersonalizationContext::default()
        }
    }

    #[test]
    fn gibberish_gets_generic_guidance() {
        for input in ["xyzzy qwerty plugh", "", "   ", "??!!", "zzzz zzzz zzzz"] {
            let text = resolve_guidance(input, None);
            assert_eq!(text, GENERIC_GUIDANCE);
            assert!(text.contains("emergency services"));
        }
    }

    #[test]
    fn choking_always_starts_with_choking_protocol() {
        let first_step = CHOKING.lines().next().unwrap();
        for input in [
            "choking",
            "My toddler is CHOKING on a grape",
            "someone fell down and is Choking badly",
            "unconscious? no, choking",
        ] {
            assert!(resolve_guidance(input, None).starts_with(first_step), "{input}");
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let profile = peanut_profile();
        assert_eq!(resolve_guidance("nosebleed", None), resolve_guidance("nosebleed", None));
        assert_eq!(
            resolve_guidance("my allergies flare with a rash", Some(&profile)),
            resolve_guidance("my allergies flare with a rash", Some(&profile))
        );
    }

    #[test]
    fn profile_is_private_unless_requested() {
        let profile = peanut_profile();
        let text = resolve_guidance("child has a fever", Some(&profile));
        assert!(!text.contains("peanuts"));
        assert!(!text.contains("Ana"));

        let text = resolve_guidance("my allergies are acting up with swelling", Some(&profile));
        assert!(text.contains("peanuts"));
        assert!(text.contains("Emergency contact: Ana (555-0101)."));
    }

    #[test]
    fn personalized_prefix_precedes_guidance() {
        let profile = peanut_profile();
        let outcome = GuidanceResolver::standard()
            .resolve_detailed("my allergies are acting up with swelling", Some(&profile));
        assert!(outcome.personalized);
        assert!(outcome.text.starts_with("Personal medical context:\n"));
        assert!(outcome.text.ends_with("5. Keep the person calm and seated upright."));
        assert!(outcome.text.ends_with(outcome.guidance));
        assert!(!outcome.guidance.contains("Personal medical context"));
        assert_eq!(outcome.matched_key.as_deref(), Some("allergies"));
    }

    #[test]
    fn fall_with_head_injury_starts_with_calling_for_help() {
        let outcome = GuidanceResolver::standard()
            .resolve_detailed("person fell and hit their head, not responding", None);
        assert_eq!(outcome.text, HEAD_INJURY);
        assert_eq!(
            outcome.text.lines().next(),
            Some("1. Call emergency services for serious injury.")
        );
        assert_eq!(outcome.phase, Some(MatchPhase::Exact));
    }

    #[test]
    fn scoring_fallback_finds_hypothermia() {
        let outcome = GuidanceResolver::standard()
            .resolve_detailed("person has low body temperature after swim", None);
        assert_eq!(outcome.matched_key.as_deref(), Some("cold body temperature"));
        assert_eq!(outcome.phase, Some(MatchPhase::Scored));
    }

    #[test]
    fn embedded_follow_up_answers_still_match() {
        let text = "my dad collapsed\nIs the person breathing normally? no\nDid they hit anything? no";
        let outcome = GuidanceResolver::standard().resolve_detailed(text, None);
        assert_eq!(outcome.matched_key.as_deref(), Some("collapsed"));
    }

    #[test]
    fn empty_guidance_payload_falls_back_safely() {
        const ENTRIES: &[(&str, &str)] = &[("burn", "   ")];
        let base = KnowledgeBase {
            guidance: KeywordTable::new(ENTRIES, &GENERIC_GUIDANCE),
            ..*KnowledgeBase::standard()
        };
        let resolver = GuidanceResolver::new(&base, PersonalizationComposer::standard());

        assert!(matches!(
            resolver.try_resolve("a burn", None),
            Err(GuidanceError::EmptyPayload { .. })
        ));
        let outcome = resolver.resolve_detailed("a burn", None);
        assert!(outcome.safe_fallback);
        assert!(outcome.text.contains("emergency services"));
    }
}
