use lifeline_core::{
    follow_up_questions, resolve_guidance, supply_recommendations, GuidanceResolver, KeywordTable,
    KnowledgeBase, MatchPhase, MatchStrategy, Urgency, BREATHING_STATUS_QUESTION,
};
use lifeline_tests::{cardiac_profile, peanut_profile};

#[test]
fn gibberish_gets_generic_guidance_mentioning_emergency_services() {
    for input in ["xyzzy", "qwerty asdf zxcv", "", "1234 5678"] {
        let outcome = GuidanceResolver::standard().resolve_detailed(input, None);
        assert!(outcome.used_default(), "{input}");
        assert!(!outcome.safe_fallback);
        assert!(outcome.text.contains("emergency services"));
    }
}

#[test]
fn choking_in_any_case_leads_with_choking_protocol() {
    let baseline = resolve_guidance("choking", None);
    let first_step = baseline.lines().next().unwrap();

    for input in ["CHOKING", "She is Choking on food", "collapsed after choking"] {
        assert_eq!(resolve_guidance(input, None).lines().next(), Some(first_step));
    }
}

#[test]
fn identical_arguments_give_identical_output() {
    let profile = cardiac_profile();
    let text = "about me: crushing chest pain";
    assert_eq!(
        resolve_guidance(text, Some(&profile)),
        resolve_guidance(text, Some(&profile))
    );
}

#[test]
fn allergies_stay_private_until_the_user_asks() {
    let profile = peanut_profile();
    assert!(!resolve_guidance("child has a fever", Some(&profile)).contains("peanuts"));
    assert!(
        resolve_guidance("my allergies are acting up with swelling", Some(&profile))
            .contains("peanuts")
    );
}

#[test]
fn personal_context_only_discloses_relevant_fields() {
    let text = resolve_guidance("about me: crushing chest pain", Some(&cardiac_profile()));

    let (prefix, guidance) = text
        .split_once("\n\n")
        .expect("personalized output has a prefix block");
    let lines = prefix.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        [
            "Personal medical context:",
            "- Patient: 67 years old, male.",
            "- Relevant condition: Coronary artery disease (heart history). Tell responders.",
            "- Current medications: aspirin, nitroglycerin. Tell responders before any drug is given.",
            "- Emergency contact: Rosa (555-0199).",
        ]
    );
    assert!(!prefix.contains("Asthma"));
    assert!(guidance.starts_with("1."));
}

#[test]
fn earlier_authored_key_wins_when_keys_overlap() {
    const ENTRIES: &[(&str, &str)] = &[("bite", "generic bite"), ("snake bite", "snake bite")];
    let table = KeywordTable::new(ENTRIES, &"default");

    let result = table.classify("a snake bite on the ankle", MatchStrategy::ExactOnly);
    assert_eq!(result.key(), Some("bite"));
    assert_eq!(*result.payload(), "generic bite");
}

#[test]
fn token_scoring_prefers_overlap_and_keeps_first_on_ties() {
    const ENTRIES: &[(&str, &str)] = &[
        ("sudden weakness", "A"),
        ("weakness dizziness confusion", "B"),
        ("dizziness confusion", "C"),
    ];
    let table = KeywordTable::new(ENTRIES, &"default");

    let result = table.classify("weakness with dizziness and confusion", MatchStrategy::ExactThenScored);
    assert_eq!(result.key(), Some("weakness dizziness confusion"));
    assert_eq!(result.phase(), Some(MatchPhase::Scored));

    let result = table.classify("weakness", MatchStrategy::ExactThenScored);
    assert_eq!(result.key(), Some("sudden weakness"));

    let result = table.classify("weakness", MatchStrategy::ExactOnly);
    assert!(result.is_default());
}

#[test]
fn unconscious_and_not_breathing_asks_about_breathing_first() {
    let questions = follow_up_questions("unconscious person not breathing");
    assert_eq!(questions[0], BREATHING_STATUS_QUESTION);
}

#[test]
fn unknown_situations_get_four_default_questions() {
    assert_eq!(follow_up_questions("xyzzy").len(), 4);
}

#[test]
fn fall_with_head_injury_tells_reader_to_call_for_help_first() {
    let text = resolve_guidance("person fell and hit their head, not responding", None);
    assert!(text.starts_with("1. Call emergency services for serious injury."));
    assert!(text.lines().all(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit())));
}

#[test]
fn severe_bleeding_puts_critical_supplies_first() {
    let items = supply_recommendations("severe bleeding from the leg", None);
    assert_eq!(items[0].name, "Tourniquet");
    assert_eq!(items[0].urgency, Urgency::Critical);
    assert!(items.windows(2).all(|pair| pair[0].urgency >= pair[1].urgency));
}

#[test]
fn supplies_fall_back_to_kit_and_pain_relief() {
    let items = supply_recommendations("xyzzy", Some("nothing relevant here"));
    assert_eq!(items.len(), 2);
    assert!(items[0].name.contains("first aid kit"));
}

#[test]
fn built_in_tables_validate() {
    let stats = KnowledgeBase::standard().validate().unwrap();
    assert!(stats.guidance_keys >= stats.distinct_guidance_texts);
    assert!(stats.question_keys > 0);
    assert!(stats.supply_keys > 0);
}
