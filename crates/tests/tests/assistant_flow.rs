use std::sync::Arc;

use chrono::{Duration, Utc};
use lifeline_agents::{EmergencyAssistant, EmergencyRequest};
use lifeline_core::{MatchPhase, BREATHING_STATUS_QUESTION};
use lifeline_observability::GuidanceMetrics;
use lifeline_storage::SqliteStore;
use lifeline_tests::{memory_assistant, peanut_profile, sqlite_assistant};

#[tokio::test]
async fn sqlite_backed_profile_personalizes_on_request() {
    let assistant = sqlite_assistant().await.expect("sqlite store should open");
    assistant
        .save_profile("alex", &peanut_profile())
        .await
        .expect("profile should save");

    let reply = assistant
        .handle_emergency(EmergencyRequest::new("child has a fever").for_user("alex"))
        .await
        .unwrap();
    assert!(!reply.personalized);
    assert!(!reply.guidance.contains("peanuts"));

    let reply = assistant
        .handle_emergency(
            EmergencyRequest::new("my allergies are acting up with swelling").for_user("alex"),
        )
        .await
        .unwrap();
    assert!(reply.personalized);
    assert!(reply.guidance.starts_with("Personal medical context:\n"));
    assert!(reply.guidance.contains("Emergency contact: Ana (555-0101)."));

    let history = assistant.history("alex", 10).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].personalized);
    assert_eq!(history[1].emergency_text, "child has a fever");
}

#[tokio::test]
async fn triage_answers_do_not_derail_the_original_match() {
    let assistant = memory_assistant();
    let description = "my dad collapsed";

    let questions = assistant.questions(description);
    assert_eq!(questions[0], BREATHING_STATUS_QUESTION);

    let text = format!("{description}\nno\nabout two minutes");
    let reply = assistant
        .handle_emergency(EmergencyRequest::new(text))
        .await
        .unwrap();
    assert_eq!(reply.matched_key.as_deref(), Some("collapsed"));
    assert_eq!(reply.phase, Some(MatchPhase::Exact));
    assert!(reply.guidance.contains("emergency services"));
}

#[tokio::test]
async fn reply_serializes_for_json_output() {
    let assistant = memory_assistant();
    let reply = assistant
        .handle_emergency(EmergencyRequest::new("wheezing badly after running"))
        .await
        .unwrap();

    let value = serde_json::to_value(&reply).unwrap();
    assert_eq!(value["matched_key"], "wheez");
    assert_eq!(value["phase"], "exact");
    assert_eq!(value["supplies"][0]["urgency"], "critical");
    assert!(value["follow_up_questions"].as_array().is_some_and(|q| !q.is_empty()));
}

#[tokio::test]
async fn metrics_track_default_and_personalized_replies() {
    let assistant = memory_assistant();
    let mut request = EmergencyRequest::new("my allergies are acting up with swelling");
    request.profile = Some(peanut_profile());

    assistant.handle_emergency(request).await.unwrap();
    assistant
        .handle_emergency(EmergencyRequest::new("xyzzy plugh"))
        .await
        .unwrap();

    let snapshot = assistant.metrics().snapshot();
    assert_eq!(snapshot.requests_total, 2);
    assert_eq!(snapshot.personalized_total, 1);
    assert_eq!(snapshot.default_guidance_total, 1);
    assert_eq!(snapshot.safe_fallback_total, 0);
}

#[tokio::test]
async fn purge_drops_only_old_history() {
    let assistant = sqlite_assistant().await.unwrap();
    assistant
        .handle_emergency(EmergencyRequest::new("nosebleed").for_user("sam"))
        .await
        .unwrap();

    let removed = assistant
        .purge_history_before(Utc::now() - Duration::days(1))
        .await
        .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(assistant.history("sam", 10).await.unwrap().len(), 1);

    let removed = assistant
        .purge_history_before(Utc::now() + Duration::minutes(1))
        .await
        .unwrap();
    assert_eq!(removed, 1);
}

#[tokio::test]
async fn corrupt_stored_profile_still_gets_guidance() {
    let store = SqliteStore::connect("sqlite::memory:")
        .await
        .expect("sqlite store should open");
    sqlx::query(
        "INSERT INTO profiles (user_id, profile_json, updated_at) VALUES ('u9', 'not json', '2026-01-01T00:00:00.000000Z')",
    )
    .execute(store.pool())
    .await
    .expect("raw insert should succeed");
    let assistant = EmergencyAssistant::new(Arc::new(store), GuidanceMetrics::shared());

    let reply = assistant
        .handle_emergency(EmergencyRequest::new("my info: choking").for_user("u9"))
        .await
        .expect("guidance must not depend on the profile row");
    assert_eq!(reply.matched_key.as_deref(), Some("choking"));
    assert!(!reply.personalized);
    assert!(!reply.safe_fallback);
    assert_eq!(assistant.metrics().snapshot().profile_load_failures, 1);

    let history = assistant.history("u9", 10).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn supplies_follow_the_guidance_not_the_personal_context() {
    let assistant = sqlite_assistant().await.expect("sqlite store should open");
    assistant
        .save_profile("alex", &peanut_profile())
        .await
        .expect("profile should save");

    let reply = assistant
        .handle_emergency(EmergencyRequest::new("my info: ankle is swollen").for_user("alex"))
        .await
        .unwrap();
    assert!(reply.personalized);
    assert_eq!(reply.supplies[0].name, "SAM splint");

    let reply = assistant
        .handle_emergency(EmergencyRequest::new("throat swelling after eating peanuts"))
        .await
        .unwrap();
    assert_eq!(reply.supplies[0].name, "Epinephrine auto-injector");
}
