use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use lifeline_core::{
    follow_up_questions, supply_recommendations, top_supplies, GuidanceResolver, MatchPhase,
    PersonalizationContext, SupplyRecommendation,
};
use lifeline_observability::{GuidanceMetrics, Resolution, StorageOp};
use lifeline_storage::{HistoryEntry, HistoryRepository, ProfileRepository};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Supplies attached to a reply; the full list stays available via `supplies`.
pub const REPLY_SUPPLY_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmergencyRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub text: String,
    /// Overrides the emergency text when choosing supplies.
    #[serde(default)]
    pub category_hint: Option<String>,
    /// Used instead of the stored profile when present.
    #[serde(default)]
    pub profile: Option<PersonalizationContext>,
}

impl EmergencyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceReply {
    pub request_id: String,
    pub guidance: String,
    pub matched_key: Option<String>,
    pub phase: Option<MatchPhase>,
    pub personalized: bool,
    pub safe_fallback: bool,
    pub follow_up_questions: Vec<String>,
    pub supplies: Vec<SupplyRecommendation>,
}

#[derive(Clone)]
pub struct EmergencyAssistant<S>
where
    S: ProfileRepository + HistoryRepository,
{
    resolver: GuidanceResolver<'static>,
    store: Arc<S>,
    metrics: Arc<GuidanceMetrics>,
}

impl<S> EmergencyAssistant<S>
where
    S: ProfileRepository + HistoryRepository,
{
    pub fn new(store: Arc<S>, metrics: Arc<GuidanceMetrics>) -> Self {
        Self::with_resolver(GuidanceResolver::standard(), store, metrics)
    }

    pub fn with_resolver(
        resolver: GuidanceResolver<'static>,
        store: Arc<S>,
        metrics: Arc<GuidanceMetrics>,
    ) -> Self {
        Self {
            resolver,
            store,
            metrics,
        }
    }

    pub fn metrics(&self) -> &GuidanceMetrics {
        &self.metrics
    }

    #[instrument(skip(self, request), fields(user_id = request.user_id.as_deref().unwrap_or("-")))]
    pub async fn handle_emergency(&self, request: EmergencyRequest) -> Result<GuidanceReply> {
        let started = Instant::now();

        // Storage failures degrade to unpersonalized guidance; they never
        // withhold it.
        let profile = match (request.profile, request.user_id.as_deref()) {
            (Some(profile), _) => Some(profile),
            (None, Some(user_id)) => match self.store.load_profile(user_id).await {
                Ok(profile) => profile,
                Err(error) => {
                    self.metrics.storage_failure(StorageOp::LoadProfile);
                    warn!(user_id, error = %error, "profile unavailable, continuing without it");
                    None
                }
            },
            (None, None) => None,
        };

        let outcome = self.resolver.resolve_detailed(&request.text, profile.as_ref());
        let resolution = match (outcome.safe_fallback, outcome.phase) {
            (true, _) => Resolution::SafeFallback,
            (false, Some(MatchPhase::Exact)) => Resolution::Exact,
            (false, Some(MatchPhase::Scored)) => Resolution::Scored,
            (false, None) => Resolution::Default,
        };

        let questions = follow_up_questions(&request.text);
        let supply_hint = request.category_hint.as_deref().unwrap_or(&request.text);
        let supplies = top_supplies(
            &supply_recommendations(supply_hint, Some(outcome.guidance)),
            REPLY_SUPPLY_LIMIT,
        );

        if let Some(user_id) = request.user_id.as_deref() {
            let entry = HistoryEntry::new(
                user_id,
                &request.text,
                &outcome.text,
                outcome.matched_key.as_deref(),
                outcome.personalized,
            );
            if let Err(error) = self.store.append_history(&entry).await {
                self.metrics.storage_failure(StorageOp::AppendHistory);
                warn!(user_id, error = %error, "failed recording guidance history");
            }
        }

        let request_id = Uuid::new_v4().to_string();
        self.metrics
            .record(resolution, outcome.personalized, started.elapsed());
        info!(
            request_id = %request_id,
            matched_key = outcome.matched_key.as_deref().unwrap_or("<default>"),
            resolution = ?resolution,
            personalized = outcome.personalized,
            safe_fallback = outcome.safe_fallback,
            questions = questions.len(),
            "emergency handled"
        );

        Ok(GuidanceReply {
            request_id,
            guidance: outcome.text,
            matched_key: outcome.matched_key,
            phase: outcome.phase,
            personalized: outcome.personalized,
            safe_fallback: outcome.safe_fallback,
            follow_up_questions: questions,
            supplies,
        })
    }

    pub fn questions(&self, emergency_text: &str) -> Vec<String> {
        follow_up_questions(emergency_text)
    }

    pub fn supplies(
        &self,
        category_hint: &str,
        guidance_text: Option<&str>,
    ) -> Vec<SupplyRecommendation> {
        supply_recommendations(category_hint, guidance_text)
    }

    pub async fn history(&self, user_id: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        self.store.list_history(user_id, limit).await
    }

    pub async fn profile(&self, user_id: &str) -> Result<Option<PersonalizationContext>> {
        self.store.load_profile(user_id).await
    }

    pub async fn save_profile(&self, user_id: &str, profile: &PersonalizationContext) -> Result<()> {
        self.store.upsert_profile(user_id, profile).await?;
        info!(user_id, "profile saved");
        Ok(())
    }

    pub async fn purge_history_before(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let removed = self.store.purge_before(cutoff).await?;
        info!(removed, "history purged");
        Ok(removed)
    }
}
