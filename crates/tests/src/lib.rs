//! Shared fixtures for the integration tests under `tests/`.

use std::sync::Arc;

use lifeline_agents::EmergencyAssistant;
use lifeline_core::PersonalizationContext;
use lifeline_observability::GuidanceMetrics;
use lifeline_storage::{MemoryStore, Store};

pub fn memory_assistant() -> EmergencyAssistant<MemoryStore> {
    EmergencyAssistant::new(Arc::new(MemoryStore::new()), GuidanceMetrics::shared())
}

pub async fn sqlite_assistant() -> anyhow::Result<EmergencyAssistant<Store>> {
    let store = Store::sqlite("sqlite::memory:").await?;
    Ok(EmergencyAssistant::new(Arc::new(store), GuidanceMetrics::shared()))
}

pub fn peanut_profile() -> PersonalizationContext {
    PersonalizationContext {
        allergies: Some("peanuts".to_string()),
        emergency_contact_name: Some("Ana".to_string()),
        emergency_contact_phone: Some("555-0101".to_string()),
        ..PersonalizationContext::default()
    }
}

pub fn cardiac_profile() -> PersonalizationContext {
    PersonalizationContext {
        conditions: vec!["Coronary artery disease".to_string(), "Asthma".to_string()],
        medications: Some("aspirin, nitroglycerin".to_string()),
        age: Some(67),
        sex: Some("male".to_string()),
        emergency_contact_name: Some("Rosa".to_string()),
        emergency_contact_phone: Some("555-0199".to_string()),
        ..PersonalizationContext::default()
    }
}
