pub mod error;
pub mod knowledge;
mod knowledge_data;
pub mod matcher;
pub mod models;
pub mod personalization;
pub mod questions;
pub mod resolver;
pub mod supplies;

pub use error::GuidanceError;
pub use knowledge::{KnowledgeBase, KnowledgeStats};
pub use knowledge_data::BREATHING_STATUS_QUESTION;
pub use matcher::{ClassificationResult, KeywordMatch, KeywordTable, MatchPhase, MatchStrategy};
pub use models::*;
pub use personalization::{DisclosedField, DisclosureResult, PersonalizationComposer};
pub use questions::follow_up_questions;
pub use resolver::{resolve_guidance, GuidanceResolver, SAFE_FALLBACK_GUIDANCE};
pub use supplies::{at_least, supply_recommendations, top_supplies};
