use thiserror::Error;

/// Matching failures. The public resolver absorbs every one of these into
/// the safe fallback; they surface only through `try_resolve` and table
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidanceError {
    #[error("{table} table has no entries")]
    EmptyTable { table: &'static str },

    #[error("{table} table has an invalid trigger key {key:?} (keys must be non-empty, trimmed and lowercase)")]
    InvalidKey { table: &'static str, key: String },

    #[error("{table} table has an empty payload for key {key:?}")]
    EmptyPayload { table: &'static str, key: String },

    #[error("{table} table maps key {key:?} to conflicting payloads")]
    ConflictingEntry { table: &'static str, key: String },

    #[error("supplies for key {key:?} are not ordered from most to least urgent")]
    UnorderedSupplies { key: String },
}
