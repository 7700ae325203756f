//! Error types shared across crates.

use thiserror::Error;

/// Failure of an entity pool operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Every entity is active. Expected under load; callers pick the
    /// degradation policy.
    #[error("pool exhausted: all {capacity} entities are active")]
    Exhausted { capacity: usize },

    /// The handle is not currently active in this pool (double release,
    /// stale generation or foreign handle). Indicates a caller bug.
    #[error("entity {index} (generation {generation}) is not owned by this pool")]
    NotOwned { index: u32, generation: u32 },
}

/// Failure to load or validate simulation tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
