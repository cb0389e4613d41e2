//! Unified error type exposed by **`trainer-core`**.
//!
//! Parsing never recovers on its own: every failure is handed back to the
//! caller, which decides whether an unknown value is fatal or should be kept
//! around as an opaque string (see [`crate::model::AnyBaseModel`]).

use thiserror::Error;

use crate::model::BaseModel;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TrainerError>;

#[derive(Debug, Error)]
pub enum TrainerError {
    /// The string is not one of the canonical base-model identifiers.
    /// Matching is exact and case-sensitive.
    #[error("unrecognized base model `{value}`, expected one of: {}", expected_values())]
    UnrecognizedValue { value: String },

    /// Failure while deserialising a JSON payload received from the trainer.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrainerError {
    pub(crate) fn unrecognized(value: impl Into<String>) -> Self {
        TrainerError::UnrecognizedValue {
            value: value.into(),
        }
    }
}

fn expected_values() -> String {
    BaseModel::iter()
        .map(BaseModel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
