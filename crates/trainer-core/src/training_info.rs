//! Response bodies returned by the trainer for a single training job.
//!
//! Only the decoding side lives here. Fetching the JSON is left to whatever
//! HTTP layer the caller already has.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::BaseModel;

/// Body of the *get training info* endpoint.
///
/// `base_model` is strict: an identifier outside [`BaseModel`] fails the
/// whole decode with an `unrecognized base model` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GetTrainingInfoResponse {
    /// Pretrained model the job fine-tunes.
    pub base_model: BaseModel,
    /// Hugging Face repository the weights are pushed to, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hugging_face_model_id: Option<String>,
}

impl GetTrainingInfoResponse {
    pub fn new(base_model: BaseModel) -> Self {
        Self {
            base_model,
            hugging_face_model_id: None,
        }
    }

    pub fn with_hugging_face_model_id(mut self, id: impl ToString) -> Self {
        self.hugging_face_model_id = Some(id.to_string());
        self
    }

    /// Decode a JSON body.
    ///
    /// # Errors
    ///
    /// [`crate::error::TrainerError::Serialization`] for malformed JSON,
    /// missing fields or an unrecognized `base_model`.
    pub fn from_json(body: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(body)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(base_model = %parsed.base_model, "decoded training info");

        Ok(parsed)
    }
}

/// State of a training job as reported by the *training status* endpoint.
///
/// The trainer only commits to `done` and `error`; every other value means
/// the job is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    Done,
    Error,
    #[serde(other)]
    Running,
}

impl TrainingStatus {
    /// `true` once the job will not change state anymore.
    pub fn is_finished(self) -> bool {
        matches!(self, TrainingStatus::Done | TrainingStatus::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrainingStatusResponse {
    pub status: TrainingStatus,
}

impl TrainingStatusResponse {
    /// Decode a JSON body.
    ///
    /// # Errors
    ///
    /// [`crate::error::TrainerError::Serialization`] for malformed JSON or a
    /// missing `status` field.
    pub fn from_json(body: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(body)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(status = ?parsed.status, "decoded training status");

        Ok(parsed)
    }
}
