//! # `trainer` – The umbrella crate
//!
//! Re-exports **`trainer-core`** so downstream users need a single
//! dependency line:
//!
//! | Module            | What it provides                                                  |
//! |-------------------|-------------------------------------------------------------------|
//! | `model`           | [`BaseModel`](model::BaseModel) and the lenient `AnyBaseModel`     |
//! | `training_info`   | Decoded *training info* / *training status* responses             |
//! | `error`           | `TrainerError` and the `Result` alias                             |
//! | `schema_util`     | JSON Schema rendering via `schemars`                              |
//!
//! Enable the `tracing` feature to get debug events when unknown base models
//! are passed through.
//!
//! ## Quick example
//!
//! ```rust
//! use trainer::{model::BaseModel, training_info::GetTrainingInfoResponse};
//!
//! let info = GetTrainingInfoResponse::from_json(r#"{"base_model":"MISTRAL_7b"}"#)?;
//! assert_eq!(info.base_model, BaseModel::Mistral7B);
//!
//! for model in BaseModel::iter() {
//!     println!("{model}");
//! }
//! # Ok::<(), trainer::error::TrainerError>(())
//! ```
#![doc(html_root_url = "https://docs.rs/trainer/latest")]

pub use trainer_core::*;
