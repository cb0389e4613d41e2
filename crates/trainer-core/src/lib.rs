//! Value types shared by everything that talks to the trainer.
//!
//! * [`model`] – the closed set of base-model identifiers.
//! * [`training_info`] – decoded response bodies that carry them.
//! * [`error`] – the crate-wide [`TrainerError`](error::TrainerError).
//! * [`schema_util`] – JSON Schema rendering for the above.

pub mod error;
pub mod model;
pub mod schema_util;
pub mod training_info;
