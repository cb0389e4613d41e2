//! Helpers for turning Rust type information into JSON Schema. The JSON is
//! produced with [`schemars`] and documents the shapes the trainer sends
//! back, e.g. the accepted values of `base_model`.

use schemars::{r#gen::SchemaSettings, JsonSchema, SchemaGenerator};
use serde_json::Value;

use crate::error::Result;

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// # Errors
///
/// [`crate::error::TrainerError::Serialization`] if the generated schema
/// cannot be turned into a [`Value`].
///
/// # Example
///
/// ```
/// use trainer_core::{model::BaseModel, schema_util::derive_response_schema};
///
/// let schema = derive_response_schema::<BaseModel>().unwrap();
/// assert_eq!(schema["enum"][1], "LLAMA2_13b");
/// ```
pub fn derive_response_schema<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    Ok(serde_json::to_value(root)?)
}
