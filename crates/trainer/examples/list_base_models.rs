//! Prints every supported base model and the JSON Schema of the training
//! info response.
//!
//! ```bash
//! cargo run -p trainer --example list_base_models
//! ```

use trainer::{
    model::{AnyBaseModel, BaseModel},
    schema_util::derive_response_schema,
    training_info::GetTrainingInfoResponse,
};

fn main() -> anyhow::Result<()> {
    println!("Supported base models:");
    for model in BaseModel::iter() {
        println!("  {model:?} => {model}");
    }

    for raw in ["MISTRAL_7b", "MISTRAL_7B"] {
        match raw.parse::<BaseModel>() {
            Ok(model) => println!("{raw:?} parsed as {model:?}"),
            Err(err) => println!("{raw:?} rejected: {err}"),
        }
    }

    let passthrough = AnyBaseModel::parse("LLAMA3_8b");
    println!("lenient parse keeps {passthrough} (known: {})", passthrough.is_known());

    let schema = derive_response_schema::<GetTrainingInfoResponse>()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
