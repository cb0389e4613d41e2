//! Base-model identifiers reported by the trainer.
//!
//! Every fine-tuning job starts from one of a handful of pretrained models.
//! The trainer names them with fixed wire strings, and those strings are
//! **not** uniformly cased: `LLAMA2_13b`, `LLAMA2_7b` and `MISTRAL_7b` end in
//! a lowercase `b` while the rest are all caps. The table below is the
//! external contract and is reproduced byte-for-byte.
//!
//! | Variant                       | Wire string      |
//! |-------------------------------|------------------|
//! | [`BaseModel::Gpt3_5Turbo`]    | `GPT_3_5_TURBO`  |
//! | [`BaseModel::Llama2_13B`]     | `LLAMA2_13b`     |
//! | [`BaseModel::Llama2_7B`]      | `LLAMA2_7b`      |
//! | [`BaseModel::Mistral7B`]      | `MISTRAL_7b`     |
//! | [`BaseModel::OpenHermes2_5`]  | `OPENHERMES_2_5` |
//! | [`BaseModel::Zephyr7BBeta`]   | `ZEPHYR_7B_BETA` |
//!
//! # Adding more models
//!
//! 1. Add the variant to [`BaseModel`] and append it to [`BaseModel::ALL`].
//! 2. Give it a wire string in [`BaseModel::as_str`] and [`BaseModel::from_str`].
//!    The compiler flags a missing arm in `as_str`.
//!
//! # Example
//!
//! ```rust
//! use trainer_core::model::BaseModel;
//!
//! let model: BaseModel = "LLAMA2_13b".parse().unwrap();
//! assert_eq!(model, BaseModel::Llama2_13B);
//! assert_eq!(model.to_string(), "LLAMA2_13b");
//! assert!("LLAMA2_13B".parse::<BaseModel>().is_err());
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use schemars::{
    r#gen::SchemaGenerator,
    schema::{InstanceType, Schema, SchemaObject},
    JsonSchema,
};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TrainerError};

/// Pretrained model a training job is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseModel {
    /// `GPT_3_5_TURBO`
    Gpt3_5Turbo,
    /// `LLAMA2_13b`
    Llama2_13B,
    /// `LLAMA2_7b`
    Llama2_7B,
    /// `MISTRAL_7b`
    Mistral7B,
    /// `OPENHERMES_2_5`
    OpenHermes2_5,
    /// `ZEPHYR_7B_BETA`
    Zephyr7BBeta,
}

impl BaseModel {
    /// Every variant, in declaration order.
    pub const ALL: [BaseModel; 6] = [
        BaseModel::Gpt3_5Turbo,
        BaseModel::Llama2_13B,
        BaseModel::Llama2_7B,
        BaseModel::Mistral7B,
        BaseModel::OpenHermes2_5,
        BaseModel::Zephyr7BBeta,
    ];

    /// Canonical wire string.
    pub const fn as_str(self) -> &'static str {
        match self {
            BaseModel::Gpt3_5Turbo => "GPT_3_5_TURBO",
            BaseModel::Llama2_13B => "LLAMA2_13b",
            BaseModel::Llama2_7B => "LLAMA2_7b",
            BaseModel::Mistral7B => "MISTRAL_7b",
            BaseModel::OpenHermes2_5 => "OPENHERMES_2_5",
            BaseModel::Zephyr7BBeta => "ZEPHYR_7B_BETA",
        }
    }

    /// Iterate over all variants in declaration order.
    ///
    /// Each call returns a fresh iterator, so the sequence can be walked as
    /// often as needed (validation messages, pickers, docs).
    pub fn iter() -> impl ExactSizeIterator<Item = BaseModel> + Clone {
        Self::ALL.into_iter()
    }
}

impl Display for BaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for BaseModel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<BaseModel> for &'static str {
    fn from(val: BaseModel) -> Self {
        val.as_str()
    }
}

impl FromStr for BaseModel {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GPT_3_5_TURBO" => Ok(BaseModel::Gpt3_5Turbo),
            "LLAMA2_13b" => Ok(BaseModel::Llama2_13B),
            "LLAMA2_7b" => Ok(BaseModel::Llama2_7B),
            "MISTRAL_7b" => Ok(BaseModel::Mistral7B),
            "OPENHERMES_2_5" => Ok(BaseModel::OpenHermes2_5),
            "ZEPHYR_7B_BETA" => Ok(BaseModel::Zephyr7BBeta),
            other => Err(TrainerError::unrecognized(other)),
        }
    }
}

impl TryFrom<&str> for BaseModel {
    type Error = TrainerError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for BaseModel {
    type Error = TrainerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Serialize for BaseModel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseModel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<BaseModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BaseModelVisitor;

        impl Visitor<'_> for BaseModelVisitor {
            type Value = BaseModel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base model identifier string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<BaseModel, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BaseModelVisitor)
    }
}

impl JsonSchema for BaseModel {
    fn schema_name() -> String {
        "BaseModel".to_owned()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(
                BaseModel::iter()
                    .map(|model| serde_json::Value::from(model.as_str()))
                    .collect(),
            ),
            ..Default::default()
        }
        .into()
    }
}

/// A base model as reported by the trainer, tolerating identifiers this
/// crate does not know yet.
///
/// * `Known` – one of the [`BaseModel`] variants.
/// * `Other` – anything else, kept verbatim so it can be echoed back.
///
/// Use [`BaseModel`] directly when an unknown identifier should be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyBaseModel {
    Known(BaseModel),
    Other(String),
}

impl AnyBaseModel {
    /// Total counterpart of [`BaseModel::from_str`].
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.parse::<BaseModel>() {
            Ok(model) => AnyBaseModel::Known(model),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(value = %value, "keeping unrecognized base model as passthrough");
                AnyBaseModel::Other(value)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnyBaseModel::Known(model) => model.as_str(),
            AnyBaseModel::Other(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<BaseModel> {
        match self {
            AnyBaseModel::Known(model) => Some(*model),
            AnyBaseModel::Other(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, AnyBaseModel::Known(_))
    }
}

impl From<BaseModel> for AnyBaseModel {
    fn from(val: BaseModel) -> Self {
        AnyBaseModel::Known(val)
    }
}

impl Display for AnyBaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AnyBaseModel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnyBaseModel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<AnyBaseModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(AnyBaseModel::parse)
    }
}

impl JsonSchema for AnyBaseModel {
    fn schema_name() -> String {
        "AnyBaseModel".to_owned()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
