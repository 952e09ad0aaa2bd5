use serde::{Deserialize, Deserializer, Serialize};

/// One flat `{day, subject, time}` record as returned by a language model.
///
/// Models are asked for a flat array because it is easier for them to emit
/// reliably; the extractor crate nests these into [`crate::models::Day`]s.
/// A missing or `null` field reads as an empty string so one incomplete row
/// does not sink the rest of the array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub day: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
