use serde::{Deserialize, Serialize};

use crate::models::schedule::{Day, ScheduleSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseScheduleRequest {
    pub text: String,
    /// Grade the schedule belongs to, passed on to the language model
    #[serde(default)]
    pub grade: Option<String>,
    /// Schedule the parsed result is merged into
    #[serde(default)]
    pub existing: Option<Vec<Day>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseScheduleResponse {
    pub schedule: Vec<Day>,
    pub source: ScheduleSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeScheduleRequest {
    #[serde(default)]
    pub existing: Vec<Day>,
    pub incoming: Vec<Day>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeScheduleResponse {
    pub schedule: Vec<Day>,
}
