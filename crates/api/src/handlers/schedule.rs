//! # Schedule Handlers
//!
//! Parsing free-form schedule text and merging parsed results into an
//! existing schedule. Parsing prefers the configured language model and
//! falls back to the rule-based extractor; the response says which one
//! produced the schedule.

use axum::{Json, extract::State};
use std::sync::Arc;
use academy_core::{
    errors::ScheduleError,
    models::{
        MergeScheduleRequest, MergeScheduleResponse, ParseScheduleRequest, ParseScheduleResponse,
        merge_schedules,
    },
};
use academy_extractor::model::parse_with_fallback;
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn parse_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ParseScheduleRequest>,
) -> Result<Json<ParseScheduleResponse>, AppError> {
    if payload.text.trim().is_empty() {
        return Err(AppError(ScheduleError::Validation(
            "Schedule text is empty".to_string(),
        )));
    }

    let length = payload.text.chars().count();
    if length > state.max_input_chars {
        return Err(AppError(ScheduleError::Validation(format!(
            "Schedule text is {} characters long, the limit is {}",
            length, state.max_input_chars
        ))));
    }

    let (schedule, source) = parse_with_fallback(
        state.model.as_deref(),
        &payload.text,
        payload.grade.as_deref(),
    )
    .await;

    info!(days = schedule.len(), ?source, "parsed schedule text");

    // Merge into the caller's schedule if one was sent
    let schedule = match payload.existing {
        Some(existing) => merge_schedules(existing, schedule),
        None => schedule,
    };

    Ok(Json(ParseScheduleResponse { schedule, source }))
}

#[axum::debug_handler]
pub async fn merge_schedule(
    Json(payload): Json<MergeScheduleRequest>,
) -> Result<Json<MergeScheduleResponse>, AppError> {
    let schedule = merge_schedules(payload.existing, payload.incoming);

    Ok(Json(MergeScheduleResponse { schedule }))
}
