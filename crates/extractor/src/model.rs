//! # Language-model seams
//!
//! The surrounding system prefers a language model's reading of the schedule
//! text and uses [`extract_schedule`] when no model is configured or the model
//! call fails. The model client itself lives outside this crate; it only has
//! to implement [`ScheduleModel`].
//!
//! Model output goes through the same data model as the extractor's: day
//! names are canonicalized, subjects are styled from the vocabulary and
//! duplicate sessions are dropped, so both sources are interchangeable
//! downstream.

use academy_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{Day, ModelEntry, ScheduleBuilder, ScheduleSource, Slot, SlotStyle},
    vocabulary::{ArabicWeekday, SUBJECTS, lookup_day},
};
use async_trait::async_trait;
use serde_json::from_str;
use tracing::{debug, error, info, warn};

use crate::{extract_schedule, is_fallback, times::find_times};

/// A text-completion backend able to answer the schedule prompt.
#[async_trait]
pub trait ScheduleModel: Send + Sync {
    /// Sends `prompt` to the model and returns its raw text answer.
    async fn complete(&self, prompt: &str) -> ScheduleResult<String>;
}

const PROMPT: &str = "You organize weekly class schedules for a tutoring academy. \
Convert the free-form text below into a flat JSON array.

Rules:
1. Each element has exactly the keys \"day\", \"subject\" and \"time\".
2. Use only these day names: السبت، الأحد، الإثنين، الثلاثاء، الأربعاء، الخميس، الجمعة.
3. Write times as \"H:MM م\" for afternoon/evening and \"H:MM ص\" for morning.
4. Correct misspelled subject names and write them in Arabic.
5. If the same class appears twice on the same day at the same time, list it once.
6. Output only the JSON array, with no explanation and no markdown.

{GRADE}Text:
\"{TEXT}\"";

/// Builds the instruction prompt for `text`, optionally naming the grade the
/// schedule belongs to.
pub fn schedule_prompt(text: &str, grade: Option<&str>) -> String {
    let grade_line = grade
        .map(str::trim)
        .filter(|grade| !grade.is_empty())
        .map(|grade| format!("Grade: {grade}\n"))
        .unwrap_or_default();
    PROMPT
        .replace("{GRADE}", &grade_line)
        .replace("{TEXT}", text.trim())
}

/// Extracts the JSON array of entries from a model answer.
///
/// Models regularly wrap the array in a markdown fence or surround it with
/// prose, so after a direct parse this retries on the fenced body and then on
/// the outermost `[...]` span.
pub fn parse_model_response(raw: &str) -> ScheduleResult<Vec<ModelEntry>> {
    let trimmed = strip_code_fence(raw.trim());

    if let Ok(entries) = from_str::<Vec<ModelEntry>>(trimmed) {
        return Ok(entries);
    }

    match (trimmed.find('['), trimmed.rfind(']')) {
        (Some(start), Some(end)) if start < end => {
            from_str(&trimmed[start..=end]).map_err(|e| {
                error!("Found JSON-like array but couldn't parse it: {}", e);
                ScheduleError::ModelResponse(e.to_string())
            })
        }
        _ => Err(ScheduleError::ModelResponse(
            "no JSON array found in model response".to_string(),
        )),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim_start_matches("json").trim()
}

/// Nests flat model entries into days.
///
/// Entries missing a day, subject or time are skipped.
pub fn from_model_entries(entries: Vec<ModelEntry>) -> Vec<Day> {
    let mut builder = ScheduleBuilder::new();

    for entry in entries {
        let day = canonical_day(&entry.day);
        let (subject, style) = style_subject(&entry.subject);
        let time = canonical_time(&entry.time);

        if day.is_empty() || subject.is_empty() || time.is_empty() {
            warn!(?entry, "skipping incomplete model entry");
            continue;
        }

        builder.add_slot(&day, Slot::new(subject, time, style));
    }

    builder.build()
}

fn canonical_day(raw: &str) -> String {
    lookup_day(raw)
        .map(|weekday| weekday.arabic_name().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

// "04:00 م" and "4:00 م" must compare equal for duplicate suppression, so a
// single recognizable 12-hour time is rewritten in display form. Anything
// else (ranges, 24-hour times) is kept verbatim.
fn canonical_time(raw: &str) -> String {
    let raw = raw.trim();
    match find_times(raw).as_slice() {
        [time] if (1..=12).contains(&time.hour) => time.display(),
        _ => raw.to_string(),
    }
}

/// Styles a subject name from the vocabulary.
///
/// A subject that contains a vocabulary keyword, or is a fragment of a
/// canonical name, takes that entry's style. Fragments are replaced by the
/// full canonical name. Unknown subjects keep their text and get the neutral
/// style.
pub fn style_subject(subject: &str) -> (String, SlotStyle) {
    let subject = subject.trim();
    if subject.is_empty() {
        return (String::new(), SlotStyle::NEUTRAL);
    }

    let lowered = subject.to_lowercase();
    for entry in SUBJECTS {
        let fragment_of_name = entry.name.contains(subject);
        if fragment_of_name || entry.matches(&lowered) {
            let name = if fragment_of_name { entry.name } else { subject };
            return (name.to_string(), entry.style);
        }
    }

    (subject.to_string(), SlotStyle::NEUTRAL)
}

/// Asks `model` for the schedule and normalizes its answer.
pub async fn model_schedule(
    model: &dyn ScheduleModel,
    text: &str,
    grade: Option<&str>,
) -> ScheduleResult<Vec<Day>> {
    let raw = model.complete(&schedule_prompt(text, grade)).await?;
    debug!(response_len = raw.len(), "received model response");
    let entries = parse_model_response(&raw)?;
    Ok(from_model_entries(entries))
}

/// Parses `text` with the model when one is given, falling back to the
/// rule-based extractor when there is no model, the call fails, or the
/// answer holds no usable entry.
pub async fn parse_with_fallback(
    model: Option<&dyn ScheduleModel>,
    text: &str,
    grade: Option<&str>,
) -> (Vec<Day>, ScheduleSource) {
    let Some(model) = model else {
        warn!("Schedule model not configured, using rule-based extractor");
        return rule_based(text);
    };

    match model_schedule(model, text, grade).await {
        Ok(days) if !days.is_empty() => {
            info!(days = days.len(), "schedule parsed by model");
            (days, ScheduleSource::Model)
        }
        Ok(_) => {
            warn!("Model returned an empty schedule, using rule-based extractor");
            rule_based(text)
        }
        Err(err) => {
            error!("Model schedule parsing failed, using rule-based extractor: {}", err);
            rule_based(text)
        }
    }
}

fn rule_based(text: &str) -> (Vec<Day>, ScheduleSource) {
    let days = extract_schedule(text);
    let source = if is_fallback(&days) {
        ScheduleSource::Fallback
    } else {
        ScheduleSource::Rules
    };
    (days, source)
}
