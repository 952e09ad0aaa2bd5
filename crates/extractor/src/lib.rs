//! # Academy Schedule Extractor
//!
//! Turns a free-form sentence describing a weekly class schedule into a
//! structured, de-duplicated, day-indexed schedule. Input is typically mixed
//! Arabic/English, colloquial, and loosely punctuated:
//!
//! ```text
//! انجليزي. السبت 5 والاثنين 6
//! ```
//!
//! ## Pipeline
//!
//! 1. **Segment** the raw text into clauses on newlines, periods and Arabic
//!    commas.
//! 2. **Normalize** each clause (punctuation, glued conjunctions, digits).
//! 3. **Track the subject**: a clause naming a subject but no day and no digit
//!    only sets the subject for the clauses that follow it.
//! 4. **Scan** schedule clauses for weekday aliases and times, keeping offsets.
//! 5. **Associate** days with times and emit one slot per pair. Duplicate
//!    sessions within a day are dropped as they are inserted.
//!
//! If nothing at all is understood from non-blank text, a single sentinel slot
//! is returned (see [`is_fallback`]) so callers always get something to show.
//!
//! The [`model`] module holds the seams around an optional language-model
//! parser, which is preferred when available and falls back to
//! [`extract_schedule`].

pub mod associate;
pub mod context;
pub mod days;
pub mod model;
pub mod normalize;
pub mod segment;
pub mod times;

use academy_core::{
    models::{Day, ScheduleBuilder, Slot, SlotStyle},
    vocabulary::{ArabicWeekday, find_subject},
};
use chrono::Weekday;
use tracing::{debug, trace};

use crate::{
    associate::associate, context::SubjectContext, days::find_days, normalize::normalize,
    segment::segment, times::find_times,
};

/// Day the sentinel slot is placed on.
pub const FALLBACK_DAY: Weekday = Weekday::Sun;
/// Time of the sentinel slot.
pub const FALLBACK_TIME: &str = "9:00 ص";
const FALLBACK_SUBJECT_CHARS: usize = 30;

/// Extracts a weekly schedule from free-form text.
///
/// Never fails. Blank input yields an empty schedule; non-blank input that
/// contains no usable day/time pair yields the fallback sentinel.
pub fn extract_schedule(text: &str) -> Vec<Day> {
    let mut builder = ScheduleBuilder::new();
    let mut context = SubjectContext::default();

    for raw_clause in segment(text) {
        let clause = normalize(raw_clause);
        let subject = find_subject(&clause).map(SubjectContext::from);
        let days = find_days(&clause);
        let has_digit = clause.chars().any(|c| c.is_ascii_digit());

        if let Some(subject) = subject {
            if days.is_empty() && !has_digit {
                debug!(subject = subject.subject, "subject context switched");
                context = subject;
                continue;
            }
        }

        if days.is_empty() {
            trace!(clause = %clause, "no weekday in clause");
            continue;
        }

        let active = subject.unwrap_or(context);
        let times = find_times(&clause);
        debug!(
            clause = %clause,
            days = days.len(),
            times = times.len(),
            subject = active.subject,
            "schedule clause"
        );

        for (weekday, time) in associate(&days, &times) {
            let time_text = time.display();
            let slot = Slot::new(active.subject, time_text.as_str(), active.style);
            if !builder.add_slot(weekday.arabic_name(), slot) {
                trace!(day = weekday.arabic_name(), time = %time_text, "duplicate slot dropped");
            }
        }
    }

    if builder.is_empty() && !text.trim().is_empty() {
        debug!("nothing extracted, returning fallback slot");
        return fallback(text);
    }

    builder.build()
}

fn fallback(text: &str) -> Vec<Day> {
    let subject: String = text.trim().chars().take(FALLBACK_SUBJECT_CHARS).collect();
    let mut day = Day::new(FALLBACK_DAY.arabic_name());
    day.push_slot(Slot::new(subject, FALLBACK_TIME, SlotStyle::FALLBACK));
    vec![day]
}

/// Whether `days` is the sentinel [`extract_schedule`] returns for text it
/// could not understand.
///
/// A real schedule can only look like this if it consists of exactly one
/// Sunday 9 AM slot with the sentinel styling.
pub fn is_fallback(days: &[Day]) -> bool {
    match days {
        [day] => {
            day.day == FALLBACK_DAY.arabic_name()
                && matches!(
                    day.slots.as_slice(),
                    [slot] if slot.time == FALLBACK_TIME
                        && slot.color == SlotStyle::FALLBACK.color
                        && slot.icon == SlotStyle::FALLBACK.icon
                )
        }
        _ => false,
    }
}
