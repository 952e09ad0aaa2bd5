use std::sync::LazyLock;

use academy_core::models::Period;
use regex::Regex;

// `<hour>[:<minutes>][<marker>]`, optionally introduced by "الساعة" ("at").
// A marker must end on a word boundary so that "4 مدرسة" does not read the
// first letter of the next word as the evening marker.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?:الساعة|الساعه)\s*)?([0-9]{1,2})(?::[0-9]{2})?(?:\s*(مساءً|مساءا|مساء|صباحاً|صباحا|صباح|pm|am|م|ص)\b)?",
    )
    .expect("valid time pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMatch {
    pub hour: u32,
    pub period: Period,
    /// Byte offset of the match within the clause
    pub offset: usize,
}

impl TimeMatch {
    /// Canonical display form. Minutes are not modeled and always render
    /// as `:00`.
    pub fn display(&self) -> String {
        self.period.format_hour(self.hour)
    }
}

/// Finds every time mention in `clause`, ordered by offset. Hour `0` is not
/// treated as a time.
pub fn find_times(clause: &str) -> Vec<TimeMatch> {
    TIME_PATTERN
        .captures_iter(clause)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
            if hour == 0 {
                return None;
            }
            let marker = caps.get(2).map(|m| m.as_str());
            Some(TimeMatch {
                hour,
                period: resolve_period(hour, marker),
                offset: whole.start(),
            })
        })
        .collect()
}

/// An explicit marker always wins. Without one, tutoring hours decide:
/// 12 and 1-6 are afternoon/evening classes, everything else is morning.
pub fn resolve_period(hour: u32, marker: Option<&str>) -> Period {
    if let Some(marker) = marker {
        let marker = marker.to_lowercase();
        return if marker == "pm" || marker.starts_with('م') {
            Period::Evening
        } else {
            Period::Morning
        };
    }
    match hour {
        12 | 1..=6 => Period::Evening,
        _ => Period::Morning,
    }
}
