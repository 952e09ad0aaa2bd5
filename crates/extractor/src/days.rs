use std::cmp::Reverse;
use std::sync::LazyLock;

use academy_core::vocabulary::{DAY_ALIASES, lookup_day};
use chrono::Weekday;
use regex::Regex;

// One alternation over every alias, longest first. The regex engine prefers
// the earliest alternative at a given position, so "الاربعاء" is matched
// whole instead of as the shorter "اربع" inside it.
static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let mut aliases: Vec<&str> = DAY_ALIASES.iter().map(|(alias, _)| *alias).collect();
    aliases.sort_by_key(|alias| Reverse(alias.chars().count()));
    let alternation = aliases
        .iter()
        .map(|alias| regex::escape(alias))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("valid day alias pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMatch {
    pub weekday: Weekday,
    /// Byte offset of the alias within the clause
    pub offset: usize,
}

/// Finds every weekday mention in `clause`, ordered by offset.
///
/// Matches never overlap, so each offset appears at most once.
pub fn find_days(clause: &str) -> Vec<DayMatch> {
    DAY_PATTERN
        .find_iter(clause)
        .filter_map(|m| {
            lookup_day(m.as_str()).map(|weekday| DayMatch {
                weekday,
                offset: m.start(),
            })
        })
        .collect()
}
