use chrono::Weekday;

use crate::{days::DayMatch, times::TimeMatch};

/// Pairs each day mentioned in a clause with the time it refers to.
///
/// - no time: nothing is scheduled
/// - one time: it is shared by every day ("Saturday and Monday at 4")
/// - several times: a day takes the first time between it and the next day
///   ("Saturday 4, Monday 6"), or the clause's last time if none is there
pub fn associate<'a>(days: &[DayMatch], times: &'a [TimeMatch]) -> Vec<(Weekday, &'a TimeMatch)> {
    match times {
        [] => Vec::new(),
        [only] => days.iter().map(|day| (day.weekday, only)).collect(),
        [.., last] => days
            .iter()
            .enumerate()
            .map(|(index, day)| {
                let next_day = days.get(index + 1).map_or(usize::MAX, |next| next.offset);
                let time = times
                    .iter()
                    .find(|time| time.offset > day.offset && time.offset < next_day)
                    .unwrap_or(last);
                (day.weekday, time)
            })
            .collect(),
    }
}
