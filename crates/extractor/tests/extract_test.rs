use std::collections::HashSet;

use academy_core::models::Day;
use academy_extractor::{FALLBACK_TIME, extract_schedule, is_fallback};
use fake::{Fake, faker::lorem::en::Sentence};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// `(day, subject, time)` for every slot, in output order.
fn flatten(days: &[Day]) -> Vec<(String, String, String)> {
    days.iter()
        .flat_map(|day| {
            day.slots
                .iter()
                .map(|slot| (day.day.clone(), slot.subject.clone(), slot.time.clone()))
        })
        .collect()
}

fn row(day: &str, subject: &str, time: &str) -> (String, String, String) {
    (day.to_string(), subject.to_string(), time.to_string())
}

#[test_log::test]
fn test_shared_time_applies_to_every_day() {
    let days = extract_schedule("السبت والاثنين الساعة 4 رياضيات");

    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "الرياضيات", "4:00 م"),
            row("الإثنين", "الرياضيات", "4:00 م"),
        ]
    );
    assert_eq!(days[0].slots[0].color, "bg-blue-100 text-blue-800");
    assert_eq!(days[0].slots[0].icon, "📐");
}

#[test_log::test]
fn test_each_day_takes_following_time() {
    let days = extract_schedule("السبت 4 الاثنين 6 عربي");

    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "اللغة العربية", "4:00 م"),
            row("الإثنين", "اللغة العربية", "6:00 م"),
        ]
    );
}

#[test_log::test]
fn test_subject_context_carries_over() {
    let days = extract_schedule("انجليزي. السبت 5. الاحد 6.");

    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "اللغة الإنجليزية", "5:00 م"),
            row("الأحد", "اللغة الإنجليزية", "6:00 م"),
        ]
    );
    assert_eq!(days[1].slots[0].icon, "🅰️");
}

#[test]
fn test_duplicate_sessions_are_suppressed() {
    let days = extract_schedule("السبت 4 رياضيات السبت 4 رياضيات");

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].day, "السبت");
    assert_eq!(days[0].slots.len(), 1);
}

#[test]
fn test_gibberish_falls_back_to_sentinel() {
    let days = extract_schedule("xyz123 not a schedule");

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].day, "الأحد");
    assert_eq!(days[0].slots.len(), 1);
    assert_eq!(days[0].slots[0].subject, "xyz123 not a schedule");
    assert_eq!(days[0].slots[0].time, FALLBACK_TIME);
    assert!(is_fallback(&days));
}

#[test]
fn test_fallback_subject_is_truncated_to_thirty_chars() {
    let input = format!("  {}  ", "x".repeat(45));
    let days = extract_schedule(&input);

    assert_eq!(days[0].slots[0].subject, "x".repeat(30));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(" \n\t \n")]
fn test_blank_input_yields_empty_schedule(#[case] input: &str) {
    assert!(extract_schedule(input).is_empty());
}

#[test]
fn test_same_day_mentions_merge_into_one_entry() {
    let days = extract_schedule("السبت 4 رياضيات. السبت 6 عربي");

    assert_eq!(days.len(), 1);
    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "الرياضيات", "4:00 م"),
            row("السبت", "اللغة العربية", "6:00 م"),
        ]
    );
}

#[test]
fn test_clause_subject_overrides_context_without_replacing_it() {
    let days = extract_schedule("عربي. السبت 4 رياضيات. الاحد 5");

    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "الرياضيات", "4:00 م"),
            row("الأحد", "اللغة العربية", "5:00 م"),
        ]
    );
}

#[test]
fn test_subject_with_digits_does_not_switch_context() {
    let days = extract_schedule("رياضيات 4. السبت 5");

    assert_eq!(flatten(&days), vec![row("السبت", "نشاط عام", "5:00 م")]);
    assert_eq!(days[0].slots[0].color, "bg-gray-100 text-gray-800");
    assert_eq!(days[0].slots[0].icon, "📚");
}

#[test]
fn test_day_without_time_emits_nothing() {
    let days = extract_schedule("السبت رياضيات. الاثنين 4 رياضيات");

    assert_eq!(flatten(&days), vec![row("الإثنين", "الرياضيات", "4:00 م")]);
}

#[test]
fn test_day_without_time_alone_falls_back() {
    let days = extract_schedule("السبت رياضيات");

    assert!(is_fallback(&days));
}

#[rstest]
#[case("السبت 8 م انجليزي", "8:00 م")]
#[case("الاحد 3 ص انجليزي", "3:00 ص")]
#[case("السبت 9 انجليزي", "9:00 ص")]
#[case("السبت 12 انجليزي", "12:00 م")]
#[case("السبت 4:30 انجليزي", "4:00 م")]
#[case("السبت ٤ انجليزي", "4:00 م")]
fn test_time_resolution(#[case] input: &str, #[case] expected: &str) {
    let days = extract_schedule(input);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].slots[0].time, expected);
}

#[test]
fn test_english_day_names_and_markers() {
    let days = extract_schedule("Saturday 5pm math\nMONDAY 10 am english");

    assert_eq!(
        flatten(&days),
        vec![
            row("السبت", "الرياضيات", "5:00 م"),
            row("الإثنين", "اللغة الإنجليزية", "10:00 ص"),
        ]
    );
}

#[test]
fn test_longer_alias_is_not_counted_twice() {
    // "الاربعاء" contains the colloquial alias "اربع"; with two times the
    // day must still take only the time that follows it.
    let days = extract_schedule("الاربعاء 4 الخميس 6 علوم");

    assert_eq!(
        flatten(&days),
        vec![
            row("الأربعاء", "العلوم", "4:00 م"),
            row("الخميس", "العلوم", "6:00 م"),
        ]
    );
}

#[test]
fn test_runs_are_identical_apart_from_ids() {
    let input = "انجليزي. السبت 5 والاثنين 6. عربي\nالثلاثاء الساعة 7 م";

    let first = extract_schedule(input);
    let second = extract_schedule(input);

    assert_eq!(flatten(&first), flatten(&second));
    let colors = |days: &[Day]| {
        days.iter()
            .flat_map(|d| d.slots.iter().map(|s| (s.color.clone(), s.icon.clone())))
            .collect::<Vec<_>>()
    };
    assert_eq!(colors(&first), colors(&second));
}

#[test]
fn test_slot_ids_are_unique() {
    let days = extract_schedule("السبت والاثنين والاربعاء الساعة 4 رياضيات");

    let ids: HashSet<&str> = days
        .iter()
        .flat_map(|d| d.slots.iter().map(|s| s.id.as_str()))
        .collect();
    assert_eq!(ids.len(), 3);
}

#[rstest]
#[case("السبت 4 رياضيات السبت 4 رياضيات السبت 4")]
#[case("السبت والسبت الساعة 5 عربي. السبت 5 عربي")]
#[case("sat 4 sat 4 saturday 4 math")]
#[case("الاحد 4 الاحد 6 الاحد 4 علوم\nالاحد 6 علوم")]
#[case("عربي\nالسبت 4 الاثنين 4\nالسبت 4 الاثنين 4")]
fn test_no_duplicate_days_or_sessions(#[case] input: &str) {
    let days = extract_schedule(input);

    let names: HashSet<&str> = days.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(names.len(), days.len(), "duplicate day in {days:?}");

    for day in &days {
        let sessions: HashSet<(&str, &str)> = day
            .slots
            .iter()
            .map(|s| (s.subject.trim(), s.time.trim()))
            .collect();
        assert_eq!(sessions.len(), day.slots.len(), "duplicate slot in {day:?}");
    }
}

#[test]
fn test_non_blank_input_never_yields_empty_schedule() {
    for _ in 0..50 {
        let text: String = Sentence(1..12).fake();
        let days = extract_schedule(&text);

        assert!(!days.is_empty(), "empty schedule for {text:?}");
        assert!(days.iter().all(|d| !d.slots.is_empty()));
    }
}
