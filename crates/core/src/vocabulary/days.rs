use chrono::Weekday;

/// Canonical Arabic spelling of a weekday, as shown in every schedule.
pub trait ArabicWeekday {
    fn arabic_name(&self) -> &'static str;
}

impl ArabicWeekday for Weekday {
    fn arabic_name(&self) -> &'static str {
        match self {
            Weekday::Sat => "السبت",
            Weekday::Sun => "الأحد",
            Weekday::Mon => "الإثنين",
            Weekday::Tue => "الثلاثاء",
            Weekday::Wed => "الأربعاء",
            Weekday::Thu => "الخميس",
            Weekday::Fri => "الجمعة",
        }
    }
}

/// Every accepted spelling of a weekday: formal and colloquial Arabic,
/// English names and English abbreviations. Latin aliases are lowercase and
/// matched case-insensitively.
pub const DAY_ALIASES: &[(&str, Weekday)] = &[
    ("الأحد", Weekday::Sun),
    ("الاحد", Weekday::Sun),
    ("sunday", Weekday::Sun),
    ("sun", Weekday::Sun),
    ("حد", Weekday::Sun),
    ("الإثنين", Weekday::Mon),
    ("الاثنين", Weekday::Mon),
    ("الاتنين", Weekday::Mon),
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("الثلاثاء", Weekday::Tue),
    ("تلات", Weekday::Tue),
    ("tuesday", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("الأربعاء", Weekday::Wed),
    ("الاربعاء", Weekday::Wed),
    ("اربع", Weekday::Wed),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("الخميس", Weekday::Thu),
    ("thursday", Weekday::Thu),
    ("thurs", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("الجمعة", Weekday::Fri),
    ("الجمعه", Weekday::Fri),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("السبت", Weekday::Sat),
    ("saturday", Weekday::Sat),
    ("sat", Weekday::Sat),
];

/// Resolves a whole day name (not a substring) to its weekday.
pub fn lookup_day(name: &str) -> Option<Weekday> {
    let name = name.trim().to_lowercase();
    DAY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, weekday)| *weekday)
}
