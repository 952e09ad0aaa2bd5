use crate::models::SlotStyle;

/// Subject used when a clause schedules something before any subject was named.
pub const GENERAL_ACTIVITY: &str = "نشاط عام";

#[derive(Debug)]
pub struct SubjectEntry {
    pub key: &'static str,
    /// Canonical Arabic display name
    pub name: &'static str,
    pub style: SlotStyle,
    /// Lowercase dialect spellings, transliterations and abbreviations
    pub keywords: &'static [&'static str],
}

impl SubjectEntry {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

// Order matters: the first entry with a matching keyword wins, so Math is
// checked before Sport ("رياضيات" vs "رياضة").
pub const SUBJECTS: &[SubjectEntry] = &[
    SubjectEntry {
        key: "math",
        name: "الرياضيات",
        style: SlotStyle {
            color: "bg-blue-100 text-blue-800",
            icon: "📐",
        },
        keywords: &["رياضيات", "جبر", "هندسة", "حساب", "math", "ماث"],
    },
    SubjectEntry {
        key: "science",
        name: "العلوم",
        style: SlotStyle {
            color: "bg-green-100 text-green-800",
            icon: "🔬",
        },
        keywords: &[
            "علوم",
            "فيزياء",
            "kimya",
            "science",
            "physics",
            "chemistry",
            "biology",
            "أحياء",
            "كيمياء",
            "ساينس",
        ],
    },
    SubjectEntry {
        key: "arabic",
        name: "اللغة العربية",
        style: SlotStyle {
            color: "bg-emerald-100 text-emerald-800",
            icon: "📖",
        },
        keywords: &[
            "عربي",
            "لغة عربية",
            "arabic",
            "نحو",
            "نصوص",
            "لغه عربيه",
            "اللغه العربيه",
        ],
    },
    SubjectEntry {
        key: "english",
        name: "اللغة الإنجليزية",
        style: SlotStyle {
            color: "bg-red-100 text-red-800",
            icon: "🅰️",
        },
        keywords: &["انجليزي", "إنجليزي", "english", "انقلش"],
    },
    SubjectEntry {
        key: "social",
        name: "الدراسات الاجتماعية",
        style: SlotStyle {
            color: "bg-yellow-100 text-yellow-800",
            icon: "🌍",
        },
        keywords: &["دراسات", "تاريخ", "جغرافيا", "social", "history"],
    },
    SubjectEntry {
        key: "religion",
        name: "التربية الدينية",
        style: SlotStyle {
            color: "bg-purple-100 text-purple-800",
            icon: "🕌",
        },
        keywords: &["دين", "تربية دينية", "islamic", "quran", "قرآن"],
    },
    SubjectEntry {
        key: "art",
        name: "التربية الفنية",
        style: SlotStyle {
            color: "bg-pink-100 text-pink-800",
            icon: "🎨",
        },
        keywords: &["رسم", "art", "فنية"],
    },
    SubjectEntry {
        key: "sport",
        name: "التربية الرياضية",
        style: SlotStyle {
            color: "bg-orange-100 text-orange-800",
            icon: "⚽",
        },
        keywords: &["ألعاب", "رياضة", "sport", "pe"],
    },
];

/// Finds the first subject with a keyword occurring anywhere in `text`,
/// ignoring case.
pub fn find_subject(text: &str) -> Option<&'static SubjectEntry> {
    let lowered = text.to_lowercase();
    SUBJECTS.iter().find(|entry| entry.matches(&lowered))
}
