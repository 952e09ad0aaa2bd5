use academy_core::{
    models::SlotStyle,
    vocabulary::{GENERAL_ACTIVITY, SubjectEntry},
};

/// The subject a clause schedules when it does not name one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectContext {
    pub subject: &'static str,
    pub style: SlotStyle,
}

impl Default for SubjectContext {
    fn default() -> Self {
        Self {
            subject: GENERAL_ACTIVITY,
            style: SlotStyle::NEUTRAL,
        }
    }
}

impl From<&'static SubjectEntry> for SubjectContext {
    fn from(entry: &'static SubjectEntry) -> Self {
        Self {
            subject: entry.name,
            style: entry.style,
        }
    }
}
