//! Compiled-in recognition tables.
//!
//! Both tables are plain ordered slices. Lookups walk them front to back, so
//! the position of an entry decides which one wins when keywords overlap.

pub mod days;
pub mod subjects;

pub use days::{ArabicWeekday, DAY_ALIASES, lookup_day};
pub use subjects::{GENERAL_ACTIVITY, SUBJECTS, SubjectEntry, find_subject};
