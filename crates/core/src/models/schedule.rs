use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Half of the day a class falls in, rendered with the Arabic period marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Evening,
}

impl Period {
    pub fn marker(self) -> &'static str {
        match self {
            Period::Morning => "ص",
            Period::Evening => "م",
        }
    }

    /// Formats an hour as `"H:00 <marker>"`, the display form every slot uses.
    pub fn format_hour(self, hour: u32) -> String {
        format!("{}:00 {}", hour, self.marker())
    }
}

/// Which parser produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleSource {
    /// A language model's answer, normalized by the extractor
    Model,
    /// The rule-based extractor
    Rules,
    /// The extractor's sentinel for text it could not understand
    Fallback,
}

/// Presentation tags bound to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl SlotStyle {
    /// Style for activities that match no vocabulary subject.
    pub const NEUTRAL: SlotStyle = SlotStyle {
        color: "bg-gray-100 text-gray-800",
        icon: "📚",
    };

    /// Style of the sentinel slot emitted when nothing could be extracted.
    pub const FALLBACK: SlotStyle = SlotStyle {
        color: "bg-blue-100 text-blue-800",
        icon: "📝",
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub subject: String,
    pub time: String,
    pub color: String,
    pub icon: String,
}

impl Slot {
    pub fn new(subject: impl Into<String>, time: impl Into<String>, style: SlotStyle) -> Self {
        Self {
            id: new_slot_id(),
            subject: subject.into(),
            time: time.into(),
            color: style.color.to_string(),
            icon: style.icon.to_string(),
        }
    }

    /// Two slots describe the same session when their trimmed subject and
    /// trimmed time are equal. Ids and styling are ignored.
    pub fn same_session(&self, other: &Slot) -> bool {
        self.subject.trim() == other.subject.trim() && self.time.trim() == other.time.trim()
    }
}

fn new_slot_id() -> String {
    format!("s-{}", Uuid::new_v4().simple())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub day: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl Day {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            slots: Vec::new(),
        }
    }

    /// Appends `slot` unless an existing slot is the same session.
    ///
    /// Returns `false` when the slot was dropped as a duplicate.
    pub fn push_slot(&mut self, slot: Slot) -> bool {
        if self.slots.iter().any(|existing| existing.same_session(&slot)) {
            return false;
        }
        self.slots.push(slot);
        true
    }
}

/// Accumulates a schedule while keeping one `Day` per name and no duplicate
/// sessions inside a day.
///
/// Days keep the order in which they were first mentioned.
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    days: Vec<Day>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing schedule as-is so further slots can be merged in.
    pub fn from_days(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Returns the day named `name` (compared trimmed), creating it if needed.
    pub fn day_mut(&mut self, name: &str) -> &mut Day {
        let name = name.trim();
        let index = match self.days.iter().position(|d| d.day.trim() == name) {
            Some(index) => index,
            None => {
                self.days.push(Day::new(name));
                self.days.len() - 1
            }
        };
        &mut self.days[index]
    }

    pub fn add_slot(&mut self, day: &str, slot: Slot) -> bool {
        self.day_mut(day).push_slot(slot)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn build(self) -> Vec<Day> {
        self.days
    }
}

/// Merges `incoming` into `existing`.
///
/// Days are matched by trimmed name and unknown days are appended. Incoming
/// slots that repeat a session already present in the target day are dropped.
/// Slots already in `existing` are never removed.
pub fn merge_schedules(existing: Vec<Day>, incoming: Vec<Day>) -> Vec<Day> {
    let mut builder = ScheduleBuilder::from_days(existing);
    for day in incoming {
        let target = builder.day_mut(&day.day);
        for slot in day.slots {
            target.push_slot(slot);
        }
    }
    builder.build()
}
