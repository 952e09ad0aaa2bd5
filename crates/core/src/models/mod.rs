pub mod entry;
pub mod requests;
pub mod schedule;

pub use entry::ModelEntry;
pub use requests::{
    MergeScheduleRequest, MergeScheduleResponse, ParseScheduleRequest, ParseScheduleResponse,
};
pub use schedule::{Day, Period, ScheduleBuilder, ScheduleSource, Slot, SlotStyle, merge_schedules};
