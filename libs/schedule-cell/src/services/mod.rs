pub mod checker;
pub mod schedule;

pub use checker::check;
pub use schedule::{ScheduleLookup, ScheduleService};
