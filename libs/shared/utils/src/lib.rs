pub mod dates;
pub mod test_utils;

pub use dates::{format_date, parse_date, parse_weekday, weekday_name};
