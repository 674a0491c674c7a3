//! Calendar helpers for backend date strings.
//!
//! The backend sends dates as `YYYY-MM-DD`, sometimes as the head of a full
//! timestamp. They are read as plain calendar dates with no time zone so a
//! date never shifts to the previous day. Functions that depend on "now"
//! take `today` explicitly; handlers pass [`local_today`].

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Lunes"),
    (Weekday::Tue, "Martes"),
    (Weekday::Wed, "Miércoles"),
    (Weekday::Thu, "Jueves"),
    (Weekday::Fri, "Viernes"),
    (Weekday::Sat, "Sábado"),
    (Weekday::Sun, "Domingo"),
];

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses `YYYY-MM-DD`, ignoring anything after the first ten characters.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Spanish display name, capitalized ("Miércoles").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].1
}

/// Reads a Spanish weekday name. Case-insensitive; unaccented spellings
/// ("Miercoles", "Sabado") are accepted too.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let wanted = fold_accents(name.trim());
    WEEKDAYS
        .iter()
        .find(|(_, day_name)| fold_accents(day_name) == wanted)
        .map(|(day, _)| *day)
}

fn fold_accents(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// `dd/mm/yyyy`, or a placeholder when the date is missing or malformed.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => "No registrada".to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => "Fecha inválida".to_string(),
        },
    }
}

pub fn is_same_day(a: &str, b: &str) -> bool {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

pub fn is_today(value: &str, today: NaiveDate) -> bool {
    parse_date(value) == Some(today)
}

pub fn is_this_month(value: &str, today: NaiveDate) -> bool {
    parse_date(value)
        .map(|date| date.year() == today.year() && date.month() == today.month())
        .unwrap_or(false)
}

/// True when the date falls in `[today, today + days]`.
pub fn is_in_next_days(value: &str, days: i64, today: NaiveDate) -> bool {
    parse_date(value)
        .map(|date| date >= today && date <= today + Duration::days(days))
        .unwrap_or(false)
}

/// True when the date is strictly after `today`.
pub fn is_after(value: &str, today: NaiveDate) -> bool {
    parse_date(value).map(|date| date > today).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date("2025-03-05"), Some(date(2025, 3, 5)));
        assert_eq!(parse_date("2025-03-05T23:30:00.000000Z"), Some(date(2025, 3, 5)));
        assert_eq!(parse_date("05/03/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn weekday_names_round_trip_through_parse() {
        assert_eq!(date(2025, 3, 5).weekday(), Weekday::Wed);
        assert_eq!(weekday_name(Weekday::Wed), "Miércoles");
        assert_eq!(parse_weekday("miércoles"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("SABADO"), Some(Weekday::Sat));
        assert_eq!(parse_weekday("Wednesday"), None);
    }

    #[test]
    fn format_date_placeholders() {
        assert_eq!(format_date(Some("2025-03-05")), "05/03/2025");
        assert_eq!(format_date(None), "No registrada");
        assert_eq!(format_date(Some("")), "No registrada");
        assert_eq!(format_date(Some("mañana")), "Fecha inválida");
    }

    #[test]
    fn date_buckets() {
        let today = date(2025, 3, 5);

        assert!(is_today("2025-03-05", today));
        assert!(is_same_day("2025-03-05", "2025-03-05T08:00:00Z"));
        assert!(is_this_month("2025-03-31", today));
        assert!(!is_this_month("2024-03-05", today));

        assert!(is_in_next_days("2025-03-05", 7, today));
        assert!(is_in_next_days("2025-03-12", 7, today));
        assert!(!is_in_next_days("2025-03-13", 7, today));
        assert!(!is_in_next_days("2025-03-04", 7, today));

        assert!(is_after("2025-03-06", today));
        assert!(!is_after("2025-03-05", today));
        assert!(!is_after("pronto", today));
    }
}
