//! Форматирование дат для таблиц админки и публичных страниц

use chrono::{DateTime, Utc};

/// Дата и время для таблиц админки
/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Дата для публичных страниц
/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Mar 5, 2024");
    }
}
