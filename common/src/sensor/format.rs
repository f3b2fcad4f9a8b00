//! Display formatting for the dashboard labels.

use chrono::NaiveDateTime;

/// One fractional digit plus the unit, e.g. "22.5°C".
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

/// Rounded to a whole percentage, e.g. "55%".
pub fn format_humidity(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// 24-hour clock, e.g. "09:07".
pub fn format_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Full weekday, abbreviated month, zero-padded day, e.g. "Monday, Jan 05".
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%A, %b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn temperature_keeps_one_fractional_digit() {
        assert_eq!(format_temperature(22.5), "22.5°C");
        assert_eq!(format_temperature(35.0), "35.0°C");
        assert_eq!(format_temperature(15.0), "15.0°C");
    }

    #[test]
    fn humidity_rounds_to_whole_percent() {
        assert_eq!(format_humidity(55.0), "55%");
        assert_eq!(format_humidity(54.6), "55%");
        assert_eq!(format_humidity(30.2), "30%");
    }

    #[test]
    fn clock_and_date_follow_the_dashboard_layout() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 7, 0)
            .unwrap();

        assert_eq!(format_time(&now), "09:07");
        assert_eq!(format_date(&now), "Monday, Jan 05");
    }
}
