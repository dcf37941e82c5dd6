//! Date helper functions

use chrono::NaiveDate;

/// Short display date (like "Jun 15, 2023")
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Full display date (like "June 15, 2023")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Machine-readable date for `<time datetime="...">`
pub fn date_xml(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(short_date(&date), "Jun 5, 2023");
        let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        assert_eq!(short_date(&date), "Dec 24, 2024");
    }

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(full_date(&date), "January 15, 2024");
    }

    #[test]
    fn test_date_xml() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_xml(&date), "2024-01-05");
    }
}
