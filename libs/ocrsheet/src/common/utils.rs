use chrono::{DateTime, Local, TimeZone};

pub const EXPORT_FILE_PREFIX: &str = "OCR_Export_";

pub fn get_current_timestamp_str() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn get_export_timestamp_str<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// `OCR_Export_<YYYYMMDD_HHMMSS>.xlsx` for the current local time.
pub fn default_export_file_name() -> String {
    format!("{}{}.xlsx", EXPORT_FILE_PREFIX, get_export_timestamp_str(&Local::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_export_timestamp_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 42))
            .unwrap()
            .and_utc();
        assert_eq!(get_export_timestamp_str::<Utc>(&at), "20240307_090542");
    }

    #[test]
    fn test_default_export_file_name_shape() {
        let name = default_export_file_name();
        let stamp = name
            .strip_prefix(EXPORT_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".xlsx"))
            .expect("prefix and extension");

        let (date, time) = stamp.split_once('_').expect("date_time separator");
        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().chain(time.chars()).all(|c| c.is_ascii_digit()));
    }
}
