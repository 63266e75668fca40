use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Timestamp layout of transport records and date-range bounds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp. Surrounding whitespace is ignored.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|_| Error::MalformedTimestamp {
        value: s.to_string(),
    })
}

pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_the_fixed_layout() {
        let dt = parse_timestamp(" 2015-05-25 18:00:00 ").unwrap();
        assert_eq!(format_timestamp(dt), "2015-05-25 18:00:00");
    }

    #[test]
    fn rejects_other_layouts() {
        for bad in ["2015-05-25", "2015/05/25 18:00:00", "25.05.2015 18:00", ""] {
            assert!(matches!(
                parse_timestamp(bad),
                Err(Error::MalformedTimestamp { .. })
            ));
        }
    }
}
