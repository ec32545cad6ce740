//! Values filled in for a request when the caller leaves them unset.

use crate::consts::TIMESTAMP_FORMAT;

/// Current local time as `yyyyMMddHHmmss`.
pub fn generate_timestamp() -> String {
    format_timestamp(&chrono::Local::now())
}

pub fn format_timestamp<Tz>(date_time: &chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date_time.format(TIMESTAMP_FORMAT).to_string()
}

/// Random 32 character alphanumeric order identifier (a v4 UUID without hyphens).
pub fn generate_order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::consts::TIMESTAMP_LENGTH;

    #[test]
    fn timestamp_is_fourteen_digits() {
        let timestamp = generate_timestamp();
        assert_eq!(timestamp.len(), TIMESTAMP_LENGTH);
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let date_time = chrono::Utc
            .with_ymd_and_hms(2015, 1, 3, 4, 5, 9)
            .single()
            .unwrap();
        assert_eq!(format_timestamp(&date_time), "20150103040509");
    }

    #[test]
    fn order_ids_are_alphanumeric_and_distinct() {
        let first = generate_order_id();
        let second = generate_order_id();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
