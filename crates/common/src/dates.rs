//! Display date format used across the external boundary.
//!
//! Signals travel as `DD/MM/YYYY` strings; internally everything is a
//! `chrono::NaiveDate`.

use chrono::NaiveDate;

pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn parse_display(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT).ok()
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter for required `DD/MM/YYYY` date fields.
pub mod dmy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_display(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_display(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}")))
    }
}

/// Serde adapter for optional date fields; `None` serializes as JSON null.
pub mod dmy_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&super::format_display(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_display(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}"))),
        }
    }
}
