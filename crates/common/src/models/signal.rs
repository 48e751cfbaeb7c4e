use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::dates;
use crate::error::ValidationError;

/// A persisted trade recommendation.
///
/// `status` is the authoritative open/closed flag. It is NOT forced to agree
/// with `exit_date`: a signal can be "Active" with an exit date recorded, or
/// "Closed" without one. Known gap, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub id: i64,
    #[serde(with = "dates::dmy")]
    pub entry_date: NaiveDate,
    pub stock_name: String,
    pub entry_price: f64,
    pub target: f64,
    pub stop_loss: f64,
    #[serde(with = "dates::dmy_opt")]
    pub exit_date: Option<NaiveDate>,
    pub points: Option<f64>,
    pub profit_money: Option<f64>,
    pub status: String,
}

/// Untrusted input for add/update: every field optional, exactly as the
/// boundary receives it. [`SignalDraft::validate`] is the only way to turn
/// one into typed fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignalDraft {
    pub entry_date: Option<String>,
    pub stock_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub entry_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub target: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stop_loss: Option<f64>,
    pub exit_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub profit_money: Option<f64>,
    pub status: Option<String>,
}

/// Fully validated mutable fields of a signal; everything except the id.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalFields {
    pub entry_date: NaiveDate,
    pub stock_name: String,
    pub entry_price: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub exit_date: Option<NaiveDate>,
    pub points: Option<f64>,
    pub profit_money: Option<f64>,
    pub status: String,
}

impl SignalDraft {
    /// Checks the five required fields plus `entry_date`, parses both dates
    /// from `DD/MM/YYYY`, and passes optional numerics through untouched.
    /// Empty strings count as absent.
    pub fn validate(&self) -> Result<SignalFields, ValidationError> {
        let entry_date =
            non_empty(self.entry_date.as_deref()).ok_or(ValidationError::MissingFields)?;
        let stock_name =
            non_empty(self.stock_name.as_deref()).ok_or(ValidationError::MissingFields)?;
        let status = non_empty(self.status.as_deref()).ok_or(ValidationError::MissingFields)?;
        let entry_price = self.entry_price.ok_or(ValidationError::MissingFields)?;
        let target = self.target.ok_or(ValidationError::MissingFields)?;
        let stop_loss = self.stop_loss.ok_or(ValidationError::MissingFields)?;

        let entry_date = dates::parse_display(entry_date).ok_or(ValidationError::InvalidDate)?;
        let exit_date = match non_empty(self.exit_date.as_deref()) {
            Some(raw) => Some(dates::parse_display(raw).ok_or(ValidationError::InvalidDate)?),
            None => None,
        };

        Ok(SignalFields {
            entry_date,
            stock_name: stock_name.to_string(),
            entry_price,
            target,
            stop_loss,
            exit_date,
            points: self.points,
            profit_money: self.profit_money,
            status: status.to_string(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts a JSON number, a numeric string, or an empty string (= absent).
/// Form-originated payloads routinely send numbers as strings.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_draft() -> SignalDraft {
        SignalDraft {
            entry_date: Some("16/10/2025".into()),
            stock_name: Some("AAPL".into()),
            entry_price: Some(150.0),
            target: Some(160.0),
            stop_loss: Some(145.0),
            status: Some("Active".into()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_minimal_draft() {
        let fields = full_draft().validate().unwrap();
        assert_eq!(fields.stock_name, "AAPL");
        assert_eq!(fields.exit_date, None);
        assert_eq!(fields.points, None);
        assert_eq!(fields.profit_money, None);
    }

    #[test]
    fn validate_rejects_each_missing_required_field() {
        let missing: [fn(&mut SignalDraft); 6] = [
            |d| d.entry_date = None,
            |d| d.stock_name = None,
            |d| d.entry_price = None,
            |d| d.target = None,
            |d| d.stop_loss = None,
            |d| d.status = None,
        ];
        for clear in missing {
            let mut draft = full_draft();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn validate_treats_blank_strings_as_missing() {
        let mut draft = full_draft();
        draft.stock_name = Some("   ".into());
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn validate_rejects_iso_entry_date() {
        let mut draft = full_draft();
        draft.entry_date = Some("2025-10-16".into());
        assert_eq!(draft.validate(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn validate_rejects_malformed_exit_date() {
        let mut draft = full_draft();
        draft.exit_date = Some("20-10-2025".into());
        assert_eq!(draft.validate(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn validate_ignores_empty_exit_date() {
        let mut draft = full_draft();
        draft.exit_date = Some("".into());
        assert_eq!(draft.validate().unwrap().exit_date, None);
    }

    #[test]
    fn draft_deserializes_stringly_numbers() {
        let draft: SignalDraft = serde_json::from_value(json!({
            "entry_date": "16/10/2025",
            "stock_name": "AAPL",
            "entry_price": "150.25",
            "target": 160,
            "stop_loss": "145",
            "status": "Active",
            "points": ""
        }))
        .unwrap();
        assert_eq!(draft.entry_price, Some(150.25));
        assert_eq!(draft.stop_loss, Some(145.0));
        assert_eq!(draft.points, None);
    }

    #[test]
    fn signal_serializes_dates_day_first_and_absent_as_null() {
        let signal = Signal {
            id: 7,
            entry_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 16).unwrap(),
            stock_name: "AAPL".into(),
            entry_price: 150.25,
            target: 160.0,
            stop_loss: 145.0,
            exit_date: None,
            points: None,
            profit_money: None,
            status: "Active".into(),
        };
        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(value["entry_date"], "16/10/2025");
        assert_eq!(value["exit_date"], serde_json::Value::Null);
        assert_eq!(value["points"], serde_json::Value::Null);
        assert_eq!(value["id"], 7);
    }
}
