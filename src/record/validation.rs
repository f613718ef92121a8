//! The single validation rule shared by the create and update paths.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::Error;

/// Sent when a text field or the date is missing or blank.
pub(crate) const MISSING_FIELDS_MESSAGE: &str = "All fields are required!";
/// Sent when the amount is not a number greater than zero.
pub(crate) const INVALID_AMOUNT_MESSAGE: &str = "Amount must be a positive number!";
/// Sent when the date is present but is not a date.
pub(crate) const INVALID_DATE_MESSAGE: &str = "Date must be a valid date!";
/// Sent when the request body is not a JSON object of record fields.
pub(crate) const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object!";

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The fields of a record as sent by a client, before validation.
///
/// Every field is optional so that a missing field is reported as a
/// validation error instead of a deserialization error. `amount` is kept as
/// raw JSON for the same reason. Numbers and booleans sent for a text field
/// are read as their text, e.g. `"title": 5` is the title "5".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    /// A short label for the record.
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
    /// How much money was earned or spent.
    pub amount: Option<Value>,
    /// What sort of income or expense this is, e.g. "Salary".
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: Option<String>,
    /// Free text describing the record.
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    /// When the money moved, as `YYYY-MM-DD` or an RFC 3339 date-time.
    pub date: Option<String>,
}

/// Record fields that have passed [validate].
///
/// This is the only input the record store accepts, so every stored record
/// has non-empty text fields and an amount greater than zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecord {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) category: String,
    pub(crate) description: String,
    pub(crate) date: Date,
}

impl ValidRecord {
    /// The trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The amount, always greater than zero.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The trimmed category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The trimmed description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date of the record.
    pub fn date(&self) -> Date {
        self.date
    }
}

/// Check candidate record fields.
///
/// Text fields are trimmed. A numeric string is accepted as an amount.
///
/// # Errors
/// Returns [Error::Validation] with the first problem found, checked in this
/// order:
/// - `title`, `category`, `description` or `date` is missing or blank,
/// - `amount` is missing, not a number, or not greater than zero,
/// - `date` is not a valid date.
pub fn validate(fields: RecordFields) -> Result<ValidRecord, Error> {
    let (Some(title), Some(category), Some(description), Some(date)) = (
        non_blank(fields.title),
        non_blank(fields.category),
        non_blank(fields.description),
        non_blank(fields.date),
    ) else {
        return Err(Error::Validation(MISSING_FIELDS_MESSAGE.to_owned()));
    };

    let amount = fields
        .amount
        .as_ref()
        .and_then(parse_amount)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| Error::Validation(INVALID_AMOUNT_MESSAGE.to_owned()))?;

    let date =
        parse_date(&date).ok_or_else(|| Error::Validation(INVALID_DATE_MESSAGE.to_owned()))?;

    Ok(ValidRecord {
        title,
        amount,
        category,
        description,
        date,
    })
}

/// Unwrap a JSON body, turning a rejected body into a validation error.
///
/// A JSON object with a field of the wrong type is reported with the name of
/// that field. Any other rejection gets [INVALID_BODY_MESSAGE].
pub(crate) fn fields_from_json(
    body: Result<Json<RecordFields>, JsonRejection>,
) -> Result<RecordFields, Error> {
    match body {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::JsonDataError(error)) => {
            tracing::debug!("Rejected record fields: {error}");
            Err(Error::Validation(error.body_text()))
        }
        Err(rejection) => {
            tracing::debug!("Rejected record body: {rejection}");
            Err(Error::Validation(INVALID_BODY_MESSAGE.to_owned()))
        }
    }
}

/// Read a text field that may have been sent as a number or boolean.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(_) => Err(de::Error::custom("expected text, a number or a boolean")),
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, DATE_FORMAT).ok().or_else(|| {
        OffsetDateTime::parse(text, &Rfc3339)
            .ok()
            .map(|date_time| date_time.date())
    })
}
