//! Custom scalars named by the schema.
//!
//! Both are thin wrappers: `DateTime` delegates parsing and formatting to
//! chrono, `EmailAddress` carries the string through untouched. The schema
//! never takes either as an input, so `parse` exists only to satisfy the
//! scalar contract.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::NaiveDate;

/// ISO 8601 calendar date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime(pub NaiveDate);

#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => {
                let date = s.parse::<NaiveDate>().map_err(InputValueError::custom)?;
                Ok(DateTime(date))
            }
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl From<NaiveDate> for DateTime {
    fn from(date: NaiveDate) -> Self {
        DateTime(date)
    }
}

/// Email-shaped string, passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(pub String);

#[Scalar(name = "EmailAddress")]
impl ScalarType for EmailAddress {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => Ok(EmailAddress(s)),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_time_parses_iso_dates() {
        let parsed = <DateTime as ScalarType>::parse(Value::String("1997-07-12".to_string()))
            .expect("valid date");
        assert_eq!(parsed.to_value(), Value::String("1997-07-12".to_string()));
    }

    #[test]
    fn test_date_time_rejects_garbage() {
        assert!(<DateTime as ScalarType>::parse(Value::String("yesterday".to_string())).is_err());
        assert!(<DateTime as ScalarType>::parse(Value::Boolean(true)).is_err());
    }

    #[test]
    fn test_email_address_is_pass_through() {
        let parsed = <EmailAddress as ScalarType>::parse(Value::String("fong@test.com".to_string()))
            .expect("string accepted");
        assert_eq!(parsed, EmailAddress("fong@test.com".to_string()));
        assert_eq!(parsed.to_value(), Value::String("fong@test.com".to_string()));
    }
}
