//! Field-by-field validation of JSON request bodies.
//!
//! A [`Fields`] wraps the top-level body object. Each accessor either returns
//! the coerced value or records a [`FieldError`] and returns `None`, so one
//! pass reports every bad field. [`Fields::finish`] turns the collected
//! errors into a [`ValidationErrors`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::{FieldError, ValidationErrors};

const MISSING: &str = "Field required";
const NOT_STRING: &str = "Input should be a valid string";
const NOT_NUMBER: &str = "Input should be a valid number, unable to parse string as a number";
const NOT_FINITE: &str = "Input should be a finite number";
const NOT_DATETIME: &str = "Input should be a valid datetime";
const NOT_OBJECT: &str = "Input should be a valid dictionary or object to extract fields from";

/// Three-state value for partial updates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    /// Field absent from the body; leave the stored value alone.
    #[default]
    Unset,
    /// Field present as `null`.
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Merge into an optional stored field.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Unset => {}
            Patch::Clear => *target = None,
            Patch::Set(v) => *target = Some(v),
        }
    }
}

pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub fn from_body(body: &'a Value) -> Result<Self, ValidationErrors> {
        match body {
            Value::Object(map) => Ok(Self { map, errors: Vec::new() }),
            _ => Err(ValidationErrors::single(FieldError::new(&["body"], NOT_OBJECT, "model_attributes_type"))),
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }

    fn reject(&mut self, field: &str, msg: &str, kind: &str) {
        self.errors.push(FieldError::body_field(field, msg, kind));
    }

    /// Present and non-null, or `None` after recording a `missing` error.
    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.map.get(field) {
            Some(Value::Null) | None => {
                self.reject(field, MISSING, "missing");
                None
            }
            Some(v) => Some(v),
        }
    }

    /// Present and non-null; absence and `null` both read as `None`.
    fn optional(&self, field: &str) -> Option<&'a Value> {
        match self.map.get(field) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    fn coerce_str(&mut self, field: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.reject(field, NOT_STRING, "string_type");
                None
            }
        }
    }

    fn coerce_f64(&mut self, field: &str, value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n.is_finite() => Some(n),
            Some(_) => {
                self.reject(field, NOT_FINITE, "finite_number");
                None
            }
            None => {
                self.reject(field, NOT_NUMBER, "float_parsing");
                None
            }
        }
    }

    fn coerce_datetime(&mut self, field: &str, value: &Value) -> Option<DateTime<Utc>> {
        let parsed = match value {
            Value::String(s) => parse_datetime(s),
            Value::Number(n) => n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)),
            _ => None,
        };
        if parsed.is_none() {
            self.reject(field, NOT_DATETIME, "datetime_parsing");
        }
        parsed
    }

    pub fn required_str(&mut self, field: &str) -> Option<String> {
        let value = self.required(field)?;
        self.coerce_str(field, value)
    }

    pub fn optional_str(&mut self, field: &str) -> Option<String> {
        let value = self.optional(field)?;
        self.coerce_str(field, value)
    }

    pub fn required_f64(&mut self, field: &str) -> Option<f64> {
        let value = self.required(field)?;
        self.coerce_f64(field, value)
    }

    pub fn optional_datetime(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let value = self.optional(field)?;
        self.coerce_datetime(field, value)
    }

    /// Patch of a field that must stay a string: `null` is rejected.
    pub fn patch_required_str(&mut self, field: &str) -> Patch<String> {
        match self.map.get(field) {
            None => Patch::Unset,
            Some(Value::Null) => {
                self.reject(field, NOT_STRING, "string_type");
                Patch::Unset
            }
            Some(v) => self.coerce_str(field, v).map_or(Patch::Unset, Patch::Set),
        }
    }

    pub fn patch_str(&mut self, field: &str) -> Patch<String> {
        match self.map.get(field) {
            None => Patch::Unset,
            Some(Value::Null) => Patch::Clear,
            Some(v) => self.coerce_str(field, v).map_or(Patch::Unset, Patch::Set),
        }
    }

    pub fn patch_datetime(&mut self, field: &str) -> Patch<DateTime<Utc>> {
        match self.map.get(field) {
            None => Patch::Unset,
            Some(Value::Null) => Patch::Clear,
            Some(v) => self.coerce_datetime(field, v).map_or(Patch::Unset, Patch::Set),
        }
    }
}

/// RFC 3339, naive ISO 8601 (read as UTC) or a bare date (midnight UTC).
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_supported_datetime_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_datetime("2024-05-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T10:00:00"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01 10:00:00"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T10:00"), Some(expected));
        assert!(parse_datetime("2024-05-01T10:00:00.123456").is_some());
        assert_eq!(
            parse_datetime("2024-05-01"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_datetime("tomorrow"), None);
        assert_eq!(parse_datetime("2024-02-30"), None);
    }

    #[test]
    fn integer_datetimes_are_unix_seconds() {
        let body = json!({"due_date": 1717230600, "bad": 1.5});
        let mut fields = Fields::from_body(&body).unwrap();
        assert_eq!(
            fields.optional_datetime("due_date"),
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(fields.optional_datetime("bad"), None);
        let err = fields.finish().unwrap_err();
        assert_eq!(err.0[0].kind, "datetime_parsing");
    }

    #[test]
    fn patch_distinguishes_absent_null_and_value() {
        let body = json!({"a": null, "b": "x"});
        let mut fields = Fields::from_body(&body).unwrap();
        assert_eq!(fields.patch_str("a"), Patch::Clear);
        assert_eq!(fields.patch_str("b"), Patch::Set("x".to_string()));
        assert_eq!(fields.patch_str("c"), Patch::Unset);
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn required_patch_rejects_null() {
        let body = json!({"title": null});
        let mut fields = Fields::from_body(&body).unwrap();
        assert!(fields.patch_required_str("title").is_unset());
        let err = fields.finish().unwrap_err();
        assert_eq!(err.0[0].kind, "string_type");
    }

    #[test]
    fn patch_apply_merges_into_option() {
        let mut target = Some(1);
        Patch::Unset.apply_to(&mut target);
        assert_eq!(target, Some(1));
        Patch::Set(2).apply_to(&mut target);
        assert_eq!(target, Some(2));
        Patch::Clear.apply_to(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn float_coercion_rules() {
        let body = json!({"a": 1, "b": " 2.5 ", "c": true, "d": "NaN"});
        let mut fields = Fields::from_body(&body).unwrap();
        assert_eq!(fields.required_f64("a"), Some(1.0));
        assert_eq!(fields.required_f64("b"), Some(2.5));
        assert_eq!(fields.required_f64("c"), None);
        assert_eq!(fields.required_f64("d"), None);
        let kinds: Vec<String> = fields.finish().unwrap_err().0.into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["float_parsing", "finite_number"]);
    }
}
