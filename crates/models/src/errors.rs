use serde::Serialize;
use thiserror::Error;

/// One rejected field; `loc` is the path into the request (`["body", "price"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}: {msg}", .loc.join("."))]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// Error located on a top-level body field.
    pub fn body_field(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self::new(&["body", field], msg, kind)
    }
}

/// Every field error found in a request, serialized as a plain list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Error)]
#[serde(transparent)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn single(err: FieldError) -> Self {
        Self(vec![err])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}
