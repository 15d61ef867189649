use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Liveness payload served at the root of the tasks service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OnlineStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl OnlineStatus {
    pub fn now() -> Self {
        Self { status: "online".to_string(), timestamp: Utc::now() }
    }
}

/// Body returned by delete endpoints that answer with a message instead of 204.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
