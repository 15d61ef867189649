use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generated on demand, never stored. `date_released` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_released: NaiveDate,
}
