//! Pieces shared by every service binary: log setup, small response types
//! and the optional admin listener.

pub mod admin_http;
pub mod types;
pub mod utils;
