//! Build-time settings of the browser client.

use std::time::Duration;

/// Base URL of the answer service. Override with `JUSTICE_AI_API_BASE` when
/// building.
pub const API_BASE: &str = match option_env!("JUSTICE_AI_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8080",
};

pub const CHAT_PATH: &str = "/chat";

/// Upper bound on one answer round-trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn chat_url() -> String {
    format!("{}{CHAT_PATH}", API_BASE.trim_end_matches('/'))
}
