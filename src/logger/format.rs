//! Log line formatting
//!
//! Request log lines look like `[2024-05-01 13:37:00] GET /index.html`.

use chrono::Local;

/// Current local time formatted for log lines.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format one request log line: `[<timestamp>] <method> <target>`.
///
/// The target is the request line's path and query exactly as received.
pub fn request_line(method: &str, target: &str) -> String {
    format!("[{}] {method} {target}", timestamp())
}
