//! Line matcher for ASA authentication-rejection records
//!
//! Recognizes syslog lines of the shape:
//!
//! ```text
//! Apr 12 03:14:07  10.1.1.1 %ASA-4-113015: AAA user authentication Rejected : \
//! reason = AAA failure : server = 10.1.1.2 : user = jdoe : user IP = 192.168.1.50
//! ```
//!
//! The pattern is deliberately tolerant: 1-3 spaces between timestamp
//! tokens (syslog pads the day of month), and IPv4 fields are matched by
//! shape only, with no octet range check. A line missing any literal
//! token or capture is simply not a record.

use crate::models::FailureRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static REJECTED_LOGIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([a-zA-Z]{1,4} {1,3}\d{1,2} {1,3}\d{1,2}:\d{2}:\d{2}) {1,3}(\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b).+\d{1,3}-\d{1,8}: {1,3}AAA user authentication Rejected : reason = AAA failure : server = (\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b) : user = (.*) : user IP = (\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b)",
    )
    .expect("rejected-login pattern is valid")
});

/// Match one raw log line (trailing newline allowed) against the
/// rejection pattern
///
/// Returns a record only when all five captures are present; the first
/// match in the line wins. Pure function, no side effects.
pub fn match_line(line: &str) -> Option<FailureRecord> {
    let caps = REJECTED_LOGIN.captures(line)?;

    Some(FailureRecord {
        date: caps.get(1)?.as_str().to_string(),
        device_ip: caps.get(2)?.as_str().to_string(),
        radius_ip: caps.get(3)?.as_str().to_string(),
        user: caps.get(4)?.as_str().to_string(),
        user_ip: caps.get(5)?.as_str().to_string(),
    })
}
