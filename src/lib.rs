pub mod alerting;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use alerting::Mailer;
pub use config::{MailerConfig, RunConfig};
pub use error::ReportError;
pub use input::{match_line, scan_file};
pub use models::FailureRecord;
pub use output::write_report;
