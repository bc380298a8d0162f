use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report run
///
/// All three kinds are fatal: nothing is retried or recovered locally,
/// the first error stops the remaining pipeline stages.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Bad or missing command-line input
    #[error("{0}")]
    Configuration(String),

    /// Log file unreadable or report file unwritable
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SMTP connection or send failure
    #[error("mail delivery failed: {0}")]
    MailDelivery(String),
}

impl ReportError {
    /// Wrap an I/O error with the path it occurred on
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
