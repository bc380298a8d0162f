use crate::error::ReportError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mail transport settings with the production defaults baked in
///
/// An optional TOML file can override any subset of these; missing keys
/// fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    /// SMTP relay to hand the report to (plaintext, no authentication)
    pub relay_host: String,
    /// Relay port
    pub relay_port: u16,
    /// Name of the report file, created in the working directory and
    /// reused as the attachment filename
    pub report_filename: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        MailerConfig {
            relay_host: "relay.smhplus.org".to_string(),
            relay_port: 25,
            report_filename: "failures.csv".to_string(),
        }
    }
}

impl MailerConfig {
    /// Load mailer settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ReportError::file_access(path, e))?;
        toml::from_str(&contents).map_err(|e| {
            ReportError::Configuration(format!("{} is not a valid config file: {}", path.display(), e))
        })
    }
}

/// Validated run configuration, immutable after construction
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Syslog file to scan
    pub log_file: PathBuf,
    /// Sender address for the report email
    pub from: String,
    /// Recipient addresses, in the order given on the command line
    pub to: Vec<String>,
    /// Mail transport settings
    pub mailer: MailerConfig,
}

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email address pattern is valid")
});

/// Check one address against the local-part @ domain syntax (the domain
/// must contain at least one dot)
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_ADDRESS.is_match(address)
}

impl RunConfig {
    /// Validate the raw command-line inputs once, up front
    ///
    /// The recipient list is split on commas without trimming, and every
    /// entry is validated independently, including a lone recipient with
    /// no comma. The error names the offending address.
    pub fn new(
        log_file: PathBuf,
        from: String,
        to_csv: &str,
        mailer: MailerConfig,
    ) -> Result<Self, ReportError> {
        if !log_file.exists() {
            return Err(ReportError::Configuration(format!(
                "{} is not a valid file",
                log_file.display()
            )));
        }

        if !is_valid_email(&from) {
            return Err(ReportError::Configuration(format!(
                "{} is not a valid email",
                from
            )));
        }

        let to: Vec<String> = to_csv.split(',').map(str::to_string).collect();
        for address in &to {
            if !is_valid_email(address) {
                return Err(ReportError::Configuration(format!(
                    "{} is not a valid email",
                    address
                )));
            }
        }

        Ok(RunConfig {
            log_file,
            from,
            to,
            mailer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("caiena78@gmail.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@example.com extra"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_config() {
        let file = NamedTempFile::new().unwrap();
        let config = RunConfig::new(
            file.path().to_path_buf(),
            "ops@example.com".to_string(),
            "a@example.com,b@example.com",
            MailerConfig::default(),
        )
        .unwrap();
        assert_eq!(config.to, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_missing_log_file_is_rejected() {
        let err = RunConfig::new(
            PathBuf::from("/nonexistent/syslog.txt"),
            "ops@example.com".to_string(),
            "a@example.com",
            MailerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)));
    }

    #[test]
    fn test_bad_sender_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = RunConfig::new(
            file.path().to_path_buf(),
            "not-an-email".to_string(),
            "a@example.com",
            MailerConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "not-an-email is not a valid email");
    }

    #[test]
    fn test_bad_recipient_in_list_is_named() {
        let file = NamedTempFile::new().unwrap();
        let err = RunConfig::new(
            file.path().to_path_buf(),
            "ops@example.com".to_string(),
            "a@example.com,bogus",
            MailerConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "bogus is not a valid email");
    }

    #[test]
    fn test_lone_bad_recipient_is_rejected() {
        // a single recipient with no comma gets the same validation
        let file = NamedTempFile::new().unwrap();
        let err = RunConfig::new(
            file.path().to_path_buf(),
            "ops@example.com".to_string(),
            "bogus",
            MailerConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "bogus is not a valid email");
    }

    #[test]
    fn test_padded_recipient_is_rejected() {
        // the list is split without trimming, so padding fails validation
        let file = NamedTempFile::new().unwrap();
        let err = RunConfig::new(
            file.path().to_path_buf(),
            "ops@example.com".to_string(),
            "a@example.com, b@example.com",
            MailerConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), " b@example.com is not a valid email");
    }

    #[test]
    fn test_mailer_defaults() {
        let mailer = MailerConfig::default();
        assert_eq!(mailer.relay_host, "relay.smhplus.org");
        assert_eq!(mailer.relay_port, 25);
        assert_eq!(mailer.report_filename, "failures.csv");
    }

    #[test]
    fn test_mailer_config_from_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "relay_host = \"smtp.internal\"").unwrap();
        file.flush().unwrap();

        let mailer = MailerConfig::from_file(file.path()).unwrap();
        assert_eq!(mailer.relay_host, "smtp.internal");
        assert_eq!(mailer.relay_port, 25);
        assert_eq!(mailer.report_filename, "failures.csv");
    }

    #[test]
    fn test_mailer_config_bad_toml_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "relay_port = \"not a port\"").unwrap();
        file.flush().unwrap();

        let err = MailerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)));
    }
}
