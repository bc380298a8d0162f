use std::path::PathBuf;
use structopt::StructOpt;

use asa_auth_report::alerting::Mailer;
use asa_auth_report::config::{MailerConfig, RunConfig};
use asa_auth_report::error::ReportError;
use asa_auth_report::input::scan_file;
use asa_auth_report::output::write_report;

/// Reads a syslog file exported from the Cisco ASA, extracts VPN/WebVPN
/// logon failures and emails them as a CSV report.
#[derive(StructOpt, Debug)]
#[structopt(name = "asa-auth-report", about = "Reads the Syslog file from the ASA.")]
struct Cli {
    /// Syslog file
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    file: PathBuf,

    /// From email address
    #[structopt(long = "emailfrom")]
    email_from: String,

    /// Email addresses split with a comma
    #[structopt(long = "emailto")]
    email_to: String,

    /// Optional TOML file overriding the mailer defaults
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::from_args();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let mailer_config = match cli.config {
        Some(ref path) => MailerConfig::from_file(path)?,
        None => MailerConfig::default(),
    };

    let config = RunConfig::new(cli.file, cli.email_from, &cli.email_to, mailer_config)?;

    let records = scan_file(&config.log_file)?;

    // The report lives in the working directory under its fixed name and
    // is rewritten from scratch every run.
    let report_path = std::env::current_dir()
        .map_err(|e| ReportError::file_access(".", e))?
        .join(&config.mailer.report_filename);
    write_report(&records, &report_path)?;

    let mailer = Mailer::new(config.mailer.clone());
    mailer.send_report(&report_path, &config.from, &config.to)?;

    Ok(())
}
