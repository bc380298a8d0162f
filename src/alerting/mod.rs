//! Mail delivery for the failure report
//!
//! Builds a multipart message with the report attached and hands it to a
//! plaintext SMTP relay. No authentication, no TLS, no retry: a transport
//! failure fails the run.

use crate::config::MailerConfig;
use crate::error::ReportError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::{Message, SmtpTransport, Transport};
use std::path::Path;

/// Fixed subject line and preamble text of the report email
const SUBJECT: &str = "ASA VPN/WebVPN login Failures";

pub struct Mailer {
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Mailer { config }
    }

    /// Email the report at `report_path` from `from` to every recipient
    ///
    /// The attachment is always named after the configured report
    /// filename; its declared content type is guessed from that name.
    pub fn send_report(
        &self,
        report_path: &Path,
        from: &str,
        to: &[String],
    ) -> Result<(), ReportError> {
        let payload =
            std::fs::read(report_path).map_err(|e| ReportError::file_access(report_path, e))?;

        let message = self.build_message(payload, from, to)?;

        let transport = SmtpTransport::builder_dangerous(self.config.relay_host.as_str())
            .port(self.config.relay_port)
            .build();

        transport
            .send(&message)
            .map_err(|e| ReportError::MailDelivery(e.to_string()))?;

        log::info!(
            "Report emailed to {} recipient(s) via {}:{}",
            to.len(),
            self.config.relay_host,
            self.config.relay_port
        );
        Ok(())
    }

    fn build_message(
        &self,
        payload: Vec<u8>,
        from: &str,
        to: &[String],
    ) -> Result<Message, ReportError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(from)?)
            .subject(SUBJECT);

        for recipient in to {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        let attachment = Attachment::new(self.config.report_filename.clone())
            .body(payload, attachment_content_type(&self.config.report_filename));

        builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(SUBJECT.to_string()))
                    .singlepart(attachment),
            )
            .map_err(|e| ReportError::MailDelivery(format!("cannot assemble message: {}", e)))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ReportError> {
    address
        .parse()
        .map_err(|e| ReportError::MailDelivery(format!("bad mailbox {}: {}", address, e)))
}

/// Declared content type of the attachment, guessed from the filename
/// extension with an octet-stream fallback
fn attachment_content_type(filename: &str) -> ContentType {
    let mime = match Path::new(filename).extension().and_then(|e| e.to_str()) {
        Some("csv") => "text/csv",
        Some("txt") | Some("log") => "text/plain",
        _ => "application/octet-stream",
    };
    ContentType::parse(mime).expect("static mime type is valid")
}
