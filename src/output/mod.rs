use crate::error::ReportError;
use crate::models::FailureRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the failure report. The downstream consumer expects
/// exactly this quoted header over unquoted data rows.
pub const REPORT_HEADER: &str = "\"Date\",\"Device_ip\",\"radius_ip\",\"user\",\"User_ip\"";

/// Write the failure report, truncating any previous report at `path`
///
/// Rows are comma-joined and CRLF-terminated, field values verbatim.
/// Usernames containing commas or quotes are NOT escaped; the consuming
/// reader expects the historical unquoted row shape, corrupt alignment
/// and all.
pub fn write_report(records: &[FailureRecord], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::file_access(path, e))?;
    let mut writer = BufWriter::new(file);

    write_rows(&mut writer, records).map_err(|e| ReportError::file_access(path, e))?;

    log::info!("Report written to {}", path.display());
    Ok(())
}

fn write_rows(writer: &mut impl Write, records: &[FailureRecord]) -> std::io::Result<()> {
    write!(writer, "{}\r\n", REPORT_HEADER)?;
    for record in records {
        write!(
            writer,
            "{},{},{},{},{}\r\n",
            record.date, record.device_ip, record.radius_ip, record.user, record.user_ip
        )?;
    }
    writer.flush()
}
