use crate::error::ReportError;
use crate::input::matcher::match_line;
use crate::models::FailureRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan a syslog file for authentication-rejection records
///
/// Reads the file line by line in file order and applies the line
/// matcher to each raw line (the trailing newline stays attached; the
/// pattern does not care). Lines that do not match contribute nothing.
/// Matched records are accumulated in encounter order; the match volume
/// is small relative to the file, so holding them in memory is fine.
pub fn scan_file(path: &Path) -> Result<Vec<FailureRecord>, ReportError> {
    let file = File::open(path).map_err(|e| ReportError::file_access(path, e))?;
    let mut reader = BufReader::new(file);

    log::info!("Processing file {}", path.display());

    let mut records = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .map_err(|e| ReportError::file_access(path, e))?;

        if bytes_read == 0 {
            break; // EOF
        }

        if let Some(record) = match_line(&line) {
            records.push(record);
        }
    }

    log::info!("Found {} rejected login(s)", records.len());

    Ok(records)
}
