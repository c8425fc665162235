use std::{io, path::Path};

use crate::{
    error::RuntimeError,
    function_record::{FunctionRecord, COLUMN_TITLES},
};

/// Write the report to a new CSV file at `path`.
/// Only the file creation is fatal, write errors are logged.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_report<P: AsRef<Path>>(records: &[FunctionRecord], path: P) -> Result<usize, RuntimeError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|source| RuntimeError::ReportFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(write_records(&mut writer, records))
}

/// Write the title row followed by one row per record, and flush the writer.
/// Rows that fail to write are logged and skipped. Returns the number of rows
/// written, or `0` when the final flush fails and what reached the output is unknown.
pub fn write_records<W: io::Write>(writer: &mut csv::Writer<W>, records: &[FunctionRecord]) -> usize {
    if let Err(err) = writer.write_record(COLUMN_TITLES) {
        tracing::error!(error = %err, "error when writing title");
    }

    let mut written = 0;
    for record in records {
        match writer.write_record(record.row()) {
            Ok(()) => written += 1,
            Err(err) => {
                tracing::error!(function_name = %record.name, error = %err, "error when writing the entry");
            }
        }
    }

    if let Err(err) = writer.flush() {
        tracing::error!(error = %err, rows = written, "error when flushing the output, rows may be missing");
        return 0;
    }

    written
}
