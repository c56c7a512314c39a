use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::core::{TrafficResponse, aggregate_daily};
use crate::error::AppError;
use crate::output::format::csv_escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppendSummary {
    pub(crate) header_written: bool,
    pub(crate) rows: usize,
}

/// Append one `repository_name,date,{op},unique_visitors` row per date to `path`.
///
/// The header goes in only when the file could not be opened because it does
/// not exist. Rows are never deduplicated against what is already there.
pub(crate) fn append_csv(
    repo: &str,
    traffic: &TrafficResponse,
    path: &Path,
    op: &str,
) -> Result<AppendSummary, AppError> {
    let daily = aggregate_daily(&traffic.records);

    let needs_header = match File::open(path) {
        Ok(_) => false,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => return Err(AppError::io(path, e)),
    };

    if needs_header
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut write_rows = || -> std::io::Result<usize> {
        if needs_header {
            writeln!(
                writer,
                "repository_name,date,{},unique_visitors",
                csv_escape(op)
            )?;
        }
        let repo = csv_escape(repo);
        for (date, counts) in daily.iter() {
            writeln!(
                writer,
                "{repo},{},{},{}",
                csv_escape(date),
                counts.count,
                counts.uniques
            )?;
        }
        writer.flush()?;
        Ok(daily.len())
    };
    let rows = write_rows().map_err(|e| AppError::io(path, e))?;

    Ok(AppendSummary {
        header_written: needs_header,
        rows,
    })
}
