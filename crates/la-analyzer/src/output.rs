//! Report path decoration: `dir/report.json` → `dir/YYMMDD_report.json`.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Insert a `YYMMDD_` date prefix before the file name, keeping the
/// directory and extension. An empty path stays empty.
pub fn decorate_output_path(path: &Path, date: NaiveDate) -> PathBuf {
    let Some(file_name) = path.file_name() else {
        return path.to_path_buf();
    };

    let decorated = format!("{}_{}", date.format("%y%m%d"), file_name.to_string_lossy());
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(decorated),
        _ => PathBuf::from(decorated),
    }
}

/// [`decorate_output_path`] with today's local date.
pub fn decorate_with_today(path: &Path) -> PathBuf {
    decorate_output_path(path, Local::now().date_naive())
}
