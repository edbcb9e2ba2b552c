//! Result collector: thread-safe accumulator of outcome records.
//!
//! Cloning a `ResultCollector` yields another handle to the same
//! underlying list, so every spawned analysis task can append its record
//! directly. Records are kept in arrival order.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use la_log_tools::{AnalysisResult, AnalysisStatus};

use crate::error::ReportError;

#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    results: Arc<Mutex<Vec<AnalysisResult>>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking task cannot leave a half-pushed record behind, so a
    // poisoned lock still guards a consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<AnalysisResult>> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one record.
    pub fn push(&self, result: AnalysisResult) {
        self.lock().push(result);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|r| r.status == AnalysisStatus::Ok)
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|r| r.status == AnalysisStatus::Failure)
            .count()
    }

    /// Snapshot of all records in arrival order.
    pub fn results(&self) -> Vec<AnalysisResult> {
        self.lock().clone()
    }

    /// Write the human-readable summary block.
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let results = self.lock();
        let mut succeeded = 0;
        let mut failed = 0;

        writeln!(out, "\n=== Analysis Summary ===")?;
        for result in results.iter() {
            let marker = match result.status {
                AnalysisStatus::Ok => {
                    succeeded += 1;
                    "✓"
                }
                AnalysisStatus::Failure => {
                    failed += 1;
                    "✗"
                }
            };
            writeln!(
                out,
                "{marker} [{}] {}: {}",
                result.log_id, result.file_path, result.message
            )?;
            if !result.error_details.is_empty() {
                writeln!(out, "   Error: {}", result.error_details)?;
            }
        }
        writeln!(
            out,
            "\nTotal: {} logs analyzed ({succeeded} successful, {failed} failed)",
            results.len()
        )
    }

    /// Summary block as a string.
    pub fn summary(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_summary(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Pretty-printed JSON array of records in collector order.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&*self.lock())?)
    }

    /// Write the JSON report to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), records = self.len(), "report written");
        Ok(())
    }

    /// Read a JSON report written by [`save_to_file`](Self::save_to_file).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<AnalysisResult>, ReportError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ReportError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<Vec<AnalysisResult>> for ResultCollector {
    fn from(results: Vec<AnalysisResult>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results)),
        }
    }
}
