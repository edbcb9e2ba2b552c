//! Log source abstraction: confirm a log file can be read before analysis.

use async_trait::async_trait;

use crate::error::{AccessKind, AnalysisError, LogResult};

/// Abstraction over where log files live.
///
/// Lets the analyzer run against the real filesystem or an in-memory
/// mock in tests.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Verify that `path` is a readable regular file.
    ///
    /// Never consumes file contents.
    async fn check_access(&self, path: &str) -> LogResult<()>;
}

/// Checks log files on the local filesystem.
pub struct FileLogSource;

#[async_trait]
impl LogSource for FileLogSource {
    async fn check_access(&self, path: &str) -> LogResult<()> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| classify_io_error(path, &e))?;

        if !metadata.is_file() {
            return Err(AnalysisError::file_access(
                path,
                AccessKind::NotRegularFile,
                "not a regular file",
            ));
        }

        // Open and immediately close to confirm read permission.
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            AnalysisError::file_access(path, AccessKind::Denied, format!("cannot read file: {e}"))
        })?;
        drop(file);

        tracing::debug!(path, size = metadata.len(), "log file accessible");
        Ok(())
    }
}

fn classify_io_error(path: &str, err: &std::io::Error) -> AnalysisError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AnalysisError::file_access(path, AccessKind::NotFound, err)
    } else {
        AnalysisError::file_access(path, AccessKind::Denied, format!("file access error: {err}"))
    }
}
