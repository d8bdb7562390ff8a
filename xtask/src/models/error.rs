//! Error types for the codegen pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a codegen run.
///
/// All variants are unrecoverable at this layer: the first one halts the run
/// and propagates to the invoking build process. No retry, no aggregation —
/// a failed run's output tree is invalid as a whole and the run is repeated
/// from a clean state.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The schema root itself is missing or unreadable. Nothing was invoked.
    #[error("schema root '{}' is missing or unreadable: {source}", .root.display())]
    Discovery { root: PathBuf, source: std::io::Error },

    /// The compiler failed for one group of one target. Its stderr is carried
    /// verbatim as the diagnostic payload.
    #[error("protoc failed for target '{target}', group '{group}' ({}):\n{stderr}", exit_label(.status))]
    Compilation {
        target: &'static str,
        group: &'static str,
        /// Exit code; `None` for abnormal termination or a spawn failure.
        status: Option<i32>,
        stderr: String,
    },

    /// A generated artifact could not be read back or rewritten in place.
    #[error("failed to rewrite generated artifact '{}': {source}", .path.display())]
    Rewrite { path: PathBuf, source: std::io::Error },
}

#[allow(clippy::ref_option)] // signature dictated by the derive's field binding
fn exit_label(status: &Option<i32>) -> String {
    status.map_or_else(|| "terminated abnormally".to_owned(), |code| format!("exit code {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_error_reports_target_group_and_stderr() {
        let err = CodegenError::Compilation {
            target: "python",
            group: "serving",
            status: Some(1),
            stderr: "missing import".to_owned(),
        };

        let text = err.to_string();
        assert!(text.contains("python"));
        assert!(text.contains("serving"));
        assert!(text.contains("exit code 1"));
        assert!(text.contains("missing import"));
    }

    #[test]
    fn abnormal_termination_has_no_exit_code() {
        let err = CodegenError::Compilation {
            target: "go",
            group: "core",
            status: None,
            stderr: String::new(),
        };

        assert!(err.to_string().contains("terminated abnormally"));
    }
}
