//! Compiler invocation behind a capability trait so tests can script it.

use crate::models::target::CompilerCommand;
use std::process::Command;

/// Outcome of one compiler invocation.
#[derive(Debug, Clone)]
pub struct CompilerOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    /// Captured stderr, the compiler's diagnostic payload.
    pub stderr: String,
}

impl CompilerOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Synchronous compiler capability.
///
/// The real implementation blocks on a child process until it exits; there is
/// no timeout and no cancellation path. Tests substitute a scripted fake
/// without spawning anything.
pub trait CompilerInvoker {
    /// Runs the command to completion and captures its diagnostics.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the process cannot be spawned.
    fn invoke(&self, command: &CompilerCommand) -> std::io::Result<CompilerOutput>;
}

/// Invokes `python -m grpc_tools.protoc` as a blocking subprocess.
#[derive(Debug, Default)]
pub struct GrpcToolsProtoc;

impl CompilerInvoker for GrpcToolsProtoc {
    fn invoke(&self, command: &CompilerCommand) -> std::io::Result<CompilerOutput> {
        let output = Command::new(&command.program).args(&command.args).output()?;

        Ok(CompilerOutput {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        assert!(CompilerOutput { status: Some(0), stderr: String::new() }.success());
        assert!(!CompilerOutput { status: Some(1), stderr: String::new() }.success());
        assert!(!CompilerOutput { status: None, stderr: String::new() }.success());
    }
}
