//! Interpreter port for compile- and import-checking Python sources.

use std::path::{Path, PathBuf};

/// The outcome of one interpreter invocation.
#[derive(Debug, Clone)]
pub struct InterpreterRun {
    /// The exit code of the interpreter process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl InterpreterRun {
    /// Returns `true` if the interpreter exited successfully.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Invokes an external interpreter against project sources.
///
/// Abstracting the interpreter lets syntax and import checks be tested
/// with scripted exit codes instead of a real `python3` subprocess.
pub trait Interpreter: Send + Sync {
    /// Compile-checks the given source files without executing them,
    /// relative to `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter cannot be spawned or exceeds
    /// its execution timeout. A compile failure is a successful call
    /// with a non-zero exit code, not an error.
    fn compile_check(
        &self,
        root: &Path,
        files: &[PathBuf],
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>>;

    /// Runs a short program (import statements) with `root` on the module
    /// path and reports whether it raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter cannot be spawned or exceeds
    /// its execution timeout. An import exception is a successful call
    /// with a non-zero exit code, not an error.
    fn import_check(
        &self,
        root: &Path,
        program: &str,
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>>;
}
