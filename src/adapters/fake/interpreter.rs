//! Fake interpreter with scripted compile/import outcomes.

use std::path::{Path, PathBuf};

use crate::adapters::fake::CallLog;
use crate::ports::interpreter::{Interpreter, InterpreterRun};

fn ok_run() -> InterpreterRun {
    InterpreterRun { exit_code: 0, stdout: String::new(), stderr: String::new() }
}

fn failed_run(stderr: &str) -> InterpreterRun {
    InterpreterRun { exit_code: 1, stdout: String::new(), stderr: stderr.to_string() }
}

/// Interpreter fake returning scripted outcomes and recording calls.
pub struct FakeInterpreter {
    compile: Result<InterpreterRun, String>,
    import: Result<InterpreterRun, String>,
    log: CallLog,
}

impl FakeInterpreter {
    /// An interpreter where both checks succeed.
    #[must_use]
    pub fn ok() -> Self {
        Self { compile: Ok(ok_run()), import: Ok(ok_run()), log: CallLog::new() }
    }

    /// An interpreter whose compile check exits non-zero with the given
    /// stderr.
    #[must_use]
    pub fn failing_compile(stderr: &str) -> Self {
        Self { compile: Ok(failed_run(stderr)), ..Self::ok() }
    }

    /// An interpreter whose import check exits non-zero with the given
    /// stderr.
    #[must_use]
    pub fn failing_import(stderr: &str) -> Self {
        Self { import: Ok(failed_run(stderr)), ..Self::ok() }
    }

    /// An interpreter whose invocations fail outright, as when the
    /// binary is missing or the timeout fires.
    #[must_use]
    pub fn erroring(message: &str) -> Self {
        Self {
            compile: Err(message.to_string()),
            import: Err(message.to_string()),
            log: CallLog::new(),
        }
    }

    /// A handle to the call log, valid after the fake is boxed.
    #[must_use]
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl Interpreter for FakeInterpreter {
    fn compile_check(
        &self,
        _root: &Path,
        files: &[PathBuf],
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>> {
        let listed =
            files.iter().map(|f| f.to_string_lossy().into_owned()).collect::<Vec<_>>().join(" ");
        self.log.record(format!("compile {listed}"));
        self.compile.clone().map_err(Into::into)
    }

    fn import_check(
        &self,
        _root: &Path,
        program: &str,
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>> {
        self.log.record(format!("import {program}"));
        self.import.clone().map_err(Into::into)
    }
}
