//! Live interpreter adapter invoking `python3` as a subprocess.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::ports::interpreter::{Interpreter, InterpreterRun};

/// Live interpreter adapter that spawns the configured Python binary.
///
/// Every invocation is bounded by a wall-clock timeout; a hung
/// interpreter is killed and reported as an error instead of blocking
/// the whole validation run.
pub struct LiveInterpreter {
    command: String,
    timeout: Duration,
}

impl LiveInterpreter {
    /// Creates an adapter for the given interpreter command with the
    /// given per-invocation timeout.
    #[must_use]
    pub fn new(command: impl Into<String>, timeout_secs: u64) -> Self {
        Self { command: command.into(), timeout: Duration::from_secs(timeout_secs) }
    }

    fn run(
        &self,
        root: &Path,
        args: &[String],
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>> {
        let mut child = Command::new(&self.command)
            .args(args)
            .current_dir(root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to spawn {}: {e}", self.command))?;

        let status = wait_with_timeout(&mut child, self.timeout).map_err(|e| {
            format!("{} {}: {e}", self.command, args.join(" "))
        })?;

        let mut stdout = String::new();
        if let Some(mut out) = child.stdout.take() {
            out.read_to_string(&mut stdout)?;
        }
        let mut stderr = String::new();
        if let Some(mut err) = child.stderr.take() {
            err.read_to_string(&mut stderr)?;
        }

        Ok(InterpreterRun { exit_code: status.code().unwrap_or(-1), stdout, stderr })
    }
}

impl Interpreter for LiveInterpreter {
    fn compile_check(
        &self,
        root: &Path,
        files: &[PathBuf],
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>> {
        let mut args = vec!["-m".to_string(), "py_compile".to_string()];
        args.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        self.run(root, &args)
    }

    fn import_check(
        &self,
        root: &Path,
        program: &str,
    ) -> Result<InterpreterRun, Box<dyn std::error::Error + Send + Sync>> {
        self.run(root, &["-c".to_string(), program.to_string()])
    }
}

/// Waits for the child to exit, killing it once `timeout` elapses.
fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
) -> Result<ExitStatus, Box<dyn std::error::Error + Send + Sync>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(format!("timed out after {}s", timeout.as_secs()).into());
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_with_timeout_returns_status_of_fast_process() {
        let mut child = Command::new("true").spawn().unwrap();
        let status = wait_with_timeout(&mut child, Duration::from_secs(5)).unwrap();
        assert!(status.success());
    }

    #[test]
    fn wait_with_timeout_kills_hung_process() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        let err = wait_with_timeout(&mut child, Duration::from_millis(50)).unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn captures_exit_code_and_stderr() {
        // `true` ignores its arguments, so this exercises the happy path
        // without requiring a Python installation.
        let interp = LiveInterpreter::new("true", 5);
        let run = interp
            .compile_check(Path::new("."), &[PathBuf::from("app/main.py")])
            .unwrap();
        assert_eq!(run.exit_code, 0);
        assert!(run.success());
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let interp = LiveInterpreter::new("definitely-not-a-real-binary", 5);
        let err = interp.import_check(Path::new("."), "pass").unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }
}
