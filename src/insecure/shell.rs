//! Raw shell execution
//!
//! INTENTIONALLY INSECURE: the command line is handed to the configured shell
//! untouched. Metacharacters, pipes and chained commands all work. There is
//! no timeout, no concurrency limit, and the child is not killed when the
//! request goes away.

use std::fmt;
use std::io::{self, Read};
use std::process::Stdio;
use tokio::process::Command;

use crate::config::ShellConfig;

/// Captured result of a shell invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    /// Stdout and stderr interleaved in write order
    pub combined: Vec<u8>,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ExecOutput {
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Turn a non-zero exit into an error, keeping the output on success
    pub fn into_result(self) -> Result<Vec<u8>, ExecError> {
        if self.success() {
            Ok(self.combined)
        } else {
            Err(ExecError::Exit(ExitCode(self.code)))
        }
    }
}

/// Exit code wrapper whose display mirrors `exit status N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub Option<i32>);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell could not be started
    #[error("{0}")]
    Spawn(#[from] io::Error),
    /// The shell ran but reported failure
    #[error("{0}")]
    Exit(ExitCode),
}

/// Run `command_line` through `shell` and capture its combined output.
///
/// Stdout and stderr share one pipe, so the captured bytes keep the order
/// the child wrote them in.
pub async fn run_unchecked(shell: &ShellConfig, command_line: &str) -> io::Result<ExecOutput> {
    let (mut reader, writer) = io::pipe()?;

    // The Command owns the parent's write ends; drop it right after spawn so
    // the reader sees EOF once the child exits.
    let mut child = {
        let mut cmd = Command::new(&shell.program);
        cmd.args(&shell.args)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        cmd.spawn()?
    };

    let combined = tokio::task::spawn_blocking(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map(|_| buf)
    })
    .await
    .map_err(io::Error::other)??;
    let status = child.wait().await?;

    Ok(ExecOutput {
        combined,
        code: status.code(),
    })
}

/// Run and collapse both spawn failures and non-zero exits into `ExecError`
pub async fn run_checked_exit(shell: &ShellConfig, command_line: &str) -> Result<Vec<u8>, ExecError> {
    run_unchecked(shell, command_line).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_display() {
        assert_eq!(ExitCode(Some(1)).to_string(), "exit status 1");
        assert_eq!(ExitCode(None).to_string(), "terminated by signal");
    }

    #[test]
    fn test_into_result() {
        let ok = ExecOutput { combined: b"hi\n".to_vec(), code: Some(0) };
        assert_eq!(ok.into_result().unwrap(), b"hi\n");

        let failed = ExecOutput { combined: Vec::new(), code: Some(2) };
        assert_eq!(failed.into_result().unwrap_err().to_string(), "exit status 2");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_chained_commands() {
        let shell = ShellConfig::default();
        let out = run_unchecked(&shell, "echo one; echo two").await.unwrap();
        assert!(out.success());
        assert_eq!(String::from_utf8_lossy(&out.combined), "one\ntwo\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stderr_is_captured() {
        let shell = ShellConfig::default();
        let out = run_unchecked(&shell, "echo out; echo err 1>&2").await.unwrap();
        assert_eq!(String::from_utf8_lossy(&out.combined), "out\nerr\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_streams_keep_write_order() {
        let shell = ShellConfig::default();
        let out = run_unchecked(&shell, "echo err 1>&2; echo out; echo err2 1>&2")
            .await
            .unwrap();
        assert_eq!(out.combined, b"err\nout\nerr2\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_captured_on_failure() {
        let shell = ShellConfig::default();
        let out = run_unchecked(&shell, "echo partial; exit 4").await.unwrap();
        assert_eq!(out.code, Some(4));
        assert_eq!(out.combined, b"partial\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit() {
        let shell = ShellConfig::default();
        let err = run_checked_exit(&shell, "exit 3").await.unwrap_err();
        assert!(matches!(err, ExecError::Exit(ExitCode(Some(3)))));
        assert_eq!(err.to_string(), "exit status 3");
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let shell = ShellConfig {
            program: "/definitely/not/a/shell".to_string(),
            args: Vec::new(),
        };
        let err = run_checked_exit(&shell, "echo hi").await.unwrap_err();
        assert!(matches!(err, ExecError::Spawn(_)));
    }
}
