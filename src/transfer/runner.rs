//! Subprocess execution

use super::TransferCommand;
use crate::types::{ConcordError, Result};
use log::debug;
use std::process::{Command, Stdio};

/// Runs a transfer command and hands back its captured output
pub trait TransferRunner {
    /// Run to completion; non-zero exit is an error carrying the output
    fn run(&mut self, command: &TransferCommand) -> Result<String>;
}

/// Runs the real transfer program as a child process
#[derive(Debug, Default, Clone, Copy)]
pub struct RsyncRunner;

impl TransferRunner for RsyncRunner {
    fn run(&mut self, command: &TransferCommand) -> Result<String> {
        debug!("running {command}");

        let output = Command::new(&command.program)
            .args(command.args())
            .stdin(Stdio::inherit()) // ssh may ask for a password
            .output()
            .map_err(|source| ConcordError::TransferSpawn {
                program: command.program.clone(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ConcordError::TransferTool {
                program: command.program.clone(),
                status: output.status,
                output: text,
            });
        }

        Ok(text)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> TransferCommand {
        TransferCommand {
            program: "sh".to_string(),
            options: vec!["-c".to_string(), script.to_string()],
            dry_run: false,
            source: "sh".to_string(),
            destination: "unused".to_string(),
        }
    }

    #[test]
    fn test_captures_stdout_and_stderr() {
        let out = RsyncRunner.run(&shell("echo out; echo err >&2")).unwrap();
        assert!(out.contains("out"));
        assert!(out.contains("err"));
    }

    #[test]
    fn test_non_zero_exit_carries_output() {
        let err = RsyncRunner.run(&shell("echo broken pipe; exit 12")).unwrap_err();
        assert!(matches!(err, ConcordError::TransferTool { .. }));
        assert!(err.output().is_some_and(|o| o.contains("broken pipe")));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut cmd = shell("true");
        cmd.program = "/nonexistent/concord-test-rsync".to_string();
        let err = RsyncRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ConcordError::TransferSpawn { .. }));
    }
}
