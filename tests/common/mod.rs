//! Shared fixtures for concord integration tests

#![allow(dead_code)]

use concord::transfer::{TransferCommand, TransferRunner};
use concord::ui::{Answer, Confirmer};
use concord::ConcordError;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Dry-run output with nothing to transfer
pub const UP_TO_DATE_OUTPUT: &str = "\
sending incremental file list
3 files to consider

sent 97 bytes  received 12 bytes  218.00 bytes/sec
total size is 1.20K  speedup is 11.01 (DRY RUN)
";

/// Dry-run output announcing one new file
pub const NEW_FILE_OUTPUT: &str = "\
sending incremental file list
4 files to consider
>f+++++++++ newfile.txt

sent 130 bytes  received 19 bytes  298.00 bytes/sec
total size is 1.21K  speedup is 8.12 (DRY RUN)
";

/// Runner that replays canned results and records every command
#[derive(Default)]
pub struct ScriptedRunner {
    results: VecDeque<Result<String, ConcordError>>,
    pub commands: Vec<TransferCommand>,
}

impl ScriptedRunner {
    pub fn new(outputs: &[&str]) -> Self {
        Self {
            results: outputs.iter().map(|o| Ok(o.to_string())).collect(),
            commands: Vec::new(),
        }
    }

    pub fn then_fail(mut self, error: ConcordError) -> Self {
        self.results.push_back(Err(error));
        self
    }

    pub fn then_output(mut self, output: &str) -> Self {
        self.results.push_back(Ok(output.to_string()));
        self
    }
}

impl TransferRunner for ScriptedRunner {
    fn run(&mut self, command: &TransferCommand) -> Result<String, ConcordError> {
        self.commands.push(command.clone());
        self.results
            .pop_front()
            .unwrap_or_else(|| Ok(UP_TO_DATE_OUTPUT.to_string()))
    }
}

/// Replays canned answers and records every prompt it was shown
///
/// Once the script runs out every further prompt is answered "no".
#[derive(Debug, Default, Clone)]
pub struct ScriptedConfirm {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Confirmer for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<Answer, ConcordError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(Answer::No))
    }
}

/// Temporary home directory holding test projects
pub struct TestHome {
    pub temp_dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create home tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create `rel` (and parents) under home
    pub fn dir(&self, rel: &str) -> PathBuf {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).expect("create test dir");
        dir
    }

    /// Write `.concord.json` into `rel`
    pub fn write_config(&self, rel: &str, json: &str) -> PathBuf {
        let dir = self.dir(rel);
        fs::write(dir.join(concord::config::CONFIG_FILE_NAME), json).expect("write config");
        dir
    }
}
