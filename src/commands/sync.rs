//! Push/pull command
//!
//! Resolve config, build rsync options, dry-run, confirm, transfer. Group
//! mode repeats the whole sequence for every configured member.

use crate::config::{self, Command, ProjectConfig};
use crate::options::build_options;
use crate::transfer::{DryRunReport, TransferCommand, TransferRunner, DEFAULT_PROGRAM};
use crate::types::{ConcordError, Direction, Result};
use crate::ui::{member_header, up_to_date, Answer, Confirmer, ProgressReporter};
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRequest {
    pub direction: Direction,
    pub group: bool,
    pub check_only: bool,
    pub verbose: bool,
}

impl SyncRequest {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            group: false,
            check_only: false,
            verbose: false,
        }
    }

    fn for_member(&self) -> Self {
        Self {
            group: false,
            ..*self
        }
    }
}

impl From<Command> for SyncRequest {
    fn from(command: Command) -> Self {
        let args = command.args();
        Self {
            direction: command.direction(),
            group: args.group,
            check_only: args.check,
            verbose: args.verbose,
        }
    }
}

/// How a sync ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Dry-run found nothing to do
    UpToDate,

    /// Changes found, check-only mode so nothing was transferred
    ChangesPending(DryRunReport),

    /// User confirmed and the real run completed
    Transferred,

    /// User declined the prompt
    Aborted,

    /// User interrupted the prompt; nothing further runs
    Interrupted,

    /// Group mode requested without a `group` entry
    GroupNotConfigured,

    /// Every group member, in order, with its outcome
    Group(Vec<(String, SyncOutcome)>),
}

/// Drives one push or pull
pub struct Syncer<R, C> {
    runner: R,
    confirm: C,
    home: PathBuf,
    program: String,
}

impl<R: TransferRunner, C: Confirmer> Syncer<R, C> {
    /// `home` bounds the upward config search
    pub fn new(runner: R, confirm: C, home: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            confirm,
            home: home.into(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different transfer program than `rsync`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn confirmer(&self) -> &C {
        &self.confirm
    }

    /// Sync the project containing `dir`
    pub fn sync(&mut self, dir: &Path, request: &SyncRequest) -> Result<SyncOutcome> {
        let config = config::resolve(dir, &self.home)?;

        if request.group {
            return self.sync_group(&config, request);
        }

        let sources = vec![config.relative_to_config(dir)];
        self.sync_sources(&config, &sources, request)
    }

    fn sync_group(&mut self, config: &ProjectConfig, request: &SyncRequest) -> Result<SyncOutcome> {
        let Some(members) = &config.group else {
            eprintln!("No group defined in config file.");
            return Ok(SyncOutcome::GroupNotConfigured);
        };

        let mut outcomes = Vec::with_capacity(members.len());
        let mut failures: Vec<(String, ConcordError)> = Vec::new();

        for member in members {
            println!("{}", member_header(request.direction, member));
            match self.sync_member(config, member, request) {
                Ok(SyncOutcome::Interrupted) => {
                    info!("{} interrupted at group member {member}", request.direction);
                    outcomes.push((member.clone(), SyncOutcome::Interrupted));
                    break;
                }
                Ok(outcome) => outcomes.push((member.clone(), outcome)),
                Err(err) => {
                    warn!("{} of group member {member} failed: {err}", request.direction);
                    eprintln!("{err}");
                    failures.push((member.clone(), err));
                }
            }
        }

        if failures.is_empty() {
            return Ok(SyncOutcome::Group(outcomes));
        }

        eprintln!("{}", format_failure_summary(&failures));
        Err(ConcordError::GroupIncomplete {
            failed: failures.into_iter().map(|(member, _)| member).collect(),
        })
    }

    fn sync_member(
        &mut self,
        config: &ProjectConfig,
        member: &str,
        request: &SyncRequest,
    ) -> Result<SyncOutcome> {
        let member_dir = config.config_dir.join(member);
        if !member_dir.exists() {
            debug!("creating {}", member_dir.display());
            fs::create_dir_all(&member_dir)?;
        }
        self.sync(&member_dir, &request.for_member())
    }

    fn sync_sources(
        &mut self,
        config: &ProjectConfig,
        sources: &[PathBuf],
        request: &SyncRequest,
    ) -> Result<SyncOutcome> {
        let options = build_options(config, request.direction, sources);
        let command =
            TransferCommand::new(self.program.as_str(), request.direction, config, options);

        let report = self.evaluate(&command.with_dry_run(true), request)?;
        if !report.changes_pending {
            info!("nothing to {}", request.direction);
            println!("{}", up_to_date());
            return Ok(SyncOutcome::UpToDate);
        }

        println!("{}", report.details);
        if request.check_only {
            return Ok(SyncOutcome::ChangesPending(report));
        }

        let prompt = format!(
            "This was a dry-run. Are you sure you want to perform this {}?",
            request.direction
        );
        match self.confirm.confirm(&prompt)? {
            Answer::Yes => {}
            Answer::No => {
                info!("{} declined at confirmation", request.direction);
                return Ok(SyncOutcome::Aborted);
            }
            Answer::Interrupted => {
                info!("{} interrupted at confirmation", request.direction);
                return Ok(SyncOutcome::Interrupted);
            }
        }

        let report = self.evaluate(&command.with_dry_run(false), request)?;
        if report.changes_pending {
            println!("{}", report.details);
        }
        Ok(SyncOutcome::Transferred)
    }

    fn evaluate(
        &mut self,
        command: &TransferCommand,
        request: &SyncRequest,
    ) -> Result<DryRunReport> {
        if request.verbose {
            println!("{command}");
        }

        let progress = ProgressReporter::new();
        if command.dry_run {
            progress.start_check(request.direction);
        } else {
            progress.start_transfer(request.direction);
        }
        let output = self.runner.run(command);
        progress.finish();

        Ok(DryRunReport::parse(&output?))
    }
}

fn humanize_error(error: &ConcordError) -> (String, Option<&'static str>) {
    match error {
        ConcordError::Io(io) => match io.kind() {
            ErrorKind::PermissionDenied => (
                "Permission denied while preparing the member directory".to_string(),
                Some("Check permissions on the group parent directory."),
            ),
            _ => (format!("I/O operation failed: {io}"), None),
        },
        ConcordError::ConfigNotFound { .. } | ConcordError::ConfigInvalid { .. } => (
            error.to_string(),
            Some("Check the .concord.json governing this member."),
        ),
        ConcordError::TransferTool { program, status, .. } => (
            format!("{program} exited with {status}"),
            Some("Re-run with --verbose and try the printed command by hand."),
        ),
        ConcordError::TransferSpawn { program, .. } => (
            format!("{program} could not be started"),
            Some("Install rsync or point CONCORD_RSYNC at it."),
        ),
        other => (other.to_string(), None),
    }
}

fn format_failure_summary(failures: &[(String, ConcordError)]) -> String {
    let mut lines = vec!["Error summary:".to_string()];
    for (member, error) in failures {
        let (message, suggestion) = humanize_error(error);
        lines.push(format!("  {member}: {message}"));
        if let Some(suggestion) = suggestion {
            lines.push(format!("    Try: {suggestion}"));
        }
    }
    lines.join("\n")
}
