//! Configuration management
//!
//! A project is anchored by a `.concord.json` file. Resolution walks from a
//! starting directory up towards the user's home directory and stops at the
//! first marker file it sees. All lookups take explicit paths; nothing here
//! touches the process working directory.

mod cli;

pub use cli::{Cli, Command, SyncArgs};

use crate::types::{ConcordError, Direction, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name that marks a project root
pub const CONFIG_FILE_NAME: &str = ".concord.json";

/// On-disk shape of `.concord.json`
#[derive(Debug, Deserialize)]
struct RawConfig {
    remote: Option<String>,

    group: Option<Vec<String>>,

    #[serde(default)]
    exclude: Vec<String>,

    #[serde(rename = "local-backup-dir")]
    local_backup_dir: Option<String>,

    #[serde(rename = "remote-backup-dir")]
    remote_backup_dir: Option<String>,
}

/// Normalized project configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Remote rsync destination, always ending with `/`
    pub remote: String,

    /// Directory holding the config file
    pub config_dir: PathBuf,

    /// Sibling project directories synchronized together
    pub group: Option<Vec<String>>,

    /// rsync exclude patterns
    pub exclude: Vec<String>,

    /// Backup directory used on pull
    pub local_backup_dir: Option<String>,

    /// Backup directory used on push
    pub remote_backup_dir: Option<String>,
}

impl ProjectConfig {
    /// Read and normalize the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_json(&text, path, config_dir)
    }

    /// Parse config text; `path` is only used for error messages
    pub fn from_json(text: &str, path: &Path, config_dir: PathBuf) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(text).map_err(|e| ConcordError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut remote = raw.remote.ok_or_else(|| ConcordError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: "required config parameter \"remote\" is missing".to_string(),
        })?;
        if !remote.ends_with('/') {
            remote.push('/');
        }

        Ok(Self {
            remote,
            config_dir,
            group: raw.group,
            exclude: raw.exclude,
            local_backup_dir: raw.local_backup_dir,
            remote_backup_dir: raw.remote_backup_dir,
        })
    }

    /// Backup directory that applies to `direction`, if configured
    pub fn backup_dir(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Pull => self.local_backup_dir.as_deref(),
            Direction::Push => self.remote_backup_dir.as_deref(),
        }
    }

    /// `dir` relative to the config directory; empty for the root itself
    pub fn relative_to_config(&self, dir: &Path) -> PathBuf {
        dir.strip_prefix(&self.config_dir)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

/// Locate the nearest `.concord.json` at or above `start`
///
/// The walk ends without looking inside `home`, and also ends at the
/// filesystem root when `start` lies outside `home`.
pub fn find_config_file(start: &Path, home: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir == home {
            break;
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        debug!("looking for {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Resolve the project configuration governing `start`
///
/// # Example
/// ```
/// use concord::config::resolve;
/// use std::fs;
///
/// let home = tempfile::TempDir::new().unwrap();
/// let project = home.path().join("project");
/// fs::create_dir_all(project.join("src")).unwrap();
/// fs::write(project.join(".concord.json"), r#"{"remote": "host:/backup"}"#).unwrap();
///
/// let config = resolve(&project.join("src"), home.path()).unwrap();
/// assert_eq!(config.remote, "host:/backup/");
/// assert_eq!(config.config_dir, project);
/// ```
pub fn resolve(start: &Path, home: &Path) -> Result<ProjectConfig> {
    let path = find_config_file(start, home).ok_or_else(|| ConcordError::ConfigNotFound {
        file: CONFIG_FILE_NAME,
        home: home.to_path_buf(),
    })?;
    debug!("using config {}", path.display());
    ProjectConfig::load(&path)
}
