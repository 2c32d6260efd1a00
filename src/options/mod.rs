//! rsync option assembly
//!
//! Filters are emitted in rsync's first-match-wins order: configured
//! excludes, then includes for each source directory and its parents, then
//! a catch-all exclude so nothing outside the sources is transferred.

use crate::config::ProjectConfig;
use crate::types::Direction;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Flags passed on every invocation
pub const BASELINE_OPTIONS: &[&str] = &[
    "-a",
    "-v",
    "-z",
    "--progress",
    "--delete-after",
    "--update",
    "--itemize-changes",
    "--human-readable",
    "--no-perms",
];

/// Build the full, ordered option list for one transfer
///
/// `sources` are relative to the config directory. An empty path stands for
/// the whole tree and disables include filtering.
///
/// # Example
/// ```
/// use concord::config::ProjectConfig;
/// use concord::options::build_options;
/// use concord::Direction;
/// use std::path::{Path, PathBuf};
///
/// let config = ProjectConfig::from_json(
///     r#"{"remote": "host:/b", "exclude": ["*.o"]}"#,
///     Path::new(".concord.json"),
///     PathBuf::from("/p"),
/// )
/// .unwrap();
///
/// let opts = build_options(&config, Direction::Push, &[PathBuf::from("a/b")]);
/// assert!(opts.ends_with(&[
///     "--exclude=*.o".to_string(),
///     "--include=/a/".to_string(),
///     "--include=/a/b/***".to_string(),
///     "--exclude=*".to_string(),
/// ]));
/// ```
pub fn build_options(
    config: &ProjectConfig,
    direction: Direction,
    sources: &[PathBuf],
) -> Vec<String> {
    let mut options: Vec<String> = BASELINE_OPTIONS.iter().map(|s| s.to_string()).collect();

    options.extend(config.exclude.iter().map(|pattern| format!("--exclude={pattern}")));

    let includes = include_filters(sources);
    if !includes.is_empty() {
        options.extend(includes);
        options.push("--exclude=*".to_string());
    }

    if let Some(dir) = config.backup_dir(direction) {
        options.push("--backup".to_string());
        options.push(format!("--backup-dir={dir}"));
    }

    options
}

/// Include filters for `sources`; empty when any source is the whole tree
pub fn include_filters(sources: &[PathBuf]) -> Vec<String> {
    if sources.is_empty() || sources.iter().any(|s| is_tree_root(s)) {
        return Vec::new();
    }

    let mut filters = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for source in sources {
        let mut parents: Vec<&Path> = source
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        parents.reverse();

        for parent in parents {
            if seen.insert(parent.to_path_buf()) {
                filters.push(format!("--include=/{}/", to_filter_path(parent)));
            }
        }
        filters.push(format!("--include=/{}/***", to_filter_path(source)));
    }

    filters
}

fn is_tree_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(".")
}

/// rsync filter rules always use `/` separators; wildcard characters in
/// names are backslash-escaped so they match literally
fn to_filter_path(path: &Path) -> String {
    path.components()
        .map(|c| escape_wildcards(&c.as_os_str().to_string_lossy()))
        .collect::<Vec<_>>()
        .join("/")
}

fn escape_wildcards(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | '*' | '?' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
