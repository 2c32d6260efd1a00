//! Dry-run output classification
//!
//! With `--itemize-changes`, rsync prints one line per item it would touch,
//! each starting with an update-type character followed by a file-type
//! character (`>f`, `cd`, `.L`, ...), or `*deleting` for removals. Those lines
//! appear after the "N files to consider" summary.

/// Phrase rsync prints once the file list is built
pub const SUMMARY_MARKER: &str = "files to consider";

/// Per-item prefixes that mean something would change
pub const CHANGE_TOKENS: &[&str] = &[
    "<f", ">f", "cf", "hf", ".f", //
    "<d", ">d", "cd", "hd", ".d", //
    "<L", ">L", "cL", "hL", ".L", //
    "<D", ">D", "cD", "hD", ".D", //
    "<S", ">S", "cS", "hS", ".S", //
    "*deleting",
];

/// Outcome of inspecting one rsync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunReport {
    /// Whether any item line was found
    pub changes_pending: bool,

    /// Output following the summary marker
    pub details: String,
}

impl DryRunReport {
    /// Classify captured rsync output
    ///
    /// When the marker is missing the whole output is scanned.
    ///
    /// # Example
    /// ```
    /// use concord::transfer::DryRunReport;
    ///
    /// let out = "sending incremental file list\n1 files to consider\n>f+++++++++ new.txt\n";
    /// assert!(DryRunReport::parse(out).changes_pending);
    /// ```
    pub fn parse(output: &str) -> Self {
        let details = match output.find(SUMMARY_MARKER) {
            Some(pos) => &output[pos + SUMMARY_MARKER.len()..],
            None => output,
        };

        let changes_pending = details
            .split(['\n', '\r'])
            .map(str::trim_start)
            .any(is_change_line);

        Self {
            changes_pending,
            details: details.trim_matches(['\n', '\r']).to_string(),
        }
    }
}

fn is_change_line(line: &str) -> bool {
    CHANGE_TOKENS.iter().any(|token| line.starts_with(token))
}
