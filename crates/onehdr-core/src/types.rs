//! Core type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One merged file's contribution to the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedFile {
    /// Path relative to the root file's directory, `/`-separated
    pub label: String,
    /// Body after the guard marker, with the guard and resolved includes removed
    pub content: String,
}

/// A quoted include that did not point at an existing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedInclude {
    /// Label of the file containing the directive
    pub from: String,
    /// The directive, trimmed
    pub directive: String,
}

/// Everything collected by one merge run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Merged files in first-visit order, includes before includers
    pub files: Vec<MergedFile>,
    /// Unique system include directives
    pub system_includes: BTreeSet<String>,
    /// Quoted includes passed through unchanged
    pub unresolved: Vec<UnresolvedInclude>,
}

impl MergeResult {
    /// Look up a merged file by its label
    pub fn file(&self, label: &str) -> Option<&MergedFile> {
        self.files.iter().find(|f| f.label == label)
    }

    /// Labels in output order
    pub fn labels(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.label.as_str()).collect()
    }
}
