//! Line Classifier
//!
//! Sorts header lines into guard markers, system includes, project-local
//! includes and ordinary content.

use once_cell::sync::Lazy;
use regex::Regex;

static SYSTEM_INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#include\s*<(.+)>").expect("system include pattern"));

static LOCAL_INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^#include\s*"([^"]*)""#).expect("local include pattern"));

/// Classification of a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Include-guard marker, never emitted
    Guard,
    /// `#include <...>`, carrying the trimmed directive
    SystemInclude(String),
    /// `#include "..."`, carrying the quoted target
    LocalInclude(String),
    /// Anything else
    Content,
}

/// Classifies lines against a configured guard marker
#[derive(Debug, Clone)]
pub struct LineClassifier {
    guard_marker: String,
}

impl LineClassifier {
    /// Create a classifier for the given guard marker
    pub fn new(guard_marker: impl Into<String>) -> Self {
        Self {
            guard_marker: guard_marker.into().trim().to_string(),
        }
    }

    /// Check whether a line is the include-guard marker
    pub fn is_guard(&self, line: &str) -> bool {
        line.trim().starts_with(&self.guard_marker)
    }

    /// Classify a line from a file body.
    ///
    /// The guard check runs first, then the angle-bracket form, so a line is
    /// only ever a local include if it is neither of those.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if trimmed.starts_with(&self.guard_marker) {
            return LineKind::Guard;
        }

        if SYSTEM_INCLUDE.is_match(trimmed) {
            return LineKind::SystemInclude(trimmed.to_string());
        }

        if let Some(caps) = LOCAL_INCLUDE.captures(trimmed) {
            return LineKind::LocalInclude(caps[1].to_string());
        }

        LineKind::Content
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(onehdr_core::config::DEFAULT_GUARD_MARKER)
    }
}
