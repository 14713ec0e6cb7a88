//! Traversal Session
//!
//! Depth-first walk of the include graph. Each file is read once, keyed by
//! its normalized absolute path, which makes diamonds and cycles safe.
//!
//! The walk keeps an explicit stack of suspended files instead of recursing,
//! so graph depth is bounded by `MergeConfig::max_depth` rather than by the
//! call stack.

use crate::classifier::{LineClassifier, LineKind};
use crate::paths::{absolutize, HeaderResolver};
use onehdr_core::{Error, MergeConfig, MergeResult, MergedFile, Result, UnresolvedInclude};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A file whose scan is in progress
struct Frame {
    path: PathBuf,
    label: String,
    lines: std::vec::IntoIter<String>,
    /// Set once the guard marker has been seen
    copying: bool,
    content: String,
}

enum Step {
    /// Suspend the current file and scan this one first
    Descend(PathBuf),
    /// Current file fully scanned
    Done,
}

/// State of a single merge run
pub struct MergeSession {
    classifier: LineClassifier,
    resolver: HeaderResolver,
    max_depth: usize,
    visited: HashSet<PathBuf>,
    system_includes: BTreeSet<String>,
    files: Vec<MergedFile>,
    unresolved: Vec<UnresolvedInclude>,
}

impl MergeSession {
    /// Create a session whose labels are relative to `root`'s directory
    pub fn new(root: &Path, config: &MergeConfig) -> Result<Self> {
        config.validate()?;

        let resolver = HeaderResolver::for_root(root)?;
        debug!("Labels relative to {:?}", resolver.base_dir());

        Ok(Self {
            classifier: LineClassifier::new(config.guard_marker.as_str()),
            resolver,
            max_depth: config.max_depth,
            visited: HashSet::new(),
            system_includes: BTreeSet::new(),
            files: Vec::new(),
            unresolved: Vec::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn is_visited(&self, path: &Path) -> bool {
        absolutize(path)
            .map(|p| self.visited.contains(&p))
            .unwrap_or(false)
    }

    /// Merge `path` and everything it includes.
    ///
    /// Calling this again for a file already merged is a no-op.
    pub fn process(&mut self, path: &Path) -> Result<()> {
        let path = absolutize(path)?;
        if !self.visited.insert(path.clone()) {
            debug!("Already merged {:?}", path);
            return Ok(());
        }

        let mut stack = vec![self.open(path)?];

        while let Some(frame) = stack.last_mut() {
            match self.advance(frame)? {
                Step::Descend(child) => {
                    if self.max_depth != 0 && stack.len() >= self.max_depth {
                        return Err(Error::DepthExceeded {
                            limit: self.max_depth,
                            path: child,
                        });
                    }
                    let child_frame = self.open(child)?;
                    stack.push(child_frame);
                }
                Step::Done => {
                    if let Some(frame) = stack.pop() {
                        debug!("Merged {} ({} bytes)", frame.label, frame.content.len());
                        self.files.push(MergedFile {
                            label: frame.label,
                            content: frame.content,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Consume the session
    pub fn finish(self) -> MergeResult {
        MergeResult {
            files: self.files,
            system_includes: self.system_includes,
            unresolved: self.unresolved,
        }
    }

    fn open(&self, path: PathBuf) -> Result<Frame> {
        let source = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        let lines: Vec<String> = source.split_inclusive('\n').map(str::to_owned).collect();
        let label = self.resolver.label(&path);
        debug!("Scanning {} ({} lines)", label, lines.len());

        Ok(Frame {
            path,
            label,
            lines: lines.into_iter(),
            copying: false,
            content: String::new(),
        })
    }

    /// Scan until the frame needs a child merged first or runs out of lines
    fn advance(&mut self, frame: &mut Frame) -> Result<Step> {
        for line in frame.lines.by_ref() {
            // Pre-guard lines (license banners, old guards) are dropped unseen,
            // include directives among them too.
            if !frame.copying {
                if self.classifier.is_guard(&line) {
                    frame.copying = true;
                }
                continue;
            }

            match self.classifier.classify(&line) {
                LineKind::Guard => {}
                LineKind::SystemInclude(directive) => {
                    self.system_includes.insert(directive);
                }
                LineKind::LocalInclude(header) => {
                    match self.resolver.resolve(&header, &frame.path) {
                        Some(target) => {
                            if self.visited.insert(target.clone()) {
                                return Ok(Step::Descend(target));
                            }
                            debug!("Skipping {:?}, already merged", target);
                        }
                        None => {
                            warn!("{}: unresolved include \"{}\" kept as-is", frame.label, header);
                            self.unresolved.push(UnresolvedInclude {
                                from: frame.label.clone(),
                                directive: line.trim().to_string(),
                            });
                            frame.content.push_str(&line);
                        }
                    }
                }
                LineKind::Content => frame.content.push_str(&line),
            }
        }

        Ok(Step::Done)
    }
}
