//! Header Path Resolver
//!
//! Resolves quoted includes against the including file and labels merged
//! files relative to the root header's directory.

use onehdr_core::Result;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolver anchored at the root header's directory
#[derive(Debug, Clone)]
pub struct HeaderResolver {
    /// Directory of the root header (absolute, normalized)
    base_dir: PathBuf,
}

impl HeaderResolver {
    /// Create a resolver for the given root header
    pub fn for_root(root_file: &Path) -> Result<Self> {
        let root = absolutize(root_file)?;
        let base_dir = root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        Ok(Self { base_dir })
    }

    /// Directory every label is relative to
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a quoted include relative to the including file.
    ///
    /// Returns `None` when the target is not an existing file; the caller
    /// passes such directives through unchanged.
    pub fn resolve(&self, header: &str, from_file: &Path) -> Option<PathBuf> {
        let parent = from_file.parent().unwrap_or_else(|| Path::new(""));
        let candidate = normalize(&parent.join(header));
        if candidate.is_file() {
            debug!("Resolved {} relative to {:?}", header, from_file);
            Some(candidate)
        } else {
            debug!("Failed to resolve header: {}", header);
            None
        }
    }

    /// Label for a merged file, relative to the base directory
    pub fn label(&self, path: &Path) -> String {
        relative_label(path, &self.base_dir)
    }
}

/// Make a path absolute against the current directory and normalize it
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexically normalize a path: drop `.`, fold `name/..`.
///
/// Symlinks are not resolved, so two spellings of a path through a symlink
/// are distinct files to the merger.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// `/`-separated path of `path` relative to `base`, using `..` to climb out
pub fn relative_label(path: &Path, base: &Path) -> String {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    // Nothing shared (e.g. another drive): fall back to the full path
    if common == 0 {
        return path.to_string_lossy().replace('\\', "/");
    }

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base_parts.len() {
        parts.push("..".into());
    }
    for component in &path_parts[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    if parts.is_empty() {
        ".".into()
    } else {
        parts.join("/")
    }
}
