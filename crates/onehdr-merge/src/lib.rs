//! onehdr Merge
//!
//! Flattens a tree of guarded headers into one header.
//!
//! ## Modules
//!
//! - `classifier` - Guard marker and include directive detection
//! - `paths` - Include resolution and root-relative labels
//! - `session` - Depth-first include graph traversal
//! - `assembler` - Single-header output formatting

pub mod assembler;
pub mod classifier;
pub mod paths;
pub mod session;

pub use assembler::OutputAssembler;
pub use classifier::{LineClassifier, LineKind};
pub use paths::HeaderResolver;
pub use session::MergeSession;

use onehdr_core::{Error, MergeConfig, MergeResult, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Merge the header tree rooted at `root`
pub fn merge(root: &Path, config: &MergeConfig) -> Result<MergeResult> {
    if !root.exists() {
        return Err(Error::FileNotFound(root.display().to_string()));
    }

    let mut session = MergeSession::new(root, config)?;
    session.process(root)?;
    let result = session.finish();

    info!(
        "Merged {} files, {} system includes, {} unresolved includes",
        result.files.len(),
        result.system_includes.len(),
        result.unresolved.len()
    );
    Ok(result)
}

/// Merge the header tree rooted at `input` and write it to `output`.
///
/// The output file is only created once the whole tree has been read.
pub fn merge_to_file(input: &Path, output: &Path, config: &MergeConfig) -> Result<MergeResult> {
    let result = merge(input, config)?;

    let write_error = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(output).map_err(write_error)?);
    OutputAssembler::new(config)
        .assemble(&result, &mut writer)
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!("Output written to: {}", output.display());
    Ok(result)
}
