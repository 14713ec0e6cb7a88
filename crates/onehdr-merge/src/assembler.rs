//! Output Assembler
//!
//! Writes a merge result as a single guarded header.

use onehdr_core::{MergeConfig, MergeResult};
use std::io::{self, Write};

/// Formats a [`MergeResult`] according to a [`MergeConfig`]
pub struct OutputAssembler<'a> {
    config: &'a MergeConfig,
}

impl<'a> OutputAssembler<'a> {
    pub fn new(config: &'a MergeConfig) -> Self {
        Self { config }
    }

    /// Write banner, guard marker, system includes and one region per file
    pub fn assemble<W: Write>(&self, result: &MergeResult, out: &mut W) -> io::Result<()> {
        if !self.config.initial_text.is_empty() {
            write!(out, "{}\n\n", self.config.initial_text)?;
        }

        write!(out, "{}\n\n", self.config.guard_marker.trim())?;

        // BTreeSet iterates sorted
        for directive in &result.system_includes {
            writeln!(out, "{}", directive)?;
        }
        writeln!(out)?;

        for file in &result.files {
            writeln!(out, "{} {}", self.config.region_begin, file.label)?;
            out.write_all(file.content.as_bytes())?;
            write!(out, "\n{} {}\n\n", self.config.region_end, file.label)?;
        }

        Ok(())
    }

    /// Render into a string
    pub fn render(&self, result: &MergeResult) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.assemble(result, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onehdr_core::MergedFile;
    use pretty_assertions::assert_eq;

    fn sample_result() -> MergeResult {
        let mut result = MergeResult::default();
        result.system_includes.insert("#include <vector>".into());
        result.system_includes.insert("#include <string>".into());
        result.files.push(MergedFile {
            label: "detail/b.h".into(),
            content: "const int K = 2;\n".into(),
        });
        result.files.push(MergedFile {
            label: "a.h".into(),
            content: "int f();\n".into(),
        });
        result
    }

    #[test]
    fn test_assemble_layout() {
        let config = MergeConfig::default();
        let output = OutputAssembler::new(&config).render(&sample_result());

        assert_eq!(
            output,
            "#pragma once\n\
             \n\
             #include <string>\n\
             #include <vector>\n\
             \n\
             #pragma region detail/b.h\n\
             const int K = 2;\n\
             \n\
             #pragma endregion // detail/b.h\n\
             \n\
             #pragma region a.h\n\
             int f();\n\
             \n\
             #pragma endregion // a.h\n\
             \n"
        );
    }

    #[test]
    fn test_banner() {
        let config = MergeConfig {
            initial_text: "// Generated file".into(),
            ..MergeConfig::default()
        };
        let output = OutputAssembler::new(&config).render(&MergeResult::default());
        assert_eq!(output, "// Generated file\n\n#pragma once\n\n\n");
    }

    #[test]
    fn test_custom_markers() {
        let config = MergeConfig {
            region_begin: "// BEGIN".into(),
            region_end: "// END".into(),
            ..MergeConfig::default()
        };
        let mut result = MergeResult::default();
        result.files.push(MergedFile {
            label: "x.h".into(),
            content: String::new(),
        });

        let output = OutputAssembler::new(&config).render(&result);
        assert!(output.ends_with("// BEGIN x.h\n\n// END x.h\n\n"));
    }
}
