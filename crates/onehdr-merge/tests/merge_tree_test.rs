//! Integration test with a realistic header-only library layout
//!
//! A umbrella header pulls in a set of headers under a subdirectory, each
//! carrying a license banner before its guard.

use onehdr_core::MergeConfig;
use onehdr_merge::{merge, merge_to_file};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BANNER: &str = "/*\n * Copyright (c) 2025, Example Author\n * Licensed under the BSD 3-Clause License.\n */\n\n";

fn write_header(root: &Path, name: &str, body: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("{}#pragma once\n{}", BANNER, body)).unwrap();
}

fn create_library_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let inc = temp.path().join("include");

    write_header(
        &inc,
        "regexlib.hpp",
        "#include \"regexlib/config.hpp\"\n#include \"regexlib/regex.hpp\"\n#include \"regexlib/match_result.hpp\"\n",
    );
    write_header(
        &inc,
        "regexlib/config.hpp",
        "#include <pcre2.h>\n\n#define REGEXLIB_VERSION 1\n",
    );
    write_header(
        &inc,
        "regexlib/types.hpp",
        "#include \"config.hpp\"\n#include <string>\n#include <cstdint>\n\nnamespace regexlib { using code_unit = uint8_t; }\n",
    );
    write_header(
        &inc,
        "regexlib/match_result.hpp",
        "#include \"types.hpp\"\n#include <vector>\n#include <string>\n\nnamespace regexlib { class match_result {}; }\n",
    );
    write_header(
        &inc,
        "regexlib/regex.hpp",
        "#include \"match_result.hpp\"\n#include \"regex_exception.hpp\"\n#include \"pcre2_data.hpp\"\n#include <string>\n\nnamespace regexlib { class regex {}; }\n",
    );
    write_header(
        &inc,
        "regexlib/regex_exception.hpp",
        "#include \"types.hpp\"\n#include <stdexcept>\n\nnamespace regexlib { class regex_exception {}; }\n",
    );

    temp
}

#[test]
fn test_library_merge_order() {
    let temp = create_library_tree();
    let root = temp.path().join("include/regexlib.hpp");

    let result = merge(&root, &MergeConfig::default()).unwrap();
    assert_eq!(
        result.labels(),
        vec![
            "regexlib/config.hpp",
            "regexlib/types.hpp",
            "regexlib/match_result.hpp",
            "regexlib/regex_exception.hpp",
            "regexlib/regex.hpp",
            "regexlib.hpp",
        ]
    );

    // pcre2_data.hpp is not part of the tree
    assert_eq!(result.unresolved.len(), 1);
    assert_eq!(result.unresolved[0].from, "regexlib/regex.hpp");
    assert!(result
        .file("regexlib/regex.hpp")
        .unwrap()
        .content
        .starts_with("#include \"pcre2_data.hpp\"\n"));

    for file in &result.files {
        assert!(!file.content.contains("Copyright"), "{} kept its banner", file.label);
    }
}

#[test]
fn test_library_merge_to_file() {
    let temp = create_library_tree();
    let root = temp.path().join("include/regexlib.hpp");
    let out = temp.path().join("regexlib_single.hpp");

    let config = MergeConfig {
        initial_text: "// Single-header build of regexlib".into(),
        ..MergeConfig::default()
    };
    merge_to_file(&root, &out, &config).unwrap();

    let output = fs::read_to_string(&out).unwrap();
    let header: Vec<&str> = output.lines().take(10).collect();
    assert_eq!(
        header,
        vec![
            "// Single-header build of regexlib",
            "",
            "#pragma once",
            "",
            "#include <cstdint>",
            "#include <pcre2.h>",
            "#include <stdexcept>",
            "#include <string>",
            "#include <vector>",
            "",
        ]
    );

    assert_eq!(output.matches("#pragma once").count(), 1);
    assert_eq!(output.matches("#pragma region ").count(), 6);
    assert!(output.ends_with("#pragma endregion // regexlib.hpp\n\n"));
}

#[test]
fn test_repeated_runs_are_independent() {
    let temp = create_library_tree();
    let root = temp.path().join("include/regexlib.hpp");
    let config = MergeConfig::default();

    let first = merge(&root, &config).unwrap();
    let second = merge(&root, &config).unwrap();
    assert_eq!(first, second);
}
