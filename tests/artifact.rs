// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Validate combined-artefact layout, ordering and determinism.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;
use submitcc::combine::write_artifact;
use submitcc::{BuildConfig, BuildError, LabelSet};
use tempfile::TempDir;

fn labels() -> LabelSet {
    LabelSet::new([
        "Alice".into(),
        "23456789".into(),
        "Bob".into(),
        "98765432".into(),
    ])
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input");
    path
}

fn combined(inputs: &[PathBuf]) -> String {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("combined.c");
    write_artifact(&BuildConfig::default(), &labels(), inputs, &out).expect("write artefact");
    fs::read_to_string(&out).expect("read artefact")
}

#[test]
fn provenance_block_is_exact() {
    let text = combined(&[]);
    assert_eq!(
        text,
        "//  CITS2002 Project 1 2024\n\
         //  Student1:   Alice   23456789\n\
         //  Student2:   Bob   98765432\n\
         //  Platform:   Linux\n\
         \n\
         \n\
         //  THIS IS GENERATED FROM MULTIPLE HEADER AND SOURCE FILES.\n"
    );
}

#[test]
fn headers_precede_sources_regardless_of_input_order() {
    let dir = TempDir::new().expect("tempdir");
    let main_c = write_input(&dir, "main.c", "int main(void) { return 0; }\n");
    let util_h = write_input(&dir, "util.h", "int util(void);\n");
    let text = combined(&[main_c, util_h]);

    let h_at = text.find("util.h").expect("header section");
    let c_at = text.find("main.c").expect("source section");
    assert!(h_at < c_at, "header group must come first");
}

#[test]
fn in_group_order_matches_input_list() {
    let dir = TempDir::new().expect("tempdir");
    let b = write_input(&dir, "b.c", "int b;\n");
    let a = write_input(&dir, "a.c", "int a;\n");
    let text = combined(&[b, a]);

    let b_at = text.find(" b.c ").expect("b section");
    let a_at = text.find(" a.c ").expect("a section");
    assert!(b_at < a_at, "list order must hold inside a suffix group");
}

#[test]
fn non_matching_suffixes_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let c = write_input(&dir, "prog.c", "int x;\n");
    let notes = write_input(&dir, "notes.txt", "do not ship\n");
    let text = combined(&[c, notes]);

    assert!(!text.contains("notes.txt"));
    assert!(!text.contains("do not ship"));
}

#[test]
fn duplicate_inputs_are_emitted_twice() {
    let dir = TempDir::new().expect("tempdir");
    let h = write_input(&dir, "twice.h", "int t;\n");
    let text = combined(&[h.clone(), h]);
    assert_eq!(text.matches(" twice.h ").count(), 2);
}

#[test]
fn file_sections_are_wrapped_in_separators() {
    let dir = TempDir::new().expect("tempdir");
    let h = write_input(&dir, "one.h", "int one(void);\n");
    let text = combined(&[h]);

    let open = {
        let tag = " one.h ";
        let left = (80 - tag.len()) / 2;
        let right = 80 - tag.len() - left;
        format!("// {}{}{}\n", "=".repeat(left), tag, "=".repeat(right))
    };
    let close = format!("// {}\n", "=".repeat(80));
    let section = format!("\n\n{open}int one(void);\n{close}");
    assert!(text.ends_with(&section), "section layout must be byte-exact");
}

#[test]
fn directives_are_commented_but_preserved() {
    let dir = TempDir::new().expect("tempdir");
    let h = write_input(
        &dir,
        "guarded.h",
        "#pragma once\n#include \"other.h\"\n#include <stdio.h>\nint g;\n",
    );
    let text = combined(&[h]);

    assert!(text.contains("\n// #pragma once\n"));
    assert!(text.contains("\n// #include \"other.h\"\n"));
    assert!(text.contains("\n#include <stdio.h>\n"));
    assert!(text.contains("\nint g;\n"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().expect("tempdir");
    let h = write_input(&dir, "a.h", "#pragma once\nint a;\n");
    let c = write_input(&dir, "a.c", "#include \"a.h\"\nint main(void) { return 0; }\n");
    let inputs = [h, c];
    assert_eq!(combined(&inputs), combined(&inputs));
}

#[test]
fn unreadable_input_aborts_with_its_path() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("gone.c");
    let out = dir.path().join("combined.c");
    let err = write_artifact(&BuildConfig::default(), &labels(), &[missing.clone()], &out)
        .expect_err("missing input must fail");
    match err {
        BuildError::InputRead { path, .. } => assert_eq!(path, missing),
        other => panic!("expected InputRead, got {other:?}"),
    }
}
