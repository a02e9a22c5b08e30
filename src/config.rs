// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Immutable build configuration shared by every pipeline stage.
// Author: Lukas Bower

use regex::Regex;
use std::time::Duration;

/// Embedded smoke-test program, its positional arguments, and the exact
/// bytes the compiled submission must print for them.
#[derive(Debug, Clone)]
pub struct TestFixture {
    pub file_name: &'static str,
    pub source: &'static str,
    pub args: [&'static str; 3],
    pub expected_stdout: &'static str,
}

const FIXTURE_SOURCE: &str = "function func a b c\n\
                              \t  return (a + b) * c + arg0\n\
                              \n\
                              print arg0\n\
                              print (1 + 3) * 0.5 / 2 / 16\n\
                              print func(1, 2, arg47)\n\
                              print func(arg1, arg2, 4) + func(1, 2, arg3) - 1\n";

const FIXTURE_EXPECTED: &str = "1\n0.062500\n1\n21\n";

/// Constants for one full aggregate-compile-test run. Built once and passed
/// by reference into each stage; there is no global mutable state.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub separator_width: usize,
    pub comment_marker: &'static str,
    pub header_suffix: &'static str,
    pub impl_suffix: &'static str,
    pub identity_line: &'static str,
    pub platform: &'static str,
    pub compiler: &'static str,
    pub compiler_flags: &'static [&'static str],
    pub subprocess_timeout: Duration,
    pub pragma_once: Regex,
    pub local_include: Regex,
    pub fixture: TestFixture,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            separator_width: 80,
            comment_marker: "// ",
            header_suffix: ".h",
            impl_suffix: ".c",
            identity_line: "CITS2002 Project 1 2024",
            platform: "Linux",
            compiler: "cc",
            compiler_flags: &["-std=c11", "-Wall", "-Werror"],
            subprocess_timeout: Duration::from_secs(2),
            // `(\s|$)` stands in for the trailing `\s+` of the original
            // newline-terminated match, so `#pragma once` still matches once
            // the line terminator has been split off.
            pragma_once: Regex::new(r#"^\s*#pragma\s+once(\s|$)"#)
                .expect("hard-coded pragma-once pattern"),
            local_include: Regex::new(r#"^\s*#include\s+".+"#)
                .expect("hard-coded local-include pattern"),
            fixture: TestFixture {
                file_name: "test.ml",
                source: FIXTURE_SOURCE,
                args: ["1", "2", "3"],
                expected_stdout: FIXTURE_EXPECTED,
            },
        }
    }
}
