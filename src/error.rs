// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Typed failures surfaced by the aggregate-compile-test pipeline.
// Author: Lukas Bower

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Every way a run can fail. Failures are terminal: nothing is retried and
/// there is no partial-success reporting.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("output file does not exist: {path}")]
    MissingOutputFile { path: PathBuf },

    #[error("failed to read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("compiler exited with {status}")]
    CompileFailure { status: ExitStatus },

    #[error("compiler timed out after {}s", .timeout.as_secs())]
    CompileTimeout { timeout: std::time::Duration },

    #[error("test executable exited with {status}")]
    RuntimeFailure { status: ExitStatus },

    #[error("test executable timed out after {}s", .timeout.as_secs())]
    RuntimeTimeout { timeout: std::time::Duration },

    #[error("test case failed: expected {expected:?}, got {actual:?}")]
    TestMismatch { expected: String, actual: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
