// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Expose the submission aggregate-compile-test pipeline for tests and the CLI.
// Author: Lukas Bower

pub mod combine;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod verify;

pub use config::BuildConfig;
pub use error::BuildError;

use std::path::PathBuf;

/// The four provenance labels: two (name, student id) pairs, used verbatim
/// in the artefact header. Content is never validated.
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: [String; 4],
}

impl LabelSet {
    pub fn new(labels: [String; 4]) -> Self {
        LabelSet { labels }
    }

    pub fn student1(&self) -> (&str, &str) {
        (&self.labels[0], &self.labels[1])
    }

    pub fn student2(&self) -> (&str, &str) {
        (&self.labels[2], &self.labels[3])
    }
}

/// One full run: the ordered input list, the provenance labels, and the
/// destination for the combined file.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub inputs: Vec<PathBuf>,
    pub labels: LabelSet,
    pub output: PathBuf,
}

/// Drive the whole pipeline: write the combined artefact, compile it with
/// the strict flag set, then smoke-test the executable against the embedded
/// fixture. The first failing stage aborts the run; there is no retry and
/// no partial success.
pub fn run(cfg: &BuildConfig, request: &BuildRequest) -> Result<(), BuildError> {
    combine::write_artifact(cfg, &request.labels, &request.inputs, &request.output)?;
    verify::compile_and_check(cfg, &request.output)
}
