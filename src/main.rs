// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: CLI entry point for the submitcc submission builder.
// Author: Lukas Bower

use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;
use submitcc::{BuildConfig, BuildRequest, LabelSet};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Input source files, mixed headers and implementations, in order.
    #[arg(short = 'i', num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,
    /// Provenance labels: name and id for each of the two students.
    #[arg(short = 'l', num_args = 4, required = true)]
    labels: Vec<String>,
    /// Destination path for the combined source file.
    #[arg(short = 'o')]
    output: PathBuf,
}

fn main_entry() -> Result<()> {
    let args = Args::parse();
    ensure!(args.labels.len() == 4, "expected exactly four labels");
    let mut labels = args.labels.into_iter();
    let labels = LabelSet::new([
        labels.next().unwrap_or_default(),
        labels.next().unwrap_or_default(),
        labels.next().unwrap_or_default(),
        labels.next().unwrap_or_default(),
    ]);

    let request = BuildRequest {
        inputs: args.inputs,
        labels,
        output: args.output,
    };
    submitcc::run(&BuildConfig::default(), &request)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = main_entry() {
        eprintln!("submitcc: {e}");
        std::process::exit(1);
    }
}
