// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Compile the combined artefact and smoke-test the executable.
// Author: Lukas Bower

use crate::config::BuildConfig;
use crate::error::BuildError;
use log::{debug, info};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Wait for a child with a wall-clock bound. Returns `None` when the bound
/// expires, in which case the child has been killed and reaped.
fn wait_bounded(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(Duration::from_millis(10));
    }
}

fn compile_artifact(
    cfg: &BuildConfig,
    artifact: &Path,
    exec_path: &Path,
    work_dir: &Path,
) -> Result<(), BuildError> {
    let mut child = Command::new(cfg.compiler)
        .args(cfg.compiler_flags)
        .arg("-o")
        .arg(exec_path)
        .arg(artifact)
        .current_dir(work_dir)
        .spawn()?;
    match wait_bounded(&mut child, cfg.subprocess_timeout)? {
        None => Err(BuildError::CompileTimeout {
            timeout: cfg.subprocess_timeout,
        }),
        Some(status) if !status.success() => Err(BuildError::CompileFailure { status }),
        Some(_) => {
            info!("compiled {} -> {}", artifact.display(), exec_path.display());
            Ok(())
        }
    }
}

fn run_fixture(
    cfg: &BuildConfig,
    exec_path: &Path,
    work_dir: &Path,
) -> Result<(), BuildError> {
    let fixture_path = work_dir.join(cfg.fixture.file_name);
    fs::write(&fixture_path, cfg.fixture.source)?;

    let mut child = Command::new(exec_path)
        .arg(&fixture_path)
        .args(cfg.fixture.args)
        .current_dir(work_dir)
        .stdout(Stdio::piped())
        .spawn()?;
    let status = match wait_bounded(&mut child, cfg.subprocess_timeout)? {
        None => {
            return Err(BuildError::RuntimeTimeout {
                timeout: cfg.subprocess_timeout,
            })
        }
        Some(status) => status,
    };

    let mut stdout = Vec::new();
    if let Some(mut pipe) = child.stdout.take() {
        pipe.read_to_end(&mut stdout)?;
    }
    debug!("fixture run exited with {status}, {} byte(s) captured", stdout.len());

    if !status.success() {
        return Err(BuildError::RuntimeFailure { status });
    }
    // strict byte equality, no trailing-whitespace normalisation
    if stdout != cfg.fixture.expected_stdout.as_bytes() {
        return Err(BuildError::TestMismatch {
            expected: cfg.fixture.expected_stdout.to_string(),
            actual: String::from_utf8_lossy(&stdout).into_owned(),
        });
    }
    info!("fixture output matched expected bytes");
    Ok(())
}

/// Compile the artefact with the strict flag set and run the embedded test
/// program against the result. Both subprocesses execute inside one scoped
/// temporary directory that is removed on every exit path when the guard
/// drops, taking the executable and fixture file with it.
pub fn compile_and_check(cfg: &BuildConfig, out_path: &Path) -> Result<(), BuildError> {
    if !out_path.is_file() {
        return Err(BuildError::MissingOutputFile {
            path: out_path.to_path_buf(),
        });
    }
    // the compiler runs with the scratch directory as cwd, so pin the
    // artifact to an absolute path first
    let artifact = out_path.canonicalize()?;

    let tmp = tempfile::TempDir::new()?;
    let exec_path = tmp.path().join("exec_file");
    compile_artifact(cfg, &artifact, &exec_path, tmp.path())?;
    run_fixture(cfg, &exec_path, tmp.path())
}
