// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Emit the provenance-stamped single-file artefact from the input set.
// Author: Lukas Bower

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::sanitize::sanitize_line;
use crate::LabelSet;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one delimiter line: the comment marker, then a row of `=` fill of
/// `separator_width` characters total, with ` tag ` centred when a tag is
/// given. Left fill is `(W - len(tag) - 2) / 2`; the right side takes the
/// remainder so the row width never drifts.
pub fn write_separator<W: Write>(
    out: &mut W,
    cfg: &BuildConfig,
    tag: Option<&str>,
) -> io::Result<()> {
    let center = tag.map_or(0, |t| t.len() + 2);
    let left = cfg.separator_width.saturating_sub(center) / 2;
    let right = cfg.separator_width.saturating_sub(center) - left;
    out.write_all(cfg.comment_marker.as_bytes())?;
    out.write_all("=".repeat(left).as_bytes())?;
    if let Some(t) = tag {
        write!(out, " {t} ")?;
    }
    out.write_all("=".repeat(right).as_bytes())?;
    out.write_all(b"\n")
}

fn path_matches(path: &Path, suffix: &str) -> bool {
    path.as_os_str().to_string_lossy().ends_with(suffix)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Append every input whose path ends in `suffix`, in list order. Each file
/// becomes: two blank lines, a tagged opening separator, the sanitised
/// content byte-for-byte, and an untagged closing separator. Inputs with a
/// different suffix are skipped outright.
pub fn append_group<W: Write>(
    out: &mut W,
    cfg: &BuildConfig,
    suffix: &str,
    inputs: &[PathBuf],
) -> Result<(), BuildError> {
    for path in inputs.iter().filter(|p| path_matches(p, suffix)) {
        let content = fs::read_to_string(path).map_err(|source| BuildError::InputRead {
            path: path.clone(),
            source,
        })?;
        out.write_all(b"\n\n")?;
        write_separator(out, cfg, Some(&base_name(path)))?;
        for line in content.split_inclusive('\n') {
            out.write_all(sanitize_line(cfg, line).as_bytes())?;
        }
        write_separator(out, cfg, None)?;
    }
    Ok(())
}

fn write_provenance<W: Write>(
    out: &mut W,
    cfg: &BuildConfig,
    labels: &LabelSet,
) -> io::Result<()> {
    let (name1, id1) = labels.student1();
    let (name2, id2) = labels.student2();
    writeln!(out, "//  {}", cfg.identity_line)?;
    writeln!(out, "//  Student1:   {name1}   {id1}")?;
    writeln!(out, "//  Student2:   {name2}   {id2}")?;
    writeln!(out, "//  Platform:   {}", cfg.platform)?;
    out.write_all(b"\n\n")?;
    writeln!(out, "//  THIS IS GENERATED FROM MULTIPLE HEADER AND SOURCE FILES.")
}

/// Create (or truncate) `out_path` and compose the full artefact: the
/// provenance block, then every header-suffix input, then every
/// implementation-suffix input. Header files always land first no matter
/// where they sit in the input list; inside a group the list order holds.
pub fn write_artifact(
    cfg: &BuildConfig,
    labels: &LabelSet,
    inputs: &[PathBuf],
    out_path: &Path,
) -> Result<(), BuildError> {
    let mut out = BufWriter::new(File::create(out_path)?);
    write_provenance(&mut out, cfg, labels)?;
    append_group(&mut out, cfg, cfg.header_suffix, inputs)?;
    append_group(&mut out, cfg, cfg.impl_suffix, inputs)?;
    out.flush()?;
    info!(
        "wrote combined artefact {} from {} input(s)",
        out_path.display(),
        inputs.len()
    );
    Ok(())
}
