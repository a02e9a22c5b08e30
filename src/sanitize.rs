// Copyright © 2026 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Neutralise per-file preprocessor directives before merging.
// Author: Lukas Bower

use crate::config::BuildConfig;
use std::borrow::Cow;

/// Rewrite one source line for life inside the combined file.
///
/// Two directives stop making sense after the merge: `#pragma once` (the
/// guard is per-file) and `#include "..."` (the quoted path resolves
/// relative to a file that no longer exists). Both are prefixed with the
/// comment marker so they stay visible for audit; every other line passes
/// through untouched. The line may keep its trailing newline.
pub fn sanitize_line<'a>(cfg: &BuildConfig, line: &'a str) -> Cow<'a, str> {
    if cfg.pragma_once.is_match(line) || cfg.local_include.is_match(line) {
        Cow::Owned(format!("{}{}", cfg.comment_marker, line))
    } else {
        Cow::Borrowed(line)
    }
}
