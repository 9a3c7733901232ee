// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// True for paths whose file name ends in the Visio stencil suffix,
/// in any case.
pub fn is_stencil(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(".vss"))
        .unwrap_or(false)
}

/// File name a converted stencil is written under: the input's name
/// with `.svg` in place of the stencil extension.
pub fn svg_name(input: &Path) -> PathBuf {
    PathBuf::from(input.file_name().unwrap_or_default()).with_extension("svg")
}

/// Stencil files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into, matching how stencil drops
/// are laid out: one flat directory per batch.
pub fn find_stencils(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let entries =
        std::fs::read_dir(dir).map_err(|err| Error::DirectoryReadError(dir.to_owned(), err))?;
    for entry in entries {
        let entry = entry.map_err(|err| Error::DirectoryReadError(dir.to_owned(), err))?;
        let path = entry.path();
        if path.is_file() && is_stencil(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
#[path = "./stencil_test.rs"]
mod stencil_test;
