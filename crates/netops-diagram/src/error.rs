// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::io;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error("'{0}' was not found on this host")]
    #[diagnostic(help("install the conversion tool or point convert.tool at its location"))]
    ToolNotFound(String),
    #[error("Failed to start '{0}'")]
    SpawnFailed(String, #[source] io::Error),
    #[error("Failed to collect output from '{0}'")]
    OutputError(String, #[source] io::Error),
    #[error("Conversion failed for {0}: {1}")]
    ConversionFailed(std::path::PathBuf, String),
    #[error("Failed to read directory {0}")]
    DirectoryReadError(std::path::PathBuf, #[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
