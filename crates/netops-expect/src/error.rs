// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::io;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error("'{0}' was not found on this host")]
    #[diagnostic(help(
        "the terminal automation interpreter must be installed to drive appliance sessions"
    ))]
    MissingInterpreter(String),
    #[error("Failed to start automation session via '{0}'")]
    SpawnFailed(String, #[source] io::Error),
    #[error("Failed to feed session script to '{0}'")]
    ScriptWriteError(String, #[source] io::Error),
    #[error("Failed to collect session output from '{0}'")]
    SessionWaitError(String, #[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
