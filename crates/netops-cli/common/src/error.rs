// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::io;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error("Certificate file not found: {0}")]
    #[diagnostic(help("generate the certificate pair before installing it"))]
    MissingCertFile(std::path::PathBuf),
    #[error("No admin password is configured for the appliance")]
    #[diagnostic(help(
        "set fortigate.password in the config file or the NETOPS_FORTIGATE_PASSWORD variable"
    ))]
    MissingPassword,
    #[error("Failed to read file {0}")]
    FileReadError(std::path::PathBuf, #[source] io::Error),
    #[error("Cannot connect to the appliance over ssh")]
    #[diagnostic(help("check credentials and network connectivity"))]
    ConnectionFailed,
    #[error("The appliance rejected the certificate upload: {0}")]
    UploadFailed(String),
    #[error("Failed to bind the admin https interface to the new certificate")]
    BindFailed,
    #[error("Input file not found: {0}")]
    InputNotFound(std::path::PathBuf),
    #[error("Input directory not found: {0}")]
    InputDirNotFound(std::path::PathBuf),
    #[error("Failed to create directory {0}")]
    DirectoryCreateError(std::path::PathBuf, #[source] io::Error),
    #[error(transparent)]
    #[diagnostic(forward(0))]
    Config(#[from] netops_config::Error),
    #[error(transparent)]
    #[diagnostic(forward(0))]
    Expect(#[from] netops_expect::Error),
    #[error(transparent)]
    #[diagnostic(forward(0))]
    Diagram(#[from] netops_diagram::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
