// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::path::Path;
use std::process::Stdio;

use crate::{Error, Result};

/// Conversion tool used when no alternate program is configured.
pub const DEFAULT_CONVERTER: &str = "vss2svg-conv";

/// Converts one stencil file into an svg on disk.
///
/// Commands take this as a seam so batch sequencing and error
/// tolerance can be exercised without the real tool installed.
#[async_trait::async_trait]
pub trait DiagramConverter: Send + Sync {
    async fn convert(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Delegates conversion to an external command line tool.
///
/// The tool is invoked as `<program> <input> <output>` and must exit
/// zero once the svg has been written.
#[derive(Debug, Clone)]
pub struct ToolConverter {
    program: String,
}

impl Default for ToolConverter {
    fn default() -> Self {
        Self {
            program: DEFAULT_CONVERTER.into(),
        }
    }
}

impl ToolConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an alternate conversion tool name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait::async_trait]
impl DiagramConverter for ToolConverter {
    async fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.arg(input).arg(output);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        tracing::debug!(
            program = %self.program,
            input = %input.display(),
            "converting stencil"
        );
        let child = cmd.spawn().map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::ToolNotFound(self.program.clone()),
            _ => Error::SpawnFailed(self.program.clone(), err),
        })?;
        let result = child
            .wait_with_output()
            .await
            .map_err(|err| Error::OutputError(self.program.clone(), err))?;
        if result.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&result.stderr);
        let detail = match result.status.code() {
            Some(code) => format!("{} exited with code {code}: {}", self.program, stderr.trim()),
            None => format!("{} was terminated by a signal: {}", self.program, stderr.trim()),
        };
        Err(Error::ConversionFailed(input.to_owned(), detail))
    }
}

#[cfg(test)]
#[path = "./convert_test.rs"]
mod convert_test;
