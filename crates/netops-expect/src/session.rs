// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::process::Stdio;

use tokio::io::AsyncWriteExt;

use crate::script::ExpectScript;
use crate::{Error, Result};

/// Interpreter used when no alternate program is configured.
pub const DEFAULT_INTERPRETER: &str = "expect";

/// Captured result of one automation session.
#[derive(Debug, Clone)]
pub struct SessionOutput {
    /// Exit code of the interpreter, when it exited normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl SessionOutput {
    /// True when the interpreter ran the whole script and exited zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a script to completion and captures what the session printed.
///
/// Commands sequence their sessions through this seam so the ordering
/// logic can be exercised without a reachable appliance.
#[async_trait::async_trait]
pub trait SessionRunner: Send + Sync {
    async fn run(&self, script: &ExpectScript) -> Result<SessionOutput>;
}

/// Feeds rendered scripts to the automation interpreter over stdin.
#[derive(Debug, Clone)]
pub struct ExpectRunner {
    program: String,
}

impl Default for ExpectRunner {
    fn default() -> Self {
        Self {
            program: DEFAULT_INTERPRETER.into(),
        }
    }
}

impl ExpectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an alternate interpreter binary name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait::async_trait]
impl SessionRunner for ExpectRunner {
    async fn run(&self, script: &ExpectScript) -> Result<SessionOutput> {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // The rendered script carries credentials, log only its shape.
        tracing::debug!(
            program = %self.program,
            directives = script.len(),
            "starting automation session"
        );
        let mut child = cmd.spawn().map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::MissingInterpreter(self.program.clone()),
            _ => Error::SpawnFailed(self.program.clone(), err),
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(script.render().as_bytes()).await {
                // An interpreter that exits early closes the pipe before
                // the script is fully written.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(Error::ScriptWriteError(self.program.clone(), err));
                }
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|err| Error::SessionWaitError(self.program.clone(), err))?;

        Ok(SessionOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "./session_test.rs"]
mod session_test;
