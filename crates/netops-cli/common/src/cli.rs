// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Main entry points and utilities for command line interface and interaction.

use miette::Result;

/// Trait all cli commands must implement to be runnable.
#[async_trait::async_trait]
pub trait Run {
    /// The type returned by the command when it finishes without
    /// error, convertible into the process exit code.
    type Output: Into<i32>;

    async fn run(&mut self) -> Result<Self::Output>;
}

/// Trait all cli commands must implement to provide a list of the
/// important positional values from their command lines, to help
/// distinguish one invocation from another in diagnostics.
pub trait CommandArgs {
    /// Get a string list of the important positional arguments for
    /// the command. If there are no positional arguments, this will
    /// return an empty list.
    fn get_positional_args(&self) -> Vec<String>;
}
