// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::path::{Path, PathBuf};

use clap::Args;
use miette::Result;
use netops_cli_common::{CommandArgs, Error, Run};
use netops_diagram::{find_stencils, svg_name, DiagramConverter, ToolConverter};

#[cfg(test)]
#[path = "./cmd_convert_test.rs"]
mod cmd_convert_test;

pub trait Output: Default + Send + Sync {
    /// A line of output to display.
    fn println(&mut self, line: String);

    /// A line of output to display as a warning.
    fn warn(&mut self, line: String);
}

#[derive(Default)]
pub struct Console {}

impl Output for Console {
    fn println(&mut self, line: String) {
        println!("{line}");
    }

    fn warn(&mut self, line: String) {
        tracing::warn!("{line}");
    }
}

/// Convert Visio stencil files to svg
///
/// By default INPUT is one stencil file and OUTPUT is the svg to
/// write. With --batch, INPUT is a directory of stencils and OUTPUT
/// is the directory svgs are written into, created when needed. A
/// stencil that fails to convert is reported and skipped, it does not
/// stop the rest of the batch.
#[derive(Args)]
pub struct Convert<Output: Default = Console> {
    /// Treat INPUT and OUTPUT as directories and convert every
    /// stencil found directly inside INPUT
    #[clap(long)]
    pub batch: bool,

    /// The stencil file (or directory, with --batch) to convert
    #[clap(name = "INPUT")]
    pub input: PathBuf,

    /// The svg file (or directory, with --batch) to write
    #[clap(name = "OUTPUT")]
    pub destination: PathBuf,

    #[clap(skip)]
    pub(crate) output: Output,
}

#[async_trait::async_trait]
impl<T: Output> Run for Convert<T> {
    type Output = i32;

    async fn run(&mut self) -> Result<Self::Output> {
        let config = netops_config::get_config()?;
        let converter = match config.convert.tool.as_str() {
            "" => ToolConverter::new(),
            tool => ToolConverter::with_program(tool),
        };
        self.convert(&converter).await
    }
}

impl<T: Output> Convert<T> {
    /// Run the conversion using the given converter implementation.
    pub async fn convert(&mut self, converter: &dyn DiagramConverter) -> Result<i32> {
        if self.batch {
            self.convert_directory(converter).await
        } else {
            self.convert_single(converter).await
        }
    }

    async fn convert_single(&mut self, converter: &dyn DiagramConverter) -> Result<i32> {
        if !self.input.exists() {
            return Err(Error::InputNotFound(self.input.clone()).into());
        }
        let input = self.input.clone();
        let destination = self.destination.clone();
        // A failed conversion is reported but is not a command error,
        // matching the batch behavior.
        self.convert_one(converter, &input, &destination).await;
        Ok(0)
    }

    async fn convert_directory(&mut self, converter: &dyn DiagramConverter) -> Result<i32> {
        if !self.input.is_dir() {
            return Err(Error::InputDirNotFound(self.input.clone()).into());
        }
        std::fs::create_dir_all(&self.destination)
            .map_err(|err| Error::DirectoryCreateError(self.destination.clone(), err))?;

        let stencils = find_stencils(&self.input)?;
        if stencils.is_empty() {
            self.output
                .println(format!("No VSS files found in {}", self.input.display()));
            return Ok(0);
        }
        self.output
            .println(format!("Found {} VSS files to convert", stencils.len()));

        let destination = self.destination.clone();
        let mut converted = 0usize;
        for stencil in &stencils {
            let target = destination.join(svg_name(stencil));
            if self.convert_one(converter, stencil, &target).await {
                converted += 1;
            }
        }
        self.output.println(String::new());
        self.output.println(format!(
            "Conversion complete: {converted}/{} files converted successfully",
            stencils.len()
        ));
        Ok(0)
    }

    async fn convert_one(
        &mut self,
        converter: &dyn DiagramConverter,
        input: &Path,
        target: &Path,
    ) -> bool {
        self.output.println(format!(
            "Converting {} -> {}",
            input.display(),
            target.display()
        ));
        match converter.convert(input, target).await {
            Ok(()) => {
                self.output
                    .println(format!("Converted {}", target.display()));
                true
            }
            Err(err) => {
                self.output
                    .warn(format!("Error converting {}: {err}", input.display()));
                false
            }
        }
    }
}

impl<T: Output> CommandArgs for Convert<T> {
    fn get_positional_args(&self) -> Vec<String> {
        // The important positional args are the input and output paths
        vec![
            self.input.display().to_string(),
            self.destination.display().to_string(),
        ]
    }
}
