// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Main entry points and utilities for command line interface and interaction.

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::{Result, WrapErr};
use netops_cli_common::{configure_logging, CommandArgs, Run};
use netops_cmd_convert::cmd_convert;
use netops_cmd_install_cert::cmd_install_cert;

#[cfg(test)]
#[path = "./cli_test.rs"]
mod cli_test;

/// Operator tools for the NetIntegrate lab
#[derive(Parser)]
#[clap(about, version)]
pub struct Opt {
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[clap(subcommand)]
    pub cmd: Command,
}

impl Opt {
    pub async fn run(&mut self) -> Result<i32> {
        let res = configure_logging(self.verbose).wrap_err("Failed to initialize output log");
        if let Err(err) = res {
            eprintln!("{}", err.to_string().red());
            return Ok(1);
        }

        self.cmd.run().await
    }
}

#[derive(Subcommand)]
pub enum Command {
    Convert(cmd_convert::Convert),
    InstallCert(cmd_install_cert::InstallCert),
}

#[async_trait::async_trait]
impl Run for Command {
    type Output = i32;

    async fn run(&mut self) -> Result<Self::Output> {
        match self {
            Command::Convert(cmd) => cmd.run().await,
            Command::InstallCert(cmd) => cmd.run().await,
        }
    }
}

impl CommandArgs for Command {
    fn get_positional_args(&self) -> Vec<String> {
        match self {
            Command::Convert(cmd) => cmd.get_positional_args(),
            Command::InstallCert(cmd) => cmd.get_positional_args(),
        }
    }
}

#[tokio::main]
async fn main() {
    let mut opts = Opt::parse();
    let code = match opts.run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:?}");
            1
        }
    };
    std::process::exit(code);
}
