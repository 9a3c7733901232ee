// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

mod cli;
mod env;
mod error;

pub use cli::{CommandArgs, Run};
pub use env::configure_logging;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
