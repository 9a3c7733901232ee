// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

mod config;
mod error;

pub use error::{Error, Result};

pub use self::config::*;
