// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Scripted terminal automation for interactive appliance sessions.

mod error;
mod script;
mod session;

pub use error::{Error, Result};
pub use script::ExpectScript;
pub use session::{ExpectRunner, SessionOutput, SessionRunner, DEFAULT_INTERPRETER};
