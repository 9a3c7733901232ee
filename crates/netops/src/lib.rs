// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

pub use netops_config as config;
pub use netops_diagram as diagram;
pub use netops_expect as expect;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
