// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Conversion of Visio stencil files into svg via an external tool.

mod convert;
mod error;
mod stencil;

pub use convert::{DiagramConverter, ToolConverter, DEFAULT_CONVERTER};
pub use error::{Error, Result};
pub use stencil::{find_stencils, is_stencil, svg_name};
