// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Conversion of Visio stencil files for the diagramming pipeline.

/// The `netops convert` command implementation.
pub mod cmd_convert;
