// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

//! Certificate installation onto the FortiGate appliance.

/// The `netops install-cert` command implementation.
pub mod cmd_install_cert;
