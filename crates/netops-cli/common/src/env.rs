// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use miette::{IntoDiagnostic, Result, WrapErr};

pub fn configure_logging(verbosity: u8) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    let mut directives = match verbosity {
        0 => "netops=info,netops_expect=info,netops_diagram=info,warn",
        1 => "netops=debug,netops_expect=debug,netops_diagram=debug,info",
        2 => "netops=trace,netops_expect=trace,netops_diagram=trace,debug",
        _ => "trace",
    }
    .to_string();
    if let Ok(overrides) = std::env::var("NETOPS_LOG") {
        directives = format!("{directives},{overrides}");
    }
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        // a full override of the filter, for debugging
        directives = overrides;
    }
    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let registry = tracing_subscriber::Registry::default().with(env_filter);
    let mut fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time();
    if verbosity < 3 {
        fmt_layer = fmt_layer.with_target(false);
    }
    let sub = registry.with(fmt_layer);
    tracing::subscriber::set_global_default(sub)
        .into_diagnostic()
        .wrap_err("Failed to set default logger")
}
