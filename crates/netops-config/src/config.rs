// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use config::builder::{ConfigBuilder, DefaultState};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::Result;

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

static CONFIG: OnceCell<RwLock<Arc<Config>>> = OnceCell::new();

/// Connection and certificate settings for the managed appliance.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Fortigate {
    /// Address of the appliance's ssh interface
    pub host: String,

    /// Administrator account for the ssh session
    pub user: String,

    /// Administrator password. Expected to come from the environment
    /// (`NETOPS_FORTIGATE_PASSWORD`) or a root-readable config file,
    /// never from source
    pub password: String,

    /// Directory holding `fortigate.crt` and `fortigate.key`
    pub cert_dir: PathBuf,

    /// Name of the local certificate object created on the appliance;
    /// the same name is bound as the admin HTTPS server certificate
    pub cert_name: String,

    /// Comment stored on the certificate object
    pub comment: String,

    /// Wait ceiling, in seconds, for the certificate upload session.
    /// The upload sends whole PEM bodies and can outlive the automation
    /// tool's default per-match timeout
    pub upload_timeout_seconds: u64,
}

impl Default for Fortigate {
    fn default() -> Self {
        Self {
            host: "192.168.0.254".to_string(),
            user: "admin".to_string(),
            password: String::new(),
            cert_dir: PathBuf::from("./certificates"),
            cert_name: "fortigate.netintegrate.net".to_string(),
            comment: "CA-signed certificate from NetIntegrate CA".to_string(),
            upload_timeout_seconds: 60,
        }
    }
}

// Keeps the password out of debug renderings of the config.
impl std::fmt::Debug for Fortigate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fortigate")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("cert_dir", &self.cert_dir)
            .field("cert_name", &self.cert_name)
            .field("comment", &self.comment)
            .field("upload_timeout_seconds", &self.upload_timeout_seconds)
            .finish()
    }
}

/// Settings for the stencil conversion command.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Convert {
    /// External conversion program. When empty, `vss2svg-conv` is
    /// looked up on PATH
    pub tool: String,
}

/// Configuration values for netops.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    // These sub-types should aim to only have one level of
    // values within them, otherwise they become impossible to address
    // with environment variables.
    pub fortigate: Fortigate,
    pub convert: Convert,
}

impl Config {
    /// Get the current loaded config, loading it if needed
    pub fn current() -> Result<Arc<Self>> {
        get_config()
    }

    /// Load the config from disk, even if it's already been loaded before
    pub fn load() -> Result<Self> {
        load_config()
    }

    /// Load a config from the provided toml source, without any file or
    /// environment layering.
    pub fn load_string(source: impl AsRef<str>) -> Result<Self> {
        use config::{File, FileFormat};
        let config = config::Config::builder()
            .add_source(File::from_str(source.as_ref(), FileFormat::Toml))
            .build()?;
        Ok(Config::deserialize(config)?)
    }

    /// Make this config the current global one
    pub fn make_current(self) -> Result<Arc<Self>> {
        // Note we don't know if we won the race to set the value here,
        // so we still need to try to update it.
        let config = CONFIG.get_or_try_init(|| -> Result<RwLock<Arc<Config>>> {
            Ok(RwLock::new(Arc::new(self.clone())))
        })?;

        let mut lock = config
            .write()
            .map_err(|err| crate::Error::LockPoisonedWrite(err.to_string()))?;
        *Arc::make_mut(&mut lock) = self;
        Ok(Arc::clone(&lock))
    }
}

/// Get the current netops config, fetching it from disk if needed.
pub fn get_config() -> Result<Arc<Config>> {
    let config = CONFIG.get_or_try_init(|| -> Result<RwLock<Arc<Config>>> {
        Ok(RwLock::new(Arc::new(load_config()?)))
    })?;
    let lock = config
        .read()
        .map_err(|err| crate::Error::LockPoisonedRead(err.to_string()))?;
    Ok(Arc::clone(&*lock))
}

/// Load the netops configuration from disk, even if it has already been loaded.
///
/// This includes the system and user configurations (if they exist), with
/// `NETOPS_*` environment variables layered on top.
pub fn load_config() -> Result<Config> {
    use config::File;

    let mut config_builder = config::Config::builder()
        // the system config can be in any supported format: toml, yaml, json, ini, etc
        .add_source(File::with_name("/etc/netops").required(false));

    if let Some(user_config) = user_config_path() {
        // same for the user config
        config_builder = config_builder
            .add_source(File::with_name(&user_config.to_string_lossy()).required(false));
    }

    let config_builder = apply_env_overrides(config_builder, std::env::vars())?;
    let config = config_builder.build()?;
    Ok(Config::deserialize(config)?)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("netops").join("netops"))
}

fn apply_env_overrides<V>(
    mut builder: ConfigBuilder<DefaultState>,
    vars: V,
) -> Result<ConfigBuilder<DefaultState>>
where
    V: IntoIterator<Item = (String, String)>,
{
    for (var, value) in vars {
        let Some(tail) = var.strip_prefix("NETOPS_") else {
            continue;
        };
        let Some((section, name)) = tail.split_once('_') else {
            // typically, a value with no section is not a configuration
            // value, and can be skipped (eg: NETOPS_LOG)
            continue;
        };

        let key = format!("{}.{}", section.to_lowercase(), name.to_lowercase());
        builder = builder.set_override(key, value)?;
    }
    Ok(builder)
}
