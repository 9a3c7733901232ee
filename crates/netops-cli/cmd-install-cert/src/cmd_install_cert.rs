// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use std::path::{Path, PathBuf};

use clap::Args;
use miette::Result;
use netops_cli_common::{CommandArgs, Error, Run};
use netops_config::Fortigate;
use netops_expect::{ExpectRunner, ExpectScript, SessionOutput, SessionRunner};

#[cfg(test)]
#[path = "./cmd_install_cert_test.rs"]
mod cmd_install_cert_test;

/// Certificate file expected inside the configured directory.
pub const CERT_FILE: &str = "fortigate.crt";
/// Private key file expected inside the configured directory.
pub const KEY_FILE: &str = "fortigate.key";

pub trait Output: Default + Send + Sync {
    /// A line of output to display.
    fn println(&mut self, line: String);

    /// A line of output to display as a warning.
    fn warn(&mut self, line: String);
}

#[derive(Default)]
pub struct Console {}

impl Output for Console {
    fn println(&mut self, line: String) {
        println!("{line}");
    }

    fn warn(&mut self, line: String) {
        tracing::warn!("{line}");
    }
}

/// Install a CA-signed certificate on the FortiGate appliance
///
/// Three ssh sessions are driven on the appliance cli: a connectivity
/// check, the certificate and key upload, and the rebinding of the
/// admin https interface to the uploaded certificate. The address,
/// account and password all come from the netops config.
#[derive(Args)]
pub struct InstallCert<Output: Default = Console> {
    /// Directory holding the certificate pair to install, overriding
    /// the configured fortigate.cert_dir
    #[clap(long)]
    pub cert_dir: Option<PathBuf>,

    #[clap(skip)]
    pub(crate) output: Output,
}

#[async_trait::async_trait]
impl<T: Output> Run for InstallCert<T> {
    type Output = i32;

    async fn run(&mut self) -> Result<Self::Output> {
        let config = netops_config::get_config()?;
        let runner = ExpectRunner::new();
        self.install(&config.fortigate, &runner).await
    }
}

impl<T: Output> InstallCert<T> {
    /// Run the full installation against the given appliance settings.
    pub async fn install(
        &mut self,
        fortigate: &Fortigate,
        runner: &dyn SessionRunner,
    ) -> Result<i32> {
        if fortigate.password.is_empty() {
            return Err(Error::MissingPassword.into());
        }

        self.output.println(format!(
            "Installing certificate on {} as {}",
            fortigate.host, fortigate.user
        ));

        let cert_dir = self.cert_dir.as_ref().unwrap_or(&fortigate.cert_dir);
        let cert_file = cert_dir.join(CERT_FILE);
        let key_file = cert_dir.join(KEY_FILE);
        for file in [&cert_file, &key_file] {
            if !file.exists() {
                return Err(Error::MissingCertFile(file.clone()).into());
            }
        }

        self.output
            .println("Reading certificate files...".to_string());
        let certificate = read_trimmed(&cert_file)?;
        let private_key = read_trimmed(&key_file)?;

        self.output
            .println("Step 1: Testing ssh connectivity...".to_string());
        let test = runner.run(&connectivity_script(fortigate)).await?;
        tracing::debug!(code = ?test.code, "connectivity session finished");
        // A session can exit cleanly without ever reaching the cli, so
        // the status output is the real connectivity signal.
        if !test.success() || !test.stdout.contains("Version:") {
            return Err(Error::ConnectionFailed.into());
        }
        self.output.println("ssh connection successful".to_string());

        self.output
            .println("Step 2: Installing server certificate and private key...".to_string());
        let upload = runner
            .run(&upload_script(fortigate, &certificate, &private_key))
            .await?;
        tracing::debug!(code = ?upload.code, "upload session finished");
        if !upload.success() {
            return Err(Error::UploadFailed(session_failure(&upload)).into());
        }
        self.output
            .println("Server certificate and private key installed".to_string());

        self.output.println(format!(
            "Step 3: Binding the admin https interface to \"{}\"...",
            fortigate.cert_name
        ));
        let bind = runner.run(&bind_script(fortigate)).await?;
        tracing::debug!(code = ?bind.code, "binding session finished");
        if !bind.success() {
            return Err(Error::BindFailed.into());
        }
        self.output
            .println("Admin https interface bound to the new certificate".to_string());

        self.output.println(String::new());
        self.output
            .println("Certificate installation completed".to_string());
        self.output.println("Next steps:".to_string());
        self.output.println(
            "  1. Allow about 30 seconds for the appliance to apply the change".to_string(),
        );
        self.output.println(format!(
            "  2. Point dns (or an /etc/hosts entry) for {} at {}",
            fortigate.cert_name, fortigate.host
        ));
        self.output.println(format!(
            "  3. Verify the admin interface: https://{}:8443",
            fortigate.cert_name
        ));
        Ok(0)
    }
}

impl<T: Output> CommandArgs for InstallCert<T> {
    fn get_positional_args(&self) -> Vec<String> {
        // There are no positional arguments, everything comes from the
        // config file and environment
        vec![]
    }
}

fn read_trimmed(path: &Path) -> netops_cli_common::Result<String> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| Error::FileReadError(path.to_owned(), err))?;
    Ok(content.trim().to_string())
}

/// Short failure description for a session: the exit code and whatever
/// the interpreter printed on stderr.
fn session_failure(output: &SessionOutput) -> String {
    let stderr = output.stderr.trim();
    match (output.code, stderr.is_empty()) {
        (Some(code), false) => format!("exit code {code}: {stderr}"),
        (Some(code), true) => format!("exit code {code}"),
        (None, false) => format!("terminated by a signal: {stderr}"),
        (None, true) => "terminated by a signal".to_string(),
    }
}

fn ssh_command(fortigate: &Fortigate) -> String {
    format!(
        "ssh -o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null {}@{}",
        fortigate.user, fortigate.host
    )
}

/// Escape double quotes so a value survives the script quoting with
/// its own quotes intact.
fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Wrap a value in escaped quotes so the appliance cli receives it as
/// one quoted token.
fn quoted(value: &str) -> String {
    format!("\\\"{value}\\\"")
}

fn connectivity_script(fortigate: &Fortigate) -> ExpectScript {
    ExpectScript::new()
        .spawn(ssh_command(fortigate))
        .expect("password:")
        .send(escape_quotes(&fortigate.password))
        .expect("#")
        .send("get system status")
        .expect("#")
        .send("exit")
        .expect_eof()
}

fn upload_script(fortigate: &Fortigate, certificate: &str, private_key: &str) -> ExpectScript {
    // Whole pem bodies are sent as single cli lines; the longer
    // timeout covers the appliance echoing them back.
    let mut script = ExpectScript::new()
        .spawn(ssh_command(fortigate))
        .set_timeout(fortigate.upload_timeout_seconds)
        .expect("password:")
        .send(escape_quotes(&fortigate.password))
        .expect("#");
    for line in [
        "config vpn certificate local".to_string(),
        format!("edit {}", quoted(&escape_quotes(&fortigate.cert_name))),
        format!("set certificate {}", quoted(&escape_quotes(certificate))),
        format!("set private-key {}", quoted(&escape_quotes(private_key))),
        format!("set comments {}", quoted(&escape_quotes(&fortigate.comment))),
        "next".to_string(),
        "end".to_string(),
    ] {
        script = script.send(line).expect("#");
    }
    script.send("exit").expect_eof()
}

fn bind_script(fortigate: &Fortigate) -> ExpectScript {
    let mut script = ExpectScript::new()
        .spawn(ssh_command(fortigate))
        .expect("password:")
        .send(escape_quotes(&fortigate.password))
        .expect("#");
    for line in [
        "config system global".to_string(),
        format!(
            "set admin-server-cert {}",
            quoted(&escape_quotes(&fortigate.cert_name))
        ),
        "end".to_string(),
    ] {
        script = script.send(line).expect("#");
    }
    script.send("exit").expect_eof()
}
