// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Spawn(String),
    SetTimeout(u64),
    Expect(String),
    Send(String),
    ExpectEof,
}

/// An ordered list of directives for the terminal automation interpreter.
///
/// The interpreter drives an interactive program by waiting for known
/// prompts and typing canned responses. This models that exchange as
/// data so a session can be assembled, inspected, and rendered without
/// touching a live host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectScript {
    directives: Vec<Directive>,
}

impl ExpectScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The interactive command (and arguments) for this session to drive.
    pub fn spawn(mut self, command: impl Into<String>) -> Self {
        self.directives.push(Directive::Spawn(command.into()));
        self
    }

    /// Wait ceiling, in seconds, applied to every later expectation.
    pub fn set_timeout(mut self, seconds: u64) -> Self {
        self.directives.push(Directive::SetTimeout(seconds));
        self
    }

    /// Block until the session prints `pattern`.
    pub fn expect(mut self, pattern: impl Into<String>) -> Self {
        self.directives.push(Directive::Expect(pattern.into()));
        self
    }

    /// Type `line` into the session, followed by a carriage return.
    ///
    /// The text is embedded verbatim in the rendered script, so any
    /// double quotes it carries must already be escaped as `\"`.
    pub fn send(mut self, line: impl Into<String>) -> Self {
        self.directives.push(Directive::Send(line.into()));
        self
    }

    /// Block until the spawned command exits.
    pub fn expect_eof(mut self) -> Self {
        self.directives.push(Directive::ExpectEof);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Number of directives, for logging a session's shape without its text.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Render the script text to feed the interpreter on stdin.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for directive in self.directives.iter() {
            match directive {
                Directive::Spawn(command) => out.push_str(&format!("spawn {command}\n")),
                Directive::SetTimeout(seconds) => {
                    out.push_str(&format!("set timeout {seconds}\n"))
                }
                Directive::Expect(pattern) => out.push_str(&format!("expect \"{pattern}\"\n")),
                Directive::Send(line) => out.push_str(&format!("send \"{line}\\r\"\n")),
                Directive::ExpectEof => out.push_str("expect eof\n"),
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "./script_test.rs"]
mod script_test;
