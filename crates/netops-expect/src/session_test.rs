// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use rstest::rstest;

use super::{ExpectRunner, SessionRunner};
use crate::{Error, ExpectScript};

#[rstest]
#[tokio::test]
async fn test_runner_captures_stdout_and_exit_code() {
    // cat echoes the script it is fed, standing in for an interpreter
    // that prints the session transcript.
    let runner = ExpectRunner::with_program("cat");
    let script = ExpectScript::new()
        .spawn("ssh admin@host")
        .expect("password:")
        .send("secret");

    let output = runner.run(&script).await.unwrap();
    assert!(output.success());
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, script.render());
    assert_eq!(output.stderr, "");
}

#[rstest]
#[tokio::test]
async fn test_runner_reports_nonzero_exit() {
    // false exits 1 without reading stdin; the closed pipe must not
    // mask the exit code.
    let runner = ExpectRunner::with_program("false");
    let script = ExpectScript::new().spawn("ssh admin@host").expect_eof();

    let output = runner.run(&script).await.unwrap();
    assert!(!output.success());
    assert_eq!(output.code, Some(1));
}

#[rstest]
#[tokio::test]
async fn test_runner_missing_interpreter() {
    let runner = ExpectRunner::with_program("netops-test-no-such-interpreter");
    let script = ExpectScript::new().spawn("ssh admin@host");

    let err = runner.run(&script).await.unwrap_err();
    assert!(matches!(err, Error::MissingInterpreter(name) if name == "netops-test-no-such-interpreter"));
}

#[rstest]
fn test_default_runner_uses_expect() {
    let runner = ExpectRunner::new();
    assert_eq!(format!("{runner:?}"), "ExpectRunner { program: \"expect\" }");
}
