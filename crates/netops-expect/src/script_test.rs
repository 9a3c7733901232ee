// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use rstest::rstest;

use super::ExpectScript;

#[rstest]
fn test_render_empty_script() {
    let script = ExpectScript::new();
    assert!(script.is_empty());
    assert_eq!(script.render(), "");
}

#[rstest]
fn test_render_directive_forms() {
    let script = ExpectScript::new()
        .spawn("ssh -o StrictHostKeyChecking=no admin@192.168.0.254")
        .expect("password:")
        .send("hunter2")
        .expect("#")
        .send("get system status")
        .expect_eof();

    let rendered = script.render();
    assert_eq!(
        rendered,
        concat!(
            "spawn ssh -o StrictHostKeyChecking=no admin@192.168.0.254\n",
            "expect \"password:\"\n",
            "send \"hunter2\\r\"\n",
            "expect \"#\"\n",
            "send \"get system status\\r\"\n",
            "expect eof\n",
        )
    );
}

#[rstest]
fn test_render_timeout_position_is_preserved() {
    let script = ExpectScript::new()
        .spawn("ssh host")
        .set_timeout(60)
        .expect("password:");

    let rendered = script.render();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[0], "spawn ssh host");
    assert_eq!(lines[1], "set timeout 60");
    assert_eq!(lines[2], "expect \"password:\"");
}

#[rstest]
fn test_send_embeds_lines_verbatim() {
    // Callers escape quotes before embedding; the script must not
    // escape again or the interpreter would see doubled backslashes.
    let script = ExpectScript::new().send("set comments \\\"signed\\\"");
    assert_eq!(script.render(), "send \"set comments \\\"signed\\\"\\r\"\n");
}

#[rstest]
fn test_len_counts_directives() {
    let script = ExpectScript::new().spawn("cmd").expect("#").expect_eof();
    assert_eq!(script.len(), 3);
}
