// Copyright (c) Contributors to the netops project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/netintegrate/netops

use rstest::rstest;

use super::{DiagramConverter, ToolConverter, DEFAULT_CONVERTER};
use crate::Error;

#[rstest]
#[tokio::test]
async fn test_tool_converter_invokes_program_with_input_and_output() {
    // cp obeys the same `<program> <input> <output>` contract as the
    // real conversion tool.
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drawing.vss");
    let output = dir.path().join("drawing.svg");
    std::fs::write(&input, "stencil bytes").unwrap();

    let converter = ToolConverter::with_program("cp");
    converter.convert(&input, &output).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "stencil bytes");
}

#[rstest]
#[tokio::test]
async fn test_tool_converter_reports_nonzero_exit_as_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drawing.vss");
    let output = dir.path().join("drawing.svg");

    let converter = ToolConverter::with_program("false");
    let err = converter.convert(&input, &output).await.unwrap_err();

    match err {
        Error::ConversionFailed(path, detail) => {
            assert_eq!(path, input);
            assert!(detail.contains("exited with code 1"), "got: {detail}");
        }
        other => panic!("expected ConversionFailed, got {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn test_tool_converter_missing_tool() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("drawing.vss");
    let output = dir.path().join("drawing.svg");

    let converter = ToolConverter::with_program("netops-test-no-such-tool");
    let err = converter.convert(&input, &output).await.unwrap_err();

    assert!(matches!(err, Error::ToolNotFound(name) if name == "netops-test-no-such-tool"));
}

#[rstest]
fn test_default_converter_program() {
    assert_eq!(DEFAULT_CONVERTER, "vss2svg-conv");
    let converter = ToolConverter::new();
    assert_eq!(
        format!("{converter:?}"),
        "ToolConverter { program: \"vss2svg-conv\" }"
    );
}
