//! Tests for command routing and end-to-end form dispatch

mod common;

use cgkit::cli::{route, translate, CommandSelection, GuiInputSet, BASE_MESSAGE};
use cgkit::commands::{CommandError, NoSession, OutputFormat};
use common::{argv, dispatch_to_string, output_lines, CountingSession};
use std::path::PathBuf;

#[test]
fn test_greeting_end_to_end() {
    let input = GuiInputSet {
        name: "Ann".to_string(),
        greeting: "Hi".to_string(),
        repeat_count: 2,
        ..GuiInputSet::with_defaults(CommandSelection::DynamicGreet)
    };

    let output = dispatch_to_string(&translate(&input), &mut NoSession).unwrap();
    assert_eq!(output_lines(&output), vec!["Hi, Ann!", "Hi, Ann!"]);
}

#[test]
fn test_file_end_to_end() {
    let input = GuiInputSet {
        file_path: Some(PathBuf::from("data.xml")),
        save: true,
        format: OutputFormat::Xml,
        ..GuiInputSet::with_defaults(CommandSelection::EnhancedFile)
    };

    let output = dispatch_to_string(&translate(&input), &mut NoSession).unwrap();
    assert_eq!(output, "Processing file: data.xml, Format: xml\n");
}

#[test]
fn test_save_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let target = dir.path().join("report.csv");
    let args = argv(&[
        "enhanced-file",
        "--file",
        target.to_str().unwrap(),
        "--save",
        "--format",
        "csv",
    ]);

    dispatch_to_string(&args, &mut NoSession).unwrap();
    assert!(!target.exists(), "--save must not create files");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_zero_repeat_prints_nothing() {
    let output = dispatch_to_string(
        &argv(&["dynamic-greet", "greet-subcommand", "--repeat", "0"]),
        &mut NoSession,
    )
    .unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_negative_repeat_prints_nothing() {
    let output = dispatch_to_string(
        &argv(&["dynamic-greet", "greet-subcommand", "--repeat", "-3"]),
        &mut NoSession,
    )
    .unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_greet_defaults_through_router() {
    let output =
        dispatch_to_string(&argv(&["dynamic-greet", "greet-subcommand"]), &mut NoSession).unwrap();
    assert_eq!(output, "Hello, User!\n");
}

#[test]
fn test_file_without_path_uses_placeholder() {
    let output = dispatch_to_string(&argv(&["enhanced-file"]), &mut NoSession).unwrap();
    assert_eq!(output, "Processing file: <none>, Format: json\n");
}

#[test]
fn test_empty_vector_takes_base_route() {
    let output = dispatch_to_string(&argv(&[]), &mut NoSession).unwrap();
    assert_eq!(output.trim_end(), BASE_MESSAGE);
}

#[test]
fn test_unknown_route_is_rejected() {
    let err = dispatch_to_string(&argv(&["dynamic-cli", "greet"]), &mut NoSession).unwrap_err();
    match err {
        CommandError::UnrecognizedCommand(name) => assert_eq!(name, "dynamic-cli"),
        other => panic!("expected UnrecognizedCommand, got {:?}", other),
    }
}

#[test]
fn test_unknown_parsed_command_is_rejected() {
    let mut out = Vec::new();
    let err = route(
        Some(cgkit::cli::Commands::Unrecognized(vec!["bogus".to_string()])),
        &mut out,
        &mut NoSession,
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::UnrecognizedCommand(ref name) if name == "bogus"));
    assert!(out.is_empty());
}

#[test]
fn test_bad_flag_is_invalid_arguments() {
    let err = dispatch_to_string(&argv(&["enhanced-file", "--format", "yaml"]), &mut NoSession)
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidArguments(_)));
    assert!(!err.is_informational());
}

#[test]
fn test_help_is_informational() {
    let err = dispatch_to_string(&argv(&["enhanced-file", "--help"]), &mut NoSession).unwrap_err();
    assert!(err.is_informational());
}

#[test]
fn test_interactive_hands_off_to_session() {
    let mut session = CountingSession::default();
    let output = dispatch_to_string(&argv(&["interactive"]), &mut session).unwrap();

    assert_eq!(session.runs, 1);
    assert_eq!(output, "session started\n");
}

#[test]
fn test_interactive_without_runner_fails() {
    let err = dispatch_to_string(&argv(&["interactive"]), &mut NoSession).unwrap_err();
    assert!(matches!(err, CommandError::SessionUnavailable));
}

#[test]
fn test_hyphen_leading_greeting_from_form() {
    let input = GuiInputSet {
        greeting: "-hey".to_string(),
        name: "-Ann".to_string(),
        ..GuiInputSet::with_defaults(CommandSelection::DynamicGreet)
    };

    let output = dispatch_to_string(&translate(&input), &mut NoSession).unwrap();
    assert_eq!(output, "-hey, -Ann!\n");
}

#[test]
fn test_hyphen_leading_file_from_form() {
    let input = GuiInputSet {
        file_path: Some(PathBuf::from("-report.csv")),
        format: OutputFormat::Csv,
        ..GuiInputSet::with_defaults(CommandSelection::EnhancedFile)
    };

    let output = dispatch_to_string(&translate(&input), &mut NoSession).unwrap();
    assert_eq!(output, "Processing file: -report.csv, Format: csv\n");
}

#[test]
fn test_launcher_options_are_rejected() {
    let err = dispatch_to_string(&argv(&["--form"]), &mut NoSession).unwrap_err();
    assert!(matches!(err, CommandError::LauncherOption("--form")));

    let err = dispatch_to_string(&argv(&["--config", "shell.json", "enhanced-file"]), &mut NoSession)
        .unwrap_err();
    assert!(matches!(err, CommandError::LauncherOption("--config")));
}
