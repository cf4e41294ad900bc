use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile;

use elian::*;

const HI: &str = concat!("     \n", "╭─ ╷ \n", "╰─ ╰─");

fn write_temp_input(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut input = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("should be able to create a temporary file");
    input
        .write_all(contents)
        .expect("should be able to write the temporary input file");
    input
}

fn get_temp_output_file_name() -> tempfile::TempPath {
    tempfile::Builder::new()
        .suffix(".elian")
        .tempfile()
        .expect("should be able to create a temporary file")
        .into_temp_path()
}

fn read_output(path: &Path) -> String {
    fs::read_to_string(path).expect(&format!("should be able to read {}", path.display()))
}

#[test]
fn file_to_file() {
    let input = write_temp_input(b"Hi!\n");
    let output = get_temp_output_file_name();
    transcribe_file(
        Source::File(input.path()),
        Some(&*output),
        &LayoutOptions::default(),
    )
    .expect("transcription should succeed");
    // Nothing is added after the last row when writing to a file.
    assert_eq!(read_output(&output), HI);
}

#[test]
fn text_to_file() {
    let output = get_temp_output_file_name();
    transcribe_file(Source::Text("hi"), Some(&*output), &LayoutOptions::default())
        .expect("transcription should succeed");
    assert_eq!(read_output(&output), HI);
}

#[test]
fn invalid_utf8_is_tolerated() {
    let input = write_temp_input(b"H\xffI");
    let output = get_temp_output_file_name();
    transcribe_file(
        Source::File(input.path()),
        Some(&*output),
        &LayoutOptions::default(),
    )
    .expect("transcription should succeed");
    assert_eq!(read_output(&output), HI);
}

#[test]
fn unwritable_output() {
    let dir = tempfile::tempdir().expect("should be able to create a temporary directory");
    // A directory cannot be written as if it were a file.
    match transcribe_file(
        Source::Text("hi"),
        Some(dir.path()),
        &LayoutOptions::default(),
    ) {
        Err(TranscriptionFailure::Io(failure)) => {
            assert_eq!(failure.action, IoAction::Write);
            assert_eq!(failure.target, IoTarget::File(dir.path().to_path_buf()));
        }
        Ok(()) => {
            panic!("writing to a directory should fail");
        }
    }
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elian"))
        .args(args)
        .output()
        .expect("should be able to run the elian binary")
}

#[test]
fn cli_text_to_stdout() {
    let result = run_cli(&["--text", "HI"]);
    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout), format!("{HI}\n"));
}

#[test]
fn cli_file_to_output_file() {
    let input = write_temp_input(b"HELLO HELLO");
    let output = get_temp_output_file_name();
    let input_name = input.path().to_str().expect("temporary file names are UTF-8");
    let output_name = output.to_str().expect("temporary file names are UTF-8");
    let result = run_cli(&["-f", input_name, "-o", output_name, "-w", "20"]);
    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    // HELLO is 17 columns wide so each one goes on its own line.
    assert_eq!(read_output(&output).lines().count(), 6);
}

#[test]
fn cli_requires_input() {
    let result = run_cli(&[]);
    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
}

#[test]
fn cli_rejects_text_and_file_together() {
    let input = write_temp_input(b"HI");
    let input_name = input.path().to_str().expect("temporary file names are UTF-8");
    let result = run_cli(&["-t", "HI", "-f", input_name]);
    assert!(!result.status.success());
}

#[test]
fn cli_rejects_zero_width() {
    let result = run_cli(&["-t", "HI", "--line-char-limit", "0"]);
    assert!(!result.status.success());
}

#[test]
fn cli_missing_input_file() {
    let dir = tempfile::tempdir().expect("should be able to create a temporary directory");
    let missing = dir.path().join("missing.txt");
    let missing_name = missing.to_str().expect("temporary file names are UTF-8");
    let result = run_cli(&["-f", missing_name]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("I/O error reading file"));
}
