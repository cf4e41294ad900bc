//! Reading the text to transcribe and writing out the result.
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{event, span, Level};

use super::layout::LayoutOptions;
use super::script::Script;
use super::types::{IoAction, IoFailed, IoTarget, TranscriptionFailure};

/// Where the text to be transcribed comes from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Text(&'a str),
    File(&'a Path),
}

/// Convert `text` into Elian script, laid out according to `options`.
#[must_use]
pub fn transcribe(text: &str, options: &LayoutOptions) -> String {
    let script = Script::from_text(text);
    event!(
        Level::DEBUG,
        "encoded {} characters as {} glyphs",
        text.chars().count(),
        script.len()
    );
    script.render(options)
}

fn read_source(source: Source<'_>) -> Result<String, TranscriptionFailure> {
    match source {
        Source::Text(text) => Ok(text.to_string()),
        Source::File(path) => {
            let bytes = fs::read(path).map_err(|error| {
                TranscriptionFailure::Io(IoFailed {
                    action: IoAction::Read,
                    target: IoTarget::File(path.to_path_buf()),
                    error,
                })
            })?;
            match String::from_utf8(bytes) {
                Ok(text) => Ok(text),
                Err(e) => {
                    // Only letters and spaces matter, so there is no
                    // need to reject the whole file.
                    event!(
                        Level::WARN,
                        "{} is not valid UTF-8 ({e}); invalid sequences will be ignored",
                        path.display()
                    );
                    Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
                }
            }
        }
    }
}

fn write_output(output: Option<&Path>, body: &str) -> Result<(), TranscriptionFailure> {
    match output {
        Some(path) => fs::write(path, body).map_err(|error| {
            TranscriptionFailure::Io(IoFailed {
                action: IoAction::Write,
                target: IoTarget::File(path.to_path_buf()),
                error,
            })
        }),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{body}")
                .and_then(|()| handle.flush())
                .map_err(|error| {
                    TranscriptionFailure::Io(IoFailed {
                        action: IoAction::Write,
                        target: IoTarget::Stdout,
                        error,
                    })
                })
        }
    }
}

/// Transcribe the text from `source` and write it to the file
/// `output`, or to standard output if there is no output file.
///
/// When writing to standard output a final line break is added.
///
/// # Errors
///
/// Fails if the input file cannot be read or the output cannot be
/// written.
pub fn transcribe_file(
    source: Source<'_>,
    output: Option<&Path>,
    options: &LayoutOptions,
) -> Result<(), TranscriptionFailure> {
    let span = span!(Level::INFO, "transcribe", ?source, ?output);
    let _enter = span.enter();
    let text = read_source(source)?;
    let body = transcribe(&text, options);
    write_output(output, &body)?;
    event!(Level::INFO, "transcription succeeded");
    Ok(())
}
