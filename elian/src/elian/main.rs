use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::ArgAction::Set;
use clap::{ArgGroup, Parser};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use elian::{transcribe_file, LayoutOptions, Source, TranscriptionFailure};

/// Generate the Elian script representation of ASCII text using
/// Unicode box-drawing characters
#[derive(Parser, Debug)]
#[clap(version, long_about = None)]
#[clap(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
struct Cli {
    /// The text to convert into Elian script.
    #[clap(action = Set, short = 't', long)]
    text: Option<String>,

    /// File containing the text to convert into Elian script.
    #[clap(action = Set, short = 'f', long)]
    file: Option<PathBuf>,

    /// File to which the Elian script is written (instead of standard
    /// output).
    #[clap(action = Set, short = 'o', long)]
    output: Option<PathBuf>,

    /// Maximum width of an output line, in columns.
    #[clap(action = Set, short = 'w', long, default_value = "70")]
    line_char_limit: NonZeroUsize,
}

#[derive(Debug)]
enum Fail {
    /// Reading the input or writing the output failed.
    TranscriptionFailed(TranscriptionFailure),
    /// We were not able to set up logging.
    InitialisationFailure(String),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::TranscriptionFailed(failure) => failure.fmt(f),
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
        }
    }
}

impl Error for Fail {}

fn run_transcriber() -> Result<(), Fail> {
    let cli = Cli::parse();

    // Log to stderr, since stdout carries the transcription.  Set
    // RUST_LOG (for example RUST_LOG=debug) to see more.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let source = match (&cli.text, &cli.file) {
        (Some(text), _) => Source::Text(text.as_str()),
        (None, Some(file)) => Source::File(file.as_path()),
        (None, None) => {
            return Err(Fail::InitialisationFailure(
                "either --text or --file must be specified".to_string(),
            ));
        }
    };
    let options = LayoutOptions {
        line_char_limit: cli.line_char_limit.get(),
    };
    let result =
        transcribe_file(source, cli.output.as_deref(), &options).map_err(Fail::TranscriptionFailed);
    if let Err(e) = &result {
        event!(Level::ERROR, "transcription failed: {:?}", e);
    }
    result
}

fn main() {
    match run_transcriber() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
