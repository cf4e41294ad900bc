use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug)]
pub struct IoFailed {
    pub action: IoAction,
    pub target: IoTarget,
    pub error: IoError,
}

impl Display for IoFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let IoFailed {
            action,
            target,
            error,
        } = self;
        let action = match action {
            IoAction::Read => "reading",
            IoAction::Write => "writing",
        };
        match target {
            IoTarget::File(file_name) => {
                write!(
                    f,
                    "I/O error {action} file {}: {error}",
                    file_name.display()
                )
            }
            IoTarget::Stdout => write!(f, "I/O error {action} standard output: {error}"),
        }
    }
}

/// Failures of [`transcribe_file`](crate::transcribe_file).  Turning
/// text into Elian script cannot itself fail; only reading the input
/// and writing the output can.
#[derive(Debug)]
pub enum TranscriptionFailure {
    Io(IoFailed),
}

impl Display for TranscriptionFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            TranscriptionFailure::Io(e) => e.fmt(f),
        }
    }
}

impl Error for TranscriptionFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranscriptionFailure::Io(IoFailed { error, .. }) => Some(error),
        }
    }
}
