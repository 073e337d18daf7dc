// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::io;
use std::path::PathBuf;

use super::grid::Position;

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, io::Error),
    MalformedGrid(String),
    MalformedRecord { line: usize, text: String, reason: String },
    MissingMarker(&'static str),
    CycleDetected(Vec<u32>),
    Unreachable(Position, Position),
    NeverExits(Position),
    Config(String),
}
impl Error {
    pub fn malformed_record(line: usize, text: &str, reason: &str) -> Self {
        Error::MalformedRecord {
            line,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(path, err) =>
                write!(f, "cannot read {}: {}", path.display(), err),
            Error::MalformedGrid(msg) =>
                write!(f, "malformed grid: {}", msg),
            Error::MalformedRecord { line, text, reason } =>
                write!(f, "malformed record at line {} ({:?}): {}", line, text, reason),
            Error::MissingMarker(name) =>
                write!(f, "grid has no {} marker", name),
            Error::CycleDetected(pages) =>
                write!(f, "ordering rules form a cycle over pages {:?}", pages),
            Error::Unreachable(from, to) =>
                write!(f, "no path from {} to {}", from, to),
            Error::NeverExits(start) =>
                write!(f, "the walk from {} loops and never leaves the grid", start),
            Error::Config(msg) =>
                write!(f, "invalid configuration: {}", msg),
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(_, err) => Some(err),
            _                 => None,
        }
    }
}
impl From<yaml_rust::ScanError> for Error {
    fn from(other: yaml_rust::ScanError) -> Self {
        Error::Config(other.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn read_input(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))
}
