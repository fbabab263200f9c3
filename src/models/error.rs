use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    FileNotFound(PathBuf),
    IoError(std::io::Error),
    InvalidArgument(String),
    ParserError(String),
    NotFound(String),
    ServiceError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File Not Found: {}", path.display()),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Error::ServiceError(msg) => write!(f, "Service Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

#[cfg(feature = "geocoder")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::ServiceError(err.to_string())
    }
}

#[cfg(feature = "geocoder")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ServiceError(format!("Malformed response: {}", err))
    }
}

impl Error {
    /// Maps an I/O error raised while opening `path`, distinguishing a
    /// missing file from every other read failure.
    pub fn from_io_at_path(err: std::io::Error, path: impl Into<PathBuf>) -> Error {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.into()),
            _ => Error::IoError(err),
        }
    }
}
