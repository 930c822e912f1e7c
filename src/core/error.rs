use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl FilterError {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        FilterError {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn warning(msg: &str) -> Self {
        Self::new(ErrorKind::Warning, msg)
    }

    pub fn error(msg: &str) -> Self {
        Self::new(ErrorKind::Error, msg)
    }

    pub fn is_warning(&self) -> bool {
        self.kind == ErrorKind::Warning
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Warning => write!(f, "Warning: {}", self.msg),
            ErrorKind::Error => write!(f, "Error: {}", self.msg),
        }
    }
}

impl std::error::Error for FilterError {}

impl From<&str> for FilterError {
    fn from(msg: &str) -> Self {
        FilterError::error(msg)
    }
}

impl From<std::io::Error> for FilterError {
    fn from(e: std::io::Error) -> Self {
        FilterError::error(&e.to_string())
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(e: serde_json::Error) -> Self {
        FilterError::error(&e.to_string())
    }
}

impl From<image::ImageError> for FilterError {
    fn from(e: image::ImageError) -> Self {
        FilterError::error(&e.to_string())
    }
}
