use std::fmt;

#[derive(Debug)]
pub enum UnitsError {
    Pattern(regex::Error),
    Io { path: String, source: std::io::Error },
}

impl fmt::Display for UnitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitsError::Pattern(e) => write!(f, "Pattern error: {}", e),
            UnitsError::Io { path, source } => write!(f, "I/O error on {}: {}", path, source),
        }
    }
}

impl std::error::Error for UnitsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UnitsError::Pattern(e) => Some(e),
            UnitsError::Io { source, .. } => Some(source),
        }
    }
}
