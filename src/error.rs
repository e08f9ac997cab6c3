use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum WiperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to list directory '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wipe '{path}': {source}")]
    Disposal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create trash directory '{path}': {source}")]
    Trash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot move '{path}' to trash: '{target}' already exists")]
    TrashCollision { path: PathBuf, target: PathBuf },
}

impl WiperError {
    /// Path of the entry the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WiperError::Config(_) => None,
            WiperError::Listing { path, .. }
            | WiperError::Disposal { path, .. }
            | WiperError::Trash { path, .. }
            | WiperError::TrashCollision { path, .. } => Some(path),
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Base directory not found: {0}")]
    BaseDirNotFound(PathBuf),

    #[error("Base path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WiperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::BaseDirNotFound(PathBuf::from("/nowhere"));
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::HomeDirUnavailable;
        let wiper_err: WiperError = config_err.into();
        assert!(matches!(wiper_err, WiperError::Config(_)));
        assert!(wiper_err.path().is_none());
    }

    #[test]
    fn collision_reports_source_path() {
        let err = WiperError::TrashCollision {
            path: PathBuf::from("/base/note.txt"),
            target: PathBuf::from("/trash/note.txt"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("/base/note.txt")));
        assert!(err.to_string().contains("already exists"));
    }
}
