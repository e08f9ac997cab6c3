use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::wiper::WipeRules;

/// Name of the trash directory created under the home directory.
pub const TRASH_DIR_NAME: &str = ".Trash";

/// Config file looked up under `~/.config/wiper`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Everything a wipe run needs to know.
///
/// Field names double as the keys of the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory to scan (None = home directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Exact file names to wipe
    pub wipe_out: Vec<String>,
    /// Regular expressions matched against file names
    pub wipe_out_pattern: Vec<String>,
    /// Exact directory names to wipe
    pub wipe_out_dirs: Vec<String>,
    /// Regular expressions matched against directory names
    pub wipe_out_pattern_dirs: Vec<String>,
    /// File names that are never wiped
    pub exclude_file: Vec<String>,
    /// Directory names that are never wiped nor descended into
    pub exclude_dir: Vec<String>,
    /// Move matches to the trash instead of deleting them
    pub use_trash: bool,
    /// Trash location (None = ~/.Trash)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trash_dir: Option<PathBuf>,
    /// Only report what would be wiped
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. Without one, `~/.config/wiper/config.toml`
    /// is read when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_dir().and_then(|dir| Self::find_in(&dir)),
        };

        let config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                let content = fs::read_to_string(&path).map_err(|source| {
                    ConfigError::ReadError {
                        path: path.clone(),
                        source,
                    }
                })?;
                toml::from_str(&content)
                    .map_err(|source| ConfigError::ParseError { path, source })?
            }
            None => {
                tracing::debug!("No config file used");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Directory holding the default config files.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("wiper"))
    }

    /// Config file inside `dir`, if there is one.
    ///
    /// Only TOML is understood; YAML files such as an extensionless
    /// `config` are not picked up.
    pub fn find_in(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Check that every pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        WipeRules::new(self).map(|_| ())
    }

    /// Base directory of the run, defaulting to the home directory.
    ///
    /// The result is canonical, so every path found below it can be compared
    /// with the trash location. Fails when the directory does not exist or
    /// is not a directory.
    pub fn resolve_base_dir(&self) -> Result<PathBuf, ConfigError> {
        let base = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?,
        };

        match fs::metadata(&base) {
            Ok(meta) if meta.is_dir() => {
                fs::canonicalize(&base).map_err(|_| ConfigError::BaseDirNotFound(base))
            }
            Ok(_) => Err(ConfigError::NotADirectory(base)),
            Err(_) => Err(ConfigError::BaseDirNotFound(base)),
        }
    }

    /// Trash location, or None when trash is disabled.
    ///
    /// Canonicalized as far as it exists: a trash that is not created yet
    /// keeps its name below its canonical parent.
    pub fn resolve_trash_dir(&self) -> Result<Option<PathBuf>, ConfigError> {
        if !self.use_trash {
            return Ok(None);
        }
        let trash = match &self.trash_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .ok_or(ConfigError::HomeDirUnavailable)?
                .join(TRASH_DIR_NAME),
        };
        Ok(Some(canonicalize_lenient(trash)))
    }
}

fn canonicalize_lenient(path: PathBuf) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(&path) {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            match fs::canonicalize(parent) {
                Ok(parent) => parent.join(name),
                Err(_) => path,
            }
        }
        _ => std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path),
    }
}
