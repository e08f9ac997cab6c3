//! The wipe engine.
//!
//! This module provides:
//! - Name and pattern rules with exclusion precedence
//! - Disposal of matches, permanently or into a trash directory
//! - Concurrent traversal with one task per subdirectory

mod disposal;
mod rules;
mod stats;
mod traversal;

pub use disposal::{DisposalMode, Disposer};
pub use rules::{EntryKind, WipeRules};
pub use stats::{RunStatistics, StatsCollector};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, WiperError};
use traversal::Traversal;

/// Outcome of a run: final counters plus every error collected on the way.
#[derive(Debug)]
pub struct WipeReport {
    pub stats: RunStatistics,
    pub errors: Vec<WiperError>,
}

impl WipeReport {
    /// True when no entry failed to be listed or disposed of.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Serializable view of the report.
    pub fn summary(&self) -> WipeSummary {
        WipeSummary {
            stats: self.stats,
            errors: self.errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// JSON shape of a [`WipeReport`].
#[derive(Debug, Serialize)]
pub struct WipeSummary {
    #[serde(flatten)]
    pub stats: RunStatistics,
    pub errors: Vec<String>,
}

/// Engine holding the compiled rules and disposal mode of a configuration.
#[derive(Debug)]
pub struct Wiper {
    base_dir: PathBuf,
    rules: WipeRules,
    disposer: Disposer,
}

impl Wiper {
    /// Prepare a run.
    ///
    /// Fails on malformed patterns or a missing base directory; nothing has
    /// been touched at that point.
    pub fn new(config: &Config) -> Result<Self> {
        let rules = WipeRules::new(config)?;
        let base_dir = config.resolve_base_dir()?;

        let mode = if config.dry_run {
            DisposalMode::DryRun
        } else {
            match config.resolve_trash_dir()? {
                Some(trash) => DisposalMode::Trash(trash),
                None => DisposalMode::Delete,
            }
        };

        tracing::debug!(base_dir = %base_dir.display(), ?mode, "Prepared wiper");

        Ok(Self {
            base_dir,
            rules,
            disposer: Disposer::new(mode),
        })
    }

    /// Canonical directory the run starts from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Wipe the tree below the base directory.
    pub fn run(&self) -> WipeReport {
        self.traverse(&self.base_dir)
    }

    /// Wipe the tree below `dir`, waiting for every spawned task to finish.
    pub fn traverse(&self, dir: &Path) -> WipeReport {
        let stats = StatsCollector::new();
        let errors = Traversal::new(&self.rules, &self.disposer, &stats).run(dir);
        let stats = stats.snapshot();

        tracing::debug!(?stats, errors = errors.len(), "Traversal finished");

        WipeReport { stats, errors }
    }
}

/// Run a whole wipe for `config`.
///
/// Only configuration problems are returned as `Err`; failures on single
/// entries end up in [`WipeReport::errors`].
pub fn run(config: &Config) -> Result<WipeReport> {
    Ok(Wiper::new(config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_rejects_bad_pattern_before_touching_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("note.txt"), "x").unwrap();
        let config = Config {
            base_dir: Some(tmp.path().to_path_buf()),
            wipe_out: vec!["note.txt".into()],
            wipe_out_pattern: vec!["(".into()],
            ..Config::default()
        };

        let result = run(&config);

        assert!(matches!(result, Err(WiperError::Config(_))));
        assert!(tmp.path().join("note.txt").exists());
    }

    #[test]
    fn test_dry_run_wins_over_trash() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            base_dir: Some(tmp.path().to_path_buf()),
            use_trash: true,
            trash_dir: Some(tmp.path().join("trash")),
            dry_run: true,
            ..Config::default()
        };

        let wiper = Wiper::new(&config).unwrap();
        assert_eq!(wiper.disposer.mode(), &DisposalMode::DryRun);
    }

    #[test]
    fn test_base_dir_is_canonical() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let config = Config {
            base_dir: Some(tmp.path().join("sub/..")),
            ..Config::default()
        };

        let wiper = Wiper::new(&config).unwrap();

        assert_eq!(wiper.base_dir(), fs::canonicalize(tmp.path()).unwrap().as_path());
    }

    #[test]
    fn test_traverse_subdirectory_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("note.txt"), "x").unwrap();
        fs::write(tmp.path().join("sub/note.txt"), "x").unwrap();
        let config = Config {
            base_dir: Some(tmp.path().to_path_buf()),
            wipe_out: vec!["note.txt".into()],
            ..Config::default()
        };

        let wiper = Wiper::new(&config).unwrap();
        let report = wiper.traverse(&tmp.path().join("sub"));

        assert!(report.is_success());
        assert_eq!(report.stats.wiped_files, 1);
        assert!(tmp.path().join("note.txt").exists());
        assert!(!tmp.path().join("sub/note.txt").exists());
    }

    #[test]
    fn test_summary_serializes_flat() {
        let report = WipeReport {
            stats: RunStatistics {
                inspected_files: 3,
                wiped_files: 1,
                inspected_dirs: 2,
                wiped_dirs: 0,
            },
            errors: vec![],
        };

        let json = serde_json::to_value(report.summary()).unwrap();
        assert_eq!(json["inspected_files"], 3);
        assert_eq!(json["wiped_files"], 1);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }
}
