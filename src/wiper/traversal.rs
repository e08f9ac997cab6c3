//! Concurrent directory traversal.
//!
//! Every subdirectory that survives the rules is visited by its own task
//! spawned into a single `rayon::scope`. The scope is the join barrier: it
//! only returns once every task of the tree has finished, at which point the
//! last error sender is gone and the collector can be drained.

use crossbeam_channel::{self as channel, Sender};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WiperError;

use super::disposal::{DisposalMode, Disposer};
use super::rules::{EntryKind, WipeRules};
use super::stats::StatsCollector;

/// Shared state of one run, cheap to copy into every task.
#[derive(Clone, Copy)]
pub(crate) struct Traversal<'a> {
    rules: &'a WipeRules,
    disposer: &'a Disposer,
    stats: &'a StatsCollector,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(
        rules: &'a WipeRules,
        disposer: &'a Disposer,
        stats: &'a StatsCollector,
    ) -> Self {
        Self {
            rules,
            disposer,
            stats,
        }
    }

    /// Walk the tree below `root` and return every error collected on the way.
    pub(crate) fn run(self, root: &Path) -> Vec<WiperError> {
        let (errors_tx, errors_rx) = channel::unbounded();

        rayon::scope(|scope| self.visit(scope, root.to_path_buf(), errors_tx));

        // All senders were owned by tasks of the scope and are dropped by now,
        // so this drains the channel and ends.
        errors_rx.iter().collect()
    }

    fn visit<'s>(self, scope: &rayon::Scope<'s>, dir: PathBuf, errors: Sender<WiperError>)
    where
        'a: 's,
    {
        tracing::debug!(dir = %dir.display(), "Visiting directory");

        let read_dir = match fs::read_dir(&dir) {
            Ok(rd) => rd,
            Err(source) => {
                report(&errors, WiperError::Listing { path: dir, source });
                return;
            }
        };

        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    report(
                        &errors,
                        WiperError::Listing {
                            path: dir.clone(),
                            source,
                        },
                    );
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(source) => {
                    report(&errors, WiperError::Listing { path, source });
                    continue;
                }
            };
            let name = entry.file_name();
            let name = name.to_string_lossy();

            // Symlinks are never followed, a link to a directory counts as a file.
            if file_type.is_dir() {
                self.stats.dir_inspected();

                // Checked apart from should_wipe: excluded dirs are not descended either.
                if self.rules.is_excluded(&name, EntryKind::Dir) || self.is_trash(&path) {
                    tracing::debug!(dir = %path.display(), "Skipping excluded directory");
                    continue;
                }

                if self.rules.should_wipe(&name, EntryKind::Dir) {
                    match self.disposer.dispose(&path, EntryKind::Dir) {
                        Ok(()) => self.stats.dir_wiped(),
                        Err(err) => report(&errors, err),
                    }
                    continue;
                }

                let errors = errors.clone();
                scope.spawn(move |scope| self.visit(scope, path, errors));
            } else {
                self.stats.file_inspected();

                if self.rules.should_wipe(&name, EntryKind::File) {
                    match self.disposer.dispose(&path, EntryKind::File) {
                        Ok(()) => self.stats.file_wiped(),
                        Err(err) => report(&errors, err),
                    }
                }
            }
        }
    }

    /// The trash must not be wiped when it lives below the base directory.
    fn is_trash(&self, path: &Path) -> bool {
        matches!(self.disposer.mode(), DisposalMode::Trash(trash) if trash == path)
    }
}

fn report(errors: &Sender<WiperError>, err: WiperError) {
    tracing::debug!(error = %err, "Collected error");
    // The receiver outlives every task of the scope.
    let _ = errors.send(err);
}
