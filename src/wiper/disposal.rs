//! Removal of matched entries, either for good or into the trash.

use std::fs;
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Result, WiperError};

use super::rules::EntryKind;

/// Permissions of a freshly created trash directory.
const TRASH_DIR_MODE: u32 = 0o700;

/// How matched entries are disposed of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisposalMode {
    /// Remove the entry permanently.
    Delete,
    /// Move the entry into the given directory.
    Trash(PathBuf),
    /// Leave the entry alone, only log it.
    DryRun,
}

/// Executor removing or trashing single entries.
#[derive(Debug)]
pub struct Disposer {
    mode: DisposalMode,
    trash_ready: OnceLock<()>,
}

impl Disposer {
    /// Create a new disposer with the given mode.
    pub fn new(mode: DisposalMode) -> Self {
        Self {
            mode,
            trash_ready: OnceLock::new(),
        }
    }

    pub fn mode(&self) -> &DisposalMode {
        &self.mode
    }

    /// Dispose of a single entry.
    ///
    /// Directories are removed (or moved) with their whole content.
    pub fn dispose(&self, path: &Path, kind: EntryKind) -> Result<()> {
        match &self.mode {
            DisposalMode::Delete => {
                let removed = match kind {
                    EntryKind::File => fs::remove_file(path),
                    EntryKind::Dir => fs::remove_dir_all(path),
                };
                removed.map_err(|source| WiperError::Disposal {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::info!(path = %path.display(), ?kind, "Wiped");
            }
            DisposalMode::Trash(trash) => {
                let target = self.move_to_trash(path, trash, kind)?;
                tracing::info!(
                    path = %path.display(),
                    target = %target.display(),
                    ?kind,
                    "Moved to trash"
                );
            }
            DisposalMode::DryRun => {
                tracing::info!(path = %path.display(), ?kind, "Would wipe");
            }
        }
        Ok(())
    }

    /// Move `path` into `trash` without ever replacing what is already there.
    ///
    /// The name in the trash is claimed first with a call that fails when it
    /// is taken: a hard link for files, an empty placeholder for directories
    /// which the rename then replaces.
    fn move_to_trash(&self, path: &Path, trash: &Path, kind: EntryKind) -> Result<PathBuf> {
        self.ensure_trash_dir(trash)?;

        let name = path.file_name().ok_or_else(|| WiperError::Disposal {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name"),
        })?;
        let target = trash.join(name);

        let claimed = match kind {
            EntryKind::File => fs::hard_link(path, &target),
            EntryKind::Dir => fs::create_dir(&target),
        };
        if let Err(source) = claimed {
            return Err(if source.kind() == io::ErrorKind::AlreadyExists {
                WiperError::TrashCollision {
                    path: path.to_path_buf(),
                    target,
                }
            } else {
                WiperError::Disposal {
                    path: path.to_path_buf(),
                    source,
                }
            });
        }

        let moved = match kind {
            EntryKind::File => fs::remove_file(path),
            EntryKind::Dir => fs::rename(path, &target),
        };
        if let Err(source) = moved {
            // Release the claimed name, the entry stays where it was.
            let _ = match kind {
                EntryKind::File => fs::remove_file(&target),
                EntryKind::Dir => fs::remove_dir(&target),
            };
            return Err(WiperError::Disposal {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(target)
    }

    fn ensure_trash_dir(&self, trash: &Path) -> Result<()> {
        if self.trash_ready.get().is_some() {
            return Ok(());
        }

        // Recursive creation succeeds when the directory already exists,
        // so concurrent first uses do not race each other.
        fs::DirBuilder::new()
            .recursive(true)
            .mode(TRASH_DIR_MODE)
            .create(trash)
            .map_err(|source| WiperError::Trash {
                path: trash.to_path_buf(),
                source,
            })?;

        let _ = self.trash_ready.set(());
        Ok(())
    }
}
