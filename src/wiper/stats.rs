//! Counters shared by every traversal task of a run.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Final counters of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    pub inspected_files: u64,
    pub wiped_files: u64,
    pub inspected_dirs: u64,
    pub wiped_dirs: u64,
}

/// Live counters, incremented concurrently while a run is in progress.
#[derive(Debug, Default)]
pub struct StatsCollector {
    inspected_files: AtomicU64,
    wiped_files: AtomicU64,
    inspected_dirs: AtomicU64,
    wiped_dirs: AtomicU64,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_inspected(&self) {
        self.inspected_files.fetch_add(1, Ordering::SeqCst);
    }

    pub fn file_wiped(&self) {
        self.wiped_files.fetch_add(1, Ordering::SeqCst);
    }

    pub fn dir_inspected(&self) {
        self.inspected_dirs.fetch_add(1, Ordering::SeqCst);
    }

    pub fn dir_wiped(&self) {
        self.wiped_dirs.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current values.
    pub fn snapshot(&self) -> RunStatistics {
        RunStatistics {
            inspected_files: self.inspected_files.load(Ordering::SeqCst),
            wiped_files: self.wiped_files.load(Ordering::SeqCst),
            inspected_dirs: self.inspected_dirs.load(Ordering::SeqCst),
            wiped_dirs: self.wiped_dirs.load(Ordering::SeqCst),
        }
    }
}
