//! Name matching rules deciding which entries get wiped.

use regex::Regex;

use crate::config::Config;
use crate::error::ConfigError;

/// Kind of a directory entry as far as matching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// Exact names, patterns and exclusions for one entry kind.
#[derive(Debug, Clone)]
struct RuleSet {
    names: Vec<String>,
    patterns: Vec<Regex>,
    excluded: Vec<String>,
}

impl RuleSet {
    fn compile(
        names: &[String],
        patterns: &[String],
        excluded: &[String],
    ) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            names: names.to_vec(),
            patterns,
            excluded: excluded.to_vec(),
        })
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|e| e == name)
    }

    fn matches(&self, name: &str) -> bool {
        // Exclusion always wins over names and patterns.
        if self.is_excluded(name) {
            return false;
        }
        if self.names.iter().any(|n| n == name) {
            return true;
        }
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

/// Compiled wipe rules for files and directories.
///
/// Patterns are compiled once up front, so a malformed expression fails
/// the run before anything is touched.
#[derive(Debug, Clone)]
pub struct WipeRules {
    files: RuleSet,
    dirs: RuleSet,
}

impl WipeRules {
    /// Compile the rules of `config`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            files: RuleSet::compile(
                &config.wipe_out,
                &config.wipe_out_pattern,
                &config.exclude_file,
            )?,
            dirs: RuleSet::compile(
                &config.wipe_out_dirs,
                &config.wipe_out_pattern_dirs,
                &config.exclude_dir,
            )?,
        })
    }

    fn rules_for(&self, kind: EntryKind) -> &RuleSet {
        match kind {
            EntryKind::File => &self.files,
            EntryKind::Dir => &self.dirs,
        }
    }

    /// Whether `name` is on the exclusion list for `kind`.
    pub fn is_excluded(&self, name: &str, kind: EntryKind) -> bool {
        self.rules_for(kind).is_excluded(name)
    }

    /// Decide whether an entry called `name` should be wiped.
    ///
    /// Exclusions are checked first, then exact names, then patterns in
    /// the order they were configured.
    pub fn should_wipe(&self, name: &str, kind: EntryKind) -> bool {
        let wipe = self.rules_for(kind).matches(name);
        tracing::trace!(name, ?kind, wipe, "Evaluated wipe rules");
        wipe
    }
}
