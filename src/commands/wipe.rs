//! Wipe command implementation.

use crate::cli::Cli;
use crate::config::Config;
use crate::wiper::{WipeReport, Wiper};
use anyhow::{Context, Result};

/// Exit code used when the run finished but some entries failed.
pub const PARTIAL_FAILURE_EXIT_CODE: i32 = 5;

/// Run the wipe command.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = apply_overrides(config, cli);

    tracing::debug!(?config, "Effective configuration");

    let wiper = Wiper::new(&config)?;
    tracing::info!(base_dir = %wiper.base_dir().display(), "Wiping");
    let report = wiper.run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        print_report(&report, config.dry_run);
    }

    for err in &report.errors {
        eprintln!("Error: {}", err);
    }

    if !report.is_success() {
        eprintln!("Errors occurred during wiping files");
        std::process::exit(PARTIAL_FAILURE_EXIT_CODE);
    }

    Ok(())
}

/// Layer command line options over the loaded configuration.
///
/// Lists given on the command line replace the configured ones, paths
/// override them and flags can only switch features on.
pub fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    fn replace(target: &mut Vec<String>, values: &[String]) {
        if !values.is_empty() {
            *target = values.to_vec();
        }
    }

    if let Some(dir) = &cli.base_dir {
        config.base_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.trash_dir {
        config.trash_dir = Some(dir.clone());
    }
    replace(&mut config.wipe_out, &cli.wipe_out);
    replace(&mut config.wipe_out_pattern, &cli.wipe_out_pattern);
    replace(&mut config.wipe_out_dirs, &cli.wipe_out_dir);
    replace(&mut config.wipe_out_pattern_dirs, &cli.wipe_out_dir_pattern);
    replace(&mut config.exclude_file, &cli.exclude_file);
    replace(&mut config.exclude_dir, &cli.exclude_dir);
    config.use_trash |= cli.use_trash;
    config.dry_run |= cli.dry_run;

    config
}

fn print_report(report: &WipeReport, dry_run: bool) {
    let verb = if dry_run { "would wipe" } else { "wiped" };
    let stats = &report.stats;

    if dry_run {
        println!("[DRY RUN] Nothing was changed.");
    }
    println!(
        "Inspected {} files and {} {} files.",
        stats.inspected_files, verb, stats.wiped_files
    );
    println!(
        "Inspected {} directories and {} {} directories.",
        stats.inspected_dirs, verb, stats.wiped_dirs
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_lists_replace_config_lists() {
        let config = Config {
            wipe_out: vec!["from-file".into()],
            exclude_dir: vec![".git".into()],
            ..Config::default()
        };
        let cli = Cli::parse_from(["wiper", "-w", "from-cli"]);

        let merged = apply_overrides(config, &cli);

        assert_eq!(merged.wipe_out, vec!["from-cli"]);
        assert_eq!(merged.exclude_dir, vec![".git"]);
    }

    #[test]
    fn test_cli_paths_override_config() {
        let config = Config {
            base_dir: Some(PathBuf::from("/from/file")),
            ..Config::default()
        };
        let cli = Cli::parse_from(["wiper", "-b", "/from/cli", "--trash-dir", "/trash"]);

        let merged = apply_overrides(config, &cli);

        assert_eq!(merged.base_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(merged.trash_dir, Some(PathBuf::from("/trash")));
    }

    #[test]
    fn test_flags_only_switch_on() {
        let config = Config {
            use_trash: true,
            ..Config::default()
        };
        let cli = Cli::parse_from(["wiper", "--dry-run"]);

        let merged = apply_overrides(config, &cli);

        assert!(merged.use_trash);
        assert!(merged.dry_run);
    }
}
