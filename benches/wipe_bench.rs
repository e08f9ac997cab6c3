//! Benchmark tests for the wipe engine
//!
//! Runs are dry runs so the same tree can be walked on every iteration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use tempfile::TempDir;
use wiper::{Config, Wiper};

/// Create a benchmark directory with the given number of files spread over directories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let files_per_dir = file_count / dir_count.max(1);

    for d in 0..dir_count {
        let subdir = root.join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let ext = if f % 2 == 0 { "txt" } else { "orig" };
            fs::write(subdir.join(format!("file{}.{}", f, ext)), b"x").unwrap();
        }
    }

    dir
}

fn dry_run_config(dir: &TempDir) -> Config {
    Config {
        base_dir: Some(dir.path().to_path_buf()),
        wipe_out: vec!["file0.txt".to_string()],
        wipe_out_pattern: vec![r"\.orig$".to_string(), r"^~.*".to_string()],
        exclude_file: vec!["file1.orig".to_string()],
        dry_run: true,
        ..Config::default()
    }
}

fn benchmark_wide_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree");

    for size in [100, 500, 1000].iter() {
        let dir = create_benchmark_dir(*size, 10);
        let wiper = Wiper::new(&dry_run_config(&dir)).unwrap();

        group.bench_with_input(BenchmarkId::new("dry_run", size), size, |b, _| {
            b.iter(|| black_box(wiper.run()))
        });
    }

    group.finish();
}

fn benchmark_deep_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_tree");

    // Create 8 levels deep with 10 files each
    let dir = TempDir::new().unwrap();
    let mut current = dir.path().to_path_buf();
    for level in 0..8 {
        current = current.join(format!("level{}", level));
        fs::create_dir(&current).unwrap();

        for f in 0..10 {
            fs::write(current.join(format!("file{}.orig", f)), b"z").unwrap();
        }
    }

    let wiper = Wiper::new(&dry_run_config(&dir)).unwrap();

    group.bench_function("dry_run", |b| b.iter(|| black_box(wiper.run())));

    group.finish();
}

criterion_group!(benches, benchmark_wide_tree, benchmark_deep_tree);
criterion_main!(benches);
