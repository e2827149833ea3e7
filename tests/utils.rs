#![allow(dead_code)]

use pystrap::cli::{run, Args};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Relative paths of every file and directory below `root`, with `/` separators.
pub fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = tree(dir1);
    let files2 = tree(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }

    for file in files1.intersection(&files2) {
        let path1 = dir1.join(file);
        let path2 = dir2.join(file);
        if !path1.is_file() || !path2.is_file() {
            continue;
        }
        let content1 = fs::read_to_string(&path1).unwrap_or_default();
        let content2 = fs::read_to_string(&path2).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {file}");
            println!("  --- Actual content:\n{content1}");
            println!("  --- Expected content:\n{content2}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directories hold the same files with the same contents.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Runs pystrap non-interactively for `project_name` inside `output_dir`.
pub fn run_for(project_name: &str, output_dir: &Path, distributable: bool) {
    let mut args = Args::for_project(project_name, output_dir);
    args.distributable = distributable;
    args.quiet = true;
    run(args).unwrap();
}
