//! Test suite for the CLI entry point.

use pyjumble::entry_point::run_with_args_to;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn write_file(path: &std::path::Path, content: &str) {
    let mut file = File::create(path).unwrap();
    write!(file, "{content}").unwrap();
}

fn run(args: Vec<String>) -> (i32, String) {
    let mut out = Vec::new();
    let code = run_with_args_to(args, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_single_file_prints_to_stdout() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("mod.py");
    write_file(&target, "class A:\n    def helper(self):\n        return 1\n");

    let (code, out) = run(vec![
        target.to_string_lossy().to_string(),
        "--seed".to_owned(),
        "1".to_owned(),
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("class A:"));
    assert!(!out.contains("helper"));
    // The input file itself is untouched.
    assert!(fs::read_to_string(&target).unwrap().contains("helper"));
}

#[test]
fn test_in_place_directory_run() {
    let dir = tempdir().unwrap();
    write_file(
        &dir.path().join("mod.py"),
        "class A:\n    def helper(self):\n        return 1\n",
    );

    let (code, out) = run(vec![
        dir.path().to_string_lossy().to_string(),
        "--in-place".to_owned(),
        "--seed".to_owned(),
        "1".to_owned(),
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("mod.py"));
    assert!(out.contains("Rewrote"));
    assert!(!fs::read_to_string(dir.path().join("mod.py"))
        .unwrap()
        .contains("helper"));
}

#[test]
fn test_output_dir_leaves_input_untouched() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    write_file(
        &dir.path().join("mod.py"),
        "class A:\n    def helper(self):\n        return 1\n",
    );

    let (code, _) = run(vec![
        dir.path().to_string_lossy().to_string(),
        "--output-dir".to_owned(),
        out_dir.path().to_string_lossy().to_string(),
        "--seed".to_owned(),
        "2".to_owned(),
        "--quiet".to_owned(),
    ]);
    assert_eq!(code, 0);
    assert!(fs::read_to_string(dir.path().join("mod.py"))
        .unwrap()
        .contains("helper"));
    assert!(!fs::read_to_string(out_dir.path().join("mod.py"))
        .unwrap()
        .contains("helper"));
}

#[test]
fn test_map_export_is_sorted_json() {
    let dir = tempdir().unwrap();
    let map_path = dir.path().join("map.json");
    write_file(
        &dir.path().join("mod.py"),
        "class A:\n    def alpha(self):\n        return self.beta_\n",
    );

    let (code, _) = run(vec![
        dir.path().to_string_lossy().to_string(),
        "--in-place".to_owned(),
        "--seed".to_owned(),
        "3".to_owned(),
        "--map".to_owned(),
        map_path.to_string_lossy().to_string(),
        "--quiet".to_owned(),
    ]);
    assert_eq!(code, 0);

    let json = fs::read_to_string(&map_path).unwrap();
    let alpha = json.find("\"alpha\"").unwrap();
    let beta = json.find("\"beta_\"").unwrap();
    assert!(alpha < beta, "map keys must be sorted: {json}");
}

#[test]
fn test_multiple_files_without_destination_fail() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("one.py"), "x = 1\n");
    write_file(&dir.path().join("two.py"), "y = 2\n");

    let (code, out) = run(vec![dir.path().to_string_lossy().to_string()]);
    assert_eq!(code, 2);
    assert!(out.contains("--in-place"));
}

#[test]
fn test_config_file_supplies_seed_and_excludes() {
    let dir = tempdir().unwrap();
    write_file(
        &dir.path().join(".pyjumble.toml"),
        "[pyjumble]\nseed = 11\nexclude_folders = [\"skipme\"]\n",
    );
    let skipped = dir.path().join("skipme");
    fs::create_dir(&skipped).unwrap();
    write_file(&skipped.join("hidden.py"), "class B:\n    def gone(self):\n        pass\n");
    write_file(
        &dir.path().join("mod.py"),
        "class A:\n    def helper(self):\n        return 1\n",
    );

    let (code, _) = run(vec![
        dir.path().to_string_lossy().to_string(),
        "--in-place".to_owned(),
        "--quiet".to_owned(),
    ]);
    assert_eq!(code, 0);
    // Excluded folder untouched.
    assert!(fs::read_to_string(skipped.join("hidden.py"))
        .unwrap()
        .contains("gone"));

    // Seed 11 from the config makes the run reproducible.
    let expected = {
        let mut ctx = pyjumble::rename::RenameContext::with_seed(11);
        ctx.get_or_create("helper")
    };
    assert!(fs::read_to_string(dir.path().join("mod.py"))
        .unwrap()
        .contains(expected.as_str()));
}

#[test]
fn test_help_exits_cleanly() {
    let (code, out) = run(vec!["--help".to_owned()]);
    assert_eq!(code, 0);
    assert!(out.contains("pyjumble"));
    assert!(out.contains("--consistent"));
}

#[test]
fn test_unknown_flag_is_an_error() {
    let (code, _) = run(vec!["--definitely-not-a-flag".to_owned()]);
    assert_eq!(code, 1);
}
