#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn scl() -> Command {
    cargo_bin_cmd!("siteclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_siteclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a 128-float feature file (all components = `value`) and return its path
pub fn write_feature_file(name: &str, value: f32) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feature.json", name));
    let p = path.to_string_lossy().to_string();

    let values = vec![value; 128];
    let json = serde_json::to_string(&values).expect("serialize feature vector");
    fs::write(&p, json).expect("write feature file");
    p
}

/// Write a feature file with an arbitrary number of components (for malformed probes)
pub fn write_feature_file_with_len(name: &str, value: f32, len: usize) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feature.json", name));
    let p = path.to_string_lossy().to_string();

    let values = vec![value; len];
    let json = serde_json::to_string(&values).expect("serialize feature vector");
    fs::write(&p, json).expect("write feature file");
    p
}

/// Initialize the DB schema at the given path (test mode: user config untouched)
pub fn init_test_db(db_path: &str) {
    scl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Enroll a worker with the given template file, returning the generated subject id
pub fn enroll_worker(db_path: &str, name: &str, template_path: &str) -> String {
    let output = scl()
        .args([
            "--db",
            db_path,
            "--test",
            "enroll",
            name,
            "--template",
            template_path,
        ])
        .output()
        .expect("failed to run enroll");
    assert!(output.status.success(), "enroll failed for {}", name);

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Subject ID: "))
        .expect("enroll output must contain the subject id")
        .trim()
        .to_string()
}
