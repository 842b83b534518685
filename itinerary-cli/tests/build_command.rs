use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn site_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("itinerary-site")
        .join("tests")
        .join("fixtures")
        .join("data")
}

fn run_build(dir: &Path, data: &Path, out: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_itinerary"))
        .arg("--config")
        .arg(dir.join("itinerary.toml"))
        .arg("build")
        .arg("--data")
        .arg(data)
        .arg("--out")
        .arg(out)
        .env("RUST_LOG", "off")
        .output()
        .expect("run itinerary")
}

#[test]
fn test_build_without_stays_writes_failure_page() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("pois.json"), "{}").unwrap();
    fs::write(data.join("images.json"), "{}").unwrap();
    let out = tmp.path().join("site");

    let output = run_build(tmp.path(), &data, &out);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("site data failed to load"), "{stderr}");
    assert!(stderr.contains("stays.json"), "{stderr}");

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Error loading site data."));
    assert!(!out.join("budget.html").exists());
    assert!(!out.join("stay-1.html").exists());
}

#[test]
fn test_failed_build_replaces_previous_site() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("site");

    let first = run_build(tmp.path(), &site_fixtures(), &out);
    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
    assert!(out.join("stay-3.html").exists());

    let empty = tmp.path().join("empty");
    fs::create_dir(&empty).unwrap();
    let second = run_build(tmp.path(), &empty, &out);

    assert!(!second.status.success());
    assert!(!out.join("stay-3.html").exists());
    assert!(!out.join("budget.html").exists());
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Error loading site data."));
}
