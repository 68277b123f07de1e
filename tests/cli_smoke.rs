use std::path::PathBuf;
use std::process::Command;

fn bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_scriptreel")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "scriptreel.exe"
            } else {
                "scriptreel"
            });
            p
        })
}

#[test]
fn dump_then_validate_roundtrip() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let reel_path = dir.join("showcase.json");
    let _ = std::fs::remove_file(&reel_path);

    let status = Command::new(bin())
        .args(["dump", "--out"])
        .arg(&reel_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(reel_path.exists());

    let out = Command::new(bin())
        .args(["validate", "--in"])
        .arg(&reel_path)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("5 scenes"));
    assert!(stdout.contains("20000 ms"));
}

#[test]
fn validate_rejects_broken_reel() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let bad_path = dir.join("bad.json");
    std::fs::write(&bad_path, r#"{"title":"x","tagline":"","outro":"","scenes":[]}"#).unwrap();

    let out = Command::new(bin())
        .args(["validate", "--in"])
        .arg(&bad_path)
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn timeline_prints_the_scene_table() {
    let out = Command::new(bin()).arg("timeline").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Shirodhara Therapy"));
    assert!(stdout.contains("total: 20000 ms"));
}
