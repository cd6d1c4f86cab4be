//! E2E 測試
//!
//! 直接執行編譯後的程式，驗證參數與結束代碼

use std::fs;
use std::process::Command;

use image::RgbImage;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_syno_thumb");

#[test]
fn test_cli_generates_thumbnails() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    RgbImage::new(20, 10).save(base.join("cli.jpg")).unwrap();
    fs::write(base.join("broken.JPG"), b"broken").unwrap();

    let output = Command::new(BIN).arg("--dir").arg(base).output().unwrap();

    // 單一檔案失敗不影響結束代碼
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: Image not processed"));
    assert!(stdout.contains("broken.JPG"));
    assert!(stdout.contains("Thumbnails generated for"));

    for name in [
        "SYNOPHOTO_THUMB_XL.jpg",
        "SYNOPHOTO_THUMB_SM.jpg",
        "SYNOPHOTO_THUMB_M.jpg",
    ] {
        assert!(base.join("@eaDir/cli.jpg").join(name).is_file());
    }
    assert!(!base.join("@eaDir/broken.JPG").join("SYNOPHOTO_THUMB_XL.jpg").exists());
}

#[test]
fn test_cli_missing_directory_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let output = Command::new(BIN).arg("-d").arg(&missing).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist"));
}

#[test]
fn test_cli_defaults_to_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    RgbImage::new(8, 12).save(temp_dir.path().join("here.jpeg")).unwrap();

    let output = Command::new(BIN).current_dir(temp_dir.path()).output().unwrap();

    assert!(output.status.success());
    assert!(temp_dir.path().join("@eaDir/here.jpeg/SYNOPHOTO_THUMB_M.jpg").is_file());
}
