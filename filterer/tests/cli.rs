use std::path::Path;

use assert_cmd::Command;
use fast_image_filter::{apply, pnm, FilterType, Image, U8x3};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_source_image(dir: &TempDir) -> (std::path::PathBuf, Image) {
    let mut image = Image::filled(40, 30, U8x3([10, 120, 200])).unwrap();
    for y in 5..25 {
        for x in 10..20 {
            image.set_pixel(x, y, U8x3::WHITE).unwrap();
        }
    }
    let path = dir.path().join("source.ppm");
    pnm::write_file(&path, &image).unwrap();
    (path, image)
}

fn filterer() -> Command {
    Command::cargo_bin("filterer").unwrap()
}

fn run_filter(src_path: &Path, dst_path: &Path, filter_type: &str) -> assert_cmd::assert::Assert {
    filterer()
        .arg(src_path)
        .arg(dst_path)
        .arg(filter_type)
        .assert()
}

#[test]
fn usage_without_arguments() {
    filterer()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("1 - Blur"))
        .stdout(predicate::str::contains("2 - Edge Detection"));
}

#[test]
fn usage_with_wrong_count_of_arguments() {
    filterer()
        .args(["in.ppm", "out.ppm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("required arguments were not provided"))
        .stdout(predicate::str::contains("Usage:"));
    filterer()
        .args(["in.ppm", "out.ppm", "1", "extra"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_option_value_is_reported() {
    filterer()
        .args(["in.ppm", "out.ppm", "1", "--threads", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn blur_image() {
    let dir = TempDir::new().unwrap();
    let (src_path, src_image) = write_source_image(&dir);
    let dst_path = dir.path().join("blur.ppm");

    run_filter(&src_path, &dst_path, "1")
        .success()
        .stdout(predicate::str::contains("Execution time without parallelism:"))
        .stdout(predicate::str::contains("Execution time with parallelism:"))
        .stdout(predicate::str::is_match(r"Speedup: \d+\.\d{2}x").unwrap())
        .stdout(predicate::str::is_match(r"Number of threads used: \d+").unwrap());

    let dst_image = pnm::read_file(&dst_path).unwrap();
    assert_eq!(dst_image, apply(&src_image, FilterType::Average, false));
}

#[test]
fn detect_edges() {
    let dir = TempDir::new().unwrap();
    let (src_path, src_image) = write_source_image(&dir);
    let dst_path = dir.path().join("edges.ppm");

    filterer()
        .arg(&src_path)
        .arg(&dst_path)
        .arg("2")
        .args(["--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of threads used: 2"));

    let dst_image = pnm::read_file(&dst_path).unwrap();
    assert_eq!(dst_image, apply(&src_image, FilterType::Sobel, false));
}

#[test]
fn unknown_filter_type_leaves_image_unchanged() {
    let dir = TempDir::new().unwrap();
    let (src_path, src_image) = write_source_image(&dir);

    for (i, filter_type) in ["3", "0", "-1", "sharpen"].into_iter().enumerate() {
        let dst_path = dir.path().join(format!("same-{i}.ppm"));
        run_filter(&src_path, &dst_path, filter_type).success();
        let dst_image = pnm::read_file(&dst_path).unwrap();
        assert_eq!(dst_image, src_image, "filter type {filter_type:?}");
    }
}

#[test]
fn invalid_magic_is_fatal() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("source.ppm");
    std::fs::write(&src_path, b"P3\n1 1\n255\n0 0 0\n").unwrap();
    let dst_path = dir.path().join("result.ppm");

    run_filter(&src_path, &dst_path, "1")
        .code(1)
        .stderr(predicate::str::contains("Failed to read source image"));
    assert!(!dst_path.exists());
}

#[test]
fn unsupported_max_value_is_fatal() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("source.ppm");
    std::fs::write(&src_path, b"P6\n1 1\n1023\n\0\0\0\0\0\0").unwrap();
    let dst_path = dir.path().join("result.ppm");

    run_filter(&src_path, &dst_path, "2").code(1);
    assert!(!dst_path.exists());
}

#[test]
fn truncated_image_is_fatal() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("source.ppm");
    std::fs::write(&src_path, b"P6\n4 4\n255\n\0\0\0").unwrap();
    let dst_path = dir.path().join("result.ppm");

    run_filter(&src_path, &dst_path, "1")
        .code(1)
        .stderr(predicate::str::contains("truncated"));
    assert!(!dst_path.exists());
}

#[test]
fn missing_source_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("missing.ppm");
    let dst_path = dir.path().join("result.ppm");

    run_filter(&src_path, &dst_path, "1").code(1);
    assert!(!dst_path.exists());
}

#[test]
fn unwritable_destination_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (src_path, _) = write_source_image(&dir);
    let dst_path = dir.path().join("no-such-dir").join("result.ppm");

    run_filter(&src_path, &dst_path, "1")
        .code(1)
        .stderr(predicate::str::contains("Failed to write result image"));
}
