use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;

fn write_sketch(dir: &std::path::Path) -> std::path::PathBuf {
    // 100x100: red top strip on white.
    let mut img = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
    for row in 0..40 {
        for col in 0..100 {
            img.put_pixel(col, row, Rgb([255, 0, 0]));
        }
    }
    let path = dir.join("sketch.png");
    img.save(&path).expect("save sketch");
    path
}

#[test]
fn grid_output_prints_a_gridspec_script() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sketch = write_sketch(dir.path());

    Command::cargo_bin("sketchplan")
        .expect("binary")
        .arg(&sketch)
        .args(["--fixed-grid", "--ngrid-h", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grid = plt.GridSpec(10, 10)"))
        .stdout(predicate::str::contains("plt.subplot(grid["))
        .stdout(predicate::str::contains("# #ff0000"));
}

#[test]
fn json_output_reports_plan_and_grid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sketch = write_sketch(dir.path());

    Command::cargo_bin("sketchplan")
        .expect("binary")
        .arg(&sketch)
        .arg("--output")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aspect_ratio\""))
        .stdout(predicate::str::contains("\"cells\""));
}

#[test]
fn missing_file_fails_with_the_path_in_the_message() {
    Command::cargo_bin("sketchplan")
        .expect("binary")
        .arg("definitely-missing.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely-missing.png"));
}
