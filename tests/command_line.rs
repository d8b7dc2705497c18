use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

// --- テスト用ヘルパー関数 ---

fn run_resizer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_image_resizer"))
        .args(args)
        .output()
        .expect("バイナリの起動に失敗")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]))
        .save_with_format(path, ImageFormat::Png)
        .expect("テスト画像の保存に失敗");
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("一時パスは UTF-8 のはず")
}

#[test]
fn prints_saved_paths_and_exits_successfully() {
    let dir = tempdir().expect("Failed to create temp directory");
    let source = dir.path().join("source.png");
    write_png(&source, 400, 300);
    let out = dir.path().join("out");

    let output = run_resizer(&[
        "-file",
        path_str(&source),
        "-sizes",
        "120 200",
        "-output",
        path_str(&out),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("Image saved as {}", out.join("120.png").display()),
            format!("Image saved as {}", out.join("200.png").display()),
        ]
    );
}

#[test]
fn missing_sizes_prints_usage_and_exits_with_2() {
    let dir = tempdir().expect("Failed to create temp directory");
    let source = dir.path().join("source.png");
    write_png(&source, 8, 8);

    let output = run_resizer(&["-file", path_str(&source)]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Error: missing required flags. Use -file and -sizes.".to_string(),
            "Usage: image_resizer -file <image_path> -sizes <size1 size2 ...> -output <output_dir>"
                .to_string(),
        ]
    );
}

#[test]
fn invalid_dimension_exits_with_1_and_names_token() {
    let dir = tempdir().expect("Failed to create temp directory");
    let source = dir.path().join("source.png");
    write_png(&source, 40, 30);
    let out = dir.path().join("out");

    let output = run_resizer(&[
        "-file",
        path_str(&source),
        "-sizes",
        "120 -5 220",
        "-output",
        path_str(&out),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error: "));
    assert!(lines[0].contains("'-5'"));
    assert!(!out.exists());
}

#[test]
fn blocked_output_name_exits_with_3() {
    let dir = tempdir().expect("Failed to create temp directory");
    let source = dir.path().join("source.png");
    write_png(&source, 100, 50);
    let out = dir.path().join("out");
    fs::create_dir_all(out.join("60.png")).expect("Failed to create subdir");

    let output = run_resizer(&[
        "-file",
        path_str(&source),
        "-sizes",
        "20 60 80",
        "-output",
        path_str(&out),
    ]);

    assert_eq!(output.status.code(), Some(3));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        format!("Image saved as {}", out.join("20.png").display())
    );
    assert!(lines[1].starts_with("Error: error creating the output file"));
    assert_eq!(
        lines[2],
        format!("Image saved as {}", out.join("80.png").display())
    );
    assert_eq!(lines[3], "Error: 1 of 3 resized images could not be saved");
}
