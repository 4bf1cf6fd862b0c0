use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use photofilter::io::{load_image, save_image};
use photofilter::{process_file, ColorMode, Config, FilterError, FilterName, FilterRegistry, PixelBuffer};
use tempfile::{tempdir, TempDir};

fn config_for(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        preview: false,
        ..Default::default()
    }
}

fn write_source(dir: &TempDir, name: &str, img: &PixelBuffer) -> PathBuf {
    let path = dir.path().join(name);
    save_image(img, &path).unwrap();
    path
}

fn filtered_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("filtered_"))
        .collect();
    names.sort();
    names
}

#[test]
fn red_png_sepia_end_to_end() {
    let dir = tempdir().unwrap();
    let red = PixelBuffer::filled(4, 4, ColorMode::Rgb, &[255, 0, 0]).unwrap();
    let source = write_source(&dir, "red.png", &red);

    let result = process_file(&config_for(dir.path()), &FilterRegistry::new(), &source, "sepia").unwrap();

    assert_eq!(result.filter, FilterName::Sepia);
    assert_eq!(result.output_path, dir.path().join("filtered_sepia_red.png"));

    let saved = load_image(&result.output_path).unwrap();
    assert_eq!(saved.mode(), ColorMode::Rgb);
    assert_eq!((saved.width(), saved.height()), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(saved.pixel(x, y).to_vec(), vec![100, 89, 69]);
        }
    }
}

#[test]
fn every_filter_writes_its_own_file() {
    let dir = tempdir().unwrap();
    let img = PixelBuffer::from_fn(9, 6, ColorMode::Rgba, |x, y, c| (x * 25 + y * 13 + c * 7) as u8);
    let source = write_source(&dir, "scene.png", &img);
    let config = config_for(dir.path());
    let registry = FilterRegistry::new();

    for name in FilterName::ALL {
        process_file(&config, &registry, &source, name.as_str()).unwrap();
    }

    assert_eq!(
        filtered_files(dir.path()),
        vec![
            "filtered_blur_scene.png",
            "filtered_edge_enhance_scene.png",
            "filtered_grayscale_scene.png",
            "filtered_invert_scene.png",
            "filtered_sepia_scene.png",
        ]
    );
}

#[test]
fn rgba_invert_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let img = PixelBuffer::from_fn(5, 5, ColorMode::Rgba, |x, y, c| {
        if c == 3 {
            (x * 50 + y) as u8
        } else {
            (x * 31 + y * 17 + c * 60) as u8
        }
    });
    let source = write_source(&dir, "glass.png", &img);

    let result = process_file(&config_for(dir.path()), &FilterRegistry::new(), &source, "invert").unwrap();
    let saved = load_image(&result.output_path).unwrap();

    assert_eq!(saved.mode(), ColorMode::Rgba);
    for y in 0..5 {
        for x in 0..5 {
            let (src, dst) = (img.pixel(x, y), saved.pixel(x, y));
            assert_eq!(dst[3], src[3]);
            for c in 0..3 {
                assert_eq!(dst[c], 255 - src[c]);
            }
        }
    }
}

#[test]
fn grayscale_of_neutral_gray_bmp() {
    let dir = tempdir().unwrap();
    let gray = PixelBuffer::filled(3, 3, ColorMode::Rgb, &[137, 137, 137]).unwrap();
    let source = write_source(&dir, "gray.bmp", &gray);

    let result = process_file(&config_for(dir.path()), &FilterRegistry::new(), &source, "grayscale").unwrap();

    assert_eq!(result.image.mode(), ColorMode::L);
    let luma = result.image.pixel(1, 1)[0] as f64;
    assert_abs_diff_eq!(luma, 137.0, epsilon = 1.0);
    assert!(dir.path().join("filtered_grayscale_gray.bmp").exists());
}

#[test]
fn jpeg_source_keeps_jpeg_container() {
    let dir = tempdir().unwrap();
    let img = PixelBuffer::from_fn(16, 16, ColorMode::Rgb, |x, y, c| (x * 15 + y * 3 + c * 40) as u8);
    let source = write_source(&dir, "photo.jpg", &img);

    let result = process_file(&config_for(dir.path()), &FilterRegistry::new(), &source, "blur").unwrap();

    let bytes = fs::read(&result.output_path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
}

#[test]
fn unknown_filter_writes_no_file() {
    let dir = tempdir().unwrap();
    let img = PixelBuffer::new(4, 4, ColorMode::Rgb);
    let source = write_source(&dir, "plain.png", &img);

    let err = process_file(&config_for(dir.path()), &FilterRegistry::new(), &source, "cartoon").unwrap_err();

    assert!(matches!(err, FilterError::InvalidFilterName(ref n) if n == "cartoon"));
    assert!(filtered_files(dir.path()).is_empty());
}

#[test]
fn oversized_blur_writes_no_file() {
    let dir = tempdir().unwrap();
    let img = PixelBuffer::new(4, 2, ColorMode::Rgb);
    let source = write_source(&dir, "strip.png", &img);
    let config = Config {
        blur_strength: 3,
        ..config_for(dir.path())
    };

    let err = process_file(&config, &FilterRegistry::new(), &source, "blur").unwrap_err();

    assert!(matches!(err, FilterError::InvalidParameter(_)));
    assert!(filtered_files(dir.path()).is_empty());
}

#[test]
fn missing_source_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("ghost.png");

    let err = process_file(&config_for(dir.path()), &FilterRegistry::new(), &missing, "invert").unwrap_err();

    assert!(matches!(err, FilterError::FileNotFound(_)));
    assert!(err.to_string().contains("ghost.png"));
}
