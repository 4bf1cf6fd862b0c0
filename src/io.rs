//! Loading, naming, saving and previewing images.
//!
//! - `load_image`: read a file and decode it into a [`PixelBuffer`].
//! - `output_path`: derive `filtered_<filter>_<basename>` inside a directory.
//! - `save_image`: encode fully in memory, then write the file.
//! - `preview`: open a saved file in the system viewer.

use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat};

use crate::buffer::{ColorMode, PixelBuffer};
use crate::error::FilterError;
use crate::registry::FilterName;

/// Read and decode an image, sniffing the format from its content.
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer, FilterError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FilterError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| FilterError::Unreadable(path.to_path_buf(), e))?;
    let format = image::guess_format(&bytes)
        .map_err(|_| FilterError::UnsupportedFormat(path.display().to_string()))?;

    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|e| match e {
        ImageError::Unsupported(_) => {
            FilterError::UnsupportedFormat(format!("{} ({format:?})", path.display()))
        }
        other => FilterError::Decode(path.to_path_buf(), other),
    })?;

    let img = PixelBuffer::from_dynamic(decoded)?;
    log::info!(
        "loaded {} ({}x{} {})",
        path.display(),
        img.width(),
        img.height(),
        img.mode()
    );
    Ok(img)
}

/// Output file for `source` filtered with `filter`, placed in `output_dir`.
pub fn output_path(
    output_dir: impl AsRef<Path>,
    filter: FilterName,
    source: impl AsRef<Path>,
) -> Result<PathBuf, FilterError> {
    let source = source.as_ref();
    let basename = source
        .file_name()
        .ok_or_else(|| FilterError::FileNotFound(source.to_path_buf()))?;

    let mut name = OsString::from(format!("filtered_{filter}_"));
    name.push(basename);
    Ok(output_dir.as_ref().join(name))
}

/// Encode `img` in the format implied by the extension of `path`, then write it.
///
/// Nothing is written if encoding fails. JPEG cannot hold alpha, so RGBA
/// images are flattened to RGB for it.
pub fn save_image(img: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), FilterError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| FilterError::UnsupportedFormat(path.display().to_string()))?;

    let mut dynamic = img.to_dynamic()?;
    if format == ImageFormat::Jpeg && img.mode() == ColorMode::Rgba {
        log::warn!("{} cannot store alpha, saving RGB only", path.display());
        dynamic = image::DynamicImage::ImageRgb8(dynamic.to_rgb8());
    }

    let mut encoded = Cursor::new(Vec::new());
    dynamic.write_to(&mut encoded, format).map_err(|e| match e {
        ImageError::Unsupported(_) => FilterError::UnsupportedFormat(format!(
            "cannot write {} as {format:?}",
            img.mode()
        )),
        other => FilterError::Encode(path.to_path_buf(), other),
    })?;

    fs::write(path, encoded.into_inner()).map_err(|e| FilterError::Write(path.to_path_buf(), e))?;
    log::info!("saved {}", path.display());
    Ok(())
}

/// Open `path` with the platform's default image viewer.
///
/// The viewer is detached; this returns without waiting for it.
pub fn preview(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("nothing to preview at {}", path.display()),
        ));
    }
    log::debug!("opening preview for {}", path.display());
    open::that_detached(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_naming() {
        let path = output_path("out", FilterName::EdgeEnhance, "/photos/cat.png").unwrap();
        assert_eq!(path, PathBuf::from("out").join("filtered_edge_enhance_cat.png"));
    }

    #[test]
    fn test_output_path_without_file_name() {
        assert!(output_path(".", FilterName::Blur, "/").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        assert!(matches!(
            load_image(&missing),
            Err(FilterError::FileNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn test_load_garbage_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, b"definitely not an image").unwrap();

        assert!(matches!(
            load_image(&path),
            Err(FilterError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pixels.png");
        let img = PixelBuffer::from_fn(5, 3, ColorMode::Rgba, |x, y, c| (x * 40 + y * 9 + c) as u8);

        save_image(&img, &path).unwrap();
        let back = load_image(&path).unwrap();

        assert_eq!(back, img);
    }

    #[test]
    fn test_save_rgba_as_jpeg_flattens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        let img = PixelBuffer::filled(8, 8, ColorMode::Rgba, &[200, 100, 50, 128]).unwrap();

        save_image(&img, &path).unwrap();
        let back = load_image(&path).unwrap();

        assert_eq!(back.mode(), ColorMode::Rgb);
        assert_eq!((back.width(), back.height()), (8, 8));
    }

    #[test]
    fn test_save_unknown_extension_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.xyz");
        let img = PixelBuffer::new(2, 2, ColorMode::Rgb);

        assert!(matches!(
            save_image(&img, &path),
            Err(FilterError::UnsupportedFormat(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_preview_missing_file_launches_nothing() {
        let dir = tempdir().unwrap();

        let err = preview(dir.path().join("gone.png")).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
