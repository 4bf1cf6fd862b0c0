//! In-memory pixel storage shared by all filters.
//!
//! A [`PixelBuffer`] is an `(height, width, channels)` array of `u8` plus the
//! [`ColorMode`] that explains how to read the channels:
//!
//! | Mode | Shape | Description |
//! |------|-------|-------------|
//! | L    | (H, W, 1) | Single luminance channel, 0-255 |
//! | RGB  | (H, W, 3) | Red, green, blue, 0-255 |
//! | RGBA | (H, W, 4) | RGB + alpha, 0-255 |
//!
//! Decoding and encoding are left to the `image` crate; this module only
//! converts between its `DynamicImage` and our array layout.

use std::fmt;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use ndarray::{s, Array3, ArrayView1, ArrayView3};

use crate::error::FilterError;

/// Channel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Single-channel luminance.
    L,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ColorMode {
    /// Number of channel values per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorMode::L => 1,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// Infer the mode from a channel count (1, 3 or 4).
    pub fn from_channels(channels: usize) -> Result<Self, FilterError> {
        match channels {
            1 => Ok(ColorMode::L),
            3 => Ok(ColorMode::Rgb),
            4 => Ok(ColorMode::Rgba),
            n => Err(FilterError::InvalidShape(format!(
                "expected 1, 3 or 4 channels, got {n}"
            ))),
        }
    }

    pub fn has_alpha(self) -> bool {
        self == ColorMode::Rgba
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::L => "L",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// Decoded raster image.
///
/// The channel count of the backing array always matches `mode`, which the
/// constructors enforce. Filters take `&PixelBuffer` and return a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    mode: ColorMode,
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: usize, height: usize, mode: ColorMode) -> Self {
        Self {
            mode,
            data: Array3::zeros((height, width, mode.channels())),
        }
    }

    /// Create a buffer where every pixel holds `pixel`.
    pub fn filled(
        width: usize,
        height: usize,
        mode: ColorMode,
        pixel: &[u8],
    ) -> Result<Self, FilterError> {
        if pixel.len() != mode.channels() {
            return Err(FilterError::InvalidShape(format!(
                "{mode} pixel needs {} values, got {}",
                mode.channels(),
                pixel.len()
            )));
        }
        Ok(Self::from_fn(width, height, mode, |_, _, c| pixel[c]))
    }

    /// Create a buffer by evaluating `f(x, y, channel)` for every value.
    pub fn from_fn<F>(width: usize, height: usize, mode: ColorMode, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> u8,
    {
        let data = Array3::from_shape_fn((height, width, mode.channels()), |(y, x, c)| f(x, y, c));
        Self { mode, data }
    }

    /// Wrap row-major interleaved pixel data.
    pub fn from_raw(
        width: usize,
        height: usize,
        mode: ColorMode,
        raw: Vec<u8>,
    ) -> Result<Self, FilterError> {
        let data = Array3::from_shape_vec((height, width, mode.channels()), raw)?;
        Ok(Self { mode, data })
    }

    /// Filters build their output arrays with the right channel count already.
    pub(crate) fn from_parts(mode: ColorMode, data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim().2, mode.channels());
        Self { mode, data }
    }

    /// Wrap an `(height, width, channels)` array, inferring the mode.
    pub fn from_array(data: Array3<u8>) -> Result<Self, FilterError> {
        let mode = ColorMode::from_channels(data.dim().2)?;
        Ok(Self { mode, data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Channel values of the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> ArrayView1<'_, u8> {
        self.data.slice(s![y, x, ..])
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Row-major interleaved copy of the pixel data.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Convert a decoded image into our layout.
    ///
    /// Gray+alpha is widened to RGBA so the alpha channel survives; deeper
    /// bit depths are reduced to 8 bits per channel.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, FilterError> {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let (mode, raw) = match img {
            DynamicImage::ImageLuma8(gray) => (ColorMode::L, gray.into_raw()),
            DynamicImage::ImageRgb8(rgb) => (ColorMode::Rgb, rgb.into_raw()),
            DynamicImage::ImageRgba8(rgba) => (ColorMode::Rgba, rgba.into_raw()),
            other if other.color().has_alpha() => (ColorMode::Rgba, other.into_rgba8().into_raw()),
            other if other.color().channel_count() == 1 => {
                (ColorMode::L, other.into_luma8().into_raw())
            }
            other => (ColorMode::Rgb, other.into_rgb8().into_raw()),
        };
        Self::from_raw(width, height, mode, raw)
    }

    /// Convert into an `image` crate buffer for encoding.
    pub fn to_dynamic(&self) -> Result<DynamicImage, FilterError> {
        let (width, height) = (self.width() as u32, self.height() as u32);
        let raw = self.to_raw();
        let shape_err = || {
            FilterError::InvalidShape(format!("{width}x{height} {} buffer", self.mode))
        };

        let img = match self.mode {
            ColorMode::L => {
                DynamicImage::ImageLuma8(GrayImage::from_raw(width, height, raw).ok_or_else(shape_err)?)
            }
            ColorMode::Rgb => {
                DynamicImage::ImageRgb8(RgbImage::from_raw(width, height, raw).ok_or_else(shape_err)?)
            }
            ColorMode::Rgba => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(width, height, raw).ok_or_else(shape_err)?,
            ),
        };
        Ok(img)
    }
}
