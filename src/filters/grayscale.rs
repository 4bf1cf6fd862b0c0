//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma coefficients (0.299, 0.587, 0.114) in 16-bit fixed
//! point, rounded to nearest. The weights sum to exactly 65536, so a neutral
//! gray pixel (k, k, k) converts to k.
//!
//! Output is always single-channel (mode L). Alpha is discarded.

use ndarray::{Array3, ArrayView3};

use crate::buffer::{ColorMode, PixelBuffer};

/// BT.601 luma coefficients scaled by 65536
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

/// Luma of one RGB triple.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((sum + 0x8000) >> 16).min(255) as u8
}

/// Convert an image with 1, 3 or 4 channels to single-channel luma.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// New array of shape (height, width, 1)
pub fn grayscale_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    if channels == 1 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, 1));
    for y in 0..height {
        for x in 0..width {
            output[[y, x, 0]] = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
        }
    }
    output
}

/// Convert any image to mode L.
pub fn apply_grayscale(img: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_parts(ColorMode::L, grayscale_u8(img.view()))
}
