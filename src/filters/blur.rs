//! Downsample blur.
//!
//! A cheap blur without a convolution kernel: shrink the image by an integer
//! factor with bilinear interpolation, then blow it back up to the original
//! size with nearest-neighbor. The result looks like a soft mosaic whose block
//! size equals `strength`.
//!
//! All channels, alpha included, go through both resampling passes. RGBA is
//! premultiplied for the bilinear pass so transparent pixels add no color.

use ndarray::{Array3, ArrayView3};

use super::core::{premultiply_alpha_u8, resize_bilinear_u8, resize_nearest_u8, unpremultiply_alpha_u8};
use crate::buffer::PixelBuffer;
use crate::error::FilterError;

/// Default downsample factor.
pub const DEFAULT_BLUR_STRENGTH: u32 = 3;

/// Blur by downsampling `strength` times and upsampling back.
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
/// * `strength` - Downsample factor, 1..=min(width, height)
///
/// # Returns
/// Blurred image with the same shape, or `InvalidParameter` if the
/// intermediate image would be empty.
pub fn downsample_blur_u8(input: ArrayView3<u8>, strength: u32) -> Result<Array3<u8>, FilterError> {
    let (height, width, _) = input.dim();

    if strength == 0 {
        return Err(FilterError::InvalidParameter(
            "blur strength must be at least 1".to_string(),
        ));
    }

    let strength = strength as usize;
    let (small_width, small_height) = (width / strength, height / strength);
    if small_width == 0 || small_height == 0 {
        return Err(FilterError::InvalidParameter(format!(
            "blur strength {strength} is larger than the {width}x{height} image"
        )));
    }

    if strength == 1 {
        return Ok(input.to_owned());
    }

    let small = if input.dim().2 == 4 {
        let premultiplied = premultiply_alpha_u8(input);
        let mut small = resize_bilinear_u8(premultiplied.view(), small_width, small_height);
        unpremultiply_alpha_u8(&mut small);
        small
    } else {
        resize_bilinear_u8(input, small_width, small_height)
    };
    Ok(resize_nearest_u8(small.view(), width, height))
}

/// Blur any image, keeping its size and mode.
pub fn apply_blur(img: &PixelBuffer, strength: u32) -> Result<PixelBuffer, FilterError> {
    log::debug!(
        "blur {}x{} {} with strength {strength}",
        img.width(),
        img.height(),
        img.mode()
    );
    let data = downsample_blur_u8(img.view(), strength)?;
    Ok(PixelBuffer::from_parts(img.mode(), data))
}
