//! Color inversion.
//!
//! A pixel-wise operation that doesn't require spatial context.
//!
//! ## Supported Formats
//!
//! - **L**: (height, width, 1) - single luminance channel
//! - **RGB**: (height, width, 3) - red, green, blue
//! - **RGBA**: (height, width, 4) - red, green, blue, alpha
//!
//! Channel count is inferred from the input array dimensions.
//! Alpha channel (if present) is always preserved unchanged.

use ndarray::{s, Array3, ArrayView3};

use crate::buffer::PixelBuffer;

/// Invert image colors (u8 version).
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Color-inverted image (alpha preserved if present)
pub fn invert_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let channels = input.dim().2;
    let color_channels = if channels == 4 { 3 } else { channels };

    let mut output = input.to_owned();
    output.slice_mut(s![.., .., ..color_channels]).mapv_inplace(|v| 255 - v);
    output
}

/// Invert every color channel: v becomes 255 - v.
///
/// For RGBA the alpha channel is left byte-identical.
pub fn apply_invert(img: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_parts(img.mode(), invert_u8(img.view()))
}
