//! Sepia tone.
//!
//! Applies the classic sepia color matrix to every pixel:
//!
//! ```text
//! R' = 0.393 R + 0.769 G + 0.189 B
//! G' = 0.349 R + 0.686 G + 0.168 B
//! B' = 0.272 R + 0.534 G + 0.131 B
//! ```
//!
//! Results are rounded to nearest and clamped to 255. All coefficients are
//! non-negative, so no lower clamp is needed.
//!
//! Output is always RGB. Grayscale input is read as (v, v, v); RGBA input
//! loses its alpha channel.

use ndarray::{Array3, ArrayView3, Axis};
use rayon::prelude::*;

use crate::buffer::{ColorMode, PixelBuffer};

const SR: [f32; 3] = [0.393, 0.769, 0.189];
const SG: [f32; 3] = [0.349, 0.686, 0.168];
const SB: [f32; 3] = [0.272, 0.534, 0.131];

#[inline]
fn sepia_channel(weights: &[f32; 3], r: f32, g: f32, b: f32) -> u8 {
    (weights[0] * r + weights[1] * g + weights[2] * b)
        .round()
        .min(255.0) as u8
}

/// Sepia tone of a single RGB triple.
#[inline]
pub fn sepia_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    [
        sepia_channel(&SR, r, g, b),
        sepia_channel(&SG, r, g, b),
        sepia_channel(&SB, r, g, b),
    ]
}

/// Apply the sepia matrix (u8 version).
///
/// Rows are independent, so they are mapped in parallel.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// RGB array of shape (height, width, 3)
pub fn sepia_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(input.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(mut out_row, in_row)| {
            for x in 0..width {
                let (r, g, b) = if channels == 1 {
                    let v = in_row[[x, 0]];
                    (v, v, v)
                } else {
                    (in_row[[x, 0]], in_row[[x, 1]], in_row[[x, 2]])
                };
                let [tr, tg, tb] = sepia_pixel(r, g, b);
                out_row[[x, 0]] = tr;
                out_row[[x, 1]] = tg;
                out_row[[x, 2]] = tb;
            }
        });

    output
}

/// Tone an image sepia.
///
/// The result is always RGB. For RGBA input the alpha channel is dropped
/// before toning; this is lossy and cannot be undone.
pub fn apply_sepia(img: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_parts(ColorMode::Rgb, sepia_u8(img.view()))
}
