//! Core utilities shared by the spatial filters.
//!
//! This module provides:
//! - Bilinear (triangle kernel) resampling with area-aware support
//! - Nearest-neighbor resampling
//! - Alpha premultiplication for RGBA resampling
//! - 3x3 kernel convolution with copied borders
//!
//! All helpers operate on `(height, width, channels)` u8 arrays and work for
//! any channel count.

use ndarray::{Array3, ArrayView3, Axis};

/// Support radius of the triangle (bilinear) kernel at scale 1.
const BILINEAR_SUPPORT: f64 = 1.0;

fn triangle(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        1.0 - x
    } else {
        0.0
    }
}

/// Normalized contribution weights of the input pixels for one output pixel.
struct Contribution {
    start: usize,
    weights: Vec<f64>,
}

/// Precompute the bilinear weights for resampling one axis from `in_size`
/// to `out_size` samples.
///
/// Sample centers sit at `(i + 0.5) * scale`. When shrinking, the kernel is
/// stretched by the scale factor so every input pixel contributes.
fn bilinear_contributions(in_size: usize, out_size: usize) -> Vec<Contribution> {
    let scale = in_size as f64 / out_size as f64;
    let filter_scale = scale.max(1.0);
    let support = BILINEAR_SUPPORT * filter_scale;
    let inv_filter_scale = 1.0 / filter_scale;

    (0..out_size)
        .map(|i| {
            let center = (i as f64 + 0.5) * scale;
            // Truncation towards zero is intentional here
            let start = ((center - support + 0.5) as isize).max(0) as usize;
            let end = ((center + support + 0.5) as isize).min(in_size as isize) as usize;

            let mut weights: Vec<f64> = (start..end)
                .map(|x| triangle((x as f64 - center + 0.5) * inv_filter_scale))
                .collect();
            let total: f64 = weights.iter().sum();
            if total != 0.0 {
                for w in weights.iter_mut() {
                    *w /= total;
                }
            }

            Contribution { start, weights }
        })
        .collect()
}

fn round_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Resize with bilinear interpolation.
///
/// Runs a horizontal pass then a vertical pass, rounding to u8 in between.
/// A pass is skipped when its axis keeps its size.
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
/// * `out_width` - Target width, must be > 0
/// * `out_height` - Target height, must be > 0
///
/// # Returns
/// Resized image with the same channel count
pub fn resize_bilinear_u8(input: ArrayView3<u8>, out_width: usize, out_height: usize) -> Array3<u8> {
    let (height, width, channels) = input.dim();

    let horizontal = if out_width != width {
        let contribs = bilinear_contributions(width, out_width);
        let mut temp = Array3::<u8>::zeros((height, out_width, channels));
        for y in 0..height {
            for (x, contrib) in contribs.iter().enumerate() {
                for c in 0..channels {
                    let sum: f64 = contrib
                        .weights
                        .iter()
                        .enumerate()
                        .map(|(k, &w)| input[[y, contrib.start + k, c]] as f64 * w)
                        .sum();
                    temp[[y, x, c]] = round_u8(sum);
                }
            }
        }
        temp
    } else {
        input.to_owned()
    };

    if out_height == height {
        return horizontal;
    }

    let contribs = bilinear_contributions(height, out_height);
    let mut output = Array3::<u8>::zeros((out_height, out_width, channels));
    for (y, contrib) in contribs.iter().enumerate() {
        for x in 0..out_width {
            for c in 0..channels {
                let sum: f64 = contrib
                    .weights
                    .iter()
                    .enumerate()
                    .map(|(k, &w)| horizontal[[contrib.start + k, x, c]] as f64 * w)
                    .sum();
                output[[y, x, c]] = round_u8(sum);
            }
        }
    }
    output
}

/// Multiply the color channels of an RGBA image by its alpha.
///
/// `v * a / 255`, rounded. Transparent pixels become (0, 0, 0, 0).
pub fn premultiply_alpha_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let mut output = input.to_owned();
    for mut pixel in output.lanes_mut(Axis(2)) {
        let alpha = pixel[3] as u32;
        for c in 0..3 {
            pixel[c] = ((pixel[c] as u32 * alpha + 127) / 255) as u8;
        }
    }
    output
}

/// Undo [`premultiply_alpha_u8`] in place.
///
/// `v * 255 / a`, rounded and clamped. Color is 0 where alpha is 0.
pub fn unpremultiply_alpha_u8(image: &mut Array3<u8>) {
    for mut pixel in image.lanes_mut(Axis(2)) {
        let alpha = pixel[3] as u32;
        for c in 0..3 {
            pixel[c] = if alpha == 0 {
                0
            } else {
                ((pixel[c] as u32 * 255 + alpha / 2) / alpha).min(255) as u8
            };
        }
    }
}

/// Resize with nearest-neighbor interpolation.
///
/// Output pixel `x` samples input `floor((x + 0.5) * in / out)`, clamped to
/// the last column (same for rows).
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels), non-empty
/// * `out_width` - Target width
/// * `out_height` - Target height
///
/// # Returns
/// Resized image with the same channel count
pub fn resize_nearest_u8(input: ArrayView3<u8>, out_width: usize, out_height: usize) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    if out_width == width && out_height == height {
        return input.to_owned();
    }

    let scale_x = width as f64 / out_width as f64;
    let scale_y = height as f64 / out_height as f64;

    let src_x: Vec<usize> = (0..out_width)
        .map(|x| (((x as f64 + 0.5) * scale_x).floor() as usize).min(width - 1))
        .collect();

    let mut output = Array3::<u8>::zeros((out_height, out_width, channels));
    for y in 0..out_height {
        let sy = (((y as f64 + 0.5) * scale_y).floor() as usize).min(height - 1);
        for (x, &sx) in src_x.iter().enumerate() {
            for c in 0..channels {
                output[[y, x, c]] = input[[sy, sx, c]];
            }
        }
    }
    output
}

/// Convolve the first `color_channels` channels with a 3x3 kernel.
///
/// The kernel is divided by `divisor`, results are rounded and clamped to
/// 0-255. The outermost rows and columns are copied from the input, as are
/// channels at index `color_channels` and above (alpha).
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
/// * `kernel` - Row-major 3x3 kernel weights
/// * `divisor` - Normalization applied to the weighted sum
/// * `color_channels` - Number of leading channels to convolve
pub fn convolve_3x3_u8(
    input: ArrayView3<u8>,
    kernel: &[[i32; 3]; 3],
    divisor: i32,
    color_channels: usize,
) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    debug_assert!(color_channels <= channels);
    let mut output = input.to_owned();
    let divisor = divisor as f32;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            for c in 0..color_channels {
                let mut sum = 0i32;
                for (ky, row) in kernel.iter().enumerate() {
                    for (kx, &k) in row.iter().enumerate() {
                        sum += input[[y + ky - 1, x + kx - 1, c]] as i32 * k;
                    }
                }
                output[[y, x, c]] = (sum as f32 / divisor).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    output
}
