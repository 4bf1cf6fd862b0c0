//! Edge enhancement filter.
//!
//! Sharpens an image by boosting each pixel against its 8 neighbors:
//!
//! ```text
//! -1 -1 -1
//! -1 10 -1   / 2
//! -1 -1 -1
//! ```
//!
//! The kernel sums to 1, so flat regions stay flat and only transitions get
//! stronger. This is an enhancement, not an edge detector: the output is a
//! full image with the same size and mode as the input.
//!
//! ## Supported Formats
//!
//! - **L**: the single channel is filtered
//! - **RGB**: each channel is filtered independently
//! - **RGBA**: all four channels filtered, alpha included
//!
//! The outermost rows and columns are copied from the input.

use ndarray::{Array3, ArrayView3};

use super::core::convolve_3x3_u8;
use crate::buffer::PixelBuffer;

const EDGE_ENHANCE_KERNEL: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 10, -1], [-1, -1, -1]];
const EDGE_ENHANCE_DIVISOR: i32 = 2;

/// Apply the edge enhancement kernel - u8 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Enhanced image with same channel count
pub fn edge_enhance_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let channels = input.dim().2;
    convolve_3x3_u8(input, &EDGE_ENHANCE_KERNEL, EDGE_ENHANCE_DIVISOR, channels)
}

pub fn apply_edge_enhance(img: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_parts(img.mode(), edge_enhance_u8(img.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ColorMode;

    #[test]
    fn test_edge_enhance_uniform_unchanged() {
        let img = PixelBuffer::filled(5, 5, ColorMode::Rgb, &[90, 140, 30]).unwrap();
        assert_eq!(apply_edge_enhance(&img), img);
    }

    #[test]
    fn test_edge_enhance_single_bright_pixel() {
        let mut data = Array3::<u8>::from_elem((5, 5, 1), 100);
        data[[2, 2, 0]] = 120;
        let img = PixelBuffer::from_array(data).unwrap();

        let result = apply_edge_enhance(&img);

        // Center: (10 * 120 - 8 * 100) / 2 = 200
        assert_eq!(result.pixel(2, 2)[0], 200);
        // Neighbor: (10 * 100 - 7 * 100 - 120) / 2 = 90
        assert_eq!(result.pixel(1, 2)[0], 90);
        assert_eq!(result.pixel(3, 3)[0], 90);
    }

    #[test]
    fn test_edge_enhance_steepens_step() {
        let img = PixelBuffer::from_fn(6, 3, ColorMode::L, |x, _, _| if x < 3 { 50 } else { 150 });

        let result = apply_edge_enhance(&img);

        // Dark side of the step gets darker, bright side brighter
        assert!(result.pixel(2, 1)[0] < 50);
        assert!(result.pixel(3, 1)[0] > 150);
        // Far from the step nothing changes
        assert_eq!(result.pixel(1, 1)[0], 50);
        assert_eq!(result.pixel(4, 1)[0], 150);
    }

    #[test]
    fn test_edge_enhance_sharpens_alpha() {
        let img = PixelBuffer::from_fn(3, 3, ColorMode::Rgba, |x, y, c| match (x, y, c) {
            (1, 1, 3) => 200,
            _ => 100,
        });

        let result = apply_edge_enhance(&img);

        assert_eq!(result.mode(), ColorMode::Rgba);
        // Color is flat and stays put; alpha: (10 * 200 - 8 * 100) / 2 = 600, clamped
        assert_eq!(result.pixel(1, 1).to_vec(), vec![100, 100, 100, 255]);
        // Border alpha is copied
        assert_eq!(result.pixel(0, 0)[3], 100);
    }

    #[test]
    fn test_edge_enhance_copies_border() {
        let img = PixelBuffer::from_fn(4, 4, ColorMode::L, |x, y, _| ((x * 7 + y * 50) % 256) as u8);

        let result = apply_edge_enhance(&img);

        for i in 0..4 {
            assert_eq!(result.pixel(i, 0), img.pixel(i, 0));
            assert_eq!(result.pixel(i, 3), img.pixel(i, 3));
            assert_eq!(result.pixel(0, i), img.pixel(0, i));
            assert_eq!(result.pixel(3, i), img.pixel(3, i));
        }
    }

    #[test]
    fn test_edge_enhance_tiny_image_is_copy() {
        let img = PixelBuffer::from_fn(2, 1, ColorMode::Rgb, |x, _, c| (x * 100 + c) as u8);
        assert_eq!(apply_edge_enhance(&img), img);
    }
}
