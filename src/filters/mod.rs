//! The five image filters.
//!
//! ## Supported Formats
//!
//! All filters accept images in any [`ColorMode`](crate::buffer::ColorMode):
//!
//! | Mode | Shape | Description |
//! |------|-------|-------------|
//! | L    | (H, W, 1) | Single luminance channel, 0-255 |
//! | RGB  | (H, W, 3) | Red, green, blue, 0-255 |
//! | RGBA | (H, W, 4) | RGB + alpha, 0-255 |
//!
//! ## Architecture
//!
//! Each filter has two layers:
//! - an array kernel (`*_u8`) on `ArrayView3<u8>` that knows nothing about modes
//! - an `apply_*` function on [`PixelBuffer`](crate::buffer::PixelBuffer) that
//!   picks the output mode
//!
//! Filters never mutate their input; every call returns a new buffer.
//!
//! | Filter | Output mode | Alpha |
//! |--------|-------------|-------|
//! | grayscale | L | dropped |
//! | blur | same | resampled, color premultiplied |
//! | edge_enhance | same | filtered |
//! | invert | same | preserved |
//! | sepia | RGB | dropped |

pub mod blur;
pub mod color_adjust;
pub mod color_science;
pub mod core;
pub mod edge;
pub mod grayscale;

pub use blur::{apply_blur, DEFAULT_BLUR_STRENGTH};
pub use color_adjust::apply_invert;
pub use color_science::apply_sepia;
pub use edge::apply_edge_enhance;
pub use grayscale::apply_grayscale;

/// Tunables passed to every filter through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Downsample factor used by the blur filter.
    pub blur_strength: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            blur_strength: DEFAULT_BLUR_STRENGTH,
        }
    }
}
