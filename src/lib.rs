//! photofilter
//!
//! Load a raster image, apply one of five classic filters, save the result
//! next to the original name and preview it.
//!
//! ## Image Format
//! Images are held as `(height, width, channels)` u8 arrays:
//! - **L**: (height, width, 1) - single luminance channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! ## Filters
//! - `grayscale` - BT.601 luma, output L
//! - `blur` - bilinear downsample then nearest upsample
//! - `edge_enhance` - 3x3 sharpening kernel
//! - `invert` - 255 - v, alpha preserved
//! - `sepia` - sepia color matrix, output RGB
//!
//! ## Layers
//! [`filters`] holds the pure transforms, [`registry`] maps names to them,
//! [`io`] loads and saves files, [`session`] keeps the state of an
//! interactive run and [`shell`] provides the terminal front ends.

pub mod buffer;
pub mod config;
pub mod error;
pub mod filters;
pub mod io;
pub mod registry;
pub mod session;
pub mod shell;

pub use buffer::{ColorMode, PixelBuffer};
pub use config::Config;
pub use error::FilterError;
pub use filters::FilterOptions;
pub use registry::{FilterFn, FilterName, FilterRegistry};
pub use session::{process_file, FilteredResult, Session};
