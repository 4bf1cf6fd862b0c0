//! Runtime settings shared by every interaction mode.

use std::path::PathBuf;

use crate::error::FilterError;
use crate::filters::{FilterOptions, DEFAULT_BLUR_STRENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory receiving `filtered_<name>_<file>` outputs.
    pub output_dir: PathBuf,
    /// Downsample factor for the blur filter.
    pub blur_strength: u32,
    /// Open each saved result in the system image viewer.
    pub preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            blur_strength: DEFAULT_BLUR_STRENGTH,
            preview: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.blur_strength == 0 {
            return Err(FilterError::InvalidParameter(
                "blur strength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            blur_strength: self.blur_strength,
        }
    }
}
