//! Application state for the interactive surfaces.
//!
//! A [`Session`] owns the currently opened image and the last status line.
//! Handlers take `&mut Session` instead of reaching for globals.

use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::config::Config;
use crate::error::FilterError;
use crate::io::{load_image, output_path, preview, save_image};
use crate::registry::{FilterName, FilterRegistry};

/// Output of one filter run, already written to `output_path`.
#[derive(Debug, Clone)]
pub struct FilteredResult {
    pub image: PixelBuffer,
    pub filter: FilterName,
    pub output_path: PathBuf,
}

/// Load an image, filter it and save the result.
///
/// The filter name is checked before the image is decoded, and no file is
/// written unless filtering and encoding both succeed.
pub fn process_file(
    config: &Config,
    registry: &FilterRegistry,
    source: impl AsRef<Path>,
    filter_name: &str,
) -> Result<FilteredResult, FilterError> {
    let (filter, _) = registry.lookup(filter_name)?;
    let image = load_image(source.as_ref())?;
    filter_loaded(config, registry, source.as_ref(), &image, filter)
}

fn filter_loaded(
    config: &Config,
    registry: &FilterRegistry,
    source: &Path,
    image: &PixelBuffer,
    filter: FilterName,
) -> Result<FilteredResult, FilterError> {
    let filtered = registry.get(filter)(image, &config.filter_options())?;
    let output_path = output_path(&config.output_dir, filter, source)?;
    save_image(&filtered, &output_path)?;

    if config.preview {
        if let Err(e) = preview(&output_path) {
            log::warn!("could not open preview for {}: {e}", output_path.display());
        }
    }

    Ok(FilteredResult {
        image: filtered,
        filter,
        output_path,
    })
}

pub struct Session {
    config: Config,
    registry: FilterRegistry,
    image_path: Option<PathBuf>,
    original: Option<PixelBuffer>,
    status: String,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: FilterRegistry::new(),
            image_path: None,
            original: None,
            status: "No image loaded".to_string(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Last status line shown to the user.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    /// Load `path`, replacing any previously opened image.
    ///
    /// On failure the previous image stays open.
    pub fn open_image(&mut self, path: impl AsRef<Path>) -> Result<&PixelBuffer, FilterError> {
        let path = path.as_ref();
        let image = load_image(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.status = format!("Loaded: {name}");
        self.image_path = Some(path.to_path_buf());
        Ok(self.original.insert(image))
    }

    /// Filter the opened image and save the result.
    ///
    /// The opened image is left untouched, so several filters can be applied
    /// to the same original one after another.
    pub fn apply_filter(&mut self, filter_name: &str) -> Result<FilteredResult, FilterError> {
        let (filter, _) = self.registry.lookup(filter_name)?;
        let (Some(path), Some(image)) = (self.image_path.as_deref(), self.original.as_ref()) else {
            return Err(FilterError::NoImageLoaded);
        };

        let result = filter_loaded(&self.config, &self.registry, path, image, filter)?;
        self.status = format!("Saved as: {}", result.output_path.display());
        Ok(result)
    }
}
