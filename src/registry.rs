//! Name to filter dispatch.
//!
//! The set of filters is closed: [`FilterName`] enumerates them and
//! [`FilterRegistry`] maps each one to a plain function pointer. Unknown names
//! are reported as [`FilterError::InvalidFilterName`].

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::{
    apply_blur, apply_edge_enhance, apply_grayscale, apply_invert, apply_sepia, FilterOptions,
};

/// Signature shared by every registered filter.
pub type FilterFn = fn(&PixelBuffer, &FilterOptions) -> Result<PixelBuffer, FilterError>;

/// One of the five available filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterName {
    Grayscale,
    Blur,
    EdgeEnhance,
    Invert,
    Sepia,
}

impl FilterName {
    /// All filters in menu order.
    pub const ALL: [FilterName; 5] = [
        FilterName::Grayscale,
        FilterName::Blur,
        FilterName::EdgeEnhance,
        FilterName::Invert,
        FilterName::Sepia,
    ];

    /// Canonical name, also used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::Grayscale => "grayscale",
            FilterName::Blur => "blur",
            FilterName::EdgeEnhance => "edge_enhance",
            FilterName::Invert => "invert",
            FilterName::Sepia => "sepia",
        }
    }

    /// Human readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            FilterName::Grayscale => "Grayscale",
            FilterName::Blur => "Blur",
            FilterName::EdgeEnhance => "Edge Enhance",
            FilterName::Invert => "Invert",
            FilterName::Sepia => "Sepia",
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = FilterError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FilterName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| FilterError::InvalidFilterName(s.trim().to_string()))
    }
}

fn grayscale(img: &PixelBuffer, _: &FilterOptions) -> Result<PixelBuffer, FilterError> {
    Ok(apply_grayscale(img))
}

fn blur(img: &PixelBuffer, options: &FilterOptions) -> Result<PixelBuffer, FilterError> {
    apply_blur(img, options.blur_strength)
}

fn edge_enhance(img: &PixelBuffer, _: &FilterOptions) -> Result<PixelBuffer, FilterError> {
    Ok(apply_edge_enhance(img))
}

fn invert(img: &PixelBuffer, _: &FilterOptions) -> Result<PixelBuffer, FilterError> {
    Ok(apply_invert(img))
}

fn sepia(img: &PixelBuffer, _: &FilterOptions) -> Result<PixelBuffer, FilterError> {
    Ok(apply_sepia(img))
}

/// Immutable table of the available filters.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    entries: [(FilterName, FilterFn); 5],
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            entries: [
                (FilterName::Grayscale, grayscale as FilterFn),
                (FilterName::Blur, blur as FilterFn),
                (FilterName::EdgeEnhance, edge_enhance as FilterFn),
                (FilterName::Invert, invert as FilterFn),
                (FilterName::Sepia, sepia as FilterFn),
            ],
        }
    }

    /// Registered names in menu order.
    pub fn names(&self) -> impl Iterator<Item = FilterName> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: FilterName) -> FilterFn {
        // Entries are stored in declaration order of FilterName
        let (registered, filter) = self.entries[name as usize];
        debug_assert_eq!(registered, name);
        filter
    }

    /// Find a filter by its name.
    pub fn lookup(&self, name: &str) -> Result<(FilterName, FilterFn), FilterError> {
        let name: FilterName = name.parse()?;
        Ok((name, self.get(name)))
    }

    /// Look up `name` and run it on `img`.
    pub fn apply(
        &self,
        name: &str,
        img: &PixelBuffer,
        options: &FilterOptions,
    ) -> Result<PixelBuffer, FilterError> {
        let (name, filter) = self.lookup(name)?;
        log::debug!("applying {name} to {}x{} {}", img.width(), img.height(), img.mode());
        filter(img, options)
    }
}
