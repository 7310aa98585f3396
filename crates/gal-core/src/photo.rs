// ABOUTME: Photo metadata and aspect-ratio queries.
// ABOUTME: Validates raw catalog records into immutable photos.

use serde::{Deserialize, Serialize};

/// A photo record as it appears in the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub path: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub compressed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed_path: Option<String>,
    #[serde(default)]
    pub thumbnail: bool,
}

/// Which image a renderer should point at for a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Load the original file directly
    Original { path: &'a str },
    /// Show the placeholder, lazily swap in the compressed variant
    Lazy {
        placeholder: &'a str,
        compressed: &'a str,
        original: &'a str,
    },
}

/// One image with fixed intrinsic dimensions.
///
/// The aspect ratio is computed once on construction; a `Photo` can only be
/// built from positive, finite dimensions whose ratio is also positive and
/// finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    path: String,
    width: f64,
    height: f64,
    aspect_ratio: f64,
    compressed: bool,
    compressed_path: Option<String>,
    placeholder_path: Option<String>,
    thumbnail: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PhotoError {
    #[error("Photo {path:?} is missing its {field}")]
    MissingDimension { path: String, field: &'static str },

    #[error("Photo {path:?} has invalid dimensions {width}x{height}")]
    InvalidDimension { path: String, width: f64, height: f64 },
}

impl Photo {
    pub fn new(path: impl Into<String>, width: f64, height: f64) -> Result<Self, PhotoError> {
        let path = path.into();
        let aspect_ratio = width / height;
        // Extreme dimensions can still underflow or overflow the ratio
        let valid = width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height > 0.0
            && aspect_ratio.is_finite()
            && aspect_ratio > 0.0;
        if !valid {
            return Err(PhotoError::InvalidDimension {
                path,
                width,
                height,
            });
        }

        Ok(Self {
            path,
            width,
            height,
            aspect_ratio,
            compressed: false,
            compressed_path: None,
            placeholder_path: None,
            thumbnail: false,
        })
    }

    /// Validate a raw record from the catalog
    pub fn from_record(record: PhotoRecord) -> Result<Self, PhotoError> {
        let Some(width) = record.width else {
            return Err(PhotoError::MissingDimension {
                path: record.path,
                field: "width",
            });
        };
        let Some(height) = record.height else {
            return Err(PhotoError::MissingDimension {
                path: record.path,
                field: "height",
            });
        };

        let mut photo = Self::new(record.path, width, height)?;
        photo.compressed = record.compressed;
        photo.compressed_path = record.compressed_path;
        photo.placeholder_path = record.placeholder_path;
        photo.thumbnail = record.thumbnail;
        Ok(photo)
    }

    /// Mark the photo as having a compressed variant and a placeholder
    pub fn with_compressed(
        mut self,
        compressed_path: impl Into<String>,
        placeholder_path: impl Into<String>,
    ) -> Self {
        self.compressed = true;
        self.compressed_path = Some(compressed_path.into());
        self.placeholder_path = Some(placeholder_path.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: bool) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn is_thumbnail(&self) -> bool {
        self.thumbnail
    }

    pub fn compressed_path(&self) -> Option<&str> {
        self.compressed_path.as_deref()
    }

    pub fn placeholder_path(&self) -> Option<&str> {
        self.placeholder_path.as_deref()
    }

    /// Width of the photo when scaled to `height`
    pub fn width_for(&self, height: f64) -> f64 {
        height * self.aspect_ratio
    }

    /// Height of the photo when scaled to `width`
    pub fn height_for(&self, width: f64) -> f64 {
        width / self.aspect_ratio
    }

    /// Lazy loading needs both the compressed file and a placeholder;
    /// anything less falls back to the original.
    pub fn source(&self) -> ImageSource<'_> {
        match (self.compressed, &self.compressed_path, &self.placeholder_path) {
            (true, Some(compressed), Some(placeholder)) => ImageSource::Lazy {
                placeholder,
                compressed,
                original: &self.path,
            },
            _ => ImageSource::Original { path: &self.path },
        }
    }
}
