// ABOUTME: In-memory photo catalog of named albums.
// ABOUTME: Loads the catalog JSON while keeping album and photo order.

use std::path::Path;

use serde_json::{Map, Value};

use crate::photo::{Photo, PhotoError, PhotoRecord};

/// A named, ordered sequence of photos
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub name: String,
    pub photos: Vec<Photo>,
}

impl Album {
    pub fn new(name: impl Into<String>, photos: Vec<Photo>) -> Self {
        Self {
            name: name.into(),
            photos,
        }
    }

    /// First photo flagged as thumbnail, else the first photo
    pub fn thumbnail(&self) -> Option<&Photo> {
        self.photos
            .iter()
            .find(|photo| photo.is_thumbnail())
            .or_else(|| self.photos.first())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoCatalog {
    albums: Vec<Album>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Album {album:?} is not a list of photo records")]
    NotAnAlbum { album: String },

    #[error("Album {album:?}, photo {index}: malformed record: {source}")]
    Record {
        album: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Album {album:?}, photo {index}: {source}")]
    Photo {
        album: String,
        index: usize,
        #[source]
        source: PhotoError,
    },
}

impl PhotoCatalog {
    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Parse a catalog from its JSON form: album name -> list of photo records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let data: Map<String, Value> = serde_json::from_str(json)?;

        let mut albums = Vec::with_capacity(data.len());
        for (name, value) in data {
            let Value::Array(entries) = value else {
                return Err(CatalogError::NotAnAlbum { album: name });
            };

            let mut photos = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                let record: PhotoRecord =
                    serde_json::from_value(entry).map_err(|source| CatalogError::Record {
                        album: name.clone(),
                        index,
                        source,
                    })?;
                let photo = Photo::from_record(record).map_err(|source| CatalogError::Photo {
                    album: name.clone(),
                    index,
                    source,
                })?;
                photos.push(photo);
            }
            albums.push(Album::new(name, photos));
        }

        Ok(Self { albums })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Album names in display order
    pub fn album_names(&self) -> Vec<&str> {
        self.albums.iter().map(|album| album.name.as_str()).collect()
    }

    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.name == name)
    }

    pub fn photos_in(&self, name: &str) -> Option<&[Photo]> {
        self.album(name).map(|album| album.photos.as_slice())
    }

    pub fn thumbnail_for(&self, name: &str) -> Option<&Photo> {
        self.album(name).and_then(Album::thumbnail)
    }
}
