// ABOUTME: Shared types and configuration for justified-gallery.
// ABOUTME: Defines photos, albums, the catalog, and layout settings.

pub mod catalog;
pub mod config;
pub mod photo;

pub use catalog::{Album, CatalogError, PhotoCatalog};
pub use config::{Config, ConfigError, LayoutConfig, LayoutKind, LayoutOptions};
pub use photo::{ImageSource, Photo, PhotoError, PhotoRecord};
