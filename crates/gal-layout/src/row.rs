// ABOUTME: Rows produced by the layout engine.
// ABOUTME: Each row holds photos at one shared height plus render placements.

use gal_core::{ImageSource, Photo};

/// A photo scaled to its final size within a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowItem<'a> {
    pub photo: &'a Photo,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Scaled so photos plus spacing fill the container exactly
    Full,
    /// Last row of an album, left at its natural height
    Trailing,
}

/// What a renderer needs to draw one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub source: ImageSource<'a>,
    pub width: f64,
    pub height: f64,
    /// Gap to the previous image; zero for the first image in a row
    pub margin_left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    items: Vec<RowItem<'a>>,
    height: f64,
    kind: RowKind,
}

impl<'a> Row<'a> {
    pub(crate) fn new(photos: &[&'a Photo], height: f64, kind: RowKind) -> Self {
        let items = photos
            .iter()
            .map(|&photo| RowItem {
                photo,
                width: photo.width_for(height),
                height,
            })
            .collect();

        Self {
            items,
            height,
            kind,
        }
    }

    pub fn items(&self) -> &[RowItem<'a>] {
        &self.items
    }

    /// Render height shared by every photo in the row
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn is_trailing(&self) -> bool {
        self.kind == RowKind::Trailing
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn photos(&self) -> impl Iterator<Item = &'a Photo> + '_ {
        self.items.iter().map(|item| item.photo)
    }

    /// Rendered width of all photos plus the gaps between them
    pub fn total_width(&self, spacing: f64) -> f64 {
        let gaps = self.items.len().saturating_sub(1) as f64 * spacing;
        self.items.iter().map(|item| item.width).sum::<f64>() + gaps
    }

    pub fn placements(&self, spacing: f64) -> impl Iterator<Item = Placement<'a>> + '_ {
        self.items.iter().enumerate().map(move |(i, item)| Placement {
            source: item.photo.source(),
            width: item.width,
            height: item.height,
            margin_left: if i == 0 { 0.0 } else { spacing },
        })
    }
}
