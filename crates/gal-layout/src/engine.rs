// ABOUTME: Greedy justified row packing.
// ABOUTME: Fills rows up to the container width, then rescales them to fit exactly.

use gal_core::{LayoutConfig, LayoutKind, Photo};

use crate::row::{Row, RowKind};

/// A trailing row wider than this share of its target width is shrunk
const TRAILING_FILL_THRESHOLD: f64 = 0.9;
/// Height factor applied to a nearly full trailing row
const TRAILING_SHRINK: f64 = 0.9;

/// Splits an ordered list of photos into rendered rows
pub trait LayoutStrategy {
    fn layout<'a>(&self, photos: &'a [Photo], config: &LayoutConfig) -> Vec<Row<'a>>;
}

/// Justified rows: every row except the last fills the container width.
#[derive(Debug, Clone, Copy, Default)]
pub struct JustifiedRows;

impl LayoutStrategy for JustifiedRows {
    fn layout<'a>(&self, photos: &'a [Photo], config: &LayoutConfig) -> Vec<Row<'a>> {
        let mut rows = Vec::new();
        let mut pending = PendingRow::new(config.spacing());

        for photo in photos {
            if !pending.admits_another(config) {
                rows.push(pending.take(config.spacing()).into_full(config));
            }

            pending.push(photo, config);

            if pending.width > config.container_width() {
                rows.push(pending.take(config.spacing()).into_full(config));
            }
        }

        if !pending.photos.is_empty() {
            rows.push(pending.into_trailing(config));
        }

        rows
    }
}

/// Pick the strategy named in the configuration
pub fn strategy_for(kind: LayoutKind) -> Box<dyn LayoutStrategy> {
    match kind {
        LayoutKind::Justified => Box::new(JustifiedRows),
    }
}

/// Lay out photos as justified rows
pub fn layout<'a>(photos: &'a [Photo], config: &LayoutConfig) -> Vec<Row<'a>> {
    JustifiedRows.layout(photos, config)
}

/// Row under construction, measured at the maximum row height
struct PendingRow<'a> {
    photos: Vec<&'a Photo>,
    /// Sum of photo widths plus one spacing per gap
    width: f64,
}

impl<'a> PendingRow<'a> {
    fn new(spacing: f64) -> Self {
        Self {
            photos: Vec::new(),
            width: -spacing,
        }
    }

    fn push(&mut self, photo: &'a Photo, config: &LayoutConfig) {
        self.width += photo.width_for(config.max_row_height()) + config.spacing();
        self.photos.push(photo);
    }

    /// Adding a photo must leave the gaps narrower than the container
    fn admits_another(&self, config: &LayoutConfig) -> bool {
        self.photos.is_empty() || self.photos.len() as f64 * config.spacing() < config.container_width()
    }

    fn take(&mut self, spacing: f64) -> Self {
        std::mem::replace(self, Self::new(spacing))
    }

    fn aspect_sum(&self, config: &LayoutConfig) -> f64 {
        self.photos
            .iter()
            .map(|photo| photo.width_for(config.max_row_height()))
            .sum()
    }

    fn target_width(&self, config: &LayoutConfig) -> f64 {
        config.container_width() - (self.photos.len() - 1) as f64 * config.spacing()
    }

    fn into_full(self, config: &LayoutConfig) -> Row<'a> {
        let scale = self.aspect_sum(config) / self.target_width(config);
        let height = config.max_row_height() / scale;
        Row::new(&self.photos, height, RowKind::Full)
    }

    fn into_trailing(self, config: &LayoutConfig) -> Row<'a> {
        // A row that is almost full looks like a layout glitch; leave a clear gap instead
        let height = if self.aspect_sum(config) > self.target_width(config) * TRAILING_FILL_THRESHOLD {
            config.max_row_height() * TRAILING_SHRINK
        } else {
            config.max_row_height()
        };
        Row::new(&self.photos, height, RowKind::Trailing)
    }
}
