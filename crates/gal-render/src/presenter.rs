// ABOUTME: Drives the layout engine over every album of a catalog.
// ABOUTME: Hands each produced row to a rendering sink.

use gal_core::{ConfigError, LayoutConfig, LayoutOptions, PhotoCatalog};
use gal_layout::{strategy_for, LayoutStrategy};

use crate::sink::{RowSink, Surface};

/// Counts reported after presenting a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentSummary {
    pub albums: usize,
    pub rows: usize,
    pub photos: usize,
}

pub struct GalleryPresenter {
    config: LayoutConfig,
    strategy: Box<dyn LayoutStrategy>,
}

impl GalleryPresenter {
    /// Measure the surface once and build the layout configuration from it
    pub fn new(surface: &dyn Surface, options: &LayoutOptions) -> Result<Self, ConfigError> {
        let width = surface.measure_container_width();
        let config = options.resolve(width)?;
        tracing::info!(
            "Presenter ready: {} layout, width={}px, max_height={}px, spacing={}px",
            options.kind.label(),
            config.container_width(),
            config.max_row_height(),
            config.spacing()
        );

        Ok(Self::with_strategy(config, strategy_for(options.kind)))
    }

    pub fn with_strategy(config: LayoutConfig, strategy: Box<dyn LayoutStrategy>) -> Self {
        Self { config, strategy }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out every album in catalog order and feed the rows to `sink`
    pub fn present(&self, catalog: &PhotoCatalog, sink: &mut dyn RowSink) -> PresentSummary {
        let mut summary = PresentSummary::default();

        for album in catalog.albums() {
            let rows = self.strategy.layout(&album.photos, &self.config);
            tracing::debug!("Album {:?}: {} photos in {} rows", album.name, album.photos.len(), rows.len());

            sink.begin_album(&album.name);
            for row in &rows {
                sink.render_row(row, &album.name);
                summary.photos += row.len();
            }
            sink.end_album(&album.name);

            summary.albums += 1;
            summary.rows += rows.len();
        }

        tracing::info!(
            "Presented {} albums, {} rows, {} photos",
            summary.albums,
            summary.rows,
            summary.photos
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::FixedWidth;
    use gal_core::{Album, Photo};
    use gal_layout::Row;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
        heights: Vec<f64>,
    }

    impl RowSink for RecordingSink {
        fn begin_album(&mut self, album: &str) {
            self.events.push(format!("begin {album}"));
        }

        fn render_row(&mut self, row: &Row<'_>, album: &str) {
            self.events.push(format!("row {album} {}", row.len()));
            self.heights.push(row.height());
        }

        fn end_album(&mut self, album: &str) {
            self.events.push(format!("end {album}"));
        }
    }

    fn square(name: &str) -> Photo {
        Photo::new(name, 100.0, 100.0).unwrap()
    }

    fn catalog() -> PhotoCatalog {
        PhotoCatalog::from_albums(vec![
            Album::new("Beach", vec![square("1"), square("2"), square("3"), square("4")]),
            Album::new("Empty", Vec::new()),
            Album::new("Hills", vec![square("5")]),
        ])
    }

    #[test]
    fn presents_albums_in_order() {
        let presenter = GalleryPresenter::new(&FixedWidth(1000.0), &LayoutOptions::default()).unwrap();
        let mut sink = RecordingSink::default();
        let summary = presenter.present(&catalog(), &mut sink);

        assert_eq!(
            sink.events,
            vec![
                "begin Beach",
                "row Beach 3",
                "row Beach 1",
                "end Beach",
                "begin Empty",
                "end Empty",
                "begin Hills",
                "row Hills 1",
                "end Hills",
            ]
        );
        assert_eq!(
            summary,
            PresentSummary {
                albums: 3,
                rows: 3,
                photos: 5,
            }
        );
    }

    #[test]
    fn trailing_rows_keep_max_height() {
        let presenter = GalleryPresenter::new(&FixedWidth(1000.0), &LayoutOptions::default()).unwrap();
        let mut sink = RecordingSink::default();
        presenter.present(&catalog(), &mut sink);

        assert!(sink.heights[0] < 400.0);
        assert_eq!(sink.heights[1], 400.0);
        assert_eq!(sink.heights[2], 400.0);
    }

    #[test]
    fn unmeasurable_surface_is_a_config_error() {
        let result = GalleryPresenter::new(&FixedWidth(0.0), &LayoutOptions::default());
        assert!(matches!(result, Err(ConfigError::NotPositive { field: "container_width", .. })));
    }
}
