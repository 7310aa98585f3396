// ABOUTME: Interfaces between the presenter and its environment.
// ABOUTME: A surface reports its width, a sink receives finished rows.

use gal_layout::Row;

/// Where the gallery is drawn
pub trait Surface {
    /// Width available to the gallery, in pixels
    fn measure_container_width(&self) -> f64;
}

/// A surface with a width known up front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidth(pub f64);

impl Surface for FixedWidth {
    fn measure_container_width(&self) -> f64 {
        self.0
    }
}

/// Receives rows as the presenter produces them
pub trait RowSink {
    fn begin_album(&mut self, _album: &str) {}

    fn render_row(&mut self, row: &Row<'_>, album: &str);

    fn end_album(&mut self, _album: &str) {}
}
