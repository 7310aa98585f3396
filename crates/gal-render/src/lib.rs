// ABOUTME: Gallery presentation and row rendering.
// ABOUTME: Lays out each album and writes its rows as HTML or plain text.

pub mod html;
pub mod presenter;
mod sink;
pub mod summary;

pub use html::HtmlRenderer;
pub use presenter::{GalleryPresenter, PresentSummary};
pub use sink::{FixedWidth, RowSink, Surface};
pub use summary::SummaryRenderer;
