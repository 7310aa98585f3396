// ABOUTME: Photo row layout for the gallery.
// ABOUTME: Packs photos into justified rows that fill the container width.

mod engine;
mod row;

pub use engine::{layout, strategy_for, JustifiedRows, LayoutStrategy};
pub use row::{Placement, Row, RowItem, RowKind};
