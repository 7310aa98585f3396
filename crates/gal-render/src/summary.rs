// ABOUTME: Plain-text rendering sink for terminals.
// ABOUTME: Describes each row's height and image widths, one line per row.

use std::fmt::Write;

use gal_layout::Row;

use crate::sink::RowSink;

#[derive(Debug, Default)]
pub struct SummaryRenderer {
    out: String,
    row_index: usize,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl RowSink for SummaryRenderer {
    fn begin_album(&mut self, album: &str) {
        self.row_index = 0;
        let _ = writeln!(self.out, "{album}");
    }

    fn render_row(&mut self, row: &Row<'_>, _album: &str) {
        self.row_index += 1;
        let widths: Vec<String> = row.items().iter().map(|item| format!("{:.1}", item.width)).collect();
        let kind = if row.is_trailing() { "trailing" } else { "full" };
        let _ = writeln!(
            self.out,
            "  row {:>3}  {:<8}  height {:>7.1}  [{}]",
            self.row_index,
            kind,
            row.height(),
            widths.join(", ")
        );
    }
}
