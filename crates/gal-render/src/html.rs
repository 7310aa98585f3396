// ABOUTME: HTML rendering sink built with maud.
// ABOUTME: Emits one section per album and one image row per layout row.

use gal_core::ImageSource;
use gal_layout::{Placement, Row};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::sink::RowSink;

/// Fade-in hook; the stylesheet keeps images transparent until it fires
const ON_LOAD: &str = "this.classList.add('img-loaded')";

/// Clicking an album title shows or hides its rows
const TOGGLE_ROWS: &str = "for (const row of this.parentElement.querySelectorAll('.sectionrow')) { row.style.display = row.style.display === 'none' ? 'block' : 'none'; }";

const STYLE: &str = "\
.sectionrow { white-space: nowrap; }
.sectionrow img { display: inline-block; vertical-align: top; opacity: 0; transition: opacity 0.4s; }
.sectionrow img.img-loaded { opacity: 1; }
section h3 { cursor: pointer; }
";

struct OpenSection {
    album: String,
    rows: Vec<Markup>,
}

pub struct HtmlRenderer {
    spacing: f64,
    sections: Vec<Markup>,
    open: Option<OpenSection>,
}

impl HtmlRenderer {
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            sections: Vec::new(),
            open: None,
        }
    }

    /// All finished album sections, without a surrounding document
    pub fn sections(&self) -> Markup {
        html! {
            @for section in &self.sections {
                (section)
            }
        }
    }

    /// A complete page hosting the gallery in `<div id=root_id>`
    pub fn finish(mut self, root_id: &str) -> Markup {
        self.close_section();

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Gallery" }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    div id=(root_id) {
                        (self.sections())
                    }
                }
            }
        }
    }

    fn close_section(&mut self) {
        if let Some(section) = self.open.take() {
            tracing::debug!("Closing section {:?} with {} rows", section.album, section.rows.len());
            self.sections.push(html! {
                section id=(section.album) {
                    h3 onclick=(TOGGLE_ROWS) { (section.album) }
                    @for row in &section.rows {
                        (row)
                    }
                }
            });
        }
    }

    fn row_markup(&self, row: &Row<'_>) -> Markup {
        let row_style = format!("margin-bottom: {};", px(self.spacing));
        html! {
            div.sectionrow style=(row_style) {
                @for placement in row.placements(self.spacing) {
                    (image_markup(&placement))
                }
            }
        }
    }
}

impl RowSink for HtmlRenderer {
    fn begin_album(&mut self, album: &str) {
        self.close_section();
        self.open = Some(OpenSection {
            album: album.to_string(),
            rows: Vec::new(),
        });
    }

    fn render_row(&mut self, row: &Row<'_>, album: &str) {
        let matches_open = self.open.as_ref().is_some_and(|open| open.album == album);
        if !matches_open {
            tracing::warn!("Row for album {:?} arrived outside its section", album);
            self.begin_album(album);
        }

        let markup = self.row_markup(row);
        if let Some(open) = self.open.as_mut() {
            open.rows.push(markup);
        }
    }

    fn end_album(&mut self, _album: &str) {
        self.close_section();
    }
}

fn image_markup(placement: &Placement<'_>) -> Markup {
    let style = format!(
        "width: {}; height: {}; margin-bottom: 0px; margin-left: {};",
        px(placement.width),
        px(placement.height),
        px(placement.margin_left)
    );

    match placement.source {
        ImageSource::Original { path } => html! {
            img src=(path) style=(style) data-action="zoom" onload=(ON_LOAD);
        },
        ImageSource::Lazy {
            placeholder,
            compressed,
            original,
        } => html! {
            img.lazyload
                src=(placeholder)
                data-src=(compressed)
                data-original=(original)
                style=(style)
                data-action="zoom"
                onload=(ON_LOAD);
        },
    }
}

fn px(value: f64) -> String {
    format!("{:.2}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gal_core::{LayoutConfig, Photo};

    fn render(photos: &[Photo]) -> String {
        let config = LayoutConfig::new(400.0, 10.0, 1000.0).unwrap();
        let mut renderer = HtmlRenderer::new(config.spacing());
        renderer.begin_album("Trip");
        for row in gal_layout::layout(photos, &config) {
            renderer.render_row(&row, "Trip");
        }
        renderer.end_album("Trip");
        renderer.sections().into_string()
    }

    #[test]
    fn rows_carry_sizes_and_margins() {
        let photos = vec![
            Photo::new("a.jpg", 2000.0, 1000.0).unwrap(),
            Photo::new("b.jpg", 1500.0, 1000.0).unwrap(),
        ];
        let html = render(&photos);

        assert!(html.contains(r#"<section id="Trip">"#));
        assert!(html.contains("<h3"));
        assert_eq!(html.matches(r#"class="sectionrow""#).count(), 1);
        assert!(html.contains("margin-bottom: 10.00px;"));
        assert!(html.contains("width: 565.71px; height: 282.86px; margin-bottom: 0px; margin-left: 0.00px;"));
        assert!(html.contains("width: 424.29px; height: 282.86px; margin-bottom: 0px; margin-left: 10.00px;"));
        assert!(html.contains(r#"src="a.jpg""#));
        assert!(html.contains(r#"data-action="zoom""#));
    }

    #[test]
    fn compressed_photos_are_lazy() {
        let photos = vec![Photo::new("a.jpg", 100.0, 100.0)
            .unwrap()
            .with_compressed("a.small.jpg", "a.tiny.jpg")];
        let html = render(&photos);

        assert!(html.contains("lazyload"));
        assert!(html.contains(r#"src="a.tiny.jpg""#));
        assert!(html.contains(r#"data-src="a.small.jpg""#));
        assert!(html.contains(r#"data-original="a.jpg""#));
    }

    #[test]
    fn empty_album_still_gets_a_section() {
        let html = render(&[]);
        assert!(html.contains(r#"<section id="Trip">"#));
        assert!(!html.contains("sectionrow"));
    }

    #[test]
    fn album_names_are_escaped() {
        let mut renderer = HtmlRenderer::new(10.0);
        renderer.begin_album("<b>Tom & Jerry</b>");
        renderer.end_album("<b>Tom & Jerry</b>");
        let html = renderer.sections().into_string();

        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn finish_wraps_sections_in_root() {
        let mut renderer = HtmlRenderer::new(10.0);
        renderer.begin_album("Trip");
        let page = renderer.finish("gallery").into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<div id="gallery"><section id="Trip">"#));
        assert!(page.contains("img-loaded"));
    }
}
