// ABOUTME: Main application entry point.
// ABOUTME: Resolves config, loads the catalog, and writes the rendered gallery.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gal_core::{Config, ConfigError, PhotoCatalog};
use gal_render::{FixedWidth, GalleryPresenter, HtmlRenderer, SummaryRenderer};

const DEFAULT_CATALOG: &str = "config.json";

#[derive(Parser, Debug)]
#[command(name = "justified-gallery", version, about = "Lay out photo albums as justified rows")]
struct Cli {
    /// Config file (defaults to ~/.config/justified-gallery/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON mapping album names to photo records.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Target row height in pixels.
    #[arg(long)]
    max_height: Option<f64>,

    /// Gap between photos and rows in pixels.
    #[arg(long)]
    spacing: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Emit only the album sections, without a page around them.
    #[arg(long)]
    fragment: bool,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Save the effective config to the default config path.
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

impl Cli {
    /// Defaults, then the config file, then command line flags
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::load_or_default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(width) = self.width {
            config.container_width = width;
        }
        if let Some(max_height) = self.max_height {
            config.layout.max_height = max_height;
        }
        if let Some(spacing) = self.spacing {
            config.layout.spacing = spacing;
        }

        Ok(config)
    }
}

fn render(
    presenter: &GalleryPresenter,
    catalog: &PhotoCatalog,
    format: OutputFormat,
    fragment: bool,
    root_id: &str,
) -> String {
    match format {
        OutputFormat::Html => {
            let mut renderer = HtmlRenderer::new(presenter.config().spacing());
            presenter.present(catalog, &mut renderer);
            if fragment {
                renderer.sections().into_string()
            } else {
                renderer.finish(root_id).into_string()
            }
        }
        OutputFormat::Text => {
            let mut renderer = SummaryRenderer::new();
            presenter.present(catalog, &mut renderer);
            renderer.into_string()
        }
    }
}

/// Validate the layout settings, then save the config if asked to
fn prepare(config: &Config, save_to: Option<&Path>) -> Result<GalleryPresenter> {
    let presenter = GalleryPresenter::new(&FixedWidth(config.container_width), &config.layout)
        .context("Invalid layout configuration")?;

    if let Some(path) = save_to {
        config.save(path)?;
        tracing::info!("Config saved to {}", path.display());
    }

    Ok(presenter)
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    tracing::info!("Starting justified-gallery");

    let config = cli.resolve_config()?;
    let save_to = if cli.save_config {
        Some(Config::default_path().ok_or(ConfigError::NoConfigDir)?)
    } else {
        None
    };
    let presenter = prepare(&config, save_to.as_deref())?;

    let catalog_path = config
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    // A catalog that fails to load still produces an (empty) gallery
    let (catalog, load_result) = match PhotoCatalog::load(&catalog_path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} albums from {}", catalog.len(), catalog_path.display());
            (catalog, Ok(()))
        }
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {}", catalog_path.display(), e);
            (PhotoCatalog::default(), Err(e))
        }
    };

    let output = render(&presenter, &catalog, cli.format, cli.fragment, &config.root_id);
    write_output(cli.out.as_deref(), &output)?;

    load_result.with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gal_core::LayoutOptions;

    #[test]
    fn flags_override_config_file() {
        let temp_path = std::env::temp_dir().join("gal_app_test_config.toml");
        std::fs::write(
            &temp_path,
            "container_width = 800.0\ncatalog = \"albums.json\"\n[layout]\nmax_height = 300.0\nspacing = 6.0\n",
        )
        .unwrap();

        let path = temp_path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["justified-gallery", "--config", &path, "--spacing", "2"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.container_width, 800.0);
        assert_eq!(config.layout.max_height, 300.0);
        assert_eq!(config.layout.spacing, 2.0);
        assert_eq!(config.catalog, Some(PathBuf::from("albums.json")));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn invalid_config_is_not_saved() {
        let temp_path = std::env::temp_dir().join("gal_app_test_invalid_save.toml");
        let _ = std::fs::remove_file(&temp_path);

        let mut config = Config::default();
        config.container_width = -5.0;
        assert!(prepare(&config, Some(&temp_path)).is_err());
        assert!(!temp_path.exists());

        config.container_width = 900.0;
        let presenter = prepare(&config, Some(&temp_path)).unwrap();
        assert_eq!(presenter.config().container_width(), 900.0);
        assert_eq!(Config::load(&temp_path).unwrap().container_width, 900.0);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn text_format_lists_rows() {
        let catalog = PhotoCatalog::from_json_str(
            r#"{"Trip": [
                {"path": "a.jpg", "width": 2000, "height": 1000},
                {"path": "b.jpg", "width": 1500, "height": 1000}
            ]}"#,
        )
        .unwrap();
        let presenter = GalleryPresenter::new(&FixedWidth(1000.0), &LayoutOptions::default()).unwrap();

        let text = render(&presenter, &catalog, OutputFormat::Text, false, "gallery");
        assert!(text.starts_with("Trip\n"));
        assert!(text.contains("full"));

        let page = render(&presenter, &catalog, OutputFormat::Html, false, "gallery");
        assert!(page.contains(r#"<div id="gallery">"#));
        let fragment = render(&presenter, &catalog, OutputFormat::Html, true, "gallery");
        assert!(fragment.starts_with("<section"));
    }
}
