//! lizz-blog: a small server-rendered personal blog
//!
//! Markdown posts bundled with the application are parsed once into a
//! [`content::PostCatalog`] and served as HTML pages by an axum server.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use content::{DirSource, EmbeddedSource, MarkdownRenderer, PostCatalog, PostSource};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
    /// Built on first access, shared by clones
    catalog: Arc<OnceLock<Arc<PostCatalog>>>,
}

impl Blog {
    /// Create a new blog from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(config, base_dir))
    }

    /// Create a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(config: config::SiteConfig, base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            static_dir,
            catalog: Arc::new(OnceLock::new()),
        }
    }

    /// On-disk content directory, if one is configured
    pub fn content_dir(&self) -> Option<PathBuf> {
        self.config
            .content_dir
            .as_ref()
            .map(|dir| self.base_dir.join(dir))
    }

    /// The post source selected by the configuration
    pub fn source(&self) -> Box<dyn PostSource> {
        match self.content_dir() {
            Some(dir) => {
                tracing::debug!("Loading posts from {:?}", dir);
                Box::new(DirSource::new(dir, &self.config.manifest))
            }
            None => Box::new(EmbeddedSource::new(&self.config.manifest)),
        }
    }

    /// The post catalog, built exactly once
    pub fn catalog(&self) -> Arc<PostCatalog> {
        self.catalog
            .get_or_init(|| {
                let renderer = MarkdownRenderer::with_theme(&self.config.highlight_theme);
                let source = self.source();
                Arc::new(PostCatalog::load(
                    source.as_ref(),
                    &renderer,
                    self.config.excerpt_length,
                ))
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "lizz.dev");
        assert_eq!(blog.static_dir, dir.path().join("static"));
        assert!(blog.content_dir().is_none());
    }

    #[test]
    fn test_bundled_catalog() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let catalog = blog.catalog();
        assert!(catalog.find_by_slug("hello-world").is_some());
        assert!(catalog.find_by_slug("linebreaks").is_some());
    }

    #[test]
    fn test_content_dir_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "content_dir: posts\n").unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/_index.txt"), "2022-02-02-only.md\n").unwrap();
        fs::write(dir.path().join("posts/2022-02-02-only.md"), "# Only\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let catalog = blog.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].title, "Only");
    }

    #[test]
    fn test_catalog_is_built_once() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let clone = blog.clone();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let blog = blog.clone();
                std::thread::spawn(move || blog.catalog())
            })
            .collect();
        let catalogs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for catalog in &catalogs {
            assert!(Arc::ptr_eq(catalog, &clone.catalog()));
        }
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: [unclosed").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
