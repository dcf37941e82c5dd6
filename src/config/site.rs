//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::excerpt::DEFAULT_EXCERPT_LENGTH;
use crate::content::source::DEFAULT_MANIFEST;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Contact
    pub github_user: String,
    pub email: String,

    // Content
    /// Directory with the manifest and posts; the bundled posts are used when unset
    pub content_dir: Option<String>,
    pub manifest: String,
    pub excerpt_length: usize,
    pub latest_posts: usize,
    pub highlight_theme: String,

    // Assets
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "lizz.dev".to_string(),
            tagline: "HTMX + Tailwind + Rust".to_string(),
            description: "Personal blog by Lizz. Developed with Rust + HTMX + Tailwind".to_string(),
            author: "Lizz".to_string(),
            language: "en".to_string(),

            github_user: "Lizzergas".to_string(),
            email: "home@lizz.dev".to_string(),

            content_dir: None,
            manifest: DEFAULT_MANIFEST.to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            latest_posts: 5,
            highlight_theme: "base16-ocean.dark".to_string(),

            static_dir: "static".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Link to the author's GitHub profile
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }
}
