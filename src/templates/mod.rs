//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is off:
//! view data is escaped when it is built (see [`PostData::from_post`]) and
//! rendered post HTML is inserted as-is.

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_xml, full_date, html_escape, short_date};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("post.html", include_str!("site/post.html")),
            ("about.html", include_str!("site/about.html")),
            ("demo.html", include_str!("site/demo.html")),
            ("data.html", include_str!("site/data.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("site/partials/head.html"),
            ),
            (
                "partials/navbar.html",
                include_str!("site/partials/navbar.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("site/partials/post_card.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

// Template context data. Text fields hold escaped HTML.

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub github_user: String,
    pub github_url: String,
    pub email: String,
}

impl SiteData {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: html_escape(&config.title),
            tagline: html_escape(&config.tagline),
            description: html_escape(&config.description),
            author: html_escape(&config.author),
            language: html_escape(&config.language),
            github_user: html_escape(&config.github_user),
            github_url: html_escape(&config.github_url()),
            email: html_escape(&config.email),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: String,
    pub full_date: String,
    pub datetime: String,
    pub path: String,
    pub excerpt: String,
    /// Rendered HTML, inserted verbatim
    pub content: String,
}

impl PostData {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: html_escape(&post.title),
            date: short_date(&post.date),
            full_date: full_date(&post.date),
            datetime: date_xml(&post.date),
            path: html_escape(&post.path()),
            excerpt: html_escape(&post.excerpt),
            content: post.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}

impl NavPost {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: html_escape(&post.title),
            path: html_escape(&post.path()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub classes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_all_templates_parse() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("post_count", &3);
        let html = renderer.render("data.html", &context).unwrap();
        assert!(html.contains("3 posts"));
    }

    #[test]
    fn test_post_data_escapes_text() {
        let post = Post {
            title: "Tags like <b>".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            slug: "tags".to_string(),
            raw: String::new(),
            content: "<p>rendered</p>".to_string(),
            excerpt: "a < b".to_string(),
            source: "2023-06-15-tags.md".to_string(),
        };
        let data = PostData::from_post(&post);
        assert_eq!(data.title, "Tags like &lt;b&gt;");
        assert_eq!(data.excerpt, "a &lt; b");
        assert_eq!(data.content, "<p>rendered</p>");
        assert_eq!(data.date, "Jun 15, 2023");
        assert_eq!(data.datetime, "2023-06-15");
        assert_eq!(data.path, "/blog/tags");
    }
}
