//! Page composition - the shared layout, navigation and page bodies

use tera::Context;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::PostCatalog;
use crate::helpers::nav_link_classes;
use crate::templates::{NavItem, NavPost, PostData, SiteData, TemplateRenderer};

/// Page rendering errors
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Navigation items for the page at `current_path`
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    let links = [
        ("Blog", "/", current_path == "/"),
        ("About", "/about", current_path.starts_with("/about")),
        ("Demo", "/test", current_path == "/test"),
    ];

    links
        .into_iter()
        .map(|(label, href, active)| NavItem {
            label: label.to_string(),
            href: href.to_string(),
            active,
            classes: nav_link_classes(active).to_string(),
        })
        .collect()
}

/// Builds HTML response bodies
pub struct PageComposer {
    renderer: TemplateRenderer,
    site: SiteData,
    latest_posts: usize,
}

impl PageComposer {
    pub fn new(config: &SiteConfig) -> Result<Self, PageError> {
        Ok(Self {
            renderer: TemplateRenderer::new()?,
            site: SiteData::from_config(config),
            latest_posts: config.latest_posts,
        })
    }

    /// Context shared by every full page
    fn base_context(&self, path: &str, page_title: &str, description: Option<&str>) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("nav", &nav_items(path));
        context.insert("page_title", page_title);
        context.insert(
            "description",
            description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(self.site.description.as_str()),
        );
        context
    }

    /// Index page with the latest posts and the full list
    pub fn index(&self, catalog: &PostCatalog) -> Result<String, PageError> {
        let title = format!("Blog • {}", self.site.tagline);
        let mut context = self.base_context("/", &title, None);
        let latest: Vec<PostData> = catalog
            .latest(self.latest_posts)
            .iter()
            .map(PostData::from_post)
            .collect();
        let posts: Vec<PostData> = catalog.all().iter().map(PostData::from_post).collect();
        context.insert("latest", &latest);
        context.insert("posts", &posts);
        Ok(self.renderer.render("index.html", &context)?)
    }

    /// Post page, `None` if no post has this slug
    pub fn post(&self, catalog: &PostCatalog, slug: &str) -> Result<Option<String>, PageError> {
        let Some(post) = catalog.find_by_slug(slug) else {
            return Ok(None);
        };

        let data = PostData::from_post(post);
        let title = format!("{} • Blog", data.title);
        let mut context = self.base_context(&post.path(), &title, Some(&data.excerpt));
        context.insert("post", &data);
        context.insert("newer", &post.prev(catalog.all()).map(NavPost::from_post));
        context.insert("older", &post.next(catalog.all()).map(NavPost::from_post));
        Ok(Some(self.renderer.render("post.html", &context)?))
    }

    pub fn about(&self) -> Result<String, PageError> {
        let title = format!("About • {}", self.site.tagline);
        let context = self.base_context("/about", &title, None);
        Ok(self.renderer.render("about.html", &context)?)
    }

    pub fn demo(&self) -> Result<String, PageError> {
        let title = format!("Demo • {}", self.site.tagline);
        let context = self.base_context("/test", &title, None);
        Ok(self.renderer.render("demo.html", &context)?)
    }

    /// Fragment swapped into the demo page by htmx
    pub fn data_fragment(&self, catalog: &PostCatalog) -> Result<String, PageError> {
        let mut context = Context::new();
        context.insert("post_count", &catalog.len());
        Ok(self.renderer.render("data.html", &context)?)
    }

    /// Page for a missing post
    pub fn post_not_found(&self, path: &str) -> Result<String, PageError> {
        self.not_found(
            path,
            "Post Not Found",
            "The requested post could not be found.",
        )
    }

    /// Page for any other unknown path
    pub fn page_not_found(&self, path: &str) -> Result<String, PageError> {
        self.not_found(path, "Page Not Found", "Nothing lives at this address.")
    }

    fn not_found(&self, path: &str, heading: &str, message: &str) -> Result<String, PageError> {
        let title = format!("Not Found • {}", self.site.title);
        let mut context = self.base_context(path, &title, None);
        context.insert("heading", heading);
        context.insert("message", message);
        Ok(self.renderer.render("not_found.html", &context)?)
    }
}
