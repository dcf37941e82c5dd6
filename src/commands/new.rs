//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::Blog;

/// Where new posts are written when no content directory is configured
pub const DEFAULT_CONTENT_DIR: &str = "content/blogs";

/// Create `YYYY-MM-DD-<slug>.md` and append it to the manifest
pub fn create_post(blog: &Blog, title: &str, date: NaiveDate) -> Result<PathBuf> {
    let target_dir = blog
        .content_dir()
        .unwrap_or_else(|| blog.base_dir.join(DEFAULT_CONTENT_DIR));
    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title: {:?}", title);
    }

    let file_name = format!("{}-{}.md", date.format("%Y-%m-%d"), slug);
    let file_path = target_dir.join(&file_name);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("# {}\n\n", title))?;

    // Keep the manifest newline-terminated before appending
    let manifest_path = target_dir.join(&blog.config.manifest);
    let needs_newline = fs::read_to_string(&manifest_path)
        .map(|text| !text.is_empty() && !text.ends_with('\n'))
        .unwrap_or(false);
    let mut manifest = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&manifest_path)?;
    if needs_newline {
        writeln!(manifest)?;
    }
    writeln!(manifest, "{}", file_name)?;

    tracing::info!("Added {} to {:?}", file_name, manifest_path);

    Ok(file_path)
}

/// Run the new command with today's date
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(blog, title, today)?;
    println!("Created: {:?}", path);
    Ok(())
}
