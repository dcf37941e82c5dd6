//! List site content

use anyhow::Result;

use crate::content::PostCatalog;
use crate::Blog;

/// One line per post: `date - title [source]`
pub fn post_lines(catalog: &PostCatalog) -> Vec<String> {
    catalog
        .all()
        .iter()
        .map(|post| {
            format!(
                "{} - {} [{}]",
                post.date.format("%Y-%m-%d"),
                post.title,
                post.source
            )
        })
        .collect()
}

/// List all posts, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let catalog = blog.catalog();

    println!("Posts ({}):", catalog.len());
    for line in post_lines(&catalog) {
        println!("  {}", line);
    }

    Ok(())
}
