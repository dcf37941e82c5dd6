//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post loaded from the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date (from the filename prefix)
    pub date: NaiveDate,

    /// Slug (URL-friendly name, from the filename remainder)
    pub slug: String,

    /// Markdown source with line endings normalized to `\n`
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Plain-text summary for list views
    pub excerpt: String,

    /// Manifest file name the post was loaded from
    pub source: String,
}

impl Post {
    /// URL path of the post page
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Get the newer neighbour in a date-descending list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source == self.source)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the older neighbour in a date-descending list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source == self.source)?;
        posts.get(pos + 1)
    }
}
