//! Post catalog - the immutable, date-sorted set of loaded posts

use std::collections::HashMap;

use super::parser::{ParseOutcome, PostParser};
use super::source::PostSource;
use super::{MarkdownRenderer, Post};

/// All posts, newest first
///
/// Built once from a [`PostSource`] and never modified afterwards. Posts
/// sharing a date keep their manifest order. When two posts share a slug
/// both are listed, and lookup by slug returns the one listed first in the
/// manifest.
#[derive(Debug, Default)]
pub struct PostCatalog {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl PostCatalog {
    /// Load every post listed in the source's manifest
    pub fn load(
        source: &dyn PostSource,
        renderer: &MarkdownRenderer,
        excerpt_length: usize,
    ) -> Self {
        let parser = PostParser::new(renderer).with_excerpt_length(excerpt_length);

        let mut posts = Vec::new();
        for file_name in source.manifest() {
            let Some(raw) = source.read(&file_name) else {
                tracing::warn!("Post {} is listed in the manifest but missing", file_name);
                continue;
            };
            match parser.parse(&file_name, &raw) {
                ParseOutcome::Parsed(post) => posts.push(post),
                ParseOutcome::Skipped(reason) => {
                    tracing::debug!("Skipping {}: {}", file_name, reason);
                }
            }
        }

        let catalog = Self::from_posts(posts);
        tracing::info!("Loaded {} posts", catalog.len());
        catalog
    }

    /// Build a catalog from posts given in manifest order
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut ordered: Vec<(usize, Post)> = posts.into_iter().enumerate().collect();
        // Stable: equal dates keep manifest order
        ordered.sort_by(|(_, a), (_, b)| b.date.cmp(&a.date));

        let mut by_slug: HashMap<String, (usize, usize)> = HashMap::new();
        for (pos, (manifest_idx, post)) in ordered.iter().enumerate() {
            match by_slug.get(&post.slug) {
                Some(&(first_idx, _)) => {
                    tracing::warn!(
                        "Duplicate slug {} in {}; lookups resolve to the earlier manifest entry",
                        post.slug,
                        post.source
                    );
                    if *manifest_idx < first_idx {
                        by_slug.insert(post.slug.clone(), (*manifest_idx, pos));
                    }
                }
                None => {
                    by_slug.insert(post.slug.clone(), (*manifest_idx, pos));
                }
            }
        }

        Self {
            posts: ordered.into_iter().map(|(_, post)| post).collect(),
            by_slug: by_slug
                .into_iter()
                .map(|(slug, (_, pos))| (slug, pos))
                .collect(),
        }
    }

    /// All posts, newest first
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// The `n` newest posts, or all of them if there are fewer
    pub fn latest(&self, n: usize) -> &[Post] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Look up a post by slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&pos| &self.posts[pos])
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
