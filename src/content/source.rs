//! Post sources - where manifest and post files come from
//!
//! A content store holds a manifest (one file name per line, `#` comments
//! and blank lines ignored) plus the markdown files it lists. Posts are
//! loaded in manifest order.

use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "_index.txt";

/// Posts compiled into the binary
static BUNDLED_POSTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/content/blogs");

/// A store of post files enumerated by a manifest
pub trait PostSource: Send + Sync {
    /// File names listed in the manifest, in manifest order.
    /// A missing manifest yields an empty list.
    fn manifest(&self) -> Vec<String>;

    /// Read a listed file as UTF-8, `None` if it is missing or unreadable
    fn read(&self, file_name: &str) -> Option<String>;
}

/// Parse manifest text into an ordered list of file names
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Posts bundled into the binary at compile time
pub struct EmbeddedSource {
    manifest_name: String,
}

impl EmbeddedSource {
    pub fn new(manifest_name: &str) -> Self {
        Self {
            manifest_name: manifest_name.to_string(),
        }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST)
    }
}

impl PostSource for EmbeddedSource {
    fn manifest(&self) -> Vec<String> {
        match BUNDLED_POSTS
            .get_file(&self.manifest_name)
            .and_then(|f| f.contents_utf8())
        {
            Some(text) => parse_manifest(text),
            None => {
                tracing::debug!("No bundled manifest {}", self.manifest_name);
                Vec::new()
            }
        }
    }

    fn read(&self, file_name: &str) -> Option<String> {
        let file = BUNDLED_POSTS.get_file(file_name)?;
        match file.contents_utf8() {
            Some(text) => Some(text.to_string()),
            None => {
                tracing::warn!("Bundled post {} is not valid UTF-8", file_name);
                None
            }
        }
    }
}

/// Posts read from a directory on disk
pub struct DirSource {
    root: PathBuf,
    manifest_name: String,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P, manifest_name: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            manifest_name: manifest_name.to_string(),
        }
    }

    fn read_file(&self, file_name: &str) -> Option<String> {
        let path = self.root.join(file_name);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }
}

impl PostSource for DirSource {
    fn manifest(&self) -> Vec<String> {
        match self.read_file(&self.manifest_name) {
            Some(text) => parse_manifest(&text),
            None => {
                tracing::debug!("No manifest at {:?}", self.root.join(&self.manifest_name));
                Vec::new()
            }
        }
    }

    fn read(&self, file_name: &str) -> Option<String> {
        self.read_file(file_name)
    }
}

/// Posts held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    manifest: Option<String>,
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manifest text
    pub fn with_manifest(mut self, manifest: &str) -> Self {
        self.manifest = Some(manifest.to_string());
        self
    }

    /// Add a post file
    pub fn with_file(mut self, file_name: &str, content: &str) -> Self {
        self.files
            .insert(file_name.to_string(), content.to_string());
        self
    }
}

impl PostSource for MemorySource {
    fn manifest(&self) -> Vec<String> {
        self.manifest
            .as_deref()
            .map(parse_manifest)
            .unwrap_or_default()
    }

    fn read(&self, file_name: &str) -> Option<String> {
        self.files.get(file_name).cloned()
    }
}
