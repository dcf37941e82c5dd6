//! Post parsing - filename conventions, titles and rendering
//!
//! Post files are named `YYYY-MM-DD-<slug>.md`. The date and slug come from
//! the filename, the title from the first level-1 heading.

use chrono::NaiveDate;
use thiserror::Error;

use super::excerpt::{build_excerpt, DEFAULT_EXCERPT_LENGTH};
use super::{MarkdownRenderer, Post};

/// Date prefix plus hyphen plus at least one slug character
const MIN_STEM_CHARS: usize = 12;
const DATE_CHARS: usize = 10;

/// Why a file was left out of the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("not a markdown file")]
    NotMarkdown,

    #[error("file name too short for YYYY-MM-DD-<slug>.md")]
    TooShort,

    #[error("invalid date prefix: {0}")]
    InvalidDate(String),
}

/// Result of parsing one post file
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Post),
    Skipped(SkipReason),
}

impl ParseOutcome {
    /// The parsed post, if any
    pub fn post(self) -> Option<Post> {
        match self {
            ParseOutcome::Parsed(post) => Some(post),
            ParseOutcome::Skipped(_) => None,
        }
    }
}

/// Turns raw post files into posts
pub struct PostParser<'a> {
    renderer: &'a MarkdownRenderer,
    excerpt_length: usize,
}

impl<'a> PostParser<'a> {
    /// Create a parser using the default excerpt length
    pub fn new(renderer: &'a MarkdownRenderer) -> Self {
        Self {
            renderer,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }

    /// Override the excerpt length in characters
    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    /// Parse a post file
    pub fn parse(&self, file_name: &str, raw: &str) -> ParseOutcome {
        let (date, slug) = match parse_file_name(file_name) {
            Ok(parts) => parts,
            Err(reason) => return ParseOutcome::Skipped(reason),
        };

        let normalized = normalize_newlines(raw);
        let title = extract_title(&normalized).unwrap_or_else(|| slug_to_title(&slug));
        let content = self.renderer.render(&normalized);
        let excerpt = build_excerpt(raw, self.excerpt_length);

        ParseOutcome::Parsed(Post {
            title,
            date,
            slug,
            raw: normalized,
            content,
            excerpt,
            source: file_name.to_string(),
        })
    }
}

/// Split `YYYY-MM-DD-<slug>.md` into its date and slug
pub fn parse_file_name(file_name: &str) -> Result<(NaiveDate, String), SkipReason> {
    let stem = file_name
        .strip_suffix(".md")
        .ok_or(SkipReason::NotMarkdown)?;

    if stem.chars().count() < MIN_STEM_CHARS {
        return Err(SkipReason::TooShort);
    }

    let date_str: String = stem.chars().take(DATE_CHARS).collect();
    let date = parse_date(&date_str).ok_or_else(|| SkipReason::InvalidDate(date_str.clone()))?;

    // Character 10 is the separator and is not checked
    let slug: String = stem.chars().skip(DATE_CHARS + 1).collect();

    Ok((date, slug))
}

/// Strict `YYYY-MM-DD` parsing
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == DATE_CHARS
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Title from the first `# ` heading line
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

/// `hello-world` -> `Hello World`
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(file_name: &str, raw: &str) -> ParseOutcome {
        let renderer = MarkdownRenderer::new();
        PostParser::new(&renderer).parse(file_name, raw)
    }

    fn parsed(file_name: &str, raw: &str) -> Post {
        match parse(file_name, raw) {
            ParseOutcome::Parsed(post) => post,
            ParseOutcome::Skipped(reason) => panic!("{} was skipped: {}", file_name, reason),
        }
    }

    #[test]
    fn test_parse_valid_file_name() {
        let post = parsed("2023-06-15-hello-world.md", "# Hello\n\nBody");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.source, "2023-06-15-hello-world.md");
        assert_eq!(post.excerpt, "Body");
    }

    #[test]
    fn test_single_char_slug() {
        let post = parsed("2023-06-15-x.md", "");
        assert_eq!(post.slug, "x");
        assert_eq!(post.title, "X");
    }

    #[test]
    fn test_slug_is_verbatim() {
        let post = parsed("2023-06-15-Mixed_Case.v2.md", "");
        assert_eq!(post.slug, "Mixed_Case.v2");
    }

    #[test]
    fn test_skip_without_md_suffix() {
        assert_eq!(
            parse("2023-06-15-hello.txt", "# Hi"),
            ParseOutcome::Skipped(SkipReason::NotMarkdown)
        );
        assert_eq!(
            parse("2023-06-15-hello.markdown", "# Hi"),
            ParseOutcome::Skipped(SkipReason::NotMarkdown)
        );
    }

    #[test]
    fn test_skip_short_names() {
        assert_eq!(
            parse("2023-06-15-.md", ""),
            ParseOutcome::Skipped(SkipReason::TooShort)
        );
        assert_eq!(
            parse("post.md", ""),
            ParseOutcome::Skipped(SkipReason::TooShort)
        );
    }

    #[test]
    fn test_skip_invalid_dates() {
        for name in [
            "2023-02-30-nope.md",
            "2023-13-01-nope.md",
            "23-06-15-abcdef.md",
            "2023_06_15-nope.md",
            "+202-06-15-nope.md",
            "hello-world-post.md",
        ] {
            match parse(name, "") {
                ParseOutcome::Skipped(SkipReason::InvalidDate(_)) => {}
                other => panic!("{} should have an invalid date, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_leap_day() {
        let post = parsed("2024-02-29-leap.md", "");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let post = parsed("2023-06-15-hello-rusty-world.md", "No heading here\n## Sub");
        assert_eq!(post.title, "Hello Rusty World");
    }

    #[test]
    fn test_title_allows_leading_whitespace() {
        let post = parsed("2023-06-15-x.md", "intro\n   #   Spaced Title  \n# Second");
        assert_eq!(post.title, "Spaced Title");
    }

    #[test]
    fn test_hash_without_space_is_not_a_title() {
        assert_eq!(extract_title("#hashtag\n## Two"), None);
    }

    #[test]
    fn test_newlines_are_normalized() {
        let post = parsed("2023-06-15-crlf.md", "# T\r\n\r\nline one\r\nline two\rline three");
        assert_eq!(post.raw, "# T\n\nline one\nline two\nline three");
        assert_eq!(post.content.matches("<br />").count(), 2);
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let post = parsed("2024-01-01-linebreaks.md", "# T\n\nA literal <p> block.");
        assert!(post.content.contains("&lt;p&gt;"));
        assert!(!post.content.contains("<p> block"));
    }

    #[test]
    fn test_custom_excerpt_length() {
        let renderer = MarkdownRenderer::new();
        let parser = PostParser::new(&renderer).with_excerpt_length(5);
        let post = parser.parse("2023-06-15-x.md", "abcdefghij").post().unwrap();
        assert_eq!(post.excerpt, "abcde…");
    }

    #[test]
    fn test_slug_to_title() {
        assert_eq!(slug_to_title("hello-world"), "Hello World");
        assert_eq!(slug_to_title("élan-vital"), "Élan Vital");
        assert_eq!(slug_to_title("a--b"), "A  B");
    }
}
