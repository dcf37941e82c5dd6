//! Plain-text excerpts for post listings

use lazy_static::lazy_static;
use regex::Regex;

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// A truncated excerpt is cut at a space only if the space lies past this
/// character index; otherwise the cut falls mid-word.
const WORD_BOUNDARY_FLOOR: usize = 140;

const ELLIPSIS: char = '…';

lazy_static! {
    static ref H1_LINE: Regex = Regex::new(r"(?m)^# .*$").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();
}

/// Build a plain-text excerpt of at most `max_chars` characters (plus the
/// ellipsis) from markdown source.
///
/// Level-1 heading lines are dropped, `**`, `*` and `` ` `` markers are
/// removed and newline runs collapse to single spaces.
pub fn build_excerpt(markdown: &str, max_chars: usize) -> String {
    let text = H1_LINE.replace_all(markdown, "");
    let text = text.replace("**", "").replace('*', "").replace('`', "");
    let text = NEWLINES.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let clipped: Vec<char> = text.chars().take(max_chars).collect();
    let cut = match clipped.iter().rposition(|&c| c == ' ') {
        Some(last_space) if last_space > WORD_BOUNDARY_FLOOR => last_space,
        _ => clipped.len(),
    };

    let mut excerpt: String = clipped[..cut].iter().collect();
    excerpt.push(ELLIPSIS);
    excerpt.trim().to_string()
}
