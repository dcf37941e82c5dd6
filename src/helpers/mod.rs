//! Helper functions for pages
//!
//! Date formatting and HTML escaping shared by the page composer and the
//! markdown renderer.

mod date;
mod html;

pub use date::*;
pub use html::*;
