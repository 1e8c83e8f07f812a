//! # Marker Gate
//!
//! A memo is encrypted iff its first character is `#`. Unmarked text passes
//! through encode and decode untouched.

/// Sentinel that marks a memo for encryption.
pub const SENTINEL: char = '#';

/// True iff `text` starts with the sentinel.
pub fn is_marked(text: &str) -> bool {
    text.starts_with(SENTINEL)
}

/// `text` without its leading sentinel. Unmarked text is returned as-is.
pub fn strip(text: &str) -> &str {
    text.strip_prefix(SENTINEL).unwrap_or(text)
}

/// Prefix `body` with the sentinel.
pub fn mark(body: &str) -> String {
    let mut marked = String::with_capacity(body.len() + 1);
    marked.push(SENTINEL);
    marked.push_str(body);
    marked
}
