//! String utilities for display text.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Maximum number of characters shown under a room marker
pub const ROOM_LABEL_MAX_CHARS: usize = 10;

const ELLIPSIS: &str = "...";

static MARKUP_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use mudmap_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Removes markup tags such as `<span class="red">` from display text.
///
/// # Examples
///
/// ```
/// use mudmap_domain::common::strip_tags;
///
/// assert_eq!(strip_tags("<b>Great</b> Hall"), "Great Hall");
/// assert_eq!(strip_tags("3 < 4"), "3 < 4");
/// ```
pub fn strip_tags(value: &str) -> String {
    MARKUP_TAG_RE.replace_all(value, "").into_owned()
}

/// Caps `value` at `max_chars` characters.
///
/// Truncated text ends with `...` and still fits in `max_chars`. Counts
/// characters, not bytes, so multi-byte names never split mid-character.
///
/// # Examples
///
/// ```
/// use mudmap_domain::common::truncate_chars;
///
/// assert_eq!(truncate_chars("Courtyard", 10), "Courtyard");
/// assert_eq!(truncate_chars("Northern Watchtower", 10), "Norther...");
/// ```
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let ellipsis_chars = ELLIPSIS.chars().count();
    if max_chars <= ellipsis_chars {
        return value.chars().take(max_chars).collect();
    }

    let kept: String = value.chars().take(max_chars - ellipsis_chars).collect();
    format!("{}{}", kept, ELLIPSIS)
}

/// Display label for a room marker: tags stripped, then truncated.
pub fn room_label(name: &str) -> String {
    truncate_chars(&strip_tags(name), ROOM_LABEL_MAX_CHARS)
}
