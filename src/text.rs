//! Text shortening for meta descriptions.
//!
//! Search engines and social cards cut long descriptions wherever they like,
//! often mid-word. [`truncate`] shortens a string on our own terms: it keeps a
//! prefix of the input, optionally backs off to the last space so the final
//! word stays whole, and marks the cut with `...`.
//!
//! ## Length accounting
//!
//! Lengths are counted in `char`s, never bytes, so a cut can't land inside a
//! multi-byte UTF-8 sequence.
//!
//! The limit applies to the retained prefix, not to the final string. A cut
//! string keeps at most `max_len - 1` characters and then gains three more for
//! the ellipsis, so the result can be up to `max_len + 2` characters long:
//!
//! ```text
//! truncate("abcdefghij", 5, false)  →  "abcd..."   (7 chars)
//! ```
//!
//! Pages have shipped with descriptions measured this way, so it stays.

/// Appended to every string that [`truncate`] shortened.
pub const ELLIPSIS: &str = "...";

/// Shorten `s` to a prefix of fewer than `max_len` characters plus [`ELLIPSIS`].
///
/// - `s` is returned unchanged when it has at most `max_len` characters.
/// - Otherwise the first `max_len - 1` characters are kept.
/// - With `word_boundary`, that prefix is cut back to its last space, dropping
///   the trailing partial word (and the space). A prefix without any space is
///   kept whole.
///
/// ```
/// use folio::text::truncate;
///
/// assert_eq!(truncate("The quick brown fox", 10, true), "The...");
/// assert_eq!(truncate("abcdefghij", 5, false), "abcd...");
/// assert_eq!(truncate("short", 320, true), "short");
/// ```
pub fn truncate(s: &str, max_len: usize, word_boundary: bool) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(1);
    let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
    let mut sub = &s[..end];

    if word_boundary {
        if let Some(space) = sub.rfind(' ') {
            sub = &sub[..space];
        }
    }

    format!("{sub}{ELLIPSIS}")
}
