//! Delimiter-scanning primitives for encoded names.
//!
//! Every accessor in [`crate::names`] is built on the two functions in this module:
//! [`find_next`], which searches for a delimiter while stepping over bracketed regions, and
//! [`find_corresponding_close_bracket`], which matches an opening bracket to its close at any
//! nesting depth. No accessor counts brackets on its own, so the matching rules below are the
//! single source of truth for what "top-level" means in an identifier.
//!
//! # Matching Rules
//!
//! - `[` pairs with `]` and `(` pairs with `)`; only brackets of the same kind affect the depth
//!   while a match is searched.
//! - A target character that occurs inside a skipped region is never reported.
//! - Unbalanced input yields `None`, which callers treat as a malformed identifier.
//!
//! All indices are byte offsets. The delimiters are ASCII, so every returned index is a valid
//! `char` boundary of the scanned string.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::scan::{find_corresponding_close_bracket, find_next};
//!
//! let id = "Some.Type`1[[T -> Other.Type, A]], B, 1.2.3.4";
//! let open = id.find('[').unwrap();
//! let close = find_corresponding_close_bracket(id, open).unwrap();
//! assert_eq!(&id[open..=close], "[[T -> Other.Type, A]]");
//!
//! // the comma inside the generic argument list is not top-level
//! assert_eq!(find_next(id, 0, b","), Some(close + 1));
//! ```

/// Returns the bracket that closes (or opens) `c`, if `c` is one of `[]()`.
#[must_use]
pub fn corresponding(c: u8) -> Option<u8> {
    match c {
        b'[' => Some(b']'),
        b']' => Some(b'['),
        b'(' => Some(b')'),
        b')' => Some(b'('),
        _ => None,
    }
}

/// Finds the next top-level occurrence of any of `targets`, starting at `from`.
///
/// An opening `[` or `(` that is not itself a target is skipped together with its whole
/// bracketed region, so targets nested inside brackets are never matched.
///
/// # Arguments
/// * `s` - The string to scan
/// * `from` - Byte offset to start scanning at (inclusive)
/// * `targets` - ASCII characters to look for
///
/// # Returns
/// The byte offset of the match, or `None` if the end of the string is reached or a skipped
/// region is not closed.
#[must_use]
pub fn find_next(s: &str, from: usize, targets: &[u8]) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut index = from;
    while index < bytes.len() {
        let c = bytes[index];
        if targets.contains(&c) {
            return Some(index);
        }
        if c == b'[' || c == b'(' {
            index = find_corresponding_close_bracket(s, index)?;
        }
        index += 1;
    }
    None
}

/// Finds the bracket that closes the one at `open`.
///
/// Scans forward with a depth counter that is incremented on brackets of the same kind as the
/// opening one and decremented on the matching close.
///
/// # Arguments
/// * `s` - The string to scan
/// * `open` - Byte offset of a `[` or `(`
///
/// # Returns
/// The byte offset of the balancing close, or `None` if `open` does not point at an opening
/// bracket or the bracket is never closed.
#[must_use]
pub fn find_corresponding_close_bracket(s: &str, open: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let open_char = *bytes.get(open)?;
    if open_char != b'[' && open_char != b'(' {
        return None;
    }
    let close_char = corresponding(open_char)?;

    let mut depth = 0usize;
    for (index, &c) in bytes.iter().enumerate().skip(open) {
        if c == open_char {
            depth += 1;
        } else if c == close_char {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Finds the bracket that opens the one at `close`, scanning backwards.
///
/// # Returns
/// The byte offset of the balancing open, or `None` if `close` does not point at a closing
/// bracket or the bracket is never opened.
#[must_use]
pub fn find_corresponding_open_bracket(s: &str, close: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let close_char = *bytes.get(close)?;
    if close_char != b']' && close_char != b')' {
        return None;
    }
    let open_char = corresponding(close_char)?;

    let mut depth = 0usize;
    for index in (0..=close).rev() {
        let c = bytes[index];
        if c == close_char {
            depth += 1;
        } else if c == open_char {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Splits the content of the bracket pair `open`/`close` at its top-level commas.
///
/// Returns the byte ranges of the fragments, untrimmed. An empty or whitespace-only content
/// yields no fragments.
///
/// # Returns
/// `None` if `open`/`close` is not a matching pair or the content is unbalanced.
#[must_use]
pub fn split_top_level(s: &str, open: usize, close: usize) -> Option<Vec<(usize, usize)>> {
    if find_corresponding_close_bracket(s, open)? != close {
        return None;
    }
    if s[open + 1..close].trim().is_empty() {
        return Some(Vec::new());
    }

    let closing = s.as_bytes()[close];
    let mut fragments = Vec::new();
    let mut start = open + 1;
    loop {
        let end = find_next(s, start, &[b',', closing])?;
        if end > close {
            return None;
        }
        fragments.push((start, end));
        if end == close {
            return Some(fragments);
        }
        start = end + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_bracket_simple() {
        let s = "[a]";
        assert_eq!(find_corresponding_close_bracket(s, 0), Some(2));
        assert_eq!(find_corresponding_close_bracket("(x, y)", 0), Some(5));
    }

    #[test]
    fn test_close_bracket_nested_generics() {
        let s = "Some.Type`1[[T -> Other.Type, A]], B, 1.2.3.4";
        let open = s.find('[').unwrap();
        let close = find_corresponding_close_bracket(s, open).unwrap();
        assert_eq!(&s[close + 1..], ", B, 1.2.3.4");
        assert_eq!(&s[open..=close], "[[T -> Other.Type, A]]");

        let inner = find_corresponding_close_bracket(s, open + 1).unwrap();
        assert_eq!(inner, close - 1);
    }

    #[test]
    fn test_close_bracket_deep() {
        let s = "[[[[[x]]]]]";
        assert_eq!(find_corresponding_close_bracket(s, 0), Some(10));
        assert_eq!(find_corresponding_close_bracket(s, 2), Some(8));
    }

    #[test]
    fn test_close_bracket_ignores_other_kind() {
        let s = "([T] p, [U] q)";
        assert_eq!(find_corresponding_close_bracket(s, 0), Some(13));
        assert_eq!(find_corresponding_close_bracket(s, 1), Some(3));
    }

    #[test]
    fn test_close_bracket_invalid() {
        assert_eq!(find_corresponding_close_bracket("abc", 1), None);
        assert_eq!(find_corresponding_close_bracket("[[a]", 0), None);
        assert_eq!(find_corresponding_close_bracket("[a]", 7), None);
    }

    #[test]
    fn test_open_bracket() {
        let s = "M([A, B] a, [C] c)";
        let close = s.len() - 1;
        assert_eq!(find_corresponding_open_bracket(s, close), Some(1));
        assert_eq!(find_corresponding_open_bracket(s, 7), Some(2));
        assert_eq!(find_corresponding_open_bracket("a]", 1), None);
        assert_eq!(find_corresponding_open_bracket("abc", 1), None);
    }

    #[test]
    fn test_find_next_skips_brackets() {
        let s = "[A, B] [C, D].N";
        assert_eq!(find_next(s, 0, b","), None);
        assert_eq!(find_next(s, 0, b"."), Some(13));
        assert_eq!(find_next(s, 1, b","), Some(2));
    }

    #[test]
    fn test_find_next_reports_bracket_targets() {
        let s = "abc[def]";
        assert_eq!(find_next(s, 0, b"["), Some(3));
        assert_eq!(find_next(s, 4, b"]"), Some(7));
    }

    #[test]
    fn test_find_next_unbalanced() {
        assert_eq!(find_next("a[b, c", 0, b","), None);
        assert_eq!(find_next("", 0, b","), None);
        assert_eq!(find_next("abc", 10, b","), None);
    }

    #[test]
    fn test_split_top_level() {
        let s = "(out [ParameterType, AnAssembly, Version=1.2.3.4] param0)";
        let parts = split_top_level(s, 0, s.len() - 1).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(
            &s[parts[0].0..parts[0].1],
            "out [ParameterType, AnAssembly, Version=1.2.3.4] param0"
        );

        let s = "([A, a, 1.0.0.0] x, [B`1[[T -> C, c, 1.0.0.0]], b, 1.0.0.0] y)";
        let parts = split_top_level(s, 0, s.len() - 1).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(s[parts[1].0..parts[1].1].trim(), "[B`1[[T -> C, c, 1.0.0.0]], b, 1.0.0.0] y");
    }

    #[test]
    fn test_split_top_level_empty() {
        assert_eq!(split_top_level("()", 0, 1), Some(Vec::new()));
        assert_eq!(split_top_level("(  )", 0, 3), Some(Vec::new()));
        assert_eq!(split_top_level("(a))", 0, 3), None);
    }
}
