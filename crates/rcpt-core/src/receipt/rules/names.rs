//! Item name cleanup.

use super::patterns::{NAME_DISALLOWED, NAME_LABEL_PREFIX, NAME_UNIT_SUFFIX, WHITESPACE_RUN};

/// Shortest item name (in characters) kept after cleanup.
pub const MIN_NAME_LEN: usize = 2;

/// Normalize what is left of a line after price and quantity removal.
///
/// Keeps letters, digits, spaces, hyphens and ampersands; drops a leading
/// `item`/`product` label and a trailing unit word (`each`, `ea`, `pc`,
/// `pcs`); title-cases the result.
pub fn clean_item_name(raw: &str) -> String {
    let name = collapse_whitespace(raw);
    let name = NAME_DISALLOWED.replace_all(&name, "");
    let name = collapse_whitespace(&name);
    let name = NAME_LABEL_PREFIX.replace(&name, "");
    let name = NAME_UNIT_SUFFIX.replace(&name, "");

    title_case(&name).trim().to_string()
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Uppercase the first cased character of every run of cased characters and
/// lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if !cased {
            out.push(c);
        } else if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }

    out
}
