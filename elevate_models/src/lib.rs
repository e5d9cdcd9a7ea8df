use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod contact;
pub mod email_address;

/// Regex class body matching the same characters as [`is_whitespace`].
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Loose `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot
/// somewhere in the domain part.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let ws = WHITESPACE_CLASS;
    Regex::new(&format!("^[^{ws}@]+@[^{ws}@]+\\.[^{ws}@]+$")).unwrap()
});

/// Whitespace as the browser form sees it. Unlike [`char::is_whitespace`]
/// this includes U+FEFF and excludes U+0085.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Strip leading and trailing [`is_whitespace`] characters.
pub fn trim(value: String) -> String {
    let trimmed = value.trim_matches(is_whitespace);
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}

/// Wrapper that hides its content from `Debug` output.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[sensitive]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
