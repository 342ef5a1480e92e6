//! Reversible substitutions that keep string content inside one token.
//!
//! Substitution order is part of the wire format and must not change.
//! Escaping is injective only for strings free of [`ESCAPE`] characters.
//! An escape character in the input is read back as a delimiter.

use alloc::string::{String, ToString};

use crate::wire::{DELIMITER, EMPTY, ESCAPE, NULL};

/// Escapes string into a token free of delimiters and bare sentinels.
/// Empty string becomes [`EMPTY`] sentinel.
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return EMPTY.to_string();
    }

    let escape1 = ESCAPE.to_string();
    let escape2 = escape1.repeat(2);
    let escape4 = escape1.repeat(4);
    let delimiter1 = DELIMITER.to_string();
    let delimiter2 = delimiter1.repeat(2);

    text.replace(&escape1, &escape2)
        .replace(&delimiter2, &escape4)
        .replace(&delimiter1, &escape1)
        .replace(NULL, &NULL.repeat(2))
        .replace(EMPTY, &EMPTY.repeat(2))
}

/// Reverses [`escape`].
pub fn unescape(token: &str) -> String {
    if token == EMPTY {
        return String::new();
    }

    let escape1 = ESCAPE.to_string();

    token
        .replace(&escape1.repeat(2), &escape1)
        .replace(&escape1, &DELIMITER.to_string())
        .replace(&NULL.repeat(2), NULL)
        .replace(&EMPTY.repeat(2), EMPTY)
}
