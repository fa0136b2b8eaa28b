//! Straight-to-typographic quote substitution
//!
//! Double quotes close when they follow a word or sentence punctuation and
//! open everywhere else. Single quotes open after a space or at the start
//! of the text and otherwise close, which turns contraction and possessive
//! apostrophes into `’`.

pub const LEFT_DOUBLE: char = '“';
pub const RIGHT_DOUBLE: char = '”';
pub const LEFT_SINGLE: char = '‘';
pub const RIGHT_SINGLE: char = '’';

/// Characters after which a straight double quote is a closing quote
#[inline]
fn closes_double(prev: char) -> bool {
    prev.is_ascii_alphanumeric() || matches!(prev, '.' | ',' | '?' | '!' | ';' | ':' | '\'' | '"')
}

/// Replace ASCII `"` and `'` with directional quotation marks
///
/// Context is always read from the original text, so a quote that has
/// already been replaced still counts as a straight quote for its
/// neighbour.
pub fn smart_quotes(text: &str) -> String {
    if !text.contains(['"', '\'']) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        let replaced = match ch {
            '"' => match prev {
                Some(p) if closes_double(p) => RIGHT_DOUBLE,
                _ => LEFT_DOUBLE,
            },
            '\'' => match prev {
                None | Some(' ') => LEFT_SINGLE,
                Some(_) => RIGHT_SINGLE,
            },
            other => other,
        };
        out.push(replaced);
        prev = Some(ch);
    }

    out
}

/// True for any straight or typographic quotation mark
#[inline]
pub fn is_quote(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | LEFT_DOUBLE | RIGHT_DOUBLE | LEFT_SINGLE | RIGHT_SINGLE
    )
}
