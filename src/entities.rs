//! Decoding of XML character entities.
//!
//! XML predefines exactly five named entities. Anything else written as
//! `&name;` is an error at the lexer level, since DTD-defined entities are
//! not resolved (DTD content is skipped, not interpreted).

/// Resolve one of the five predefined XML entities to its character.
///
/// Returns `None` for any other name. The lexer treats `None` as fatal once
/// the terminating `;` has been seen; without the `;` the reference is kept
/// as literal text instead.
#[must_use]
pub fn decode_named_entity(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// Decode the digits of a numeric character reference.
///
/// `radix` is 10 for `&#65;` and 16 for `&#x41;`. Digits that do not parse,
/// or values that do not name a Unicode scalar value, decode to U+FFFD.
pub(crate) fn decode_numeric_entity(digits: &str, radix: u32) -> char {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('\u{fffd}')
}
