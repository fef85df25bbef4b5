//! Text normalization for accent- and case-insensitive search
//!
//! This module contains pure string logic with no I/O dependencies.
//! The same normalization is applied to profile names at load time and to
//! the user's query before comparison, so the two sides always agree.

/// Map an accented Latin-script character to its base letter
///
/// Covers the lowercase diacritics that appear in the profile data;
/// any other character passes through unchanged. Applying this twice is
/// the same as applying it once: no output character is itself accented.
const fn strip_accent(c: char) -> char {
    match c {
        'á' | 'ã' | 'â' | 'ä' | 'à' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ô' | 'õ' | 'ö' | 'ò' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        _ => c,
    }
}

/// Normalize text for search comparison
///
/// Lowercases, strips accent marks, and removes all whitespace.
/// Total function; idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .filter(|c| !c.is_whitespace())
        .collect()
}
