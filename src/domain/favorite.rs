// src/domain/favorite.rs
//
// Favorite flag storage encoding.
// Flags are persisted as the strings "true" / "false".

const TRUE_VALUE: &str = "true";
const FALSE_VALUE: &str = "false";

/// Encode a flag for storage
pub fn encode_favorite(is_favorite: bool) -> &'static str {
    if is_favorite {
        TRUE_VALUE
    } else {
        FALSE_VALUE
    }
}

/// Decode a stored flag.
///
/// An empty string counts as absent. Only "true" is true; any other
/// non-empty value reads as false.
pub fn decode_favorite(stored: &str) -> Option<bool> {
    if stored.is_empty() {
        None
    } else {
        Some(stored == TRUE_VALUE)
    }
}
