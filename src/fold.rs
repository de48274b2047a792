/// Maps a character to the key it is stored and looked up under.
///
/// Case-sensitive processors use characters as-is. Otherwise the character is
/// replaced by the first char of its lowercase form, so every input char maps
/// to exactly one edge (`'İ'` folds to `'i'`).
#[inline]
pub fn normalize(c: char, case_sensitive: bool) -> char {
    if case_sensitive || c.is_ascii_lowercase() {
        return c;
    }
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Applies [`normalize`] to every char of `word`.
pub fn normalize_str(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        return word.to_string();
    }
    word.chars().map(|c| normalize(c, false)).collect()
}
