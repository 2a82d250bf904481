/// Number of Unicode scalar values in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shorten `text` to `max_chars` characters, appending "..." when anything was cut
pub fn truncate_sample(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
