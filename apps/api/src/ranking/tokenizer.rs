/// Tokenize text: lowercase, split on non-alphanumeric characters, discard
/// single-character tokens. No stop word removal and no stemming — the
/// vocabulary is whatever the corpus contains.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() > 1)
        .map(str::to_string)
        .collect()
}
