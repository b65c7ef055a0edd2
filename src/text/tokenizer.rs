/// Split cleaned text into word tokens.
///
/// Input is expected to come from [`clean_text`](super::cleaner::clean_text),
/// so whitespace is the only separator left.
pub fn tokenize(clean: &str) -> Vec<String> {
    clean.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        assert_eq!(
            tokenize("la calidad docente"),
            vec!["la", "calidad", "docente"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
