use std::iter::once;

/// Every non-empty prefix of `word`, shortest first.
///
/// Prefixes are cut on character boundaries, so a word of `n` characters
/// yields exactly `n` prefixes and the last one is the word itself.
pub fn abbreviate(word: &str) -> Vec<&str> {
    word.char_indices()
        .skip(1)
        .map(|(pos, _)| pos)
        .chain(once(word.len()))
        .filter(|&end| end > 0)
        .map(|end| &word[..end])
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::abbrev::abbreviate;

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("Jane"), vec!["J", "Ja", "Jan", "Jane"]);
        assert_eq!(abbreviate("X"), vec!["X"]);
    }

    #[test]
    fn test_prefix_lengths() {
        let word = "Abbreviation";
        let prefixes = abbreviate(word);
        assert_eq!(prefixes.len(), word.len());
        for (i, prefix) in prefixes.iter().enumerate() {
            assert_eq!(prefix.len(), i + 1);
            assert!(word.starts_with(prefix));
        }
        assert_eq!(prefixes.last(), Some(&word));
    }

    #[test]
    fn test_multibyte_boundaries() {
        assert_eq!(abbreviate("Zoë"), vec!["Z", "Zo", "Zoë"]);
        assert_eq!(abbreviate("Ñúñez").len(), 5);
    }

    #[test]
    fn test_empty_word() {
        assert!(abbreviate("").is_empty());
    }
}
