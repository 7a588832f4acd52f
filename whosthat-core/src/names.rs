//! Name normalization and display helpers.

/// Lowercase and strip everything outside `a-z`.
///
/// Used for both guess comparison and suggestion matching, so
/// "Mr. Mime", "mr-mime" and "MRMIME" all compare equal.
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Mr. Mime"), "mrmime");
        assert_eq!(normalize("mrmime"), "mrmime");
        assert_eq!(normalize("MR-MIME"), "mrmime");
        assert_eq!(normalize("Farfetch'd"), "farfetchd");
        assert_eq!(normalize("Porygon2"), "porygon");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["Mr. Mime", "Ho-Oh", "nidoran-f", "  Pikachu! ", ""] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Flabébé"), "flabb");
        assert_eq!(normalize("Nidoran♀"), "nidoran");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }
}
