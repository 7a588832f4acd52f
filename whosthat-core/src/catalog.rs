//! The ordered list of names used for autocomplete.

use crate::config::GenerationLimit;
use crate::names::normalize;

/// How many names are requested from the catalog API at startup.
pub const MAX_CATALOG_SIZE: u32 = 251;

/// Maximum number of suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Catalog names in API order.
///
/// The name at index `i` belongs to the entity with id `i + 1`.
/// Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up the name for a 1-based id.
    pub fn name_for(&self, id: u32) -> Option<&str> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.names.get(index).map(String::as_str)
    }

    /// Find the id of a name, comparing normalized forms.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        let wanted = normalize(name);
        self.names
            .iter()
            .position(|n| normalize(n) == wanted)
            .and_then(|i| u32::try_from(i + 1).ok())
    }

    /// Names whose normalized form contains the normalized query.
    ///
    /// Scans in catalog order over the first `limit` entries and stops
    /// after [`MAX_SUGGESTIONS`] matches. An empty query yields nothing.
    pub fn suggestions(&self, query: &str, limit: GenerationLimit) -> Vec<String> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let in_play = usize::try_from(limit.get()).unwrap_or(usize::MAX);
        self.names
            .iter()
            .take(in_play)
            .filter(|name| normalize(name).contains(&query))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GEN_ONE_SAMPLE;

    fn sample() -> Catalog {
        Catalog::new(GEN_ONE_SAMPLE.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_saur_within_first_ten() {
        let suggestions = sample().suggestions("saur", GenerationLimit::new(10));
        assert_eq!(suggestions, ["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let catalog = sample();
        assert!(catalog.suggestions("", GenerationLimit::GEN_2).is_empty());
        assert!(catalog.suggestions(" .-! ", GenerationLimit::GEN_2).is_empty());
    }

    #[test]
    fn test_suggestions_capped_at_eight() {
        let catalog = sample();
        let suggestions = catalog.suggestions("a", GenerationLimit::GEN_2);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.contains('a')));
        // Order follows the catalog.
        assert_eq!(suggestions[0], "bulbasaur");
    }

    #[test]
    fn test_suggestions_respect_limit() {
        let catalog = sample();
        assert_eq!(
            catalog.suggestions("char", GenerationLimit::new(4)),
            ["charmander"]
        );
        assert_eq!(
            catalog.suggestions("char", GenerationLimit::new(6)),
            ["charmander", "charmeleon", "charizard"]
        );
        assert!(catalog.suggestions("pie", GenerationLimit::new(9)).is_empty());
    }

    #[test]
    fn test_query_is_normalized() {
        let catalog = Catalog::new(vec!["mr-mime".to_string(), "mime-jr".to_string()]);
        assert_eq!(
            catalog.suggestions("Mr. M", GenerationLimit::GEN_2),
            ["mr-mime"]
        );
        assert_eq!(
            catalog.suggestions("MIME", GenerationLimit::GEN_2),
            ["mr-mime", "mime-jr"]
        );
    }

    #[test]
    fn test_empty_catalog_degrades_to_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.suggestions("saur", GenerationLimit::GEN_2).is_empty());
    }

    #[test]
    fn test_id_mapping() {
        let catalog = sample();
        assert_eq!(catalog.names().len(), GEN_ONE_SAMPLE.len());
        assert_eq!(catalog.names()[3], "charmander");
        assert_eq!(catalog.name_for(1), Some("bulbasaur"));
        assert_eq!(catalog.name_for(4), Some("charmander"));
        assert_eq!(catalog.name_for(0), None);
        assert_eq!(catalog.name_for(999), None);
        assert_eq!(catalog.id_of("Charmander"), Some(4));
        assert_eq!(catalog.id_of("missingno"), None);
    }
}
