use crate::dataset::Catalog;
use crate::schedule::TrainSchedule;
use serde::{Deserialize, Serialize};

/// A source/destination query, as entered on the search screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub source: String,
    pub destination: String,
}

impl SearchQuery {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl Catalog {
    /// Trains running the queried corridor. Matching is case-insensitive on
    /// full station names.
    pub fn search(&self, query: &SearchQuery) -> Vec<&TrainSchedule> {
        self.trains()
            .iter()
            .filter(|t| {
                t.source.eq_ignore_ascii_case(&query.source)
                    && t.destination.eq_ignore_ascii_case(&query.destination)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_corridor() {
        let catalog = Catalog::load().unwrap();
        let hits = catalog.search(&SearchQuery::new("Colombo Fort", "Badulla"));
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|t| t.destination == "Badulla"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::load().unwrap();
        let hits = catalog.search(&SearchQuery::new("colombo fort", "KANDY"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kandy Intercity");
    }

    #[test]
    fn test_search_unknown_corridor_is_empty() {
        let catalog = Catalog::load().unwrap();
        let hits = catalog.search(&SearchQuery::new("Kandy", "Galle"));
        assert!(hits.is_empty());
    }
}
