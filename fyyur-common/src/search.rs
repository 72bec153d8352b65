//! Name search helpers

use serde::Serialize;

/// Search hits plus their count
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }

    /// Keep the items whose name contains `term`, in their given order.
    ///
    /// Case is ignored on both sides with full Unicode folding. Every
    /// character of `term` is literal; there are no wildcards.
    pub fn matching<I, F>(items: I, term: &str, name: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> &str,
    {
        let term = term.to_lowercase();
        let data = items
            .into_iter()
            .filter(|item| name(item).to_lowercase().contains(&term))
            .collect();
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(names: &[&'static str], term: &str) -> Vec<&'static str> {
        SearchResults::matching(names.iter().copied(), term, |name: &&str| *name).data
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(search(&["The Musical Hop", ""], ""), vec!["The Musical Hop", ""]);
    }

    #[test]
    fn test_case_is_ignored_on_both_sides() {
        let names = ["The Musical Hop", "Café Ölhaus", "ÉCOLE DE MUSIQUE"];
        assert_eq!(search(&names, "hOP"), vec!["The Musical Hop"]);
        assert_eq!(search(&names, "CAFÉ"), vec!["Café Ölhaus"]);
        assert_eq!(search(&names, "ölhaus"), vec!["Café Ölhaus"]);
        assert_eq!(search(&names, "école"), vec!["ÉCOLE DE MUSIQUE"]);
        assert!(search(&names, "Park").is_empty());
    }

    #[test]
    fn test_wildcard_characters_are_literal() {
        let names = ["100% Jazz", "1000 Jazz"];
        assert_eq!(search(&names, "100%"), vec!["100% Jazz"]);
        assert!(search(&names, "1_0").is_empty());
    }

    #[test]
    fn test_matching_keeps_order_and_counts() {
        let results = SearchResults::matching(
            vec!["Park Square", "The Musical Hop", "Hop Inn"],
            "hop",
            |name: &&str| *name,
        );
        assert_eq!(results.count, 2);
        assert_eq!(results.data, vec!["The Musical Hop", "Hop Inn"]);
        assert_eq!(SearchResults::<u8>::new(Vec::new()).count, 0);
    }
}
