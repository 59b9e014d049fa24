use std::collections::BTreeSet;

use super::model::GameRecord;

// ---------------------------------------------------------------------------
// Facet selection: which categories / genres the user has ticked
// ---------------------------------------------------------------------------

/// Selected facet values for the top-N view.
///
/// An empty set means "no filter" for that facet, not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub categories: BTreeSet<String>,
    pub genres: BTreeSet<String>,
}

impl FacetSelection {
    /// Whether `game` passes both facet filters.
    pub fn matches(&self, game: &GameRecord) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&game.price_category);
        let genre_ok = self.genres.is_empty() || game.has_any_genre(&self.genres);
        category_ok && genre_ok
    }

    /// No facet is restricted.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.genres.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.genres.clear();
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Indices of every game passing `selection`, in dataset order.
pub fn matching_indices(games: &[GameRecord], selection: &FacetSelection) -> Vec<usize> {
    games
        .iter()
        .enumerate()
        .filter(|(_, game)| selection.matches(game))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the `n` most-played games passing `selection`.
///
/// Ranked by current players, descending. `sort_by` is stable, so ties keep
/// dataset order.
pub fn top_indices(games: &[GameRecord], selection: &FacetSelection, n: usize) -> Vec<usize> {
    let mut indices = matching_indices(games, selection);
    indices.sort_by(|&a, &b| games[b].current_players.cmp(&games[a].current_players));
    indices.truncate(n);
    indices
}

/// The `n` most-played games whose price category is in `categories` and
/// whose genre tags intersect `genres`. Empty sets do not restrict.
pub fn top_by_category_and_genre<'a>(
    games: &'a [GameRecord],
    categories: &BTreeSet<String>,
    genres: &BTreeSet<String>,
    n: usize,
) -> Vec<&'a GameRecord> {
    let selection = FacetSelection {
        categories: categories.clone(),
        genres: genres.clone(),
    };
    top_indices(games, &selection, n)
        .into_iter()
        .map(|i| &games[i])
        .collect()
}

/// First game named exactly `name`.
pub fn lookup_by_name<'a>(games: &'a [GameRecord], name: &str) -> Option<&'a GameRecord> {
    games.iter().find(|game| game.name == name)
}

/// All games in `category`, in dataset order.
pub fn select_by_category<'a>(games: &'a [GameRecord], category: &str) -> Vec<&'a GameRecord> {
    games
        .iter()
        .filter(|game| game.price_category == category)
        .collect()
}

// ---------------------------------------------------------------------------
// Facet values
// ---------------------------------------------------------------------------

/// Every non-empty trimmed genre tag, deduplicated and sorted (case-sensitive).
pub fn distinct_genre_tags(games: &[GameRecord]) -> Vec<String> {
    games
        .iter()
        .flat_map(GameRecord::genres)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct price categories in first-seen order.
pub fn distinct_categories(games: &[GameRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for game in games {
        if !out.iter().any(|c| *c == game.price_category) {
            out.push(game.price_category.clone());
        }
    }
    out
}

/// Distinct game names, sorted ascending. Feeds the lookup picker.
pub fn sorted_names(games: &[GameRecord]) -> Vec<String> {
    games
        .iter()
        .map(|game| game.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::game;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn names(games: &[&GameRecord]) -> Vec<String> {
        games.iter().map(|g| g.name.clone()).collect()
    }

    fn two_games() -> Vec<GameRecord> {
        vec![
            game("A", 100, "Free", "Action, RPG"),
            game("B", 50, "Paid", "Action"),
        ]
    }

    fn catalogue() -> Vec<GameRecord> {
        vec![
            game("Counter", 900, "Free", "FPS, Shooter, Action"),
            game("Dota", 700, "Free", "MOBA, Strategy"),
            game("Elden", 300, "Paid", "RPG, Souls-like, Action"),
            game("Stardew", 300, "Paid", "Farming Sim, RPG"),
            game("Rust", 250, "Paid", "Survival, Action"),
            game("Warframe", 120, "Free", "Action, Looter Shooter"),
            game("Civ", 80, "Paid", "Strategy"),
            game("Untagged", 40, "Paid", ""),
        ]
    }

    #[test]
    fn category_only_filter() {
        let r = two_games();
        let top = top_by_category_and_genre(&r, &set(&["Free"]), &set(&[]), 10);
        assert_eq!(names(&top), vec!["A"]);
    }

    #[test]
    fn genre_only_filter() {
        let r = two_games();
        let top = top_by_category_and_genre(&r, &set(&[]), &set(&["RPG"]), 10);
        assert_eq!(names(&top), vec!["A"]);
    }

    #[test]
    fn category_and_genre_with_no_match_is_empty() {
        let r = two_games();
        let top = top_by_category_and_genre(&r, &set(&["Paid"]), &set(&["RPG"]), 10);
        assert!(top.is_empty());
    }

    #[test]
    fn lookup_missing_name_is_none() {
        let r = two_games();
        assert!(lookup_by_name(&r, "C").is_none());
        assert_eq!(lookup_by_name(&r, "B").map(|g| g.current_players), Some(50));
    }

    #[test]
    fn lookup_returns_first_duplicate() {
        let mut r = two_games();
        r.push(game("A", 1, "Paid", ""));
        assert_eq!(lookup_by_name(&r, "A").map(|g| g.current_players), Some(100));
    }

    #[test]
    fn distinct_tags_are_sorted() {
        assert_eq!(distinct_genre_tags(&two_games()), vec!["Action", "RPG"]);
    }

    #[test]
    fn distinct_tags_are_case_sensitive() {
        let r = vec![game("A", 1, "Free", "rpg, RPG"), game("B", 1, "Free", " RPG ")];
        assert_eq!(distinct_genre_tags(&r), vec!["RPG", "rpg"]);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let r = vec![
            game("A", 1, "Paid", ""),
            game("B", 1, "Free", ""),
            game("C", 1, "Paid", ""),
        ];
        assert_eq!(distinct_categories(&r), vec!["Paid", "Free"]);
    }

    #[test]
    fn empty_selection_passes_everything_through() {
        let r = catalogue();
        let top = top_by_category_and_genre(&r, &set(&[]), &set(&[]), 100);
        assert_eq!(top.len(), r.len());
    }

    #[test]
    fn result_is_truncated_to_n_and_ordered() {
        let r = catalogue();
        let top = top_by_category_and_genre(&r, &set(&[]), &set(&[]), 3);
        assert_eq!(names(&top), vec!["Counter", "Dota", "Elden"]);
        assert!(top.windows(2).all(|w| w[0].current_players >= w[1].current_players));
    }

    #[test]
    fn zero_n_is_empty() {
        let r = catalogue();
        assert!(top_by_category_and_genre(&r, &set(&[]), &set(&[]), 0).is_empty());
    }

    #[test]
    fn ties_keep_dataset_order() {
        let r = catalogue();
        let top = top_by_category_and_genre(&r, &set(&["Paid"]), &set(&["RPG"]), 10);
        assert_eq!(names(&top), vec!["Elden", "Stardew"]);

        let mut reversed = r.clone();
        reversed.swap(2, 3);
        let top = top_by_category_and_genre(&reversed, &set(&["Paid"]), &set(&["RPG"]), 10);
        assert_eq!(names(&top), vec!["Stardew", "Elden"]);
    }

    #[test]
    fn result_size_bounded_by_n_and_match_count() {
        let r = catalogue();
        let selections = [
            (set(&[]), set(&[])),
            (set(&["Free"]), set(&[])),
            (set(&[]), set(&["Action"])),
            (set(&["Paid"]), set(&["Strategy", "Survival"])),
            (set(&["Nope"]), set(&[])),
        ];
        for (cats, genres) in selections {
            let selection = FacetSelection {
                categories: cats.clone(),
                genres: genres.clone(),
            };
            let matching = matching_indices(&r, &selection).len();
            for n in [0, 1, 2, 5, 50] {
                let top = top_by_category_and_genre(&r, &cats, &genres, n);
                assert!(top.len() <= n);
                assert!(top.len() <= matching);
                assert_eq!(top.len(), n.min(matching));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let r = catalogue();
        let first = top_by_category_and_genre(&r, &set(&["Paid"]), &set(&["Action"]), 10);
        let second = top_by_category_and_genre(&r, &set(&["Paid"]), &set(&["Action"]), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn widening_selection_never_shrinks_matches() {
        let r = catalogue();
        let mut selection = FacetSelection {
            categories: set(&["Paid"]),
            genres: set(&["RPG"]),
        };
        let mut previous = matching_indices(&r, &selection).len();

        for genre in ["Action", "Strategy", "Survival"] {
            selection.genres.insert(genre.to_string());
            let now = matching_indices(&r, &selection).len();
            assert!(now >= previous);
            previous = now;
        }
        selection.categories.insert("Free".to_string());
        let now = matching_indices(&r, &selection).len();
        assert!(now >= previous);
    }

    #[test]
    fn categories_partition_the_dataset() {
        let r = catalogue();
        let mut seen: Vec<&str> = distinct_categories(&r)
            .iter()
            .flat_map(|c| {
                let picked = select_by_category(&r, c);
                assert!(picked.iter().all(|g| g.price_category == *c));
                picked
            })
            .map(|g| g.name.as_str())
            .collect();
        seen.sort_unstable();

        let mut all: Vec<&str> = r.iter().map(|g| g.name.as_str()).collect();
        all.sort_unstable();
        assert_eq!(seen, all);
    }

    #[test]
    fn select_by_category_keeps_order() {
        let r = catalogue();
        let paid = select_by_category(&r, "Paid");
        assert_eq!(
            names(&paid),
            vec!["Elden", "Stardew", "Rust", "Civ", "Untagged"]
        );
        assert!(select_by_category(&r, "Freemium").is_empty());
    }

    #[test]
    fn selection_clear_resets_both_facets() {
        let mut selection = FacetSelection {
            categories: set(&["Paid"]),
            genres: set(&["RPG"]),
        };
        assert!(!selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn sorted_names_dedupes() {
        let r = vec![game("b", 1, "Free", ""), game("a", 1, "Free", ""), game("b", 2, "Free", "")];
        assert_eq!(sorted_names(&r), vec!["a", "b"]);
    }
}
