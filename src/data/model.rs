use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// GameRecord – one row of the cleaned table
// ---------------------------------------------------------------------------

/// A single game (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Display label and lookup key.
    pub name: String,
    pub current_players: u64,
    pub peak_today: u64,
    /// Price in the store's currency, always finite and non-negative.
    pub price: f64,
    /// Price class label such as `"Free"` or `"Paid"`.
    pub price_category: String,
    /// Raw comma-separated genre list, e.g. `"Action, RPG"`.
    pub genre_tags: String,
    pub store_link: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl GameRecord {
    /// Iterate the trimmed, non-empty genre tags of this game.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre_tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Whether any of this game's tags is in `selected`.
    pub fn has_any_genre(&self, selected: &BTreeSet<String>) -> bool {
        self.genres().any(|tag| selected.contains(tag))
    }
}

// ---------------------------------------------------------------------------
// PlayerMetric – which player count a view plots
// ---------------------------------------------------------------------------

/// The player-count column a chart or aggregate is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMetric {
    #[default]
    CurrentPlayers,
    PeakToday,
}

impl PlayerMetric {
    pub const ALL: [PlayerMetric; 2] = [PlayerMetric::CurrentPlayers, PlayerMetric::PeakToday];

    /// Read this metric off a record.
    pub fn value(self, game: &GameRecord) -> u64 {
        match self {
            PlayerMetric::CurrentPlayers => game.current_players,
            PlayerMetric::PeakToday => game.peak_today,
        }
    }

    /// Column name, also used as the axis title.
    pub fn label(self) -> &'static str {
        match self {
            PlayerMetric::CurrentPlayers => "Current Players",
            PlayerMetric::PeakToday => "Peak Today",
        }
    }
}

impl fmt::Display for PlayerMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// GameDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed facet indices.
///
/// Immutable once built; a new file replaces the whole value.
#[derive(Debug, Clone, Default)]
pub struct GameDataset {
    /// All games in file order.
    pub games: Vec<GameRecord>,
    /// Distinct price categories, first-seen order.
    pub categories: Vec<String>,
    /// Distinct genre tags, sorted ascending.
    pub genre_tags: Vec<String>,
    /// Distinct game names, sorted ascending.
    pub names: Vec<String>,
}

impl GameDataset {
    /// Build facet indices from the loaded games.
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        use super::filter::{distinct_categories, distinct_genre_tags, sorted_names};

        let mut seen = BTreeSet::new();
        for game in &games {
            if !seen.insert(game.name.as_str()) {
                log::warn!(
                    "Duplicate game name {:?}; lookups will return the first occurrence",
                    game.name
                );
            }
        }

        GameDataset {
            categories: distinct_categories(&games),
            genre_tags: distinct_genre_tags(&games),
            names: sorted_names(&games),
            games,
        }
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Compact record builder for tests across the data layer.
    pub(crate) fn game(name: &str, players: u64, category: &str, genres: &str) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            current_players: players,
            peak_today: players * 2,
            price: if category == "Free" { 0.0 } else { 19.99 },
            price_category: category.to_string(),
            genre_tags: genres.to_string(),
            store_link: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn genres_are_split_and_trimmed() {
        let g = game("A", 1, "Free", " Action ,RPG,, ,Open World");
        let tags: Vec<&str> = g.genres().collect();
        assert_eq!(tags, vec!["Action", "RPG", "Open World"]);
    }

    #[test]
    fn empty_genre_string_has_no_tags() {
        let g = game("A", 1, "Free", "");
        assert_eq!(g.genres().count(), 0);
        assert!(!g.has_any_genre(&BTreeSet::from(["Action".to_string()])));
    }

    #[test]
    fn metric_reads_matching_column() {
        let g = game("A", 10, "Paid", "Action");
        assert_eq!(PlayerMetric::CurrentPlayers.value(&g), 10);
        assert_eq!(PlayerMetric::PeakToday.value(&g), 20);
        assert_eq!(PlayerMetric::PeakToday.to_string(), "Peak Today");
    }

    #[test]
    fn dataset_builds_facet_indices() {
        let ds = GameDataset::from_games(vec![
            game("Zeta", 5, "Paid", "Shooter, Action"),
            game("Alpha", 9, "Free", "RPG"),
            game("Mid", 1, "Paid", ""),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.categories, vec!["Paid", "Free"]);
        assert_eq!(ds.genre_tags, vec!["Action", "RPG", "Shooter"]);
        assert_eq!(ds.names, vec!["Alpha", "Mid", "Zeta"]);
    }
}
