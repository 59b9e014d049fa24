use steam_dashboard::data::filter::{self, FacetSelection};
use steam_dashboard::data::{GameDataset, GameRecord, PlayerMetric};

use crate::color::CategoryColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Price category the trends tab is restricted to.
pub const PAID_CATEGORY: &str = "Paid";

/// The three dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    TopGames,
    GameStatistics,
    PaidTrends,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::TopGames, Tab::GameStatistics, Tab::PaidTrends];

    /// Tab strip label; the first tab names how many games it charts.
    pub fn title(self, top_n: usize) -> String {
        match self {
            Tab::TopGames => format!("Top {top_n} Games"),
            Tab::GameStatistics => "Game Statistics".to_string(),
            Tab::PaidTrends => "Paid Games Trends".to_string(),
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<GameDataset>,

    pub tab: Tab,

    /// Price category / genre checkboxes of the top chart.
    pub selection: FacetSelection,

    /// How many games the top chart shows.
    pub top_n: usize,

    /// Indices of the top games under the current selection (cached).
    pub top_indices: Vec<usize>,

    /// Name picked in the statistics tab.
    pub selected_game: Option<String>,

    /// Text narrowing the statistics tab's name picker.
    pub search: String,

    /// Y axis of the trends scatter.
    pub metric: PlayerMetric,

    /// Price category → colour.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl AppState {
    pub fn new(top_n: usize) -> Self {
        Self {
            dataset: None,
            tab: Tab::default(),
            selection: FacetSelection::default(),
            top_n,
            top_indices: Vec::new(),
            selected_game: None,
            search: String::new(),
            metric: PlayerMetric::default(),
            colors: CategoryColors::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset every selection.
    pub fn set_dataset(&mut self, dataset: GameDataset) {
        self.selection.clear();
        self.colors = CategoryColors::new(&dataset.categories);
        // The original picker defaults to the first name alphabetically.
        self.selected_game = dataset.names.first().cloned();
        self.search.clear();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `top_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.top_indices = filter::top_indices(&ds.games, &self.selection, self.top_n);
            log::debug!(
                "Top games recomputed: {} shown for {:?}",
                self.top_indices.len(),
                self.selection
            );
        }
    }

    /// Cached top games, in chart order.
    pub fn top_games(&self) -> Vec<&GameRecord> {
        match &self.dataset {
            Some(ds) => self.top_indices.iter().map(|&i| &ds.games[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Toggle a price category checkbox.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.selection.categories, category);
        self.refilter();
    }

    /// Toggle a genre tag checkbox.
    pub fn toggle_genre(&mut self, genre: &str) {
        toggle(&mut self.selection.genres, genre);
        self.refilter();
    }

    /// Untick everything (show all games).
    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.refilter();
    }

    /// The game picked in the statistics tab, if it exists.
    pub fn selected_record(&self) -> Option<&GameRecord> {
        let ds = self.dataset.as_ref()?;
        let name = self.selected_game.as_deref()?;
        filter::lookup_by_name(&ds.games, name)
    }

    /// Names offered by the picker: case-insensitive substring match on `search`.
    pub fn picker_names(&self) -> Vec<&str> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        let needle = self.search.trim().to_lowercase();
        ds.names
            .iter()
            .map(String::as_str)
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Games plotted on the trends tab.
    pub fn paid_games(&self) -> Vec<&GameRecord> {
        match &self.dataset {
            Some(ds) => filter::select_by_category(&ds.games, PAID_CATEGORY),
            None => Vec::new(),
        }
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
