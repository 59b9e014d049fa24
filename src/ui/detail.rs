use eframe::egui::{self, RichText, Ui};

use steam_dashboard::format::{currency, thousands};

use crate::state::AppState;
use crate::ui::{metric, placeholder};

// ---------------------------------------------------------------------------
// Per-game statistics (central panel, second tab)
// ---------------------------------------------------------------------------

/// Render the name picker and the selected game's details.
pub fn game_statistics(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Game Statistics");

    if state.dataset.is_none() {
        placeholder(ui, "Open a file to view games  (File → Open…)");
        return;
    }

    name_picker(ui, state);
    ui.separator();

    let Some(game) = state.selected_record() else {
        placeholder(ui, "No game selected.");
        return;
    };

    match &game.store_link {
        Some(link) => {
            ui.hyperlink_to(RichText::new(&game.name).heading().strong(), link);
        }
        None => {
            ui.label(RichText::new(&game.name).heading().strong());
        }
    }

    if let Some(url) = &game.thumbnail_url {
        ui.add(egui::Image::from_uri(url.as_str()).max_width(300.0));
    }
    ui.add_space(8.0);

    ui.columns(2, |cols| {
        metric(&mut cols[0], "Current Players", thousands(game.current_players));
        metric(&mut cols[0], "Price Category", game.price_category.as_str());
        metric(&mut cols[0], "Price", currency("$", game.price));

        metric(&mut cols[1], "Peak Today", thousands(game.peak_today));
        cols[1].label(RichText::new("Genres:").weak());
        let genres = game.genres().collect::<Vec<_>>().join(", ");
        cols[1].label(if genres.is_empty() { "—".to_string() } else { genres });
    });

    ui.separator();
}

/// Search box plus combo box over the sorted game names.
fn name_picker(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select a game");
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text("Search…")
                .desired_width(180.0),
        );
    });

    let names: Vec<String> = state.picker_names().into_iter().map(str::to_string).collect();
    let current = state.selected_game.clone().unwrap_or_default();

    egui::ComboBox::from_id_salt("game_picker")
        .selected_text(current.as_str())
        .width(320.0)
        .show_ui(ui, |ui: &mut Ui| {
            if names.is_empty() {
                ui.label("No matching games.");
            }
            for name in names {
                let is_current = name == current;
                if ui.selectable_label(is_current, name.as_str()).clicked() {
                    state.selected_game = Some(name);
                }
            }
        });
}
