use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – facet filters (top games tab only)
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let categories = dataset.categories.clone();
    let genres = dataset.genre_tags.clone();

    if ui
        .add_enabled(!state.selection.is_empty(), egui::Button::new("Clear filters"))
        .clicked()
    {
        state.clear_filters();
    }
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let header = format!(
                "Select Price Category  ({}/{})",
                state.selection.categories.len(),
                categories.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("price_category")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for category in &categories {
                        let mut checked = state.selection.categories.contains(category);
                        let text = RichText::new(category).color(state.colors.color_for(category));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_category(category);
                        }
                    }
                });

            let header = format!(
                "Select Genre Tag  ({}/{})",
                state.selection.genres.len(),
                genres.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("genre_tag")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for genre in &genres {
                        let mut checked = state.selection.genres.contains(genre);
                        if ui.checkbox(&mut checked, genre.as_str()).changed() {
                            state.toggle_genre(genre);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, tab strip and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for tab in Tab::ALL {
            let title = tab.title(state.top_n);
            ui.selectable_value(&mut state.tab, tab, title);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} games loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Steam games table")
        .add_filter("Supported files", &["csv", "tsv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv", "tsv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match steam_dashboard::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                // The previous dataset, if any, stays in place.
                log::error!("Failed to load {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
