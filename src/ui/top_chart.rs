use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use steam_dashboard::format::{currency, thousands};

use crate::color::faded;
use crate::state::AppState;
use crate::ui::placeholder;

// ---------------------------------------------------------------------------
// Top games bar chart (central panel, first tab)
// ---------------------------------------------------------------------------

/// Render the top-N bar chart: peak bars behind current-player bars.
pub fn top_games_chart(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("Top {} Played Games on Steam", state.top_n));

    if state.dataset.is_none() {
        placeholder(ui, "Open a file to view games  (File → Open…)");
        return;
    }

    let games = state.top_games();
    if games.is_empty() {
        placeholder(ui, "No games found matching the selected filters.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        for (category, color) in state.colors.legend_entries() {
            ui.label(RichText::new(format!("■ {category}")).color(color));
        }
    });

    let peak_bars: Vec<Bar> = games
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.peak_today as f64)
                .name(&g.name)
                .width(0.7)
                .fill(faded(state.colors.color_for(&g.price_category)))
        })
        .collect();

    let current_bars: Vec<Bar> = games
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.current_players as f64)
                .name(format!(
                    "{}\n{} · {}",
                    g.name,
                    g.price_category,
                    currency("$", g.price)
                ))
                .width(0.5)
                .fill(state.colors.color_for(&g.price_category))
        })
        .collect();

    let peak = BarChart::new(peak_bars)
        .name("Peak Today")
        .element_formatter(Box::new(|bar, _| {
            format!("{}\nPeak Today: {}", bar.name, thousands(bar.value as u64))
        }));
    let current = BarChart::new(current_bars)
        .name("Current Players")
        .element_formatter(Box::new(|bar, _| {
            format!("{}\nCurrent Players: {}", bar.name, thousands(bar.value as u64))
        }));

    let labels: Vec<String> = games.iter().map(|g| g.name.clone()).collect();

    Plot::new("top_games_plot")
        .legend(Legend::default())
        .height(400.0)
        .x_axis_label("Game Name")
        .y_axis_label("Player Count")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| thousands(mark.value.max(0.0) as u64))
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(peak);
            plot_ui.bar_chart(current);
        });
}
