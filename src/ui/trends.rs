use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoint, Points};

use steam_dashboard::data::PlayerMetric;
use steam_dashboard::data::stats::{PaidSummary, axis_upper_bound};
use steam_dashboard::format::{currency, thousands};

use crate::color::STEEL_BLUE;
use crate::state::AppState;
use crate::ui::{metric, placeholder};

// ---------------------------------------------------------------------------
// Price vs popularity of paid games (central panel, third tab)
// ---------------------------------------------------------------------------

pub fn paid_trends(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Paid Games Analysis");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Player Count Metric");
        for m in PlayerMetric::ALL {
            ui.radio_value(&mut state.metric, m, m.label());
        }
    });

    if state.dataset.is_none() {
        placeholder(ui, "Open a file to view games  (File → Open…)");
        return;
    }

    let metric_kind = state.metric;
    let paid = state.paid_games();
    let Some(summary) = PaidSummary::compute(&paid, metric_kind) else {
        placeholder(ui, "No paid games in this dataset.");
        return;
    };

    let points: Vec<[f64; 2]> = paid
        .iter()
        .map(|g| [g.price, metric_kind.value(g) as f64])
        .collect();
    let prices: Vec<f64> = points.iter().map(|p| p[0]).collect();
    let players: Vec<f64> = points.iter().map(|p| p[1]).collect();
    let x_max = axis_upper_bound(&prices).unwrap_or(1.0).max(1.0);
    let y_max = axis_upper_bound(&players).unwrap_or(1.0).max(1.0);

    // Hover label: the game nearest to the cursor in axis-normalised space.
    let labelled: Vec<(String, [f64; 2])> = paid
        .iter()
        .zip(&points)
        .map(|(g, p)| (g.name.clone(), *p))
        .collect();
    let label_formatter = move |_series: &str, cursor: &PlotPoint| {
        let nearest = labelled.iter().min_by(|(_, a), (_, b)| {
            let da = ((a[0] - cursor.x) / x_max).powi(2) + ((a[1] - cursor.y) / y_max).powi(2);
            let db = ((b[0] - cursor.x) / x_max).powi(2) + ((b[1] - cursor.y) / y_max).powi(2);
            da.total_cmp(&db)
        });
        match nearest {
            Some((name, [price, value])) => format!(
                "{name}\nPrice: {}\n{}: {}",
                currency("£", *price),
                metric_kind.label(),
                thousands(*value as u64)
            ),
            None => String::new(),
        }
    };

    ui.add_space(4.0);
    ui.strong(format!("Price vs {} for Paid Games", metric_kind.label()));

    Plot::new("paid_trends_plot")
        .height(500.0)
        .x_axis_label("Price (£)")
        .y_axis_label(metric_kind.label())
        .x_axis_formatter(|mark, _range| currency("£", mark.value.max(0.0)))
        .y_axis_formatter(|mark, _range| thousands(mark.value.max(0.0) as u64))
        .include_x(0.0)
        .include_x(x_max)
        .include_y(0.0)
        .include_y(y_max)
        .label_formatter(label_formatter)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(4.5)
                    .color(STEEL_BLUE)
                    .name("Paid games"),
            );
        });

    ui.add_space(8.0);
    ui.heading("Summary Statistics");
    ui.columns(2, |cols| {
        metric(&mut cols[0], "Total Paid Games", thousands(summary.count as u64));
        metric(&mut cols[0], "Average Price", currency("$", summary.mean_price));
        metric(&mut cols[0], "Median Price", currency("$", summary.median_price));

        metric(
            &mut cols[1],
            &format!("Average {}", summary.metric.label()),
            thousands(summary.mean_metric as u64),
        );
    });
}
