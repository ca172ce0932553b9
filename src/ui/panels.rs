use eframe::egui::{self, RichText, Ui};

use crate::color::fit_color;
use crate::state::{AppState, FittedSegment};

// ---------------------------------------------------------------------------
// Left side panel – fit summaries
// ---------------------------------------------------------------------------

/// Render the per-segment regression summary.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Fits");
    ui.separator();

    for fitted in &state.fitted {
        fit_summary(ui, fitted);
        ui.add_space(6.0);
    }
}

fn fit_summary(ui: &mut Ui, fitted: &FittedSegment) {
    let side = fitted.segment.side();
    let fit = &fitted.fit;

    ui.label(
        RichText::new(side.fit_label())
            .strong()
            .color(fit_color(side)),
    );

    egui::Grid::new(("fit_summary", side.fit_label()))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("n");
            ui.label(fit.n.to_string());
            ui.end_row();

            ui.label("slope");
            ui.label(format!("{:.4}", fit.slope));
            ui.end_row();

            ui.label("intercept");
            ui.label(format!("{:.2}", fit.intercept));
            ui.end_row();

            ui.label("r²");
            ui.label(format!("{:.4}", fit.r_squared));
            ui.end_row();

            ui.label("x range");
            ui.label(format!("{} … {}", fit.x_min, fit.x_max));
            ui.end_row();
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: counts and the band toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let counts: Vec<String> = state
            .fitted
            .iter()
            .map(|f| format!("{} at x {}", f.segment.len(), f.segment.side()))
            .collect();
        ui.label(format!(
            "{} observations ({})",
            state.dataset.len(),
            counts.join(", ")
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_confidence_band, "95% Confidence Band")
            .clicked()
        {
            state.toggle_confidence_band();
        }
    });
}
