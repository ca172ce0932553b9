use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::color::{band_fill, fit_color, SCATTER};
use crate::state::AppState;

pub const TITLE: &str = "Mean Reaction Time vs Independent Variable";

/// Samples along each fitted line and band edge.
const LINE_SAMPLES: usize = 100;

// ---------------------------------------------------------------------------
// Fit series – geometry of one fitted line, ready to draw
// ---------------------------------------------------------------------------

/// One named fit line with its optional confidence band.
struct FitSeries {
    label: &'static str,
    color: Color32,
    line: Vec<[f64; 2]>,
    /// Empty when the band is hidden.
    band: Vec<[[f64; 2]; 4]>,
}

fn fit_series(state: &AppState) -> Vec<FitSeries> {
    state
        .fitted
        .iter()
        .map(|fitted| {
            let side = fitted.segment.side();
            FitSeries {
                label: side.fit_label(),
                color: fit_color(side),
                line: fitted.fit.line_points(LINE_SAMPLES),
                band: if state.show_confidence_band {
                    fitted.fit.band_quads(LINE_SAMPLES)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reaction-time plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter, fit lines and confidence bands. Only the fit lines
/// are named, so the legend lists just those.
pub fn reaction_time_plot(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(TITLE);
    });

    let scatter: PlotPoints = state.dataset.points().into();
    let series = fit_series(state);

    Plot::new("reaction_time_plot")
        .legend(Legend::default())
        .x_axis_label("Independent Variable")
        .y_axis_label("Mean Reaction Time")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(scatter).color(SCATTER).radius(4.0));

            for s in series {
                // Polygon only fills convex shapes, so the band goes in pieces.
                let fill = band_fill(s.color);
                for quad in s.band {
                    let piece: PlotPoints = quad.to_vec().into();
                    plot_ui.polygon(Polygon::new(piece).fill_color(fill).stroke(Stroke::NONE));
                }

                let line: PlotPoints = s.line.into();
                plot_ui.line(Line::new(line).name(s.label).color(s.color).width(2.0));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::assemble::reaction_time_dataset;

    #[test]
    fn legend_has_only_the_two_fits() {
        let state = AppState::build(reaction_time_dataset()).unwrap();
        let labels: Vec<&str> = fit_series(&state).iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Fit: <= 0", "Fit: > 0"]);
    }

    #[test]
    fn bands_follow_the_toggle() {
        let mut state = AppState::build(reaction_time_dataset()).unwrap();
        assert!(fit_series(&state)
            .iter()
            .all(|s| s.band.len() == LINE_SAMPLES - 1));

        state.toggle_confidence_band();
        let hidden = fit_series(&state);
        assert!(hidden.iter().all(|s| s.band.is_empty()));
        assert!(hidden.iter().all(|s| s.line.len() == LINE_SAMPLES));
    }
}
