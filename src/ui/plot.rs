use std::collections::BTreeMap;
use std::f32::consts::TAU;

use eframe::egui::{RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie chart (success counts)
// ---------------------------------------------------------------------------

/// Render the success pie for the current view.  `egui_plot` has no pie
/// primitive, so the wedges are drawn directly with the painter.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let request = state.pie();
    ui.strong(&request.title);

    let total = request.total();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let palette = generate_palette(request.slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = ui.available_height().clamp(120.0, 260.0);
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());

        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side * 0.5 - 4.0;

        // Wedges as triangle fans, starting at 12 o'clock.
        let mut start = -TAU / 4.0;
        for (slice, color) in request.slices.iter().zip(palette.iter()) {
            let sweep = TAU * slice.count as f32 / total as f32;
            if sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / 0.05).ceil() as usize).max(2);
            let full_circle = sweep >= TAU - f32::EPSILON;

            let mut points = Vec::with_capacity(steps + 2);
            if !full_circle {
                points.push(center);
            }
            for i in 0..=steps {
                let angle = start + sweep * (i as f32 / steps as f32);
                points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
            }
            painter.add(Shape::convex_polygon(points, *color, Stroke::NONE));
            start += sweep;
        }

        // Legend: every slice, including empty wedges.
        ui.vertical(|ui: &mut Ui| {
            for (slice, color) in request.slices.iter().zip(palette.iter()) {
                let pct = 100.0 * slice.count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(*color));
                    ui.label(format!("{} — {} ({pct:.1}%)", slice.label, slice.count));
                });
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Scatter plot (payload mass vs outcome class)
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter, coloured by booster version category.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let request = state.scatter();
    ui.strong(&request.title);

    // One point group per booster category so the plot legend doubles as the
    // colour key.  BTreeMap keeps the legend order stable.
    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &request.points {
        groups
            .entry(point.booster_category.as_str())
            .or_default()
            .push([point.payload_mass_kg, point.outcome.class_value() as f64]);
    }

    Plot::new("payload_outcome_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome (class)")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, pts) in groups {
                let points: PlotPoints = pts.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .radius(3.0),
                );
            }
        });
}
