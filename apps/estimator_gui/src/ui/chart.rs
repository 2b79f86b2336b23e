use client_core::DisplayModel;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::ui::theme::{series_color, PALETTE};

const BAR_WIDTH: f64 = 0.6;

pub fn price_bars(model: &DisplayModel) -> Vec<Bar> {
    model
        .chart_points()
        .into_iter()
        .map(|point| {
            Bar::new(point.slot as f64, point.price)
                .name(point.label)
                .fill(series_color(point.color))
                .width(BAR_WIDTH)
        })
        .collect()
}

pub fn show_price_chart(ui: &mut egui::Ui, model: &DisplayModel) {
    let points = model.chart_points();
    if points.is_empty() {
        ui.label(
            egui::RichText::new("No numeric estimates to chart.")
                .italics()
                .color(PALETTE.text_muted),
        );
        return;
    }

    let labels: Vec<String> = points.iter().map(|point| point.label.to_string()).collect();
    let chart = BarChart::new("Price by model", price_bars(model));

    Plot::new("price_by_model_chart")
        .height(240.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > f64::EPSILON || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
