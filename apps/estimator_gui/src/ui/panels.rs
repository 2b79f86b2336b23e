use client_core::{BestModelLine, DisplayModel, FormState};
use eframe::egui;
use shared::domain::FeatureField;

use crate::ui::{
    chart::show_price_chart,
    theme::{lighten_color, PALETTE},
};

/// Text buffers behind the four inputs. Each edit is committed to the form
/// immediately; the buffer snaps back to the committed value on blur.
#[derive(Debug, Clone)]
pub struct FieldDrafts {
    texts: [String; 4],
}

impl FieldDrafts {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            texts: FeatureField::ALL.map(|field| form.display_text(field)),
        }
    }

    pub fn text(&self, field: FeatureField) -> &str {
        &self.texts[slot(field)]
    }

    fn text_mut(&mut self, field: FeatureField) -> &mut String {
        &mut self.texts[slot(field)]
    }

    pub fn resync(&mut self, form: &FormState, field: FeatureField) {
        *self.text_mut(field) = form.display_text(field);
    }
}

fn slot(field: FeatureField) -> usize {
    match field {
        FeatureField::Size => 0,
        FeatureField::Bedrooms => 1,
        FeatureField::Age => 2,
        FeatureField::Location => 3,
    }
}

pub enum FormAction {
    None,
    Submit,
}

pub fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(PALETTE.card_background)
        .corner_radius(14.0)
        .stroke(egui::Stroke::new(1.0, PALETTE.border))
        .inner_margin(egui::Margin::symmetric(20, 18))
        .show(ui, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
            add(ui);
        });
}

pub fn show_property_form(
    ui: &mut egui::Ui,
    form: &mut FormState,
    drafts: &mut FieldDrafts,
    pending: bool,
) -> FormAction {
    let mut action = FormAction::None;

    ui.heading(egui::RichText::new("Property Details").color(PALETTE.primary));
    ui.add_space(6.0);

    for field in FeatureField::ALL {
        ui.label(egui::RichText::new(field.label()).strong());
        let mut hint = String::new();
        if let Some((min, max)) = field.advisory_range() {
            hint = format!("{min}-{max}");
        }
        let response = ui.add(
            egui::TextEdit::singleline(drafts.text_mut(field))
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            form.set(field, drafts.text(field));
        }
        if response.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = submit_action(pending);
            }
            drafts.resync(form, field);
        }
    }

    ui.add_space(8.0);
    let label = if pending { "Analyzing..." } else { "Predict Value" };
    let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
        .fill(PALETTE.primary)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(!pending, button).clicked() {
        action = submit_action(pending);
    }

    action
}

/// Enter and the button both go through here, so neither submits while the
/// button is disabled.
fn submit_action(pending: bool) -> FormAction {
    if pending {
        FormAction::None
    } else {
        FormAction::Submit
    }
}

pub fn show_results(ui: &mut egui::Ui, display: Option<&DisplayModel>) {
    ui.heading(egui::RichText::new("Analysis Results").color(PALETTE.secondary));
    ui.add_space(6.0);

    let Some(model) = display else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("Enter property details and click Predict to see the analysis.")
                    .color(PALETTE.text_muted),
            );
        });
        return;
    };

    for entry in &model.series {
        egui::Frame::NONE
            .fill(lighten_color(PALETTE.card_background, 0.03))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&entry.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(entry.value_text()).strong());
                    });
                });
            });
    }

    if let Some(best) = &model.best_model {
        show_best_model(ui, best);
    }

    ui.add_space(10.0);
    show_price_chart(ui, model);
}

fn show_best_model(ui: &mut egui::Ui, best: &BestModelLine) {
    egui::Frame::NONE
        .fill(PALETTE.primary.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, PALETTE.primary))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Best Model: {}", best.name))
                        .color(egui::Color32::WHITE)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} Acc", best.accuracy_label()))
                            .color(PALETTE.accent)
                            .strong(),
                    );
                });
            });
            if let Some(reason) = &best.reason {
                ui.label(egui::RichText::new(reason).color(PALETTE.text_muted).small());
            }
        });
}
