use std::time::Duration;

use client_core::EstimatorState;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::submit_prediction;
use crate::controller::reducer::{AppModel, StatusBanner, StatusBannerSeverity};
use crate::ui::{
    panels::{card, show_property_form, show_results, FieldDrafts, FormAction},
    theme::{self, PALETTE},
};

pub struct EstimatorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    drafts: FieldDrafts,
    visuals_applied: bool,
}

impl EstimatorApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        estimator: EstimatorState,
    ) -> Self {
        let drafts = FieldDrafts::from_form(estimator.form());
        Self {
            cmd_tx,
            ui_rx,
            model: AppModel::new(estimator),
            drafts,
            visuals_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply(event);
        }
    }

    fn show_status_banner(&self, ui: &mut egui::Ui) {
        let Some(StatusBanner { severity, message }) = &self.model.status_banner else {
            return;
        };
        let fill = match severity {
            StatusBannerSeverity::Error => egui::Color32::from_rgb(0x7f, 0x1d, 0x1d),
        };
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
            });
        ui.add_space(8.0);
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.model.status).small().color(PALETTE.text_muted));
                if self.model.estimator.is_pending() {
                    ui.spinner();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("AI Housing Intelligence").size(30.0).strong());
                ui.label(
                    egui::RichText::new(
                        "Predicting future values with advanced machine learning models",
                    )
                    .color(PALETTE.text_muted),
                );
            });
            ui.add_space(16.0);
            self.show_status_banner(ui);

            let mut action = FormAction::None;
            ui.columns(2, |cols| {
                card(&mut cols[0], |ui| {
                    let pending = self.model.estimator.is_pending();
                    action = show_property_form(
                        ui,
                        self.model.estimator.form_mut(),
                        &mut self.drafts,
                        pending,
                    );
                });
                card(&mut cols[1], |ui| {
                    show_results(ui, self.model.estimator.display());
                });
            });

            if let FormAction::Submit = action {
                submit_prediction(
                    &mut self.model.estimator,
                    &self.cmd_tx,
                    &mut self.model.status,
                );
            }
        });
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if !self.visuals_applied {
            ctx.set_visuals(theme::visuals());
            self.visuals_applied = true;
        }

        self.show_workspace(ctx);

        if self.model.estimator.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
