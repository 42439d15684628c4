//! Header, sidebar and status bar around the record panels.

use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::SIGN_OUT;

use super::app::{App, Panel};
use super::components::colors;

/// Render the top header with organization name, user and Logout.
pub fn show_header(app: &mut App, ctx: &egui::Context) {
    egui::TopBottomPanel::top("header")
        .min_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(&app.config.ui.organization_name)
                        .size(18.0)
                        .strong()
                        .color(colors::GOLD),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(format!("{SIGN_OUT} Logout")).clicked() {
                        app.logout();
                    }
                    ui.add_space(10.0);
                    ui.label(RichText::new(&app.profile.email).weak());
                });
            });
        });
}

/// Render the navigation sidebar.
pub fn show_sidebar(app: &mut App, ctx: &egui::Context) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(15.0);
            ui.label(RichText::new("Admin Console").strong());
            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            for panel in Panel::SIDEBAR {
                let text = RichText::new(format!("{} {}", panel.icon(), panel.name())).size(15.0);
                let selected = app.current_panel == panel;
                if ui.selectable_label(selected, text).clicked() {
                    app.current_panel = panel;
                }
                ui.add_space(4.0);
            }
        });
}

/// Render status bar (display only, no interaction).
pub fn show_status_bar(app: &App, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar")
        .min_height(24.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&app.status).small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Signed in: {}", app.profile.full_name))
                            .small()
                            .weak(),
                    );
                });
            });
        });
}
