//! Signup screen. Accounts are created locally only.

use eframe::egui::{self, CornerRadius, Margin, RichText};

use super::app::{App, Screen};
use super::components::{colors, primary_button_with_icon};

pub fn show(app: &mut App, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                RichText::new(&app.config.ui.organization_name)
                    .size(28.0)
                    .strong()
                    .color(colors::GOLD),
            );
            ui.add_space(5.0);
            ui.label(RichText::new("Create an account").weak());
            ui.add_space(30.0);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(25))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_width(320.0);

                    egui::Grid::new("signup_grid")
                        .num_columns(2)
                        .spacing([15.0, 10.0])
                        .show(ui, |ui| {
                            ui.label("Full Name:");
                            ui.add(egui::TextEdit::singleline(&mut app.signup_form.name).desired_width(200.0));
                            ui.end_row();

                            ui.label("Email:");
                            ui.add(egui::TextEdit::singleline(&mut app.signup_form.email).desired_width(200.0));
                            ui.end_row();

                            ui.label("Password:");
                            ui.add(
                                egui::TextEdit::singleline(&mut app.signup_form.password)
                                    .desired_width(200.0)
                                    .password(true),
                            );
                            ui.end_row();
                        });

                    if let Some(error) = &app.auth_error {
                        ui.add_space(10.0);
                        ui.colored_label(colors::ERROR, error);
                    }

                    ui.add_space(15.0);

                    if primary_button_with_icon(ui, "", "Sign Up").clicked() {
                        app.submit_signup();
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.label("Already have an account?");
                        if ui.link("Log in").clicked() {
                            app.show_screen(Screen::Login);
                        }
                    });
                });
        });
    });
}
