//! Login screen.

use eframe::egui::{self, CornerRadius, Key, Margin, RichText};

use super::app::{App, Screen};
use super::components::{colors, primary_button_with_icon};

/// Show the login screen.
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
            ui.label(RichText::new("Administrator sign in").weak());
            ui.add_space(30.0);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(25))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_width(320.0);

                    if let Some(warning) = &app.config_warning {
                        ui.colored_label(colors::WARNING, format!("Using default settings: {warning}"));
                        ui.add_space(10.0);
                    }

                    egui::Grid::new("login_grid")
                        .num_columns(2)
                        .spacing([15.0, 10.0])
                        .show(ui, |ui| {
                            ui.label("Email:");
                            ui.add(
                                egui::TextEdit::singleline(&mut app.login_form.email)
                                    .desired_width(200.0)
                                    .hint_text("you@example.com"),
                            );
                            ui.end_row();

                            ui.label("Password:");
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut app.login_form.password)
                                    .desired_width(200.0)
                                    .password(true),
                            );
                            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                                app.start_login();
                            }
                            ui.end_row();
                        });

                    if let Some(error) = &app.auth_error {
                        ui.add_space(10.0);
                        ui.colored_label(colors::ERROR, error);
                    }

                    ui.add_space(15.0);

                    ui.horizontal(|ui| {
                        ui.add_enabled_ui(!app.login_in_flight, |ui| {
                            if primary_button_with_icon(ui, "", "Login").clicked() {
                                app.start_login();
                            }
                        });
                        if app.login_in_flight {
                            ui.spinner();
                            ui.label("Signing in...");
                        }
                    });

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.label("Don't have an account?");
                        if ui.link("Sign up").clicked() {
                            app.show_screen(Screen::Signup);
                        }
                    });
                });
        });
    });
}
