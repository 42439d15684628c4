//! Profile page of the signed-in administrator.

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{PENCIL, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{colors, detail_line, panel_header, primary_button_with_icon, styled_button, styled_button_with_icon};
use super::forms::ProfileForm;
use crate::models::admin::roles_label;

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "My Profile");

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(20))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_max_width(520.0);

            ui.label(RichText::new(&app.profile.full_name).size(22.0).strong());
            ui.label(RichText::new(roles_label(&app.profile.roles)).color(colors::GOLD));
            ui.add_space(12.0);

            let profile = &app.profile;
            detail_line(ui, "User ID", &profile.user_id);
            detail_line(ui, "Email", &profile.email);
            detail_line(ui, "Phone", &profile.phone);
            detail_line(ui, "Department", &profile.department);
            detail_line(ui, "Date Joined", &profile.date_joined.to_string());
            detail_line(
                ui,
                "Last Login",
                &profile.last_login.map(|d| d.to_string()).unwrap_or_default(),
            );

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if primary_button_with_icon(ui, PENCIL, "Edit Profile").clicked() {
                    app.profile_form = ProfileForm::edit(&app.profile);
                }
                ui.add_space(10.0);
                if styled_button_with_icon(ui, TRASH, "Delete Account").clicked() {
                    app.request_delete(DeleteTarget::Account);
                }
            });
        });

    if app.profile_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    egui::Window::new("Edit Profile")
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("profile_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.profile_form;

                    ui.label("Full Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.full_name).desired_width(230.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(230.0));
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(egui::TextEdit::singleline(&mut form.phone).desired_width(180.0));
                    ui.end_row();

                    ui.label("Department:");
                    ui.add(egui::TextEdit::singleline(&mut form.department).desired_width(230.0));
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.profile_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_profile();
                    }
                });
            });
        });
}
