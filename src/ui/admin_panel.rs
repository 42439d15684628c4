//! Console administrators panel.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel};
use super::components::{
    action_button, danger_action_button, detail_line, panel_header, primary_button_with_icon, styled_button,
};
use super::forms::AdminForm;
use super::table::{
    choice_filter, clear_filters_button, empty_row, expand_label, footer, header_row, row_checkbox, search_box,
    showing_label,
};
use crate::list::Column;
use crate::models::admin::roles_label;
use crate::models::{Admin, AdminColumn, AdminRole};

/// Show the admins panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Admins");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Admin").clicked() {
            app.admin_form = AdminForm::open_new();
        }
        ui.add_space(20.0);
        search_box(ui, &mut app.admins, "Name, email, phone or department...");

        ui.add_space(10.0);
        ui.label("Role:");
        if let Some(role) = choice_filter(
            ui,
            "admin_role_filter",
            app.admins.filter().role,
            &AdminRole::ALL,
            AdminRole::label,
        ) {
            app.admins.update_filter(|f| f.role = role);
        }

        if clear_filters_button(ui, &app.admins) {
            app.admins.clear_filters();
        }
    });

    ui.add_space(10.0);
    showing_label(ui, &app.admins, "admins");
    ui.add_space(6.0);

    show_table(app, ui);

    let (bulk, export) = footer(ui, &mut app.admins);
    if bulk {
        app.request_bulk_delete(Panel::Admins);
    }
    if let Some(action) = export {
        app.handle_export(Panel::Admins, action);
    }

    if app.admin_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let rows: Vec<Admin> = app.admins.visible().into_iter().cloned().collect();

    egui::Grid::new("admins_grid")
        .num_columns(AdminColumn::ALL.len() + 2)
        .striped(true)
        .min_col_width(40.0)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            header_row(ui, &mut app.admins);

            if rows.is_empty() {
                empty_row(ui);
            }

            for admin in &rows {
                row_checkbox(ui, &mut app.admins, &admin.id);
                ui.label(&admin.full_name);
                ui.label(&admin.email);
                ui.label(roles_label(&admin.roles));
                ui.label(if admin.department.is_empty() { "-" } else { &admin.department });

                let expanded = app.admins.is_expanded(&admin.id);
                ui.horizontal(|ui| {
                    if ui.small_button(expand_label(expanded)).clicked() {
                        app.admins.toggle_expanded(&admin.id);
                    }
                    if action_button(ui, PENCIL, "Edit").clicked() {
                        app.admin_form = AdminForm::edit(admin);
                    }
                    if danger_action_button(ui, TRASH, "Delete").clicked() {
                        app.request_delete(DeleteTarget::Admin(admin.id, admin.full_name.clone()));
                    }
                });
                ui.end_row();

                if expanded {
                    ui.label("");
                    ui.vertical(|ui| {
                        detail_line(ui, "ID", &admin.id.to_string());
                        detail_line(ui, "Phone", &admin.phone);
                    });
                    ui.end_row();
                }
            }
        });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.admin_form.is_editing {
        "Edit Admin"
    } else {
        "Add Admin"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                egui::Grid::new("admin_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        let form = &mut app.admin_form;

                        ui.label("Full Name:");
                        ui.add(egui::TextEdit::singleline(&mut form.full_name).desired_width(240.0));
                        ui.end_row();

                        ui.label("Email:");
                        ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(240.0));
                        ui.end_row();

                        ui.label("Phone:");
                        ui.add(egui::TextEdit::singleline(&mut form.phone).desired_width(180.0));
                        ui.end_row();

                        ui.label("Roles:");
                        ui.vertical(|ui| {
                            for role in AdminRole::ALL {
                                let mut checked = form.roles.contains(&role);
                                if ui.checkbox(&mut checked, role.label()).changed() {
                                    form.toggle_role(role);
                                }
                            }
                        });
                        ui.end_row();

                        ui.label("Department:");
                        ui.add(egui::TextEdit::singleline(&mut form.department).desired_width(240.0));
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.admin_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_admin();
                    }
                });
            });
        });
}
