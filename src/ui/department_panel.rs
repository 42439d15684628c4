//! Department management panel, laid out as a card grid.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke, Ui};
use egui_phosphor::regular::{ARROWS_DOWN_UP, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel};
use super::components::{
    action_button, badge, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
};
use super::forms::DepartmentForm;
use super::table::{
    choice_filter, clear_filters_button, footer, row_checkbox, search_box, select_all_checkbox, showing_label,
};
use crate::list::Column;
use crate::models::department::COLOR_OPTIONS;
use crate::models::{Department, DepartmentColumn};

const CARD_WIDTH: f32 = 260.0;

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn active_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

/// Show the departments panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Departments");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Department").clicked() {
            app.department_form = DepartmentForm::open_new();
        }
        ui.add_space(20.0);
        search_box(ui, &mut app.departments, "Name, description, leader or schedule...");
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Status:");
        if let Some(active) = choice_filter(
            ui,
            "department_active_filter",
            app.departments.filter().active,
            &[true, false],
            active_label,
        ) {
            app.departments.update_filter(|f| f.active = active);
        }

        ui.add_space(10.0);
        ui.label("Sort by:");
        let sort = app.departments.sort();
        egui::ComboBox::from_id_salt("department_sort")
            .width(120.0)
            .selected_text(sort.column.label())
            .show_ui(ui, |ui| {
                for &column in DepartmentColumn::ALL {
                    if ui.selectable_label(sort.column == column, column.label()).clicked() && sort.column != column {
                        app.departments.toggle_sort(column);
                    }
                }
            });
        if ui
            .button(format!("{ARROWS_DOWN_UP} {}", sort.order.arrow()))
            .on_hover_text("Reverse order")
            .clicked()
        {
            app.departments.toggle_sort(sort.column);
        }

        if clear_filters_button(ui, &app.departments) {
            app.departments.clear_filters();
        }
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        select_all_checkbox(ui, &mut app.departments);
        ui.label("Select page");
        ui.add_space(10.0);
        showing_label(ui, &app.departments, "departments");
    });
    ui.add_space(6.0);

    show_cards(app, ui);

    let (bulk, export) = footer(ui, &mut app.departments);
    if bulk {
        app.request_bulk_delete(Panel::Departments);
    }
    if let Some(action) = export {
        app.handle_export(Panel::Departments, action);
    }

    if app.department_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_cards(app: &mut App, ui: &mut Ui) {
    let cards: Vec<Department> = app.departments.visible().into_iter().cloned().collect();

    if cards.is_empty() {
        ui.label(RichText::new("No records found.").weak());
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(14.0, 14.0);
        for dept in &cards {
            show_card(app, ui, dept);
        }
    });
}

fn show_card(app: &mut App, ui: &mut Ui, dept: &Department) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .stroke(Stroke::new(2.0, rgb(dept.color)))
        .inner_margin(Margin::same(14))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    row_checkbox(ui, &mut app.departments, &dept.id);
                    ui.label(RichText::new(&dept.name).strong().size(16.0).color(rgb(dept.color)));
                });
                badge(
                    ui,
                    active_label(dept.active),
                    if dept.active { colors::SUCCESS } else { colors::NEUTRAL },
                );
                ui.add_space(6.0);

                if !dept.description.is_empty() {
                    ui.label(&dept.description);
                    ui.add_space(4.0);
                }
                ui.label(RichText::new(format!("Leader: {}", or_dash(&dept.leader_name))).small());
                ui.label(RichText::new(format!("Email: {}", or_dash(&dept.leader_email))).small());
                ui.label(RichText::new(format!("Schedule: {}", or_dash(&dept.schedule))).small());
                ui.label(RichText::new(format!("Members: {}", dept.members)).small());

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if action_button(ui, PENCIL, "Edit").clicked() {
                        app.department_form = DepartmentForm::edit(dept);
                    }
                    if danger_action_button(ui, TRASH, "Delete").clicked() {
                        app.request_delete(DeleteTarget::Department(dept.id, dept.name.clone()));
                    }
                });
            });
        });
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.department_form.is_editing {
        "Edit Department"
    } else {
        "Add Department"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(440.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("department_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.department_form;

                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(240.0));
                    ui.end_row();

                    ui.label("Description:");
                    ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(2).desired_width(240.0));
                    ui.end_row();

                    ui.label("Leader:");
                    ui.add(egui::TextEdit::singleline(&mut form.leader_name).desired_width(240.0));
                    ui.end_row();

                    ui.label("Leader Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.leader_email).desired_width(240.0));
                    ui.end_row();

                    ui.label("Schedule:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.schedule)
                            .desired_width(240.0)
                            .hint_text("e.g. Sundays 09:00"),
                    );
                    ui.end_row();

                    ui.label("Members:");
                    ui.add(egui::DragValue::new(&mut form.members).range(0..=10_000));
                    ui.end_row();

                    ui.label("Color:");
                    ui.horizontal(|ui| {
                        for option in COLOR_OPTIONS {
                            let selected = form.color == option;
                            let swatch = egui::Button::new("")
                                .fill(rgb(option))
                                .min_size(egui::vec2(22.0, 22.0))
                                .stroke(if selected {
                                    Stroke::new(2.0, ui.visuals().strong_text_color())
                                } else {
                                    Stroke::NONE
                                });
                            if ui.add(swatch).clicked() {
                                form.color = option;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Active:");
                    ui.checkbox(&mut form.active, "");
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.department_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_department();
                    }
                });
            });
        });
}
