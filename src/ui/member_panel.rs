//! Member management panel with CRUD, search, filters and export.

use chrono::Local;
use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel};
use super::components::{
    action_button, badge, colors, danger_action_button, detail_line, panel_header, primary_button_with_icon,
    styled_button,
};
use super::forms::MemberForm;
use super::table::{
    choice_filter, clear_filters_button, date_range_inputs, empty_row, expand_label, footer, header_row, row_checkbox,
    search_box, showing_label,
};
use crate::list::{Column, parse_flexible_date};
use crate::models::{Gender, Member, MemberColumn, MemberStatus, Region};

/// Show the members panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Members");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Member").clicked() {
            app.member_form = MemberForm::open_new(Local::now().date_naive());
        }
        ui.add_space(20.0);
        search_box(ui, &mut app.members, "ID, name, email, phone or department...");
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Region:");
        if let Some(region) = choice_filter(
            ui,
            "member_region_filter",
            app.members.filter().region,
            &Region::ALL,
            Region::label,
        ) {
            app.members.update_filter(|f| f.region = region);
        }

        ui.add_space(10.0);
        ui.label("Status:");
        if let Some(status) = choice_filter(
            ui,
            "member_status_filter",
            app.members.filter().status,
            &MemberStatus::ALL,
            MemberStatus::label,
        ) {
            app.members.update_filter(|f| f.status = status);
        }

        ui.add_space(10.0);
        ui.label("Joined");
        if let Some(range) = date_range_inputs(ui, &mut app.member_dates) {
            app.members.update_filter(|f| f.joined = range);
        }

        if clear_filters_button(ui, &app.members) {
            app.members.clear_filters();
            app.member_dates.clear();
        }
    });

    ui.add_space(10.0);
    showing_label(ui, &app.members, "members");
    ui.add_space(6.0);

    show_table(app, ui);

    let (bulk, export) = footer(ui, &mut app.members);
    if bulk {
        app.request_bulk_delete(Panel::Members);
    }
    if let Some(action) = export {
        app.handle_export(Panel::Members, action);
    }

    if app.member_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn status_color(status: MemberStatus) -> egui::Color32 {
    match status {
        MemberStatus::Active => colors::SUCCESS,
        MemberStatus::Inactive => colors::NEUTRAL,
        MemberStatus::Visitor => colors::INFO,
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let rows: Vec<Member> = app.members.visible().into_iter().cloned().collect();

    ScrollArea::horizontal().id_salt("members_scroll").show(ui, |ui| {
        egui::Grid::new("members_grid")
            .num_columns(MemberColumn::ALL.len() + 2)
            .striped(true)
            .min_col_width(40.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                header_row(ui, &mut app.members);

                if rows.is_empty() {
                    empty_row(ui);
                }

                for member in &rows {
                    row_checkbox(ui, &mut app.members, &member.id);
                    ui.label(&member.id);
                    ui.label(&member.full_name);
                    ui.label(if member.phone.is_empty() { "-" } else { &member.phone });
                    ui.label(member.region.label());
                    ui.label(member.join_date.to_string());
                    badge(ui, member.status.label(), status_color(member.status));

                    let expanded = app.members.is_expanded(&member.id);
                    ui.horizontal(|ui| {
                        if ui.small_button(expand_label(expanded)).clicked() {
                            app.members.toggle_expanded(&member.id);
                        }
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.member_form = MemberForm::edit(member);
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.request_delete(DeleteTarget::Member(member.id.clone(), member.full_name.clone()));
                        }
                    });
                    ui.end_row();

                    if expanded {
                        ui.label("");
                        ui.vertical(|ui| {
                            detail_line(ui, "Email", &member.email);
                            detail_line(ui, "Department", &member.department);
                            detail_line(ui, "Gender", member.gender.map(Gender::label).unwrap_or(""));
                            detail_line(ui, "Address", &member.address);
                            detail_line(ui, "Notes", &member.notes);
                        });
                        ui.end_row();
                    }
                }
            });
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.member_form.is_editing {
        "Edit Member"
    } else {
        "Add Member"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(440.0).show(ui, |ui| {
                egui::Grid::new("member_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        let form = &mut app.member_form;

                        if let Some(id) = &form.id {
                            ui.label("Member ID:");
                            ui.label(id);
                            ui.end_row();
                        }

                        ui.label("Full Name:");
                        ui.add(egui::TextEdit::singleline(&mut form.full_name).desired_width(250.0));
                        ui.end_row();

                        ui.label("Email:");
                        ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                        ui.end_row();

                        ui.label("Phone:");
                        ui.add(egui::TextEdit::singleline(&mut form.phone).desired_width(180.0));
                        ui.end_row();

                        ui.label("Region:");
                        ui.add_enabled_ui(!form.is_editing, |ui| {
                            egui::ComboBox::from_id_salt("member_form_region")
                                .width(180.0)
                                .selected_text(form.region.label())
                                .show_ui(ui, |ui| {
                                    for region in Region::ALL {
                                        ui.selectable_value(&mut form.region, region, region.label());
                                    }
                                });
                        });
                        ui.end_row();

                        ui.label("Department:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.department)
                                .desired_width(250.0)
                                .hint_text("Optional"),
                        );
                        ui.end_row();

                        ui.label("Gender:");
                        egui::ComboBox::from_id_salt("member_form_gender")
                            .width(150.0)
                            .selected_text(form.gender.map(Gender::label).unwrap_or("Select..."))
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut form.gender, None, "None");
                                for gender in Gender::ALL {
                                    ui.selectable_value(&mut form.gender, Some(gender), gender.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Join Date:");
                        ui.vertical(|ui| {
                            let is_valid = parse_flexible_date(&form.join_date_input).is_some();
                            let text_color = if is_valid {
                                ui.visuals().text_color()
                            } else {
                                colors::ERROR
                            };
                            ui.horizontal(|ui| {
                                ui.add(
                                    egui::TextEdit::singleline(&mut form.join_date_input)
                                        .desired_width(120.0)
                                        .hint_text("YYYY-MM-DD")
                                        .text_color(text_color),
                                );
                                let mut picked = parse_flexible_date(&form.join_date_input)
                                    .unwrap_or_else(|| Local::now().date_naive());
                                if ui
                                    .add(DatePickerButton::new(&mut picked).id_salt("member_join_picker"))
                                    .changed()
                                {
                                    form.join_date_input = picked.format("%Y-%m-%d").to_string();
                                }
                            });
                            if is_valid {
                                ui.weak("Format: YYYY-MM-DD");
                            } else {
                                ui.colored_label(colors::ERROR, "Invalid date format");
                            }
                        });
                        ui.end_row();

                        ui.label("Status:");
                        ui.horizontal(|ui| {
                            for status in MemberStatus::ALL {
                                ui.selectable_value(&mut form.status, status, status.label());
                            }
                        });
                        ui.end_row();

                        ui.label("Address:");
                        ui.add(egui::TextEdit::multiline(&mut form.address).desired_rows(2).desired_width(250.0));
                        ui.end_row();

                        ui.label("Notes:");
                        ui.add(egui::TextEdit::multiline(&mut form.notes).desired_rows(2).desired_width(250.0));
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.member_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_member();
                    }
                });
            });
        });
}
