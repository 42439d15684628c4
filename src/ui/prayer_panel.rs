//! Prayer request panel with status and privacy row actions.

use eframe::egui::{self, Color32, ScrollArea, Ui};
use egui_phosphor::regular::{CHECK, EYE, EYE_SLASH, HANDS_PRAYING, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel};
use super::components::{
    action_button, badge, colors, danger_action_button, detail_line, panel_header, primary_button_with_icon,
    styled_button,
};
use super::forms::PrayerForm;
use super::table::{
    choice_filter, clear_filters_button, date_range_inputs, empty_row, expand_label, footer, header_row, row_checkbox,
    search_box, showing_label,
};
use crate::list::Column;
use crate::models::{PrayerColumn, PrayerRequest, PrayerStatus, Region};

fn privacy_label(private: bool) -> &'static str {
    if private { "Private" } else { "Public" }
}

/// Show the prayer requests panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Prayer Requests");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Request").clicked() {
            app.prayer_form = PrayerForm::open_new();
        }
        ui.add_space(20.0);
        search_box(ui, &mut app.prayers, "Name, email, phone, region or message...");
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Status:");
        if let Some(status) = choice_filter(
            ui,
            "prayer_status_filter",
            app.prayers.filter().status,
            &PrayerStatus::ALL,
            PrayerStatus::label,
        ) {
            app.prayers.update_filter(|f| f.status = status);
        }

        ui.add_space(10.0);
        ui.label("Region:");
        if let Some(region) = choice_filter(
            ui,
            "prayer_region_filter",
            app.prayers.filter().region,
            &Region::ALL,
            Region::label,
        ) {
            app.prayers.update_filter(|f| f.region = region);
        }

        ui.add_space(10.0);
        ui.label("Privacy:");
        if let Some(private) = choice_filter(
            ui,
            "prayer_privacy_filter",
            app.prayers.filter().private,
            &[false, true],
            privacy_label,
        ) {
            app.prayers.update_filter(|f| f.private = private);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Submitted");
        if let Some(range) = date_range_inputs(ui, &mut app.prayer_dates) {
            app.prayers.update_filter(|f| f.dates = range);
        }

        if clear_filters_button(ui, &app.prayers) {
            app.prayers.clear_filters();
            app.prayer_dates.clear();
        }
    });

    ui.add_space(10.0);
    showing_label(ui, &app.prayers, "requests");
    ui.add_space(6.0);

    show_table(app, ui);

    let (bulk, export) = footer(ui, &mut app.prayers);
    if bulk {
        app.request_bulk_delete(Panel::Prayer);
    }
    if let Some(action) = export {
        app.handle_export(Panel::Prayer, action);
    }

    if app.prayer_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn status_color(status: PrayerStatus) -> Color32 {
    match status {
        PrayerStatus::Pending => colors::WARNING,
        PrayerStatus::PrayedFor => colors::INFO,
        PrayerStatus::Answered => colors::SUCCESS,
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let rows: Vec<PrayerRequest> = app.prayers.visible().into_iter().cloned().collect();

    ScrollArea::horizontal().id_salt("prayers_scroll").show(ui, |ui| {
        egui::Grid::new("prayers_grid")
            .num_columns(PrayerColumn::ALL.len() + 2)
            .striped(true)
            .min_col_width(40.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                header_row(ui, &mut app.prayers);

                if rows.is_empty() {
                    empty_row(ui);
                }

                for request in &rows {
                    row_checkbox(ui, &mut app.prayers, &request.id);
                    ui.label(&request.id);
                    ui.label(request.display_name());
                    ui.label(request.region.label());
                    ui.label(request.display_submitted());
                    badge(ui, request.status.label(), status_color(request.status));
                    badge(
                        ui,
                        request.privacy_label(),
                        if request.is_private { colors::NEUTRAL } else { colors::GOLD },
                    );

                    let expanded = app.prayers.is_expanded(&request.id);
                    ui.horizontal(|ui| {
                        if ui.small_button(expand_label(expanded)).clicked() {
                            app.prayers.toggle_expanded(&request.id);
                        }
                        if request.status != PrayerStatus::PrayedFor
                            && action_button(ui, HANDS_PRAYING, "Mark as Prayed For").clicked()
                        {
                            app.set_prayer_status(&request.id, PrayerStatus::PrayedFor);
                        }
                        if request.status != PrayerStatus::Answered
                            && action_button(ui, CHECK, "Mark as Answered").clicked()
                        {
                            app.set_prayer_status(&request.id, PrayerStatus::Answered);
                        }
                        let (icon, hint) = if request.is_private {
                            (EYE, "Make Public")
                        } else {
                            (EYE_SLASH, "Make Private")
                        };
                        if action_button(ui, icon, hint).clicked() {
                            app.toggle_prayer_privacy(&request.id);
                        }
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.prayer_form = PrayerForm::edit(request);
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.request_delete(DeleteTarget::Prayer(request.id.clone(), request.name.clone()));
                        }
                    });
                    ui.end_row();

                    if expanded {
                        ui.label("");
                        ui.vertical(|ui| {
                            detail_line(ui, "Message", &request.message);
                            detail_line(ui, "Email", &request.email);
                            detail_line(ui, "Phone", &request.phone);
                            detail_line(ui, "Member ID", &request.member_id);
                        });
                        ui.end_row();
                    }
                }
            });
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.prayer_form.is_editing {
        "Edit Prayer Request"
    } else {
        "Add Prayer Request"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("prayer_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    let form = &mut app.prayer_form;

                    if let Some(id) = &form.editing_id {
                        ui.label("Request ID:");
                        ui.label(id);
                        ui.end_row();
                    }

                    ui.label("Name:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.name)
                            .desired_width(250.0)
                            .hint_text("Anonymous"),
                    );
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(egui::TextEdit::singleline(&mut form.phone).desired_width(180.0));
                    ui.end_row();

                    ui.label("Region:");
                    egui::ComboBox::from_id_salt("prayer_form_region")
                        .width(180.0)
                        .selected_text(form.region.label())
                        .show_ui(ui, |ui| {
                            for region in Region::ALL {
                                ui.selectable_value(&mut form.region, region, region.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Message:");
                    ui.add(egui::TextEdit::multiline(&mut form.message).desired_rows(4).desired_width(250.0));
                    ui.end_row();

                    ui.label("Status:");
                    ui.horizontal(|ui| {
                        for status in PrayerStatus::ALL {
                            ui.selectable_value(&mut form.status, status, status.label());
                        }
                    });
                    ui.end_row();

                    ui.label("Private:");
                    ui.checkbox(&mut form.is_private, "Only visible to prayer team");
                    ui.end_row();

                    ui.label("Member ID:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.member_id)
                            .desired_width(150.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.prayer_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_prayer();
                    }
                });
            });
        });
}
