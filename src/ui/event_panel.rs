//! Event management panel.

use eframe::egui::{self, Color32, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel};
use super::components::{
    action_button, badge, colors, danger_action_button, detail_line, panel_header, primary_button_with_icon,
    styled_button,
};
use super::forms::EventForm;
use super::table::{
    choice_filter, clear_filters_button, date_range_inputs, empty_row, expand_label, footer, header_row, row_checkbox,
    search_box, showing_label,
};
use crate::list::{Column, parse_flexible_datetime};
use crate::models::{Event, EventCategory, EventColumn, EventStatus};

/// Show the events panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Events");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Event").clicked() {
            app.event_form = EventForm::open_new();
        }
        ui.add_space(20.0);
        search_box(ui, &mut app.events, "ID, title, location or organiser...");
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Status:");
        if let Some(status) = choice_filter(
            ui,
            "event_status_filter",
            app.events.filter().status,
            &EventStatus::ALL,
            EventStatus::label,
        ) {
            app.events.update_filter(|f| f.status = status);
        }

        ui.add_space(10.0);
        ui.label("Category:");
        if let Some(category) = choice_filter(
            ui,
            "event_category_filter",
            app.events.filter().category,
            &EventCategory::ALL,
            EventCategory::label,
        ) {
            app.events.update_filter(|f| f.category = category);
        }

        ui.add_space(10.0);
        if let Some(range) = date_range_inputs(ui, &mut app.event_dates) {
            app.events.update_filter(|f| f.dates = range);
        }

        if clear_filters_button(ui, &app.events) {
            app.events.clear_filters();
            app.event_dates.clear();
        }
    });

    ui.add_space(10.0);
    showing_label(ui, &app.events, "events");
    ui.add_space(6.0);

    show_table(app, ui);

    let (bulk, export) = footer(ui, &mut app.events);
    if bulk {
        app.request_bulk_delete(Panel::Events);
    }
    if let Some(action) = export {
        app.handle_export(Panel::Events, action);
    }

    if app.event_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn status_color(status: EventStatus) -> Color32 {
    match status {
        EventStatus::Upcoming => colors::INFO,
        EventStatus::Ongoing => colors::WARNING,
        EventStatus::Completed => colors::SUCCESS,
        EventStatus::Cancelled => colors::ERROR,
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let rows: Vec<Event> = app.events.visible().into_iter().cloned().collect();

    ScrollArea::horizontal().id_salt("events_scroll").show(ui, |ui| {
        egui::Grid::new("events_grid")
            .num_columns(EventColumn::ALL.len() + 2)
            .striped(true)
            .min_col_width(40.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                header_row(ui, &mut app.events);

                if rows.is_empty() {
                    empty_row(ui);
                }

                for event in &rows {
                    row_checkbox(ui, &mut app.events, &event.id);
                    ui.label(&event.id);
                    ui.label(&event.title);
                    ui.label(event.display_datetime());
                    ui.label(&event.location);
                    ui.label(&event.organiser);
                    badge(ui, event.status.label(), status_color(event.status));

                    let expanded = app.events.is_expanded(&event.id);
                    ui.horizontal(|ui| {
                        if ui.small_button(expand_label(expanded)).clicked() {
                            app.events.toggle_expanded(&event.id);
                        }
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.event_form = EventForm::edit(event);
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.request_delete(DeleteTarget::Event(event.id.clone(), event.title.clone()));
                        }
                    });
                    ui.end_row();

                    if expanded {
                        ui.label("");
                        ui.vertical(|ui| {
                            detail_line(ui, "Category", event.category.label());
                            detail_line(ui, "Description", &event.description);
                            detail_line(ui, "Attendees", &event.attendees.join(", "));
                            detail_line(ui, "Created", &event.created_at.to_string());
                        });
                        ui.end_row();
                    }
                }
            });
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.event_form.is_editing {
        "Edit Event"
    } else {
        "Add Event"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                egui::Grid::new("event_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        let form = &mut app.event_form;

                        ui.label("Event ID:");
                        if form.is_editing {
                            ui.label(&form.id_input);
                        } else {
                            ui.add(
                                egui::TextEdit::singleline(&mut form.id_input)
                                    .desired_width(150.0)
                                    .hint_text("Auto"),
                            );
                        }
                        ui.end_row();

                        ui.label("Title:");
                        ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(260.0));
                        ui.end_row();

                        ui.label("Date & Time:");
                        ui.vertical(|ui| {
                            let empty = form.datetime_input.trim().is_empty();
                            let is_valid = empty || parse_flexible_datetime(&form.datetime_input).is_some();
                            ui.add(
                                egui::TextEdit::singleline(&mut form.datetime_input)
                                    .desired_width(150.0)
                                    .hint_text("YYYY-MM-DD HH:MM")
                                    .text_color(if is_valid { ui.visuals().text_color() } else { colors::ERROR }),
                            );
                            if !is_valid {
                                ui.colored_label(colors::ERROR, "Invalid date & time");
                            }
                        });
                        ui.end_row();

                        ui.label("Location:");
                        ui.add(egui::TextEdit::singleline(&mut form.location).desired_width(260.0));
                        ui.end_row();

                        ui.label("Organiser:");
                        ui.add(egui::TextEdit::singleline(&mut form.organiser).desired_width(260.0));
                        ui.end_row();

                        ui.label("Category:");
                        egui::ComboBox::from_id_salt("event_form_category")
                            .width(160.0)
                            .selected_text(form.category.map(EventCategory::label).unwrap_or("Select..."))
                            .show_ui(ui, |ui| {
                                for category in EventCategory::ALL {
                                    ui.selectable_value(&mut form.category, Some(category), category.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Status:");
                        egui::ComboBox::from_id_salt("event_form_status")
                            .width(160.0)
                            .selected_text(form.status.map(EventStatus::label).unwrap_or("From date"))
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut form.status, None, "From date");
                                for status in EventStatus::ALL {
                                    ui.selectable_value(&mut form.status, Some(status), status.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Description:");
                        ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(3).desired_width(260.0));
                        ui.end_row();

                        ui.label("Attendees:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.attendees_input)
                                .desired_width(260.0)
                                .hint_text("Comma separated"),
                        );
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.event_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        app.save_event();
                    }
                });
            });
        });
}
