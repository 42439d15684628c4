//! Dashboard panel with stats, navigation cards, and recent activity.

use chrono::{Duration, Local, NaiveDate};
use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};

use super::app::{App, Panel};
use super::components::{dashboard_card, stat_card};
use crate::models::{Event, EventStatus, Member, PrayerRequest, PrayerStatus};

/// Window for the "New Members" card.
const NEW_MEMBER_DAYS: i64 = 30;

/// Headline numbers shown in the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_members: usize,
    pub new_members: usize,
    pub upcoming_events: usize,
    pub pending_prayers: usize,
}

impl DashboardStats {
    pub fn compute(members: &[Member], events: &[Event], prayers: &[PrayerRequest], today: NaiveDate) -> Self {
        let cutoff = today - Duration::days(NEW_MEMBER_DAYS);
        Self {
            total_members: members.len(),
            new_members: members.iter().filter(|m| m.join_date >= cutoff && m.join_date <= today).count(),
            upcoming_events: events
                .iter()
                .filter(|e| e.status == EventStatus::Upcoming)
                .count(),
            pending_prayers: prayers
                .iter()
                .filter(|p| p.status == PrayerStatus::Pending)
                .count(),
        }
    }
}

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;
    let stats = DashboardStats::compute(
        app.members.records(),
        app.events.records(),
        app.prayers.records(),
        Local::now().date_naive(),
    );

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        ui.label(RichText::new(format!("Welcome, {}", app.profile.full_name)).size(28.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new(&app.config.ui.organization_name).size(14.0).weak());

        ui.add_space(25.0);

        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 720.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(ui, "Total Members", &stats.total_members.to_string(), "All regions");
            stat_card(
                ui,
                "New Members",
                &stats.new_members.to_string(),
                &format!("Joined in the last {NEW_MEMBER_DAYS} days"),
            );
            stat_card(ui, "Upcoming Events", &stats.upcoming_events.to_string(), "Scheduled");
            stat_card(
                ui,
                "Pending Prayer Requests",
                &stats.pending_prayers.to_string(),
                "Awaiting prayer",
            );
        });

        ui.add_space(25.0);

        let cards = [
            (Panel::Members, "Members", "Congregation records"),
            (Panel::Departments, "Departments", "Ministries and teams"),
            (Panel::Events, "Events", "Services and gatherings"),
            (Panel::Prayer, "Prayer Requests", "Requests from the church"),
            (Panel::Admins, "Admins", "Console administrators"),
        ];

        let available = ui.available_width();
        let num_cards = cards.len() as f32;
        let spacing = 20.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(130.0, 210.0);
        let card_size = egui::vec2(card_width, card_width * 0.75);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);
            for (i, (panel, title, description)) in cards.into_iter().enumerate() {
                if i > 0 {
                    ui.add_space(spacing);
                }
                if dashboard_card(ui, title, description, panel.icon(), card_size).clicked() {
                    next_panel = Some(panel);
                }
            }
        });

        ui.add_space(25.0);
    });

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            if app.log_messages.is_empty() {
                ui.label(RichText::new("No recent activity").weak());
                return;
            }

            egui::Grid::new("activity_grid")
                .num_columns(3)
                .striped(true)
                .min_col_width(80.0)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Type");
                    ui.strong("Details");
                    ui.strong("Time");
                    ui.end_row();

                    for entry in app.log_messages.iter().rev().take(10) {
                        ui.label(RichText::new(entry.level.label()).color(entry.level.color()));
                        ui.label(&entry.message);
                        ui.label(
                            RichText::new(entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
                                .small()
                                .weak(),
                        );
                        ui.end_row();
                    }
                });
        });

    next_panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{event, member, prayer};

    #[test]
    fn test_stats_from_seed() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let stats = DashboardStats::compute(&member::seed(), &event::seed(), &prayer::seed(), today);

        assert_eq!(stats.total_members, 6);
        // JHB002 joined 2024-01-07
        assert_eq!(stats.new_members, 1);
        assert_eq!(stats.upcoming_events, 3);
        assert_eq!(stats.pending_prayers, 2);
    }

    #[test]
    fn test_stats_follow_status_changes() {
        let mut prayers = prayer::seed();
        prayers[0].status = PrayerStatus::Answered;
        let stats = DashboardStats::compute(&[], &[], &prayers, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
        assert_eq!(stats.pending_prayers, 1);
        assert_eq!(stats.total_members, 0);
    }

    #[test]
    fn test_future_join_date_is_not_new() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let mut members = member::seed();
        members[0].join_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let stats = DashboardStats::compute(&members, &[], &[], today);
        // only JHB002 (2024-01-07) falls inside the window
        assert_eq!(stats.new_members, 1);
    }
}
