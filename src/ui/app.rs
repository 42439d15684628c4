//! Application state and the per-frame update loop.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use eframe::egui;
use egui_phosphor::regular::{BUILDINGS, CALENDAR, HANDS_PRAYING, HOUSE, SHIELD_CHECK, USER, USERS};
use tokio::sync::mpsc;

use crate::auth::{AuthClient, LoginRequest, SignupRequest};
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::export::{ExportFormat, Tabular, export_to, generate_export_filename, show_save_dialog};
use crate::list::{ListView, Record, RecordFilter, SortSpec};
use crate::models::{
    Admin, AdminColumn, AdminFilter, Department, DepartmentColumn, DepartmentFilter, Event, EventColumn,
    EventFilter, Member, MemberColumn, MemberFilter, PrayerColumn, PrayerFilter, PrayerRequest, PrayerStatus,
    Profile, admin, department, event, member, prayer,
};
use crate::print::print_records;

use super::components::colors;
use super::forms::{
    AdminForm, DepartmentForm, EventForm, LoginForm, MemberForm, PrayerForm, ProfileForm, SignupForm,
};
use super::table::{DateRangeInput, ExportAction};
use super::{
    admin_panel, dashboard, department_panel, event_panel, login, member_panel, prayer_panel, profile_panel, shell,
    signup,
};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    Main,
}

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Home,
    Profile,
    Admins,
    Members,
    Departments,
    Events,
    Prayer,
}

impl Panel {
    /// Sidebar entries in display order.
    pub const SIDEBAR: [Panel; 7] = [
        Panel::Home,
        Panel::Profile,
        Panel::Admins,
        Panel::Members,
        Panel::Departments,
        Panel::Events,
        Panel::Prayer,
    ];

    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Profile => "My Profile",
            Panel::Admins => "Admins",
            Panel::Members => "Members",
            Panel::Departments => "Departments",
            Panel::Events => "Events",
            Panel::Prayer => "Prayer Requests",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Panel::Home => HOUSE,
            Panel::Profile => USER,
            Panel::Admins => SHIELD_CHECK,
            Panel::Members => USERS,
            Panel::Departments => BUILDINGS,
            Panel::Events => CALENDAR,
            Panel::Prayer => HANDS_PRAYING,
        }
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    /// Login accepted for the given email.
    LoginSucceeded(String),
    /// Login failed with a user-facing message.
    LoginFailed(String),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Success => "Success",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            LogLevel::Info => colors::NEUTRAL,
            LogLevel::Success => colors::SUCCESS,
            LogLevel::Warning => colors::WARNING,
            LogLevel::Error => colors::ERROR,
        }
    }
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

const MAX_LOG_ENTRIES: usize = 100;

/// Target for the delete confirmation dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    Member(String, String),
    Department(u64, String),
    Event(String, String),
    Prayer(String, String),
    Admin(u64, String),
    /// Every selected row of a page.
    Selected(Panel, usize),
    /// The signed-in user's account.
    Account,
}

impl DeleteTarget {
    /// Dialog title and question.
    fn prompt(&self) -> (&'static str, String) {
        match self {
            DeleteTarget::Member(_, name) => ("Delete Member", format!("Delete member '{name}'?")),
            DeleteTarget::Department(_, name) => ("Delete Department", format!("Delete department '{name}'?")),
            DeleteTarget::Event(_, title) => ("Delete Event", format!("Delete event '{title}'?")),
            DeleteTarget::Prayer(id, _) => ("Delete Prayer Request", format!("Delete prayer request {id}?")),
            DeleteTarget::Admin(_, name) => ("Delete Admin", format!("Delete admin '{name}'?")),
            DeleteTarget::Selected(panel, count) => (
                "Delete Selected",
                format!("Delete {count} selected {}?", panel.name().to_lowercase()),
            ),
            DeleteTarget::Account => (
                "Delete Account",
                "Delete your account? You will be signed out.".to_string(),
            ),
        }
    }
}

/// Main application state.
pub struct App {
    // Runtime for the login request
    pub rt: tokio::runtime::Runtime,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    pub config: AppConfig,

    // Navigation
    pub screen: Screen,
    pub current_panel: Panel,

    // Auth
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub login_in_flight: bool,
    pub auth_error: Option<String>,
    pub config_warning: Option<String>,
    pub profile: Profile,

    // Record pages
    pub members: ListView<Member, MemberFilter>,
    pub departments: ListView<Department, DepartmentFilter>,
    pub events: ListView<Event, EventFilter>,
    pub prayers: ListView<PrayerRequest, PrayerFilter>,
    pub admins: ListView<Admin, AdminFilter>,

    // Date filter inputs
    pub member_dates: DateRangeInput,
    pub event_dates: DateRangeInput,
    pub prayer_dates: DateRangeInput,

    // Forms
    pub member_form: MemberForm,
    pub department_form: DepartmentForm,
    pub event_form: EventForm,
    pub prayer_form: PrayerForm,
    pub admin_form: AdminForm,
    pub profile_form: ProfileForm,

    // Log messages
    pub log_messages: Vec<LogEntry>,
    pub status: String,

    // Dialogs
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime, config_warning: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let sizes = config.ui.page_sizes.clone();

        Self {
            rt,
            tx,
            rx,
            config,
            screen: Screen::Login,
            current_panel: Panel::default(),
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            login_in_flight: false,
            auth_error: None,
            config_warning,
            profile: Profile::sample(),
            members: ListView::new(member::seed(), SortSpec::asc(MemberColumn::Name), sizes.members),
            departments: ListView::new(
                department::seed(),
                SortSpec::asc(DepartmentColumn::Name),
                sizes.departments,
            ),
            events: ListView::new(event::seed(), SortSpec::asc(EventColumn::DateTime), sizes.events),
            prayers: ListView::new(prayer::seed(), SortSpec::desc(PrayerColumn::Submitted), sizes.prayer),
            admins: ListView::new(admin::seed(), SortSpec::asc(AdminColumn::Name), sizes.admins),
            member_dates: DateRangeInput::default(),
            event_dates: DateRangeInput::default(),
            prayer_dates: DateRangeInput::default(),
            member_form: MemberForm::default(),
            department_form: DepartmentForm::default(),
            event_form: EventForm::default(),
            prayer_form: PrayerForm::default(),
            admin_form: AdminForm::default(),
            profile_form: ProfileForm::default(),
            log_messages: Vec::new(),
            status: "Ready".to_string(),
            delete_target: None,
            error_message: None,
            success_message: None,
        }
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        self.status = message.clone();
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message,
            level,
        });

        if self.log_messages.len() > MAX_LOG_ENTRIES {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    // --- Auth ---

    /// Send the login request on the runtime; the result arrives via `rx`.
    pub fn start_login(&mut self) {
        if self.login_in_flight {
            return;
        }
        let request = LoginRequest::new(&self.login_form.email, &self.login_form.password);
        if let Err(e) = request.validate() {
            self.auth_error = Some(e.to_string());
            return;
        }

        self.login_in_flight = true;
        self.auth_error = None;

        let api = self.config.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result = match AuthClient::new(&api) {
                Ok(client) => client.login(&request).await,
                Err(e) => Err(e),
            };
            let msg = match result {
                Ok(()) => UiMessage::LoginSucceeded(request.email),
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    UiMessage::LoginFailed(e.login_message())
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Validate the signup form and sign the new user in locally.
    pub fn submit_signup(&mut self) {
        let request = SignupRequest {
            name: self.signup_form.name.trim().to_string(),
            email: self.signup_form.email.trim().to_string(),
            password: self.signup_form.password.clone(),
        };
        if let Err(e) = request.validate() {
            self.auth_error = Some(e.to_string());
            return;
        }

        tracing::info!("Signed up {}", request.email);
        self.sign_in(&request.email);
        self.profile.full_name = request.name;
        self.signup_form = SignupForm::default();
    }

    fn sign_in(&mut self, email: &str) {
        self.profile = Profile::for_login(email, Local::now().date_naive());
        self.screen = Screen::Main;
        self.current_panel = Panel::Home;
        self.auth_error = None;
        self.login_form.password.clear();
        self.log_success(format!("Signed in as {email}"));
    }

    /// Return to the login screen. Page data is kept.
    pub fn logout(&mut self) {
        tracing::info!("Signed out {}", self.profile.email);
        self.screen = Screen::Login;
        self.login_form.password.clear();
        self.log_info("Signed out");
    }

    pub fn show_screen(&mut self, screen: Screen) {
        self.auth_error = None;
        self.screen = screen;
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::LoginSucceeded(email) => {
                    self.login_in_flight = false;
                    tracing::info!("Login succeeded for {}", email);
                    self.sign_in(&email);
                }
                UiMessage::LoginFailed(message) => {
                    self.login_in_flight = false;
                    self.auth_error = Some(message);
                }
            }
        }
    }

    // --- Record forms ---

    fn form_error(&mut self, e: AppError) {
        tracing::warn!("Form rejected: {}", e);
        self.error_message = Some(e.to_string());
    }

    pub fn save_member(&mut self) {
        let editing = self.member_form.is_editing;
        let result = self
            .member_form
            .build(self.members.records())
            .and_then(|m| {
                let label = format!("{} ({})", m.full_name, m.id);
                store(&mut self.members, m, editing, false).map(|()| label)
            });

        match result {
            Ok(label) => {
                self.member_form.reset();
                tracing::info!("Member {} {}", saved_verb(editing), label);
                self.log_success(format!("Member {}: {label}", saved_verb(editing)));
            }
            Err(e) => self.form_error(e),
        }
    }

    pub fn save_department(&mut self) {
        let editing = self.department_form.is_editing;
        let result = self
            .department_form
            .build(self.departments.records())
            .and_then(|d| {
                let label = d.name.clone();
                store(&mut self.departments, d, editing, true).map(|()| label)
            });

        match result {
            Ok(label) => {
                self.department_form.reset();
                tracing::info!("Department {} {}", saved_verb(editing), label);
                self.log_success(format!("Department {}: {label}", saved_verb(editing)));
            }
            Err(e) => self.form_error(e),
        }
    }

    pub fn save_event(&mut self) {
        let editing = self.event_form.is_editing;
        let now = Local::now().naive_local();
        let result = self
            .event_form
            .build(self.events.records(), now)
            .and_then(|ev| {
                let label = format!("{} ({})", ev.title, ev.id);
                store(&mut self.events, ev, editing, false).map(|()| label)
            });

        match result {
            Ok(label) => {
                self.event_form.reset();
                tracing::info!("Event {} {}", saved_verb(editing), label);
                self.log_success(format!("Event {}: {label}", saved_verb(editing)));
            }
            Err(e) => self.form_error(e),
        }
    }

    pub fn save_prayer(&mut self) {
        let editing = self.prayer_form.is_editing;
        let now = Local::now().naive_local();
        let result = self
            .prayer_form
            .build(self.prayers.records(), now)
            .and_then(|r| {
                let label = r.id.clone();
                store(&mut self.prayers, r, editing, false).map(|()| label)
            });

        match result {
            Ok(label) => {
                self.prayer_form.reset();
                tracing::info!("Prayer request {} {}", saved_verb(editing), label);
                self.log_success(format!("Prayer request {}: {label}", saved_verb(editing)));
            }
            Err(e) => self.form_error(e),
        }
    }

    pub fn save_admin(&mut self) {
        let editing = self.admin_form.is_editing;
        let result = self
            .admin_form
            .build(self.admins.records())
            .and_then(|a| {
                let label = a.full_name.clone();
                store(&mut self.admins, a, editing, false).map(|()| label)
            });

        match result {
            Ok(label) => {
                self.admin_form.reset();
                tracing::info!("Admin {} {}", saved_verb(editing), label);
                self.log_success(format!("Admin {}: {label}", saved_verb(editing)));
            }
            Err(e) => self.form_error(e),
        }
    }

    pub fn save_profile(&mut self) {
        match self.profile_form.build(&self.profile) {
            Ok(profile) => {
                self.profile = profile;
                self.profile_form.reset();
                tracing::info!("Profile updated for {}", self.profile.email);
                self.log_success("Profile updated");
            }
            Err(e) => self.form_error(e),
        }
    }

    // --- Prayer row actions ---

    pub fn set_prayer_status(&mut self, id: &String, status: PrayerStatus) {
        match self.prayers.update_with(id, |r| r.status = status) {
            Ok(()) => self.log_success(format!("Prayer request {id} marked as {}", status.label())),
            Err(e) => self.form_error(e),
        }
    }

    pub fn toggle_prayer_privacy(&mut self, id: &String) {
        let mut label = "";
        let result = self.prayers.update_with(id, |r| {
            r.is_private = !r.is_private;
            label = r.privacy_label();
        });
        match result {
            Ok(()) => self.log_info(format!("Prayer request {id} is now {label}")),
            Err(e) => self.form_error(e),
        }
    }

    // --- Delete ---

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.delete_target = Some(target);
    }

    /// Ask to delete the selected rows of `panel`; no-op without a selection.
    pub fn request_bulk_delete(&mut self, panel: Panel) {
        let count = match panel {
            Panel::Members => self.members.selected_ids().len(),
            Panel::Departments => self.departments.selected_ids().len(),
            Panel::Events => self.events.selected_ids().len(),
            Panel::Prayer => self.prayers.selected_ids().len(),
            Panel::Admins => self.admins.selected_ids().len(),
            Panel::Home | Panel::Profile => 0,
        };
        if count > 0 {
            self.delete_target = Some(DeleteTarget::Selected(panel, count));
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };

        let result = match &target {
            DeleteTarget::Member(id, name) => self.members.remove(id).map(|_| format!("Deleted member {name}")),
            DeleteTarget::Department(id, name) => self
                .departments
                .remove(id)
                .map(|_| format!("Deleted department {name}")),
            DeleteTarget::Event(id, title) => self.events.remove(id).map(|_| format!("Deleted event {title}")),
            DeleteTarget::Prayer(id, _) => self
                .prayers
                .remove(id)
                .map(|_| format!("Deleted prayer request {id}")),
            DeleteTarget::Admin(id, name) => self.admins.remove(id).map(|_| format!("Deleted admin {name}")),
            DeleteTarget::Selected(panel, _) => {
                let removed = match panel {
                    Panel::Members => self.members.remove_selected(),
                    Panel::Departments => self.departments.remove_selected(),
                    Panel::Events => self.events.remove_selected(),
                    Panel::Prayer => self.prayers.remove_selected(),
                    Panel::Admins => self.admins.remove_selected(),
                    Panel::Home | Panel::Profile => 0,
                };
                Ok(format!("Deleted {removed} {}", panel.name().to_lowercase()))
            }
            DeleteTarget::Account => {
                self.delete_account();
                return;
            }
        };

        match result {
            Ok(message) => {
                tracing::info!("{}", message);
                self.log_success(message);
            }
            Err(e) => {
                tracing::error!("Delete failed: {}", e);
                self.error_message = Some(e.to_string());
                self.log_error(e.to_string());
            }
        }
    }

    fn delete_account(&mut self) {
        tracing::info!("Account deleted for {}", self.profile.email);
        self.log_warning(format!("Account deleted: {}", self.profile.email));
        self.profile = Profile::sample();
        self.login_form = LoginForm::default();
        self.screen = Screen::Login;
    }

    // --- Export and print ---

    pub fn handle_export(&mut self, panel: Panel, action: ExportAction) {
        match action {
            ExportAction::Print => self.print_page(panel),
            ExportAction::Export(format) => self.export_page(panel, format),
        }
    }

    /// Export the full collection of `panel` through a save dialog.
    fn export_page(&mut self, panel: Panel, format: ExportFormat) {
        let dir = self.config.export.directory.clone();
        let dir = dir.as_deref();
        let result = match panel {
            Panel::Members => save_export(self.members.records(), "members", format, dir),
            Panel::Departments => save_export(self.departments.records(), "departments", format, dir),
            Panel::Events => save_export(self.events.records(), "events", format, dir),
            Panel::Prayer => save_export(self.prayers.records(), "prayer_requests", format, dir),
            Panel::Admins => save_export(self.admins.records(), "admins", format, dir),
            Panel::Home | Panel::Profile => return,
        };

        match result {
            Ok(Some(path)) => {
                tracing::info!("Exported {} to {:?}", panel.name(), path);
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported {}: {}", panel.name(), path.display()));
            }
            Ok(None) => self.log_info("Export cancelled"),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.error_message = Some(format!("Export failed: {e}"));
                self.log_error(format!("Export failed: {e}"));
            }
        }
    }

    /// Open the print view of the rows on the current page.
    fn print_page(&mut self, panel: Panel) {
        let org = self.config.ui.organization_name.clone();
        let result = match panel {
            Panel::Members => print_records(&org, &self.members.visible()),
            Panel::Departments => print_records(&org, &self.departments.visible()),
            Panel::Events => print_records(&org, &self.events.visible()),
            Panel::Prayer => print_records(&org, &self.prayers.visible()),
            Panel::Admins => print_records(&org, &self.admins.visible()),
            Panel::Home | Panel::Profile => return,
        };

        match result {
            Ok(path) => self.log_info(format!("Print view opened: {}", path.display())),
            Err(e) => {
                tracing::error!("Print failed: {}", e);
                self.error_message = Some(format!("Print failed: {e}"));
                self.log_error(format!("Print failed: {e}"));
            }
        }
    }

    // --- Rendering ---

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        if let Some(target) = self.delete_target.clone() {
            let (title, message) = target.prompt();

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.delete_target = None;
                        }
                        if ui
                            .button(egui::RichText::new("Delete").color(colors::ERROR))
                            .clicked()
                        {
                            self.confirm_delete();
                        }
                    });
                });
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        shell::show_header(self, ctx);
        shell::show_status_bar(self, ctx);
        shell::show_sidebar(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| match self.current_panel {
                    Panel::Home => {
                        if let Some(next) = dashboard::show(self, ui) {
                            self.current_panel = next;
                        }
                    }
                    Panel::Profile => profile_panel::show(self, ui),
                    Panel::Admins => admin_panel::show(self, ui),
                    Panel::Members => member_panel::show(self, ui),
                    Panel::Departments => department_panel::show(self, ui),
                    Panel::Events => event_panel::show(self, ui),
                    Panel::Prayer => prayer_panel::show(self, ui),
                });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();

        if self.login_in_flight {
            ctx.request_repaint();
        }

        self.show_dialogs(ctx);

        match self.screen {
            Screen::Login => login::show(self, ctx),
            Screen::Signup => signup::show(self, ctx),
            Screen::Main => self.show_main(ctx),
        }
    }
}

fn saved_verb(editing: bool) -> &'static str {
    if editing { "updated" } else { "added" }
}

/// Insert or update `record` in `view`.
fn store<R: Record, F: RecordFilter<R>>(view: &mut ListView<R, F>, record: R, editing: bool, prepend: bool) -> Result<()> {
    if editing {
        view.update(record)
    } else if prepend {
        view.prepend(record)
    } else {
        view.insert(record)
    }
}

/// Ask for a target file and export `records` to it.
///
/// Returns `Ok(None)` when the dialog is cancelled.
fn save_export<T: Tabular>(
    records: &[T],
    prefix: &str,
    format: ExportFormat,
    directory: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let name = generate_export_filename(prefix, format);
    let Some(path) = show_save_dialog(&name, format, directory) else {
        return Ok(None);
    };
    export_to(records, format, &path)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(AppConfig::default(), rt, None)
    }

    #[test]
    fn test_log_is_bounded() {
        let mut app = test_app();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            app.log_info(format!("entry {i}"));
        }
        assert_eq!(app.log_messages.len(), MAX_LOG_ENTRIES);
        assert_eq!(app.log_messages[0].message, "entry 5");
        assert_eq!(app.status, format!("entry {}", MAX_LOG_ENTRIES + 4));
    }

    #[test]
    fn test_invalid_member_form_stays_open() {
        let mut app = test_app();
        let before = app.members.len();
        app.member_form = MemberForm::open_new(Local::now().date_naive());
        app.save_member();

        assert_eq!(app.members.len(), before);
        assert!(app.member_form.is_open);
        assert_eq!(app.error_message.as_deref(), Some("Full name is required"));
    }

    #[test]
    fn test_new_department_is_prepended() {
        let mut app = test_app();
        app.department_form = DepartmentForm {
            name: "Media Team".to_string(),
            ..DepartmentForm::open_new()
        };
        app.save_department();

        assert_eq!(app.departments.records()[0].name, "Media Team");
        assert!(!app.department_form.is_open);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = test_app();
        let before = app.events.len();
        app.request_delete(DeleteTarget::Event("EVT-001".to_string(), "Sunday Service".to_string()));
        assert_eq!(app.events.len(), before);

        app.confirm_delete();
        assert_eq!(app.events.len(), before - 1);
        assert!(app.delete_target.is_none());
    }

    #[test]
    fn test_bulk_delete_without_selection_is_noop() {
        let mut app = test_app();
        app.request_bulk_delete(Panel::Members);
        assert!(app.delete_target.is_none());

        app.members.toggle_selected(&"CT001".to_string());
        app.request_bulk_delete(Panel::Members);
        assert_eq!(app.delete_target, Some(DeleteTarget::Selected(Panel::Members, 1)));
        app.confirm_delete();
        assert!(!app.members.contains(&"CT001".to_string()));
    }

    #[test]
    fn test_prayer_row_actions() {
        let mut app = test_app();
        let id = "PRQ-001".to_string();
        app.set_prayer_status(&id, PrayerStatus::Answered);
        app.toggle_prayer_privacy(&id);

        let request = app.prayers.get(&id).unwrap();
        assert_eq!(request.status, PrayerStatus::Answered);
        assert!(request.is_private);
    }

    #[test]
    fn test_delete_account_signs_out() {
        let mut app = test_app();
        app.screen = Screen::Main;
        app.request_delete(DeleteTarget::Account);
        app.confirm_delete();
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let mut app = test_app();
        app.signup_form.name = "Ruth".to_string();
        app.submit_signup();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.auth_error.is_some());

        app.signup_form.email = "ruth@example.com".to_string();
        app.signup_form.password = "secret".to_string();
        app.submit_signup();
        assert_eq!(app.screen, Screen::Main);
        assert_eq!(app.profile.email, "ruth@example.com");
        assert_eq!(app.profile.full_name, "Ruth");
    }
}
