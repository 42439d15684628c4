//! GUI screens, panels and application state.

pub mod admin_panel;
pub mod app;
pub mod components;
pub mod dashboard;
pub mod department_panel;
pub mod event_panel;
pub mod forms;
pub mod login;
pub mod member_panel;
pub mod prayer_panel;
pub mod profile_panel;
pub mod shell;
pub mod signup;
pub mod table;

pub use app::App;
