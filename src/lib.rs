pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod list;
pub mod models;
pub mod print;
pub mod ui;

pub use error::{AppError, Result};
