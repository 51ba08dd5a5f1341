pub mod app;
pub mod config;
pub mod keybinds;
pub mod modal;
pub mod sign_in;
pub mod ui;

pub use config::Config;
