pub mod calculator;
pub mod config;
pub mod logic;
pub mod session;
pub mod settings_watch;
pub mod ticker;
