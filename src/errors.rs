//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Problems with the three schedule inputs live in their own `InputError`
//! enum: they are never fatal, the caller shows a "waiting for valid input"
//! state instead.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which of the three schedule inputs a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Arrival,
    WorkDuration,
    LunchBreak,
}

impl Field {
    /// Name used in the settings file and in messages.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Arrival => "arrival",
            Field::WorkDuration => "work_duration",
            Field::LunchBreak => "lunch_break",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid time format '{0}': expected HH:MM (00:00 - 23:59)")]
    InvalidFormat(String),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("The {0} field is empty")]
    EmptyField(Field),
}

impl InputError {
    pub fn invalid(field: Field, value: impl Into<String>, reason: impl Into<String>) -> Self {
        InputError::InvalidInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Schedule inputs
    // ---------------------------
    #[error(transparent)]
    Input(#[from] InputError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Cannot watch settings file: {0}")]
    Watch(#[from] notify::Error),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
pub type InputResult<T> = Result<T, InputError>;
