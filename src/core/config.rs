use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn read(path: &Path) -> AppResult<String> {
        fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)
    }

    /// Editor resolution: explicit choice, then $EDITOR, then $VISUAL,
    /// then the platform default.
    pub fn resolve_editor(requested: Option<&str>) -> String {
        requested
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(Self::default_editor)
    }

    pub fn default_editor() -> String {
        if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    }

    /// Open `path` with `editor`, falling back to the platform default.
    /// Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let first = Self::resolve_editor(editor);

        match Command::new(&first).arg(path).status() {
            Ok(s) if s.success() => return Ok(first),
            Ok(s) => tracing::warn!(editor = %first, status = %s, "editor exited with failure"),
            Err(e) => tracing::warn!(editor = %first, error = %e, "editor not available"),
        }

        let fallback = Self::default_editor();
        if fallback == first {
            return Err(AppError::Other(format!("Failed to edit {} using '{}'", path.display(), first)));
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            _ => Err(AppError::Other(format!(
                "Failed to edit {} using fallback '{}'",
                path.display(),
                fallback
            ))),
        }
    }
}
