use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current settings ({}):\n", path.display());
            if path.exists() {
                println!("{}", ConfigLogic::read(path)?);
            } else {
                info("No settings file, showing defaults");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "Settings file {} not found (run `rdeparture init`)",
                    path.display()
                ));
            } else {
                let missing = missing_fields(path)?;
                if missing.is_empty() {
                    success("All settings fields are present");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `rdeparture config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            if !path.exists() {
                warning(format!("Settings file {} not found", path.display()));
            } else {
                let report = migrate_config(path)?;
                if report.is_empty() {
                    info("Settings already up to date");
                } else {
                    if !report.added.is_empty() {
                        success(format!("Added fields: {}", report.added.join(", ")));
                    }
                    if !report.converted.is_empty() {
                        success(format!(
                            "Converted to text: {}",
                            report.converted.join(", ")
                        ));
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::default().save_to(path)?;
            }
            let used = ConfigLogic::edit(path, editor.as_deref())?;
            success(format!("Settings file edited successfully using '{}'", used));
        }
    }

    Ok(())
}
