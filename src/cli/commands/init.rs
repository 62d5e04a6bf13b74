use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the settings directory and a settings file holding the default
/// arrival, work duration and lunch break. An existing file is left alone.
pub fn handle(path: &Path, is_test: bool) -> AppResult<()> {
    println!("⚙️  Initializing rDeparture…");
    println!("📄 Settings file : {}", path.display());

    if Config::init_all(path, is_test)? {
        success(format!("Settings created at {}", path.display()));
    } else if is_test {
        info("Test mode: settings file not written");
    } else {
        info("Settings file already present, nothing to do");
    }

    let cfg = Config::load_from(path);
    println!(
        "🕘 Arrival {} | Work {} h | Lunch {} min",
        cfg.arrival, cfg.work_duration, cfg.lunch_break
    );
    Ok(())
}
