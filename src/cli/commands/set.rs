use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use std::path::Path;

/// Handle the `set` command: persist raw values without normalizing them.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Set {
        arrival,
        work,
        lunch,
    } = cmd
    {
        if arrival.is_none() && work.is_none() && lunch.is_none() {
            info("Nothing to update (use --arrival, --work or --lunch)");
            return Ok(());
        }

        let input = cfg
            .input()
            .with_overrides(arrival.as_ref(), work.as_ref(), lunch.as_ref());

        // Saved anyway: the value may be fixed by a later edit.
        if let Err(e) = Core::build_schedule(date::now(), &input) {
            warning(format!("Saved values cannot be evaluated yet: {}", e));
        }

        Config::from_input(&input).save_to(path)?;
        success(format!(
            "Saved arrival={} work_duration={} lunch_break={}",
            input.arrival, input.work_duration, input.lunch_break
        ));
    }

    Ok(())
}
