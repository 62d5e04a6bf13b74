use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::parse_time_of_day;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::render::{Renderer, StatusReport};
use crate::utils::{colors, date};

/// Handle the `calc` command: a single evaluation against the clock.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        arrival,
        work,
        lunch,
        at,
        json,
    } = cmd
    {
        let input = cfg
            .input()
            .with_overrides(arrival.as_ref(), work.as_ref(), lunch.as_ref());

        let now = match at {
            Some(t) => date::today_at(parse_time_of_day(t)?.to_naive_time()),
            None => date::now(),
        };

        let eval = Core::evaluate(now, &input);

        if *json {
            let report = StatusReport::new(&input, &eval, now);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let renderer = Renderer::new(colors::colors_enabled());
            println!("{}", renderer.report(&input, &eval, now));
        }
    }

    Ok(())
}
