use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::LiveSession;
use crate::core::settings_watch::SettingsWatcher;
use crate::core::ticker::{TICK_INTERVAL, Ticker};
use crate::errors::AppResult;
use crate::ui::countdown::CountdownView;
use crate::ui::render::Renderer;
use crate::utils::colors;
use std::io::{self, IsTerminal};
use std::path::Path;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Handle the `watch` command: redraw the countdown once per second until
/// Ctrl+C (or the end of the workday with --exit-when-done).
///
/// Without flag overrides the settings file is watched and edits are picked
/// up as they are saved.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Watch {
        arrival,
        work,
        lunch,
        exit_when_done,
    } = cmd
    {
        let overridden = arrival.is_some() || work.is_some() || lunch.is_some();
        let input = cfg
            .input()
            .with_overrides(arrival.as_ref(), work.as_ref(), lunch.as_ref());

        let mut session = LiveSession::new(input.clone());
        let stdout = io::stdout();
        let in_place = stdout.is_terminal();
        let mut view = CountdownView::new(
            stdout,
            Renderer::new(colors::colors_enabled()),
            in_place,
            *exit_when_done,
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let ticks = runtime.block_on(async {
            let token = CancellationToken::new();
            let (input_tx, mut input_rx) = watch::channel(input);

            let watcher = if overridden {
                None
            } else {
                match SettingsWatcher::start(path) {
                    Ok(w) => Some(w),
                    Err(e) => {
                        tracing::warn!(error = %e, "settings changes will not be picked up");
                        None
                    }
                }
            };

            let reloading = async {
                match watcher {
                    Some(w) => w.run(token.clone(), input_tx).await,
                    None => token.cancelled().await,
                }
            };

            let ticking = async {
                let ticker = Ticker::new(TICK_INTERVAL);
                let n = ticker
                    .run(token.clone(), |now| {
                        if input_rx.has_changed().unwrap_or(false) {
                            session.set_input(input_rx.borrow_and_update().clone());
                        }
                        let eval = session.tick(now);
                        view.show(&eval, now)
                    })
                    .await;
                token.cancel();
                n
            };

            let (n, _, _) = tokio::join!(ticking, reloading, cancel_on_ctrl_c(token.clone()));
            n
        });

        view.finish()?;
        tracing::debug!(ticks, "watch stopped");
    }

    Ok(())
}

/// Cancel `token` on Ctrl+C; return quietly if it is cancelled elsewhere first.
async fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::select! {
        _ = token.cancelled() => {}
        res = tokio::signal::ctrl_c() => match res {
            Ok(()) => {
                tracing::debug!("received Ctrl+C, stopping countdown");
                token.cancel();
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for Ctrl+C");
                token.cancelled().await;
            }
        },
    }
}
