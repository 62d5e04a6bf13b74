//! Reloads the settings file when it changes on disk.
//!
//! File system notifications arrive on a `notify` thread and are forwarded
//! to an async task, which re-reads the file and publishes the new inputs on
//! a `tokio::sync::watch` channel. Consumers only look at the channel.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::schedule::ScheduleInput;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

const RELOAD_DEBOUNCE: Duration = Duration::from_millis(100);

pub struct SettingsWatcher {
    path: PathBuf,
    // dropping the watcher stops the notifications
    _watcher: RecommendedWatcher,
    events: mpsc::UnboundedReceiver<()>,
}

fn is_relevant(event: &notify::Event, file_name: Option<&OsString>) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    match file_name {
        Some(name) => event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(name.as_os_str())),
        None => true,
    }
}

impl SettingsWatcher {
    /// Start watching `path`.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// editors that save by writing a new file and renaming it are seen too.
    pub fn start(path: &Path) -> AppResult<Self> {
        let (tx, events) = mpsc::unbounded_channel();
        let file_name = path.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            match res {
                Ok(event) if is_relevant(&event, file_name.as_ref()) => {
                    let _ = tx.send(());
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "settings watch error"),
            }
        })?;

        let dir = match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %dir.display(), "watching settings directory");

        Ok(Self {
            path: path.to_path_buf(),
            _watcher: watcher,
            events,
        })
    }

    /// Publish the inputs on `tx` every time the file changes, until
    /// `token` is cancelled. Unchanged contents are not republished.
    pub async fn run(mut self, token: CancellationToken, tx: watch::Sender<ScheduleInput>) {
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                event = self.events.recv() => {
                    if event.is_none() {
                        break;
                    }
                    // let the writer finish, then fold the burst into one reload
                    tokio::time::sleep(RELOAD_DEBOUNCE).await;
                    while self.events.try_recv().is_ok() {}

                    let input = Config::load_from(&self.path).input();
                    let changed = tx.send_if_modified(|current| {
                        if *current == input {
                            false
                        } else {
                            *current = input;
                            true
                        }
                    });
                    if changed {
                        tracing::info!(path = %self.path.display(), "settings changed, recomputing departure");
                    }
                }
            }
        }
    }
}
