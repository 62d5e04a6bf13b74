use rdeparture::config::Config;
use rdeparture::core::settings_watch::SettingsWatcher;
use rdeparture::models::schedule::ScheduleInput;
use std::fs::File;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tokio::sync::watch;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

mod common;
use common::setup_settings;

const WAIT: Duration = Duration::from_secs(10);

async fn wait_for_arrival(rx: &mut watch::Receiver<ScheduleInput>, expected: &str) -> ScheduleInput {
    timeout(WAIT, async {
        loop {
            let current = rx.borrow_and_update().clone();
            if current.arrival == expected {
                return current;
            }
            rx.changed().await.expect("sender alive");
        }
    })
    .await
    .expect("change notified in time")
}

fn save(path: &Path, arrival: &str) {
    Config {
        arrival: arrival.into(),
        work_duration: "8".into(),
        lunch_break: "30".into(),
    }
    .save_to(path)
    .expect("save");
}

fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .expect("open settings")
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set mtime");
}

#[tokio::test]
async fn test_edit_with_same_mtime_is_picked_up() {
    let (_dir, path) = setup_settings();
    save(&path, "09:00");
    set_mtime(&path, 1_000);

    let initial = Config::load_from(&path).input();
    let (tx, mut rx) = watch::channel(initial);
    let token = CancellationToken::new();

    let watcher = SettingsWatcher::start(&path).expect("start watcher");
    let task = tokio::spawn(watcher.run(token.clone(), tx));

    save(&path, "08:00");
    set_mtime(&path, 1_000);

    let seen = wait_for_arrival(&mut rx, "08:00").await;
    assert_eq!(seen, ScheduleInput::new("08:00", "8", "30"));

    token.cancel();
    timeout(WAIT, task)
        .await
        .expect("watcher stops after cancel")
        .expect("task joined");
}

#[tokio::test]
async fn test_replaced_file_is_picked_up() {
    let (dir, path) = setup_settings();
    save(&path, "09:00");

    let (tx, mut rx) = watch::channel(Config::load_from(&path).input());
    let token = CancellationToken::new();
    let watcher = SettingsWatcher::start(&path).expect("start watcher");
    let task = tokio::spawn(watcher.run(token.clone(), tx));

    // write-then-rename, as many editors save
    let tmp = dir.path().join("rdeparture.conf.tmp");
    save(&tmp, "07:30");
    std::fs::rename(&tmp, &path).expect("rename");

    let seen = wait_for_arrival(&mut rx, "07:30").await;
    assert_eq!(seen, ScheduleInput::new("07:30", "8", "30"));

    token.cancel();
    timeout(WAIT, task)
        .await
        .expect("watcher stops after cancel")
        .expect("task joined");
}

#[tokio::test]
async fn test_cancelled_watcher_stops_without_events() {
    let (_dir, path) = setup_settings();
    save(&path, "09:00");

    let (tx, _rx) = watch::channel(Config::load_from(&path).input());
    let token = CancellationToken::new();
    token.cancel();

    let watcher = SettingsWatcher::start(&path).expect("start watcher");
    timeout(WAIT, watcher.run(token, tx))
        .await
        .expect("returns immediately");
}
