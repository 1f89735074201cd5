use std::cell::Cell;
use std::rc::Rc;

use day_planner::io::settings_file::load_settings;
use day_planner::reactive::{Derived, Readable};
use day_planner::settings_store::SettingsStore;
use day_planner::{Settings, SettingsError};

#[test]
fn load_falls_back_to_defaults_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::load(dir.path().join("settings.json"));

    assert_eq!(store.get(), Settings::default());
}

#[test]
fn load_falls_back_to_defaults_for_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "zoom_level": -2.0 }"#).unwrap();

    let store = SettingsStore::load(&path);

    assert_eq!(store.get().zoom_level, Settings::default().zoom_level);
}

#[test]
fn set_persists_valid_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("settings.json");
    let store = SettingsStore::load(&path);

    store.update(|s| s.start_hour = 6).unwrap();

    assert_eq!(load_settings(&path).unwrap().start_hour, 6);
    assert_eq!(store.path(), Some(path.as_path()));
}

#[test]
fn invalid_snapshot_is_never_published() {
    let store = SettingsStore::in_memory(Settings::default()).unwrap();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let _sub = store
        .channel()
        .subscribe(Rc::new(move |_: &Settings| counter.set(counter.get() + 1)));

    let err = store.update(|s| s.start_hour = 30).unwrap_err();

    assert!(matches!(err, SettingsError::InvalidStartHour(30)));
    assert_eq!(hits.get(), 0);
    assert_eq!(store.get().start_hour, 0);
}

#[test]
fn equal_snapshot_does_not_notify() {
    let store = SettingsStore::in_memory(Settings::default()).unwrap();
    let zoom = Derived::new(store.channel(), |s: &Settings| s.zoom_level);

    store.set(Settings::default()).unwrap();
    assert_eq!(zoom.recompute_count(), 0);

    store.update(|s| s.zoom_in()).unwrap();
    assert_eq!(zoom.recompute_count(), 1);
    assert!(zoom.get() > 2.0);
}

#[test]
fn in_memory_rejects_invalid_initial_settings() {
    let settings = Settings {
        zoom_level: 0.0,
        ..Settings::default()
    };
    assert!(SettingsStore::in_memory(settings).is_err());
}

#[test]
fn channel_handle_sees_only_validated_snapshots() {
    let store = SettingsStore::in_memory(Settings::default()).unwrap();
    let channel = store.channel().clone();
    let zoom = Derived::new(&channel, |s: &Settings| s.zoom_level);

    assert!(store.update(|s| s.zoom_level = -1.0).is_err());
    assert_eq!(channel.get().zoom_level, 2.0);
    assert_eq!(zoom.recompute_count(), 0);

    store.update(|s| s.zoom_level = 4.0).unwrap();
    assert_eq!(channel.get().zoom_level, 4.0);
    assert_eq!(zoom.get(), 4.0);
}
