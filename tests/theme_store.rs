use std::fs;

use cricket_terminal::theme::{Theme, ThemeStore};

#[test]
fn falls_back_when_nothing_stored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let store = ThemeStore::load_from(Some(path.clone()), Theme::Light);
    assert_eq!(store.theme(), Theme::Light);
    assert!(!path.exists());
}

#[test]
fn toggle_writes_back_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut store = ThemeStore::load_from(Some(path.clone()), Theme::Dark);
    assert_eq!(store.toggle().unwrap(), Theme::Light);
    assert!(path.exists());

    let reloaded = ThemeStore::load_from(Some(path.clone()), Theme::Dark);
    assert_eq!(reloaded.theme(), Theme::Light);

    let mut store = reloaded;
    store.set(Theme::Dark).unwrap();
    let reloaded = ThemeStore::load_from(Some(path), Theme::Light);
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn corrupt_or_outdated_prefs_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(
        ThemeStore::load_from(Some(path.clone()), Theme::Light).theme(),
        Theme::Light
    );

    fs::write(&path, r#"{"version":99,"theme":"dark"}"#).unwrap();
    assert_eq!(
        ThemeStore::load_from(Some(path.clone()), Theme::Light).theme(),
        Theme::Light
    );

    fs::write(&path, r#"{"version":1,"theme":"dark"}"#).unwrap();
    assert_eq!(
        ThemeStore::load_from(Some(path), Theme::Light).theme(),
        Theme::Dark
    );
}

#[test]
fn forced_theme_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut store = ThemeStore::load_from(Some(path.clone()), Theme::Dark);
    store.force(Theme::Light);
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.palette().theme, Theme::Light);
    assert!(!path.exists());
}

#[test]
fn store_without_path_still_toggles() {
    let mut store = ThemeStore::load_from(None, Theme::Dark);
    assert_eq!(store.toggle().unwrap(), Theme::Light);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn failed_swap_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    // A directory in the way makes the final rename fail.
    fs::create_dir(&path).unwrap();

    let mut store = ThemeStore::load_from(Some(path.clone()), Theme::Dark);
    assert!(store.set(Theme::Light).is_err());
    assert!(!dir.path().join("prefs.json.tmp").exists());
    assert!(path.is_dir());
}
