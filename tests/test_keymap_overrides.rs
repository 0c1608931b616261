use crossterm::event::{KeyCode, KeyModifiers};
use proud100::config::Config;
use proud100::keymap::{Action, KeyBinding, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' is Clear in the vim preset; remap it to Quit
    config.keymap.overrides.push(KeyBinding::new("x", Action::Quit));
    config.keymap.overrides.push(KeyBinding::new("w", Action::MoveUp));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Preset bindings of an overridden action are shadowed
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    // Untouched actions keep their preset keys
    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('3'), KeyModifiers::NONE),
        Some(Action::NavGames)
    );
}

#[test]
fn test_override_file_written_by_hand() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "ctrl+h"
action = "help"

[[keymap.overrides]]
key = "hyper+z"
action = "clear"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        Some(Action::Help)
    );
    assert_eq!(config.keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE), None);

    let invalid = config.keymap.invalid_overrides();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].key, "hyper+z");
}

#[test]
fn test_footer_reflects_overrides() {
    let mut config = Config::default();
    config.keymap.overrides.push(KeyBinding::new("ctrl+q", Action::Quit));
    let footer = config.keymap.footer_navigation();
    assert!(footer.contains("Ctrl+Q: Quit"));
}
