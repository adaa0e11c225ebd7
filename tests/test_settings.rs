use std::io::Write;

use alien_invasion::{Settings, SettingsError};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_overrides_and_starts_dynamic_at_base() {
    let file = write_config(r#"{ "screen_width": 800, "ship_limit": 5, "base": { "alien_speed": 2.0 } }"#);
    let s = Settings::from_file(file.path()).unwrap();
    assert_eq!(s.screen_width, 800.0);
    assert_eq!(s.ship_limit, 5);
    assert_eq!(s.base.alien_speed, 2.0);
    assert_eq!(s.dynamic, s.base);
    assert_eq!(s.bullets_allowed, 3);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_config("{ screen_width: ");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse settings file"));
}

#[test]
fn out_of_range_values_are_rejected() {
    let file = write_config(r#"{ "base": { "fleet_direction": 0.5 } }"#);
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { field: "base.fleet_direction", .. }));

    let file = write_config(r#"{ "alien_width": -60 }"#);
    assert!(Settings::from_file(file.path()).is_err());
}

#[test]
fn screen_that_fits_no_fleet_is_rejected() {
    let file = write_config(r#"{ "screen_width": 150 }"#);
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { field: "alien_width", .. }));

    let file = write_config(r#"{ "screen_height": 232 }"#);
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { field: "alien_width", .. }));
}

#[test]
fn ship_wider_than_screen_is_rejected() {
    let file = write_config(r#"{ "screen_width": 400, "ship_width": 401 }"#);
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { field: "ship_width", .. }));
}
