use super::*;
use tempfile::TempDir;

#[test]
fn cli_flag_wins() {
    let r = pick_api_url(
        Some("http://cli"),
        Some("http://env".into()),
        Some("http://file".into()),
    );
    assert_eq!(r.value, "http://cli");
    assert_eq!(r.source, SettingSource::CliFlag);
}

#[test]
fn env_beats_file() {
    let r = pick_api_url(None, Some("http://env".into()), Some("http://file".into()));
    assert_eq!(r.value, "http://env");
    assert_eq!(r.source, SettingSource::EnvVar(API_URL_ENV));
    assert_eq!(r.source.to_string(), "env $RAYTING_API_URL");
}

#[test]
fn file_then_default() {
    let r = pick_api_url(None, Some("  ".into()), Some("http://file".into()));
    assert_eq!(r.source, SettingSource::ConfigFile);

    let r = pick_api_url(Some(""), None, None);
    assert_eq!(r.value, DEFAULT_API_URL);
    assert_eq!(r.source, SettingSource::Default);
}

#[test]
fn normalize_url() {
    assert_eq!(
        normalize_api_url(" https://example.org/api/ ").unwrap(),
        "https://example.org/api"
    );
    assert!(normalize_api_url("example.org/api").is_err());
}

#[test]
fn save_and_load_api_url() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rayting").join("settings.toml");

    assert_eq!(load_api_url_at(&path), None);
    save_api_url_at(&path, Some("https://example.org/api/")).unwrap();
    assert_eq!(
        load_api_url_at(&path).as_deref(),
        Some("https://example.org/api")
    );
    assert!(!path.with_extension("toml.tmp").exists());

    save_api_url_at(&path, None).unwrap();
    assert_eq!(load_api_url_at(&path), None);
}

#[test]
fn save_preserves_other_tables() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[display]\ncolor = false\n").unwrap();

    save_api_url_at(&path, Some("http://localhost:5001/api")).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[display]"));
    assert!(contents.contains("color = false"));
    assert!(contents.contains("api_url"));
}

#[test]
fn save_rejects_bad_url() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    let err = save_api_url_at(&path, Some("ftp://nope")).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
    assert!(!path.exists());
}

#[test]
fn invalid_toml_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();
    let err = save_api_url_at(&path, Some("http://x")).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}
