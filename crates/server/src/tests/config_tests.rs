use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_point_at_local_catalog() {
    let settings = settings_from_sources(None, no_env);
    assert_eq!(settings.server_bind, "127.0.0.1:3033");
    assert_eq!(settings.catalog_path, PathBuf::from("./data/products.json"));
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:9000"
catalog_path = "fixtures/catalog.json"
"#;
    let settings = settings_from_sources(Some(raw), no_env);
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.catalog_path, PathBuf::from("fixtures/catalog.json"));
}

#[test]
fn prefixed_env_wins_over_plain_env_and_file() {
    let raw = r#"bind_addr = "0.0.0.0:9000""#;
    let settings = settings_from_sources(Some(raw), |name| match name {
        "SERVER_BIND" => Some("127.0.0.1:1".to_string()),
        "APP__BIND_ADDR" => Some("127.0.0.1:2".to_string()),
        "CATALOG_PATH" => Some("C:\\data\\products.json".to_string()),
        _ => None,
    });
    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.catalog_path, PathBuf::from("C:/data/products.json"));
}

#[test]
fn unparsable_file_is_ignored() {
    let settings = settings_from_sources(Some("bind_addr = [1, 2"), no_env);
    assert_eq!(settings, Settings::default());
}

#[test]
fn blank_catalog_path_falls_back_to_default() {
    assert_eq!(
        normalize_catalog_path("  "),
        PathBuf::from("./data/products.json")
    );
}
