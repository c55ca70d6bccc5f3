use super::{load_settings_from, normalize_database_url, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn missing_file() -> &'static Path {
    Path::new("/nonexistent/plates-server.toml")
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(missing_file(), env_of(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn port_binds_all_interfaces_unless_bind_is_explicit() {
    let settings = load_settings_from(missing_file(), env_of(&[("PORT", "9090")]));
    assert_eq!(settings.server_bind, "0.0.0.0:9090");

    let settings = load_settings_from(
        missing_file(),
        env_of(&[("PORT", "9090"), ("APP__BIND_ADDR", "127.0.0.1:7000")]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:7000");
}

#[test]
fn invalid_env_values_are_ignored() {
    let settings = load_settings_from(
        missing_file(),
        env_of(&[
            ("PORT", "not-a-port"),
            ("APP__LOG_JSON", "maybe"),
            ("APP__MAX_BODY_BYTES", "-1"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_values() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("plates_server_config_{suffix}.toml"));
    fs::write(
        &path,
        "bind_addr = \"127.0.0.1:8181\"\n\
         database_url = \"sqlite://./file.db\"\n\
         log_filter = \"debug\"\n\
         log_json = true\n\
         max_body_bytes = 1024\n",
    )
    .expect("write config");

    let settings = load_settings_from(&path, env_of(&[("APP__DATABASE_URL", "sqlite::memory:")]));
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.server_bind, "127.0.0.1:8181");
    assert_eq!(settings.database_url, "sqlite::memory:");
    assert_eq!(settings.log_filter, "debug");
    assert!(settings.log_json);
    assert_eq!(settings.max_body_bytes, 1024);
}

#[test]
fn normalizes_plain_file_path_to_sqlite_url() {
    assert_eq!(
        normalize_database_url("./data/test.db"),
        "sqlite://./data/test.db"
    );
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
    assert_eq!(normalize_database_url("  "), Settings::default().database_url);
}
