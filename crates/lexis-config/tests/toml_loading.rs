//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lexis_config::LexisConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.lexis.test"
timeout_secs = 10
user_agent = "lexis-tests"
auth_token = "tok-123"

[retry]
max_attempts = 2
base_delay_ms = 50
max_delay_ms = 200

[general]
default_language = "grc"
default_level = "intermediate"
task_count = 12
"#,
        )?;

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.lexis.test");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.user_agent, "lexis-tests");
        assert_eq!(config.api.auth_token.as_deref(), Some("tok-123"));
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.base_delay_ms, 50);
        assert_eq!(config.retry.max_delay_ms, 200);
        assert_eq!(config.general.default_language, "grc");
        assert_eq!(config.general.default_level, "intermediate");
        assert_eq!(config.general.task_count, 12);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_language = "hbo"
"#,
        )?;

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_language, "hbo");
        assert_eq!(config.general.default_level, "beginner");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.retry.max_attempts, 3);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lexis")?;
        jail.create_file(
            ".lexis/config.toml",
            r#"
[api]
base_url = "https://project.lexis.test"
"#,
        )?;

        let config = LexisConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://project.lexis.test");
        Ok(())
    });
}

#[test]
fn load_from_file_reads_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r"
[retry]
max_attempts = 1
",
        )?;

        let config = LexisConfig::load_from_file(std::path::Path::new("custom.toml"))
            .expect("config loads");
        assert_eq!(config.retry.max_attempts, 1);
        Ok(())
    });
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(LexisConfig::load_from_file(&missing).is_err());
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "localhost:8000"

[retry]
max_attempts = 0
"#,
        )?;

        let config: LexisConfig = Figment::from(Serialized::defaults(LexisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[retry]
max_attempts = "many"
"#,
        )?;

        let result: Result<LexisConfig, _> =
            Figment::from(Serialized::defaults(LexisConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
