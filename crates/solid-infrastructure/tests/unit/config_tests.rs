//! Configuration loading tests

use solid_application::registry::{Lifetime, RegistrationPolicy};
use solid_domain::Error;
use solid_infrastructure::config::{AppConfig, ConfigLoader, StrategyConfig};
use tempfile::TempDir;

#[test]
fn test_defaults_cover_every_capability() {
    let config = AppConfig::default();

    for descriptor in solid_domain::ports::all_capabilities() {
        assert!(
            config.strategy(descriptor.name).is_some(),
            "No default strategy for {}",
            descriptor.name
        );
    }
    assert_eq!(config.registry.policy, RegistrationPolicy::LastWins);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_toml_overrides_defaults() {
    let config = ConfigLoader::new()
        .load_from_str(
            r#"
            [registry]
            policy = "strict"
            lifetime = "singleton"

            [strategies.door]
            implementation = "iron"

            [strategies.bowl]
            implementation = "meat"
            settings = { grams = "300" }
            "#,
        )
        .expect("load");

    assert_eq!(config.registry.policy, RegistrationPolicy::Strict);
    assert_eq!(config.registry.lifetime, Lifetime::Singleton);
    assert_eq!(config.strategy("door").map(|s| s.implementation.as_str()), Some("iron"));

    let bowl = config.strategy("bowl").expect("bowl");
    assert_eq!(bowl.settings.get("grams").map(String::as_str), Some("300"));
    // Untouched defaults survive the merge
    assert_eq!(
        config.strategy("invoice_printer").map(|s| s.implementation.as_str()),
        Some("plain")
    );
}

#[test]
fn test_unknown_capability_is_rejected() {
    let result = ConfigLoader::new().load_from_str(
        r#"
        [strategies.window]
        implementation = "glass"
        "#,
    );

    match result {
        Err(Error::Config { message }) => assert!(message.contains("window")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let result = ConfigLoader::new().load_from_str(
        r#"
        [logging]
        level = "chatty"
        "#,
    );
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_empty_implementation_is_rejected() {
    let result = ConfigLoader::new().load_from_str(
        r#"
        [strategies.door]
        implementation = "  "
        "#,
    );
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_save_and_load_round_trip_through_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("solid.toml");

    let mut config = AppConfig::default();
    config.strategies.insert(
        "payment_method".to_string(),
        StrategyConfig::new("credit_card").with_setting("limit", "500"),
    );

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save");
    let loaded = loader.load().expect("load");

    assert_eq!(loader.config_path(), Some(path.as_path()));
    assert_eq!(
        loaded
            .strategy("payment_method")
            .and_then(|s| s.settings.get("limit"))
            .map(String::as_str),
        Some("500")
    );
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let loaded = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("load");

    assert_eq!(loaded.strategies, AppConfig::default().strategies);
}

/// Uses its own prefix so no other loader test sees these variables
#[test]
#[allow(unsafe_code)]
fn test_env_overrides_nested_keys_with_double_underscore() {
    const POLICY: &str = "SOLID_ENV_OVERRIDE__REGISTRY__POLICY";
    const DOOR: &str = "SOLID_ENV_OVERRIDE__STRATEGIES__DOOR__IMPLEMENTATION";

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("solid.toml");
    std::fs::write(
        &path,
        r#"
        [strategies.door]
        implementation = "wooden"

        [strategies.bowl]
        implementation = "meat"
        "#,
    )
    .expect("write config");

    unsafe {
        std::env::set_var(POLICY, "strict");
        std::env::set_var(DOOR, "iron");
    }

    let loaded = ConfigLoader::new()
        .with_env_prefix("SOLID_ENV_OVERRIDE")
        .with_config_path(&path)
        .load();

    unsafe {
        std::env::remove_var(POLICY);
        std::env::remove_var(DOOR);
    }

    let config = loaded.expect("load");
    // Env wins over file, file wins over defaults
    assert_eq!(config.registry.policy, RegistrationPolicy::Strict);
    assert_eq!(config.strategy("door").map(|s| s.implementation.as_str()), Some("iron"));
    assert_eq!(config.strategy("bowl").map(|s| s.implementation.as_str()), Some("meat"));
}
