use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path.as_str(), eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.colored, eq(true));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [database]
              path = "data/news.db"

              [logging]
              level = "debug"
              colored = false
              file = "technews.log"
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path.as_str(), eq("data/news.db"));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("technews.log")));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[database]\npath = \"from-file.db\"",
    )
    .unwrap();
    let _path = EnvGuard::set("TN_DATABASE_PATH", "from-env.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path.as_str(), eq("from-env.db"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("TN_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("TN_LOG_COLORED", "0");
    let _file = EnvGuard::set("TN_LOG_FILE", "out.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("out.log")));
}

#[test]
#[serial]
fn given_config_dir_when_resolving_paths_then_joined_to_config_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let _file = EnvGuard::set("TN_LOG_FILE", "tn.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database_path().unwrap(),
        eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME))
    );
    assert_that!(
        config.log_file_path().unwrap(),
        some(eq(&temp.path().join("tn.log")))
    );
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let nested = temp.path().join("not").join("yet");
    let _dir = EnvGuard::set("TN_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}
