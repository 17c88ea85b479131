//! 設定ファイルの統合テスト

use std::time::Duration;

use brainbuddy::content::{QuizDifficulty, Variant};
use brainbuddy::gui::{AppConfig, ConfigManager, SessionOptions, SessionStore};
use brainbuddy::tutor::ReplyMode;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.toml"));

    assert!(!manager.config_exists());
    let config = manager.load_config().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.variant, Variant::Enhanced);
    assert_eq!(config.effective_reply_mode(), ReplyMode::Delayed);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
variant = "classic"
rng_seed = 11

[timing]
upload_delay_ms = 100

[quiz_defaults]
difficulty = "hard"
question_count = 30
"#,
    )
    .unwrap();

    let config = ConfigManager::with_path(&path).load_config().unwrap();
    assert_eq!(config.variant, Variant::Classic);
    assert_eq!(config.rng_seed, Some(11));
    assert_eq!(config.effective_reply_mode(), ReplyMode::Immediate);
    assert_eq!(config.timing.reply_delay_ms, 1500);
    assert_eq!(config.quiz_defaults.difficulty, QuizDifficulty::Hard);
    assert_eq!(config.quiz_defaults.question_count, 30);
    assert_eq!(config.window.width, 1280);

    let timing = config.timing.pipeline_timing(config.variant);
    assert_eq!(timing.upload_delay, Duration::from_millis(100));
    assert_eq!(timing.generation_delay, Duration::from_millis(3000));
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "variant = [not toml").unwrap();

    let err = ConfigManager::with_path(&path).load_config().unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn test_save_backup_and_reset() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.toml"));

    let mut config = AppConfig::default();
    config.variant = Variant::Classic;
    config.reply_mode = Some(ReplyMode::Delayed);
    config.window.maximized = true;
    manager.save_config(&config).unwrap();

    assert_eq!(manager.load_config().unwrap(), config);

    let backup = manager.backup_config().unwrap();
    assert!(backup.exists());

    let reset = manager.reset_config().unwrap();
    assert_eq!(reset, AppConfig::default());
    assert_eq!(manager.load_config().unwrap(), AppConfig::default());
}

#[test]
fn test_backup_without_file_fails() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.toml"));
    assert!(manager.backup_config().is_err());
}

#[test]
fn test_session_options_from_config() {
    let mut config = AppConfig::default();
    config.rng_seed = Some(5);
    config.timing.reply_delay_ms = 250;
    config.timing.generation_delay_ms = Some(800);
    config.quiz_defaults.question_count = 99;

    let options = SessionOptions::from_config(&config);
    assert_eq!(options.variant, Variant::Enhanced);
    assert_eq!(options.rng_seed, Some(5));
    assert_eq!(options.reply_delay, Duration::from_millis(250));
    assert_eq!(
        options.pipeline_timing.generation_delay,
        Duration::from_millis(800)
    );
    assert_eq!(options.quiz_defaults.question_count, 50);

    let store = SessionStore::from_config(&config);
    assert_eq!(store.snapshot().settings.question_count, 50);
}
