//! アプリケーション設定管理モジュール
//!
//! XDGディレクトリを使用した設定ファイルの永続化と管理を提供します。

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::content::{PipelineTiming, QuizSettings, Variant};
use crate::tutor::ReplyMode;

/// ウィンドウ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 860,
            x: 100,
            y: 100,
            maximized: false,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// カスタムログディレクトリ（Noneの場合はXDGデフォルト使用）
    pub log_dir: Option<PathBuf>,
    /// ログレベル (trace/debug/info/warn/error)
    pub log_level: String,
    /// ファイル出力有効化
    pub enable_file_logging: bool,
    /// 保存するログファイル数上限
    pub max_log_files: u32,
    /// 古いログファイル自動削除
    pub auto_cleanup_enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: "info".to_string(),
            enable_file_logging: true,
            max_log_files: 30,
            auto_cleanup_enabled: true,
        }
    }
}

/// 各種遅延の設定（ミリ秒）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// ボット応答の遅延（Delayedモード）
    pub reply_delay_ms: u64,
    pub upload_delay_ms: u64,
    /// 生成の所要時間（Noneの場合はバリアント既定値）
    pub generation_delay_ms: Option<u64>,
    pub generation_timeout_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            upload_delay_ms: 500,
            generation_delay_ms: None,
            generation_timeout_ms: 30_000,
        }
    }
}

impl TimingConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn pipeline_timing(&self, variant: Variant) -> PipelineTiming {
        PipelineTiming {
            upload_delay: Duration::from_millis(self.upload_delay_ms),
            generation_delay: self
                .generation_delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| variant.generation_delay()),
            generation_timeout: Duration::from_millis(self.generation_timeout_ms),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 製品バリアント
    pub variant: Variant,

    /// 応答選択の乱数シード（Noneの場合は毎回ランダム）
    pub rng_seed: Option<u64>,

    /// 応答の配信方式（Noneの場合はバリアント既定値）
    pub reply_mode: Option<ReplyMode>,

    pub timing: TimingConfig,

    /// クイズ設定フォームの初期値
    pub quiz_defaults: QuizSettings,

    /// ウィンドウ設定
    pub window: WindowConfig,

    /// ログ設定
    pub log: LogConfig,
}

impl AppConfig {
    /// 実際に使う応答方式
    pub fn effective_reply_mode(&self) -> ReplyMode {
        self.reply_mode
            .unwrap_or_else(|| self.variant.default_reply_mode())
    }
}

/// 設定管理マネージャー
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// XDG設定ディレクトリを使う設定マネージャーを作成
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        // 設定ディレクトリを作成（存在しない場合）
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Ok(Self { config_path })
    }

    /// 任意のパスを使う設定マネージャーを作成
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// XDGディレクトリに基づく設定ファイルパスを取得
    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "brainbuddy", "brainbuddy")
            .context("Failed to get project directories")?;

        let config_file = project_dirs.config_dir().join("config.toml");

        debug!("Config file path: {}", config_file.display());

        Ok(config_file)
    }

    /// 設定を読み込み（ファイルがなければデフォルト）
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Config file not found, using default settings: {}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig = toml::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        info!(
            "✅ Configuration loaded from: {}",
            self.config_path.display()
        );

        Ok(config)
    }

    /// 設定を保存
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let config_content =
            toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, config_content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        info!("💾 Configuration saved to: {}", self.config_path.display());

        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 設定をリセット（デフォルト値に戻す）
    pub fn reset_config(&self) -> Result<AppConfig> {
        let default_config = AppConfig::default();
        self.save_config(&default_config)?;
        info!("🔄 Configuration reset to defaults");
        Ok(default_config)
    }

    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }

    /// 設定ファイルをバックアップ
    pub fn backup_config(&self) -> Result<PathBuf> {
        if !self.config_path.exists() {
            return Err(anyhow::anyhow!("Config file does not exist"));
        }

        let backup_path = self.config_path.with_extension("toml.bak");
        fs::copy(&self.config_path, &backup_path)
            .with_context(|| format!("Failed to backup config to: {}", backup_path.display()))?;

        info!("📋 Configuration backed up to: {}", backup_path.display());

        Ok(backup_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QuizDifficulty;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            rng_seed: Some(42),
            reply_mode: Some(ReplyMode::Immediate),
            ..AppConfig::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nonexistent.toml"));

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert!(!manager.config_exists());
    }

    #[test]
    fn test_config_load_corrupted_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("corrupted.toml");
        std::fs::write(&config_path, "invalid toml content [unclosed section").unwrap();

        let manager = ConfigManager::with_path(config_path);
        let result = manager.load_config();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        std::fs::write(
            &config_path,
            r#"
variant = "classic"

[timing]
reply_delay_ms = 250

[quiz_defaults]
difficulty = "hard"
"#,
        )
        .unwrap();

        let loaded = ConfigManager::with_path(config_path).load_config().unwrap();

        assert_eq!(loaded.variant, Variant::Classic);
        assert_eq!(loaded.timing.reply_delay_ms, 250);
        assert_eq!(loaded.timing.upload_delay_ms, 500);
        assert_eq!(loaded.quiz_defaults.difficulty, QuizDifficulty::Hard);
        assert_eq!(loaded.quiz_defaults.question_count, 15);
        assert_eq!(loaded.effective_reply_mode(), ReplyMode::Immediate);
    }

    #[test]
    fn test_pipeline_timing_uses_variant_default() {
        let timing = TimingConfig::default();
        assert_eq!(
            timing.pipeline_timing(Variant::Enhanced).total(),
            Duration::from_millis(4500)
        );

        let custom = TimingConfig {
            generation_delay_ms: Some(100),
            ..TimingConfig::default()
        };
        assert_eq!(
            custom.pipeline_timing(Variant::Enhanced).generation_delay,
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_config_save_invalid_path() {
        let manager = ConfigManager::with_path("/nonexistent/directory/config.toml");
        assert!(manager.save_config(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_reset_and_backup() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.toml"));

        assert!(manager.backup_config().is_err());

        let custom = AppConfig {
            variant: Variant::Classic,
            ..AppConfig::default()
        };
        manager.save_config(&custom).unwrap();

        let backup_path = manager.backup_config().unwrap();
        assert!(backup_path.exists());

        let reset = manager.reset_config().unwrap();
        assert_eq!(reset.variant, Variant::Enhanced);
        assert_eq!(manager.load_config().unwrap(), AppConfig::default());

        let backed_up: AppConfig =
            toml::from_str(&std::fs::read_to_string(backup_path).unwrap()).unwrap();
        assert_eq!(backed_up.variant, Variant::Classic);
    }
}
