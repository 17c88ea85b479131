// GUI用ユーティリティ関数

use anyhow::Context;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::gui::config_manager::{LogConfig, WindowConfig};

/// ログファイル名の接頭辞（`brainbuddy.YYYY-MM-DD.log`）
const LOG_FILE_PREFIX: &str = "brainbuddy";
const LOG_FILE_SUFFIX: &str = "log";

/// ログ初期化
///
/// 環境変数 `RUST_LOG` があればそれを優先し、なければ設定のログレベルを使う。
/// ファイル出力が有効な場合は日次ローテーションのファイルにも書き出す。
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to build log filter")?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let file_layer = if config.enable_file_logging {
        let log_dir = resolve_log_dir(config)?;
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        if config.auto_cleanup_enabled {
            match cleanup_old_logs(&log_dir, config.max_log_files as usize) {
                Ok(0) => {}
                Ok(removed) => debug!("🧹 Removed {} old log files", removed),
                Err(e) => warn!("⚠️ Log cleanup failed: {}", e),
            }
        }

        let appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(&log_dir)
            .context("Failed to create log file appender")?;

        Some(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .boxed(),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    info!(
        file_logging = config.enable_file_logging,
        level = %config.log_level,
        "📝 Logging initialized"
    );

    Ok(())
}

/// ログディレクトリ（設定がなければXDGデータディレクトリ配下）
pub fn resolve_log_dir(config: &LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.log_dir {
        return Ok(dir.clone());
    }

    let project_dirs = ProjectDirs::from("dev", "brainbuddy", "brainbuddy")
        .context("Failed to get project directories")?;
    Ok(project_dirs.data_dir().join("logs"))
}

/// 古いログファイルを削除し、新しいものから `keep` 件だけ残す
///
/// ファイル名に日付が入るため、名前順がそのまま日付順になる。
pub fn cleanup_old_logs(log_dir: &Path, keep: usize) -> anyhow::Result<usize> {
    let pattern = log_dir.join(format!("{}.*.{}", LOG_FILE_PREFIX, LOG_FILE_SUFFIX));
    let pattern = pattern.to_string_lossy();

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid log file pattern: {}", pattern))?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    if files.len() <= keep {
        return Ok(0);
    }

    files.sort();
    let excess = files.len() - keep;

    let mut removed = 0;
    for path in files.into_iter().take(excess) {
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "⚠️ Failed to remove old log"),
        }
    }

    Ok(removed)
}

/// ウィンドウ位置・サイズの基本的な検証
pub fn validate_window_bounds(config: &mut WindowConfig) {
    if config.x < 0 {
        config.x = 100;
    }
    if config.y < 0 {
        config.y = 100;
    }
    if config.width < 640 {
        config.width = 640;
    }
    if config.height < 480 {
        config.height = 480;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cleanup_keeps_newest_files() {
        let dir = tempdir().unwrap();
        for day in 1..=5 {
            let name = format!("brainbuddy.2024-05-0{}.log", day);
            std::fs::write(dir.path().join(name), "log").unwrap();
        }
        std::fs::write(dir.path().join("other.txt"), "keep me").unwrap();

        let removed = cleanup_old_logs(dir.path(), 2).unwrap();
        assert_eq!(removed, 3);
        assert!(dir.path().join("brainbuddy.2024-05-05.log").exists());
        assert!(dir.path().join("brainbuddy.2024-05-04.log").exists());
        assert!(!dir.path().join("brainbuddy.2024-05-01.log").exists());
        assert!(dir.path().join("other.txt").exists());
    }

    #[test]
    fn test_cleanup_under_limit_removes_nothing() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("brainbuddy.2024-05-01.log"), "log").unwrap();
        assert_eq!(cleanup_old_logs(dir.path(), 30).unwrap(), 0);
    }

    #[test]
    fn test_custom_log_dir_is_used() {
        let config = LogConfig {
            log_dir: Some(PathBuf::from("/tmp/brainbuddy-logs")),
            ..LogConfig::default()
        };
        assert_eq!(
            resolve_log_dir(&config).unwrap(),
            PathBuf::from("/tmp/brainbuddy-logs")
        );
    }

    #[test]
    fn test_validate_window_bounds() {
        let mut window = WindowConfig {
            width: 100,
            height: 100,
            x: -50,
            y: 20,
            maximized: false,
        };
        validate_window_bounds(&mut window);
        assert_eq!((window.x, window.y), (100, 20));
        assert_eq!((window.width, window.height), (640, 480));
    }
}
