use dioxus::prelude::*;
use brainbuddy::{
    gui::{components::MainWindow, config_manager, utils, SessionStore},
    BrainBuddyResult, GuiError,
};
use parking_lot::Mutex;

/// ウィンドウ設定の保存用
static LAST_WINDOW_CONFIG: Mutex<Option<config_manager::WindowConfig>> = Mutex::new(None);

/// BrainBuddy デスクトップアプリケーション
fn app() -> Element {
    let window = dioxus::desktop::use_window();

    // ウィンドウ状態を定期的に記録（終了時に保存する）
    use_effect({
        let window = window.clone();
        move || {
            let window = window.clone();
            spawn(async move {
                let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(1));
                loop {
                    interval.tick().await;

                    let current_size = window.inner_size();
                    let current_position = window.outer_position().unwrap_or_default();

                    *LAST_WINDOW_CONFIG.lock() = Some(config_manager::WindowConfig {
                        width: current_size.width,
                        height: current_size.height,
                        x: current_position.x,
                        y: current_position.y,
                        maximized: window.is_maximized(),
                    });
                }
            });
        }
    });

    rsx! {
        MainWindow {}
    }
}

fn main() -> BrainBuddyResult<()> {
    let config_manager = config_manager::ConfigManager::new()?;
    let (mut config, load_error) = match config_manager.load_config() {
        Ok(config) => (config, None),
        Err(e) => (config_manager::AppConfig::default(), Some(e)),
    };

    utils::init_logging(&config.log)?;

    if let Some(e) = load_error {
        tracing::warn!("⚠️ Failed to load config, using defaults: {:#}", e);
    }

    tracing::info!(
        variant = %config.variant,
        config = %config_manager.config_path().display(),
        "🎬 Starting BrainBuddy"
    );

    // ウィンドウ位置を画面内に調整
    utils::validate_window_bounds(&mut config.window);

    tracing::info!(
        "🪟 Window: {}x{} at ({}, {}), maximized: {}",
        config.window.width,
        config.window.height,
        config.window.x,
        config.window.y,
        config.window.maximized
    );

    let store = SessionStore::from_config(&config);

    let launch_builder = dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("BrainBuddy")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        config.window.width as f64,
                        config.window.height as f64,
                    ))
                    .with_position(dioxus::desktop::tao::dpi::LogicalPosition::new(
                        config.window.x as f64,
                        config.window.y as f64,
                    ))
                    .with_maximized(config.window.maximized)
                    .with_resizable(true),
            ),
        )
        .with_context(store);

    // Ctrl+Cシグナルハンドラー
    ctrlc::set_handler(move || {
        tracing::info!("🛑 Received termination signal");
        save_window_config_on_exit();
        std::process::exit(0);
    })
    .map_err(|e| GuiError::Configuration(format!("Failed to set signal handler: {}", e)))?;

    launch_builder.launch(app);

    save_window_config_on_exit();

    tracing::info!("👋 BrainBuddy shutting down");
    Ok(())
}

/// 終了時にウィンドウ設定を保存
fn save_window_config_on_exit() {
    let Some(window_config) = LAST_WINDOW_CONFIG.lock().clone() else {
        tracing::warn!("⚠️ No window state recorded, skipping save");
        return;
    };

    let config_manager = match config_manager::ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!("❌ Failed to create config manager: {}", e);
            return;
        }
    };

    // 既存の設定を読み込み、ウィンドウ設定のみ更新
    let mut config = match config_manager.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("⚠️ Could not read existing config, window state not saved: {}", e);
            return;
        }
    };
    config.window = window_config;

    match config_manager.save_config(&config) {
        Ok(()) => tracing::info!(
            "💾 Saved window state: {}x{} at ({}, {}), maximized: {}",
            config.window.width,
            config.window.height,
            config.window.x,
            config.window.y,
            config.window.maximized
        ),
        Err(e) => tracing::error!("❌ Failed to save config: {}", e),
    }
}
