// Dioxus GUI Module
// セッション状態・タイマー・設定とDioxusコンポーネント

pub mod components;
pub mod config_manager;
pub mod hooks;
pub mod models;
pub mod navigation;
pub mod session_store;
pub mod state_broadcaster;
pub mod styles;
pub mod timer_service;
pub mod utils;

pub use components::MainWindow;
pub use config_manager::{AppConfig, ConfigManager, LogConfig, TimingConfig, WindowConfig};
pub use models::Session;
pub use navigation::{NavigationError, Navigator, Section};
pub use session_store::{SessionOptions, SessionStore};
pub use state_broadcaster::{SessionBroadcaster, SessionChange};
pub use timer_service::{TimerKind, TimerService, TimerStats};
