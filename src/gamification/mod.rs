//! ゲーミフィケーション（ポイント・レベル・実績・ダッシュボード）

pub mod achievements;
pub mod dashboard;
pub mod progression;

pub use achievements::{Achievement, AchievementTracker};
pub use progression::{level_for_points, Progression, UserStats, POINTS_PER_LEVEL};
