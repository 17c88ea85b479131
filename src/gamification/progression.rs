//! ポイント・レベル・連続日数
//!
//! レベルはポイントから導出する（`points / 500 + 1`）。保存された値と計算値が
//! ずれることはない。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 1レベルあたりのポイント
pub const POINTS_PER_LEVEL: u32 = 500;

/// ユーザー統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserStats {
    /// 連続学習日数
    pub streak: u32,
    pub points: u32,
    pub badges: BTreeSet<String>,
    /// 最後に学習した日
    pub last_active: Option<NaiveDate>,
}

impl UserStats {
    /// 画面に表示するサンプル統計
    pub fn sample() -> Self {
        Self {
            streak: 7,
            points: 1250,
            badges: ["Quick Learner", "Quiz Master", "Curious Mind"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            last_active: None,
        }
    }

    pub fn level(&self) -> u32 {
        level_for_points(self.points)
    }

    pub fn progression(&self) -> Progression {
        Progression::from_points(self.points)
    }

    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.contains(name)
    }

    /// ポイントを加算し、レベルアップした場合は新しいレベルを返す
    pub fn award_points(&mut self, points: u32) -> Option<u32> {
        let before = self.level();
        self.points = self.points.saturating_add(points);
        let after = self.level();

        if after > before {
            tracing::info!("🏆 Level up: {} → {} ({} points)", before, after, self.points);
            Some(after)
        } else {
            None
        }
    }

    /// 学習日を記録して連続日数を更新
    ///
    /// 同日なら変化なし、翌日なら +1、間が空いたら 1 に戻る。過去の日付は無視する。
    pub fn record_activity(&mut self, date: NaiveDate) {
        match self.last_active {
            None => {
                if self.streak == 0 {
                    self.streak = 1;
                }
            }
            Some(last) if date <= last => return,
            Some(last) => {
                if last.succ_opt() == Some(date) {
                    self.streak = self.streak.saturating_add(1);
                } else {
                    tracing::debug!("🔥 Streak broken after {} days", self.streak);
                    self.streak = 1;
                }
            }
        }
        self.last_active = Some(date);
    }
}

pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// レベル進捗
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub level: u32,
    /// 現レベル内の進捗（0 以上 100 未満）
    pub progress_percentage: f64,
    /// 次のレベルまでのポイント（1〜500）
    pub points_to_next_level: u32,
}

impl Progression {
    pub fn from_points(points: u32) -> Self {
        let level = level_for_points(points);
        let within = points % POINTS_PER_LEVEL;

        Self {
            level,
            progress_percentage: within as f64 / POINTS_PER_LEVEL as f64 * 100.0,
            points_to_next_level: POINTS_PER_LEVEL - within,
        }
    }

    pub fn next_level(&self) -> u32 {
        self.level + 1
    }

    /// 旧画面の計算式 `(level + 1) * 500 - (points % 500)`
    ///
    /// レベルをポイントと独立に保持していた頃の値で、比較用にのみ残している。
    pub fn legacy_points_to_next(level: u32, points: u32) -> u32 {
        ((level + 1) * POINTS_PER_LEVEL).saturating_sub(points % POINTS_PER_LEVEL)
    }
}
