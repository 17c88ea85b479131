//! 実績（バッジ）の判定

use chrono::NaiveDate;
use std::collections::HashMap;

use super::UserStats;

/// 獲得可能な実績
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    QuickLearner,
    QuizMaster,
    CuriousMind,
    StreakChampion,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::QuickLearner,
        Achievement::QuizMaster,
        Achievement::CuriousMind,
        Achievement::StreakChampion,
    ];

    /// バッジ名（UserStats::badges に格納される値）
    pub fn name(&self) -> &'static str {
        match self {
            Achievement::QuickLearner => "Quick Learner",
            Achievement::QuizMaster => "Quiz Master",
            Achievement::CuriousMind => "Curious Mind",
            Achievement::StreakChampion => "Streak Champion",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::QuickLearner => "⚡",
            Achievement::QuizMaster => "🎯",
            Achievement::CuriousMind => "🤔",
            Achievement::StreakChampion => "🔥",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::QuickLearner => "Complete 5 quizzes in a day",
            Achievement::QuizMaster => "Score 100% on 3 consecutive quizzes",
            Achievement::CuriousMind => "Ask 20 questions to the AI buddy",
            Achievement::StreakChampion => "Maintain a 7-day learning streak",
        }
    }
}

const QUICK_LEARNER_QUIZZES: u32 = 5;
const QUIZ_MASTER_PERFECT_RUNS: u32 = 3;
const CURIOUS_MIND_QUESTIONS: u32 = 20;
const STREAK_CHAMPION_DAYS: u32 = 7;

/// 実績判定用のカウンター
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementTracker {
    quizzes_by_day: HashMap<NaiveDate, u32>,
    consecutive_perfect: u32,
    questions_asked: u32,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn consecutive_perfect(&self) -> u32 {
        self.consecutive_perfect
    }

    /// クイズ完了を記録
    pub fn record_quiz(&mut self, date: NaiveDate, score_percent: u32) {
        *self.quizzes_by_day.entry(date).or_insert(0) += 1;
        if score_percent >= 100 {
            self.consecutive_perfect += 1;
        } else {
            self.consecutive_perfect = 0;
        }
    }

    /// チャットでの質問を記録
    pub fn record_question(&mut self) {
        self.questions_asked = self.questions_asked.saturating_add(1);
    }

    fn is_satisfied(&self, achievement: Achievement, stats: &UserStats) -> bool {
        match achievement {
            Achievement::QuickLearner => self
                .quizzes_by_day
                .values()
                .any(|count| *count >= QUICK_LEARNER_QUIZZES),
            Achievement::QuizMaster => self.consecutive_perfect >= QUIZ_MASTER_PERFECT_RUNS,
            Achievement::CuriousMind => self.questions_asked >= CURIOUS_MIND_QUESTIONS,
            Achievement::StreakChampion => stats.streak >= STREAK_CHAMPION_DAYS,
        }
    }

    /// 条件を満たした未獲得の実績をバッジとして付与し、新規分を返す
    pub fn evaluate(&self, stats: &mut UserStats) -> Vec<Achievement> {
        let earned: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| !stats.has_badge(a.name()) && self.is_satisfied(*a, stats))
            .collect();

        for achievement in &earned {
            tracing::info!("🎖️ Badge earned: {}", achievement.name());
            stats.badges.insert(achievement.name().to_string());
        }

        earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn test_curious_mind_after_twenty_questions() {
        let mut tracker = AchievementTracker::new();
        let mut stats = UserStats::default();

        for _ in 0..19 {
            tracker.record_question();
        }
        assert!(tracker.evaluate(&mut stats).is_empty());

        tracker.record_question();
        assert_eq!(tracker.evaluate(&mut stats), vec![Achievement::CuriousMind]);
        assert!(stats.has_badge("Curious Mind"));
        // 二重付与しない
        assert!(tracker.evaluate(&mut stats).is_empty());
    }

    #[test]
    fn test_quiz_master_requires_consecutive_perfect_scores() {
        let mut tracker = AchievementTracker::new();
        let mut stats = UserStats::default();

        tracker.record_quiz(today(), 100);
        tracker.record_quiz(today(), 100);
        tracker.record_quiz(today(), 66);
        tracker.record_quiz(today(), 100);
        assert!(tracker.evaluate(&mut stats).is_empty());

        tracker.record_quiz(today(), 100);
        tracker.record_quiz(today(), 100);
        let earned = tracker.evaluate(&mut stats);
        // 1日6回でクイックラーナーも同時に獲得
        assert!(earned.contains(&Achievement::QuizMaster));
        assert!(earned.contains(&Achievement::QuickLearner));
    }

    #[test]
    fn test_streak_champion() {
        let tracker = AchievementTracker::new();
        let mut stats = UserStats {
            streak: 7,
            ..Default::default()
        };
        assert_eq!(tracker.evaluate(&mut stats), vec![Achievement::StreakChampion]);
    }

    #[test]
    fn test_sample_stats_only_missing_streak_champion() {
        let tracker = AchievementTracker::new();
        let mut stats = UserStats::sample();
        assert_eq!(tracker.evaluate(&mut stats), vec![Achievement::StreakChampion]);
        assert_eq!(stats.badges.len(), 4);
    }
}
