//! ダッシュボード用のサンプルデータ
//!
//! 生徒・教師・管理者ダッシュボードに表示する固定の統計値。

use crate::content::Difficulty;
use crate::tutor::Mood;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentQuiz {
    pub subject: &'static str,
    pub score: u32,
    pub date: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyProgress {
    pub day: &'static str,
    pub quizzes: u32,
    pub points: u32,
}

impl DailyProgress {
    /// 週間グラフの棒の高さ（px、最低 20）
    pub fn bar_height(&self) -> f64 {
        f64::max(20.0, self.points as f64 / 250.0 * 60.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: &'static str,
    pub level: u32,
    pub points: u32,
    pub streak: u32,
    pub last_active: &'static str,
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    pub total_students: u32,
    pub active_today: u32,
    pub average_score: f64,
    pub completed_quizzes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub student: &'static str,
    pub action: &'static str,
    pub score: Option<u32>,
    pub time: &'static str,
}

/// お知らせ（警告・情報）
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardAlert {
    pub is_warning: bool,
    pub title: &'static str,
    pub detail: &'static str,
}

pub fn recent_quizzes() -> Vec<RecentQuiz> {
    vec![
        RecentQuiz {
            subject: "Biology",
            score: 92,
            date: "Today",
            difficulty: Difficulty::Medium,
        },
        RecentQuiz {
            subject: "Mathematics",
            score: 88,
            date: "Yesterday",
            difficulty: Difficulty::Hard,
        },
        RecentQuiz {
            subject: "History",
            score: 95,
            date: "2 days ago",
            difficulty: Difficulty::Easy,
        },
    ]
}

pub fn weekly_progress() -> Vec<DailyProgress> {
    [
        ("Mon", 3, 150),
        ("Tue", 2, 120),
        ("Wed", 4, 200),
        ("Thu", 1, 80),
        ("Fri", 3, 180),
        ("Sat", 2, 100),
        ("Sun", 5, 250),
    ]
    .into_iter()
    .map(|(day, quizzes, points)| DailyProgress {
        day,
        quizzes,
        points,
    })
    .collect()
}

/// 生徒ダッシュボードの次の目標
pub const NEXT_GOAL: &str = "Complete 3 more quizzes to unlock new avatar accessories!";

pub fn student_roster() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            name: "Alice Johnson",
            level: 4,
            points: 1850,
            streak: 12,
            last_active: "2 hours ago",
            progress: 78,
        },
        StudentRecord {
            name: "Bob Smith",
            level: 3,
            points: 1200,
            streak: 5,
            last_active: "1 day ago",
            progress: 65,
        },
        StudentRecord {
            name: "Charlie Brown",
            level: 5,
            points: 2100,
            streak: 18,
            last_active: "30 min ago",
            progress: 92,
        },
        StudentRecord {
            name: "Diana Lee",
            level: 2,
            points: 800,
            streak: 3,
            last_active: "3 hours ago",
            progress: 45,
        },
    ]
}

pub fn class_stats() -> ClassStats {
    ClassStats {
        total_students: 24,
        active_today: 18,
        average_score: 86.5,
        completed_quizzes: 156,
    }
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            student: "Alice",
            action: "Completed Biology Quiz",
            score: Some(94),
            time: "10 min ago",
        },
        ActivityEntry {
            student: "Charlie",
            action: "Started Math Assignment",
            score: None,
            time: "25 min ago",
        },
        ActivityEntry {
            student: "Bob",
            action: "Achieved 'Quiz Master' badge",
            score: None,
            time: "1 hour ago",
        },
        ActivityEntry {
            student: "Diana",
            action: "Completed History Quiz",
            score: Some(78),
            time: "2 hours ago",
        },
    ]
}

pub fn alerts(is_admin: bool) -> Vec<DashboardAlert> {
    if is_admin {
        vec![
            DashboardAlert {
                is_warning: true,
                title: "Server maintenance scheduled for tonight",
                detail: "Expected downtime: 2-3 hours",
            },
            DashboardAlert {
                is_warning: false,
                title: "New feature: Advanced Analytics now available",
                detail: "Check the admin panel for details",
            },
        ]
    } else {
        vec![
            DashboardAlert {
                is_warning: true,
                title: "3 students haven't submitted this week's assignment",
                detail: "Consider sending a reminder",
            },
            DashboardAlert {
                is_warning: false,
                title: "Class average improved by 12% this week!",
                detail: "Great job motivating your students!",
            },
        ]
    }
}

/// 気分に応じたおすすめ（該当なしの気分もある）
pub fn mood_recommendations(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &[
            "Try challenging quizzes to boost your confidence!",
            "Explore new subjects while you're feeling great!",
        ],
        Mood::Excited => &[
            "Channel that energy into speed quizzes!",
            "Try collaborative learning with friends!",
        ],
        Mood::Calm | Mood::Curious | Mood::Tired | Mood::Confused => &[],
    }
}

/// スコアが「優秀」表示になるか
pub fn is_top_score(score: u32) -> bool {
    score >= 90
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_has_minimum() {
        let week = weekly_progress();
        assert_eq!(week.len(), 7);
        let thursday = &week[3];
        assert_eq!(thursday.bar_height(), 20.0);
        let sunday = &week[6];
        assert_eq!(sunday.bar_height(), 60.0);
    }

    #[test]
    fn test_alerts_differ_for_admin() {
        assert_ne!(alerts(true), alerts(false));
        assert_eq!(alerts(true).len(), 2);
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(mood_recommendations(Mood::Happy).len(), 2);
        assert!(mood_recommendations(Mood::Tired).is_empty());
    }
}
