//! ユーザー種別

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// セッション開始時に選択するユーザー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// ダッシュボードの表示種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Student,
    Teacher { is_admin: bool },
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// ヘッダーのバッジ表記
    pub fn badge(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }

    /// 選択画面のカードタイトル
    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher/Parent",
            Role::Admin => "Administrator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Student => "I want to learn and have fun with interactive quizzes!",
            Role::Teacher => "I want to monitor progress and create assignments.",
            Role::Admin => "I need to manage the platform and users.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Student => "🎒",
            Role::Teacher => "🎓",
            Role::Admin => "🛡️",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Role::Student => &[
                "Interactive Quizzes",
                "AI Chat Buddy",
                "Gamification",
                "Progress Tracking",
            ],
            Role::Teacher => &[
                "Student Analytics",
                "Content Creation",
                "Progress Reports",
                "Assignment Tools",
            ],
            Role::Admin => &[
                "User Management",
                "Platform Analytics",
                "Content Moderation",
                "System Settings",
            ],
        }
    }

    pub fn dashboard(&self) -> DashboardKind {
        match self {
            Role::Student => DashboardKind::Student,
            Role::Teacher => DashboardKind::Teacher { is_admin: false },
            Role::Admin => DashboardKind::Teacher { is_admin: true },
        }
    }

    /// チャット入力欄のプレースホルダー
    pub fn chat_placeholder(&self) -> &'static str {
        match self {
            Role::Student => "Ask me anything about your studies...",
            Role::Teacher | Role::Admin => "Ask me anything about teaching and education...",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
