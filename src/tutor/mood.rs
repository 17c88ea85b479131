//! 気分（ムード）の定義
//!
//! 応答テーブル・マスコット・クイズ画面の文言はすべてこの値で切り替わる。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::Variant;

/// ユーザーが選択する気分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Calm,
    Curious,
    Tired,
    Confused,
}

impl Default for Mood {
    fn default() -> Self {
        Self::Happy
    }
}

/// 不明な気分文字列
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mood: {0}")]
pub struct ParseMoodError(pub String);

impl Mood {
    /// チェックイン画面の表示順
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Calm,
        Mood::Curious,
        Mood::Tired,
        Mood::Confused,
    ];

    /// 識別子（小文字）
    pub fn id(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Curious => "curious",
            Mood::Tired => "tired",
            Mood::Confused => "confused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Curious => "Curious",
            Mood::Tired => "Tired",
            Mood::Confused => "Confused",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
            Mood::Curious => "🤔",
            Mood::Tired => "😴",
            Mood::Confused => "😕",
        }
    }

    /// チェックインボタンのアクセントカラー
    pub fn accent_color(&self) -> &'static str {
        match self {
            Mood::Happy => "#22c55e",
            Mood::Excited => "#f97316",
            Mood::Calm => "#3b82f6",
            Mood::Curious => "#a855f7",
            Mood::Tired => "#6b7280",
            Mood::Confused => "#eab308",
        }
    }

    /// マスコットの本体色（疲れ・混乱は既定色）
    pub fn mascot_color(&self) -> &'static str {
        match self {
            Mood::Excited => "#F59E0B",
            Mood::Calm => "#3B82F6",
            Mood::Curious => "#8B5CF6",
            Mood::Happy | Mood::Tired | Mood::Confused => "#10B981",
        }
    }

    /// マスコットの吹き出しに出す絵文字
    ///
    /// 疲れ・混乱の吹き出しは空のまま。
    pub fn mascot_bubble(&self) -> Option<&'static str> {
        match self {
            Mood::Happy | Mood::Excited | Mood::Calm | Mood::Curious => Some(self.emoji()),
            Mood::Tired | Mood::Confused => None,
        }
    }

    /// クイズ生成画面の見出しメッセージ
    pub fn quiz_message(&self, variant: Variant) -> &'static str {
        match variant {
            Variant::Classic => match self {
                Mood::Happy => "Let's make some fun quizzes! 😊",
                Mood::Excited => "Wow! Ready for an amazing learning adventure? 🚀",
                Mood::Calm => "Take your time, we'll create something peaceful together 🌊",
                Mood::Curious => "I love your curiosity! Let's explore together 🔍",
                Mood::Tired => "No worries! Let's make this easy and fun 😴",
                Mood::Confused => "Don't worry, I'm here to help make things clear! 💡",
            },
            Variant::Enhanced => match self {
                Mood::Happy => "Let's create some amazing quizzes together! 😊",
                Mood::Excited => "Wow! Ready for an incredible learning adventure? 🚀",
                Mood::Calm => "Take your time, we'll build something wonderful together 🌊",
                Mood::Curious => "I love your curiosity! Let's explore and create 🔍",
                Mood::Tired | Mood::Confused => {
                    "Let's start creating personalized learning content!"
                }
            },
        }
    }

    /// 文字列から変換し、不明な値は Happy として扱う
    pub fn from_str_lossy(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ParseMoodError| {
            tracing::debug!("🙂 {} - falling back to happy", e);
            Mood::Happy
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.id() == normalized)
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}
