//! 学習コンテンツ（クイズ問題・設定・解答・生成パイプライン）

pub mod attempt;
pub mod pipeline;
pub mod quiz;
pub mod settings;

pub use attempt::{AnswerOutcome, QuizAttempt};
pub use pipeline::{ContentPipeline, PipelineError, PipelineState, PipelineTiming, UploadSource};
pub use quiz::{question_bank, Difficulty, QuizError, QuizQuestion};
pub use settings::{ContentType, QuestionType, QuizDifficulty, QuizSettings};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::tutor::conversation::ReplyMode;

/// 製品バリアント
///
/// Classic は気分のみで応答を切り替える簡易版、Enhanced はユーザー種別・設定フォーム・
/// 応答待ち演出を備えた版。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    #[default]
    Enhanced,
}

impl Variant {
    /// 「ファイルを選択」で割り当てるプレースホルダーのファイル名
    pub fn placeholder_filename(&self) -> &'static str {
        match self {
            Variant::Classic => "sample-notes.pdf",
            Variant::Enhanced => "advanced-biology-notes.pdf",
        }
    }

    /// 生成フェーズの既定時間
    pub fn generation_delay(&self) -> Duration {
        match self {
            Variant::Classic => Duration::from_millis(3000),
            Variant::Enhanced => Duration::from_millis(4000),
        }
    }

    pub fn default_reply_mode(&self) -> ReplyMode {
        match self {
            Variant::Classic => ReplyMode::Immediate,
            Variant::Enhanced => ReplyMode::Delayed,
        }
    }

    /// クイズ設定フォームを表示するか
    pub fn has_settings_form(&self) -> bool {
        matches!(self, Variant::Enhanced)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::Enhanced => f.write_str("enhanced"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant: {0}")]
pub struct ParseVariantError(pub String);

impl std::str::FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "enhanced" => Ok(Variant::Enhanced),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!(" CLASSIC ".parse::<Variant>(), Ok(Variant::Classic));
        assert_eq!("enhanced".parse::<Variant>(), Ok(Variant::Enhanced));

        let err = "deluxe".parse::<Variant>().unwrap_err();
        assert_eq!(err, ParseVariantError("deluxe".into()));
        assert_eq!(err.to_string(), "unknown variant: deluxe");
    }
}
