//! クイズ生成設定
//!
//! フォーム上の各フィールド変更は設定全体の置き換えとして扱い、編集していない
//! フィールドは直前の値を引き継ぐ。

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 問題数の下限
pub const MIN_QUESTION_COUNT: u32 = 5;
/// 問題数の上限
pub const MAX_QUESTION_COUNT: u32 = 50;

/// 生成時の難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuizDifficulty {
    pub const ALL: [QuizDifficulty; 3] =
        [QuizDifficulty::Easy, QuizDifficulty::Medium, QuizDifficulty::Hard];

    pub fn id(&self) -> &'static str {
        match self {
            QuizDifficulty::Easy => "easy",
            QuizDifficulty::Medium => "medium",
            QuizDifficulty::Hard => "hard",
        }
    }

    /// 選択肢の表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            QuizDifficulty::Easy => "Easy - Basic concepts",
            QuizDifficulty::Medium => "Medium - Standard level",
            QuizDifficulty::Hard => "Hard - Advanced topics",
        }
    }

    /// 先頭大文字の名前（バッジ用）
    pub fn title(&self) -> &'static str {
        match self {
            QuizDifficulty::Easy => "Easy",
            QuizDifficulty::Medium => "Medium",
            QuizDifficulty::Hard => "Hard",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }
}

/// 問題形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Tf,
    Fill,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [QuestionType::Mcq, QuestionType::Tf, QuestionType::Fill];

    pub fn id(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Tf => "tf",
            QuestionType::Fill => "fill",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "Multiple Choice",
            QuestionType::Tf => "True/False",
            QuestionType::Fill => "Fill in the blanks",
        }
    }
}

/// 生成するコンテンツの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Quiz,
    Flowchart,
    Summary,
    Flashcards,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Quiz,
        ContentType::Flowchart,
        ContentType::Summary,
        ContentType::Flashcards,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ContentType::Quiz => "quiz",
            ContentType::Flowchart => "flowchart",
            ContentType::Summary => "summary",
            ContentType::Flashcards => "flashcards",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Quiz => "Interactive Quiz",
            ContentType::Flowchart => "Concept Flowchart",
            ContentType::Summary => "Study Summary",
            ContentType::Flashcards => "Digital Flashcards",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// クイズ生成設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub difficulty: QuizDifficulty,
    pub question_count: u32,
    pub question_types: BTreeSet<QuestionType>,
    pub include_explanations: bool,
    pub time_limit_minutes: u32,
    pub content_type: ContentType,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            difficulty: QuizDifficulty::Medium,
            question_count: 15,
            question_types: [QuestionType::Mcq, QuestionType::Tf].into_iter().collect(),
            include_explanations: true,
            time_limit_minutes: 20,
            content_type: ContentType::Quiz,
        }
    }
}

impl QuizSettings {
    pub fn with_difficulty(&self, difficulty: QuizDifficulty) -> Self {
        Self {
            difficulty,
            ..self.clone()
        }
    }

    /// 問題数を [5, 50] に丸めて設定
    pub fn with_question_count(&self, count: u32) -> Self {
        Self {
            question_count: count.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT),
            ..self.clone()
        }
    }

    /// 数値入力欄の文字列から問題数を設定
    ///
    /// 数値として解釈できない入力は直前の値を維持する。
    pub fn with_question_count_input(&self, input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(value) => {
                let clamped = value.clamp(MIN_QUESTION_COUNT as i64, MAX_QUESTION_COUNT as i64);
                self.with_question_count(clamped as u32)
            }
            Err(_) => {
                tracing::debug!("⚙️ Ignoring non-numeric question count: {:?}", input);
                self.clone()
            }
        }
    }

    /// 問題形式の有効・無効を切り替え
    pub fn with_question_type(&self, question_type: QuestionType, enabled: bool) -> Self {
        let mut question_types = self.question_types.clone();
        if enabled {
            question_types.insert(question_type);
        } else {
            question_types.remove(&question_type);
        }
        Self {
            question_types,
            ..self.clone()
        }
    }

    pub fn with_explanations(&self, include_explanations: bool) -> Self {
        Self {
            include_explanations,
            ..self.clone()
        }
    }

    pub fn with_time_limit(&self, time_limit_minutes: u32) -> Self {
        Self {
            time_limit_minutes,
            ..self.clone()
        }
    }

    pub fn with_content_type(&self, content_type: ContentType) -> Self {
        Self {
            content_type,
            ..self.clone()
        }
    }

    /// 生成中画面の説明文
    pub fn generation_summary(&self) -> String {
        format!(
            "Creating {} personalized questions at {} difficulty",
            self.question_count,
            self.difficulty.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = QuizSettings::default();
        assert_eq!(settings.difficulty, QuizDifficulty::Medium);
        assert_eq!(settings.question_count, 15);
        assert!(settings.question_types.contains(&QuestionType::Mcq));
        assert!(settings.question_types.contains(&QuestionType::Tf));
        assert!(!settings.question_types.contains(&QuestionType::Fill));
        assert!(settings.include_explanations);
        assert_eq!(settings.time_limit_minutes, 20);
        assert_eq!(settings.content_type, ContentType::Quiz);
    }

    #[test]
    fn test_field_update_preserves_other_fields() {
        let settings = QuizSettings::default()
            .with_content_type(ContentType::Flashcards)
            .with_difficulty(QuizDifficulty::Hard);

        assert_eq!(settings.content_type, ContentType::Flashcards);
        assert_eq!(settings.difficulty, QuizDifficulty::Hard);
        assert_eq!(settings.question_count, 15);

        let timed = settings.with_time_limit(45);
        assert_eq!(timed.time_limit_minutes, 45);
        assert_eq!(timed.difficulty, QuizDifficulty::Hard);
        assert_eq!(timed.content_type, ContentType::Flashcards);
    }

    #[test]
    fn test_question_count_is_clamped() {
        let settings = QuizSettings::default();
        assert_eq!(settings.with_question_count(1).question_count, 5);
        assert_eq!(settings.with_question_count(99).question_count, 50);
        assert_eq!(settings.with_question_count_input("-3").question_count, 5);
        assert_eq!(settings.with_question_count_input("30").question_count, 30);
        assert_eq!(settings.with_question_count_input("abc").question_count, 15);
    }

    #[test]
    fn test_toggle_question_type() {
        let settings = QuizSettings::default()
            .with_question_type(QuestionType::Fill, true)
            .with_question_type(QuestionType::Tf, false);
        let ids: Vec<_> = settings.question_types.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["mcq", "fill"]);
    }
}
