//! クイズ問題と組み込み問題集
//!
//! 問題はアップロード内容から導出されず、常に組み込みの固定問題集から取り出す。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Variant;

/// 問題の難易度ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 正解時の獲得ポイント
    pub fn points(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("Easy"),
            Difficulty::Medium => f.write_str("Medium"),
            Difficulty::Hard => f.write_str("Hard"),
        }
    }
}

/// クイズ関連エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("choice {choice} is out of range for {len} options")]
    ChoiceOutOfRange { choice: usize, len: usize },

    #[error("the quiz is already complete")]
    AlreadyComplete,

    #[error("no quiz is available yet")]
    NotReady,
}

/// クイズ問題
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    difficulty: Difficulty,
    explanation: Option<String>,
}

impl QuizQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        difficulty: Difficulty,
        explanation: Option<String>,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions(options.len()));
        }
        if correct_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct_index,
            difficulty,
            explanation,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// 選択肢のラベル（A, B, C, ...）
    pub fn option_label(index: usize) -> char {
        char::from(b'A' + (index % 26) as u8)
    }
}

struct BuiltinQuestion {
    prompt: &'static str,
    options: &'static [&'static str],
    correct: usize,
    difficulty: Difficulty,
    explanation: Option<&'static str>,
}

const CLASSIC_BANK: &[BuiltinQuestion] = &[
    BuiltinQuestion {
        prompt: "What is the primary function of mitochondria in cells?",
        options: &["Energy production", "Protein synthesis", "DNA storage", "Waste removal"],
        correct: 0,
        difficulty: Difficulty::Easy,
        explanation: None,
    },
    BuiltinQuestion {
        prompt: "Which process converts glucose into ATP?",
        options: &["Photosynthesis", "Cellular respiration", "Osmosis", "Diffusion"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: None,
    },
    BuiltinQuestion {
        prompt: "What organelle is known as the 'powerhouse of the cell'?",
        options: &["Nucleus", "Ribosome", "Mitochondria", "Golgi apparatus"],
        correct: 2,
        difficulty: Difficulty::Easy,
        explanation: None,
    },
];

const ENHANCED_BANK: &[BuiltinQuestion] = &[
    BuiltinQuestion {
        prompt: "What is the primary function of mitochondria in cellular respiration?",
        options: &[
            "ATP production through oxidative phosphorylation",
            "Protein synthesis",
            "DNA replication",
            "Lipid storage",
        ],
        correct: 0,
        difficulty: Difficulty::Medium,
        explanation: Some("Mitochondria are the powerhouses of the cell, primarily responsible for producing ATP through the process of oxidative phosphorylation during cellular respiration."),
    },
    BuiltinQuestion {
        prompt: "Which enzyme breaks down hydrogen peroxide in cells?",
        options: &["Catalase", "Pepsin", "Amylase", "Lipase"],
        correct: 0,
        difficulty: Difficulty::Hard,
        explanation: Some("Catalase is an enzyme found in nearly all organisms that breaks down hydrogen peroxide (H₂O₂) into water and oxygen, protecting cells from oxidative damage."),
    },
    BuiltinQuestion {
        prompt: "Photosynthesis occurs in which part of the plant cell?",
        options: &["Nucleus", "Mitochondria", "Chloroplasts", "Ribosomes"],
        correct: 2,
        difficulty: Difficulty::Easy,
        explanation: Some("Chloroplasts contain chlorophyll and are the sites where photosynthesis occurs, converting light energy into chemical energy."),
    },
];

/// 組み込み問題集を取得
pub fn question_bank(variant: Variant) -> Vec<QuizQuestion> {
    let bank = match variant {
        Variant::Classic => CLASSIC_BANK,
        Variant::Enhanced => ENHANCED_BANK,
    };

    bank.iter()
        .map(|q| QuizQuestion {
            prompt: q.prompt.to_string(),
            options: q.options.iter().map(|o| o.to_string()).collect(),
            correct_index: q.correct,
            difficulty: q.difficulty,
            explanation: q.explanation.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_banks_are_valid() {
        for variant in [Variant::Classic, Variant::Enhanced] {
            let bank = question_bank(variant);
            assert_eq!(bank.len(), 3);
            for q in &bank {
                assert!(q.options().len() >= 2);
                assert!(q.correct_index() < q.options().len());
            }
        }
    }

    #[test]
    fn test_explanations_only_in_enhanced_bank() {
        assert!(question_bank(Variant::Classic)
            .iter()
            .all(|q| q.explanation().is_none()));
        assert!(question_bank(Variant::Enhanced)
            .iter()
            .all(|q| q.explanation().is_some()));
    }

    #[test]
    fn test_new_validates_options() {
        let err = QuizQuestion::new("?", vec!["only".into()], 0, Difficulty::Easy, None);
        assert_eq!(err, Err(QuizError::TooFewOptions(1)));

        let err = QuizQuestion::new(
            "?",
            vec!["a".into(), "b".into()],
            2,
            Difficulty::Easy,
            None,
        );
        assert_eq!(
            err,
            Err(QuizError::CorrectIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(QuizQuestion::option_label(0), 'A');
        assert_eq!(QuizQuestion::option_label(3), 'D');
    }
}
