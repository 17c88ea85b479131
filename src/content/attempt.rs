//! クイズの解答セッション

use super::{QuizError, QuizQuestion};

/// 1問分の解答結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub points: u32,
    /// 解説（設定で有効な場合のみ）
    pub explanation: Option<String>,
}

/// クイズの解答状況
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    questions: Vec<QuizQuestion>,
    answers: Vec<(usize, bool)>,
    include_explanations: bool,
}

impl QuizAttempt {
    pub fn new(questions: Vec<QuizQuestion>, include_explanations: bool) -> Self {
        Self {
            questions,
            answers: Vec::new(),
            include_explanations,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// 次に解答する問題
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.answers.len())
    }

    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|(_, correct)| *correct).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// 現在の問題に解答する
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current().ok_or(QuizError::AlreadyComplete)?;

        if choice >= question.options().len() {
            return Err(QuizError::ChoiceOutOfRange {
                choice,
                len: question.options().len(),
            });
        }

        let correct = question.is_correct(choice);
        let outcome = AnswerOutcome {
            correct,
            correct_index: question.correct_index(),
            points: if correct {
                question.difficulty().points()
            } else {
                0
            },
            explanation: if self.include_explanations {
                question.explanation().map(str::to_string)
            } else {
                None
            },
        };

        self.answers.push((choice, correct));
        Ok(outcome)
    }

    /// 正答率（0〜100）
    pub fn score_percent(&self) -> u32 {
        if self.answers.is_empty() {
            return 0;
        }
        ((self.correct_count() * 100) / self.answers.len()) as u32
    }
}
