//! セッションの状態モデル

use crate::content::{
    AnswerOutcome, ContentPipeline, PipelineTiming, QuizAttempt, QuizSettings, Variant,
};
use crate::gamification::{AchievementTracker, UserStats};
use crate::gui::navigation::Navigator;
use crate::tutor::{Conversation, Mood};

/// 1ユーザー分のアプリケーション状態
///
/// ユーザー切り替えで丸ごと作り直される。
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub navigator: Navigator,
    pub mood: Mood,
    pub conversation: Conversation,
    pub pipeline: ContentPipeline,
    pub settings: QuizSettings,
    /// 実施中（または完了した）クイズ
    pub attempt: Option<QuizAttempt>,
    /// 直前の解答結果（フィードバック表示用）
    pub last_outcome: Option<AnswerOutcome>,
    pub stats: UserStats,
    pub achievements: AchievementTracker,
}

impl Session {
    pub fn new(variant: Variant, timing: PipelineTiming, settings: QuizSettings) -> Self {
        Self {
            navigator: Navigator::new(),
            mood: Mood::default(),
            conversation: Conversation::default(),
            pipeline: ContentPipeline::new(variant, timing),
            settings,
            attempt: None,
            last_outcome: None,
            stats: UserStats::sample(),
            achievements: AchievementTracker::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.pipeline.variant()
    }

    /// クイズが最後まで解答済みか
    pub fn is_quiz_finished(&self) -> bool {
        self.attempt.as_ref().is_some_and(QuizAttempt::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(
            Variant::Enhanced,
            PipelineTiming::for_variant(Variant::Enhanced),
            QuizSettings::default(),
        );

        assert_eq!(session.navigator.role(), None);
        assert_eq!(session.mood, Mood::Happy);
        assert!(session.conversation.is_empty());
        assert_eq!(session.stats, UserStats::sample());
        assert!(!session.is_quiz_finished());
    }
}
