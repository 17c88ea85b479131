//! エラー型

use crate::content::{ParseVariantError, PipelineError, QuizError};
use crate::gui::navigation::NavigationError;
use crate::tutor::{ParseMoodError, ParseRoleError};

/// GUI層のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Timer error: {0}")]
    Timer(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// クレート全体のエラー
#[derive(thiserror::Error, Debug)]
pub enum BrainBuddyError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Gui(#[from] GuiError),

    #[error(transparent)]
    ParseMood(#[from] ParseMoodError),

    #[error(transparent)]
    ParseRole(#[from] ParseRoleError),

    #[error(transparent)]
    ParseVariant(#[from] ParseVariantError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BrainBuddyResult<T> = Result<T, BrainBuddyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::navigation::Section;

    #[test]
    fn test_conversions_keep_message() {
        let err: BrainBuddyError = NavigationError::RoleRequired(Section::Quiz).into();
        assert_eq!(err.to_string(), "choose a role before opening Quiz");

        let err: BrainBuddyError = PipelineError::AlreadyStarted.into();
        assert!(matches!(err, BrainBuddyError::Pipeline(_)));

        let err: BrainBuddyError = GuiError::Timer("no runtime".into()).into();
        assert_eq!(err.to_string(), "Timer error: no runtime");

        let err: BrainBuddyError = crate::content::ParseVariantError("deluxe".into()).into();
        assert_eq!(err.to_string(), "unknown variant: deluxe");
    }
}
