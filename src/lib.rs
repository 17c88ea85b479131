pub mod content;
pub mod errors;
pub mod gamification;
pub mod gui;
pub mod tutor;

// Re-export the main error types for convenience
pub use errors::{BrainBuddyError, BrainBuddyResult, GuiError};

// Re-export the core domain types
pub use content::{ContentPipeline, PipelineState, QuizQuestion, QuizSettings, Variant};
pub use gamification::{AchievementTracker, UserStats};
pub use tutor::{Conversation, Mood, ReplyEngine, Role};
