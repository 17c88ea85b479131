//! チューター機能（気分・ユーザー種別・応答選択・会話）

pub mod conversation;
pub mod mood;
pub mod replies;
pub mod role;

pub use conversation::{ChatMessage, Conversation, MessageId, ReplyMode, Sender};
pub use mood::{Mood, ParseMoodError};
pub use replies::{ReplyEngine, ReplyPool};
pub use role::{DashboardKind, ParseRoleError, Role};
