//! 会話ログ
//!
//! 追加のみのメッセージ列。作成済みのメッセージは変更しない。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Mood;

/// メッセージID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ボット応答の配信方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// 送信と同時に応答を追加
    Immediate,
    /// 一定時間「入力中」を表示してから応答を追加
    Delayed,
}

/// 送信者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// チャットメッセージ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    /// 送信時点の気分（ボットの応答のみ）
    pub mood: Option<Mood>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender, mood: Option<Mood>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp: Local::now(),
            mood,
        }
    }

    /// 表示用の時刻（HH:MM）
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// 会話
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    is_typing: bool,
}

impl Conversation {
    /// 挨拶メッセージから始まる会話を作成
    pub fn with_greeting(greeting: &str, mood: Mood) -> Self {
        Self {
            messages: vec![ChatMessage::new(greeting, Sender::Bot, Some(mood))],
            is_typing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// ユーザーが送信したメッセージ数
    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(ChatMessage::new(text, Sender::User, None))
    }

    pub fn push_bot(&mut self, text: impl Into<String>, mood: Mood) -> MessageId {
        self.push(ChatMessage::new(text, Sender::Bot, Some(mood)))
    }

    fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id;
        self.messages.push(message);
        id
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.is_typing = typing;
    }
}
