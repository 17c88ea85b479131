//! ロールとセクションによる画面遷移

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tutor::Role;

/// メイン画面のセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Quiz,
    Chat,
    Dashboard,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Quiz, Section::Chat, Section::Dashboard];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Quiz => "Quiz",
            Section::Chat => "Chat",
            Section::Dashboard => "Dashboard",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::Quiz => "📚",
            Section::Chat => "💬",
            Section::Dashboard => "📊",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("choose a role before opening {0}")]
    RoleRequired(Section),
}

/// 現在のロールとセクション
///
/// ロール未選択の間はどのセクションにも遷移できない（ロール選択画面を表示）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    role: Option<Role>,
    section: Section,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// 表示中のセクション。ロール未選択なら None
    pub fn current(&self) -> Option<Section> {
        self.role.map(|_| self.section)
    }

    /// ロールを選択してホームを表示
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        self.section = Section::Home;
    }

    /// ロール選択画面に戻る
    pub fn clear(&mut self) {
        self.role = None;
        self.section = Section::Home;
    }

    pub fn navigate(&mut self, section: Section) -> Result<(), NavigationError> {
        if self.role.is_none() {
            return Err(NavigationError::RoleRequired(section));
        }
        self.section = section;
        Ok(())
    }
}
