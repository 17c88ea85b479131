//! テーマとスタイルヘルパー

use crate::content::Difficulty;
use crate::tutor::{Mood, Sender};

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // アプリケーション
    pub const MAIN_WINDOW: &'static str = "main-window";
    pub const MAIN_CONTENT: &'static str = "main-content";
    pub const SECTION_CONTENT: &'static str = "section-content";
    pub const ROLE_SELECTOR: &'static str = "role-selector";

    // ヘッダー
    pub const APP_HEADER: &'static str = "app-header";
    pub const APP_TITLE: &'static str = "app-title";
    pub const ROLE_BADGE: &'static str = "role-badge";
    pub const SECTION_NAV: &'static str = "section-nav";

    // カード
    pub const CARD: &'static str = "buddy-card";
    pub const CARD_TITLE: &'static str = "card-title";
    pub const CARD_GRID: &'static str = "card-grid";

    // フォーム
    pub const FORM_GROUP: &'static str = "form-group";
    pub const FORM_LABEL: &'static str = "form-label";
    pub const FORM_INPUT: &'static str = "form-input";
    pub const CHECKBOX_LABEL: &'static str = "checkbox-label";

    // ボタン
    pub const BTN: &'static str = "btn";
    pub const BTN_PRIMARY: &'static str = "btn-primary";
    pub const BTN_OUTLINE: &'static str = "btn-outline";
    pub const BTN_DANGER: &'static str = "btn-danger";

    // チャット
    pub const CHAT_LOG: &'static str = "chat-log";
    pub const CHAT_BUBBLE: &'static str = "chat-bubble";
    pub const TYPING_INDICATOR: &'static str = "typing-indicator";
    pub const TYPING_DOT: &'static str = "dot";
    pub const MESSAGE_TIME: &'static str = "time";
    pub const QUICK_QUESTIONS: &'static str = "quick-questions";
    pub const SPINNER: &'static str = "spinner";

    // マスコット
    pub const MASCOT: &'static str = "mascot";
    pub const MASCOT_BUBBLE: &'static str = "bubble";

    // 統計
    pub const STATS_GRID: &'static str = "stats-grid";
    pub const STAT_ITEM: &'static str = "stat-item";
    pub const STAT_VALUE: &'static str = "stat-value";
    pub const STAT_LABEL: &'static str = "stat-label";
    pub const PROGRESS_TRACK: &'static str = "progress-track";
    pub const PROGRESS_FILL: &'static str = "progress-fill";
    pub const USER_STATS: &'static str = "user-stats";
    pub const GAMIFICATION_PANEL: &'static str = "gamification-panel";

    // バッジ
    pub const BADGE: &'static str = "badge";

    // お知らせ
    pub const ALERT: &'static str = "alert";
    pub const ERROR_MESSAGE: &'static str = "error-message";

    // フッター
    pub const APP_FOOTER: &'static str = "app-footer";
}

/// 送信者に応じたチャット吹き出しのCSSクラス
pub fn get_message_class(sender: Sender) -> String {
    let type_class = match sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    };
    format!("{} {}", CssClasses::CHAT_BUBBLE, type_class)
}

/// 難易度バッジのCSSクラス
pub fn get_difficulty_class(difficulty: Difficulty) -> String {
    let level_class = match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
    };
    format!("{} {}", CssClasses::BADGE, level_class)
}

/// バッジのCSSクラス（修飾子なしなら基本クラスのみ）
pub fn get_badge_class(modifier: &str) -> String {
    if modifier.is_empty() {
        CssClasses::BADGE.to_string()
    } else {
        format!("{} {}", CssClasses::BADGE, modifier)
    }
}

pub fn get_alert_class(is_warning: bool) -> String {
    if is_warning {
        format!("{} warning", CssClasses::ALERT)
    } else {
        CssClasses::ALERT.to_string()
    }
}

/// ボタンの状態に応じたCSSクラスを取得
pub fn get_button_class(variant: &str, disabled: bool) -> String {
    let variant_class = match variant {
        "outline" => CssClasses::BTN_OUTLINE,
        "danger" => CssClasses::BTN_DANGER,
        _ => CssClasses::BTN_PRIMARY,
    };

    let mut classes = format!("{} {}", CssClasses::BTN, variant_class);
    if disabled {
        classes.push_str(" disabled");
    }
    classes
}

/// 気分の選択ボタンのインラインスタイル
pub fn mood_button_style(mood: Mood, selected: bool) -> String {
    if selected {
        format!(
            "background: {}; color: white; border-color: {}; box-shadow: 0 4px 12px rgba(0,0,0,0.2);",
            mood.accent_color(),
            mood.accent_color()
        )
    } else {
        "background: white; color: #374151;".to_string()
    }
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_class() {
        assert_eq!(get_message_class(Sender::User), "chat-bubble user");
        assert_eq!(get_message_class(Sender::Bot), "chat-bubble bot");
    }

    #[test]
    fn test_button_class() {
        assert_eq!(get_button_class("primary", false), "btn btn-primary");
        assert_eq!(get_button_class("outline", true), "btn btn-outline disabled");
        assert_eq!(get_button_class("unknown", false), "btn btn-primary");
    }

    #[test]
    fn test_badge_and_alert_class() {
        assert_eq!(get_badge_class(""), "badge");
        assert_eq!(get_badge_class("streak"), "badge streak");
        assert_eq!(get_difficulty_class(Difficulty::Hard), "badge hard");
        assert_eq!(get_alert_class(true), "alert warning");
        assert_eq!(get_alert_class(false), "alert");
    }

    #[test]
    fn test_embedded_css_defines_component_classes() {
        let css = get_embedded_css();
        for class in [
            CssClasses::CARD,
            CssClasses::MAIN_WINDOW,
            CssClasses::CHAT_LOG,
            CssClasses::TYPING_INDICATOR,
            CssClasses::MASCOT,
            CssClasses::STATS_GRID,
            CssClasses::PROGRESS_FILL,
            CssClasses::SPINNER,
        ] {
            assert!(css.contains(&format!(".{}", class)), "missing .{}", class);
        }
    }
}
