use dioxus::prelude::*;

use crate::gui::styles::theme::{get_button_class, mood_button_style, CssClasses};
use crate::tutor::Mood;

/// 気分のチェックイン
#[component]
pub fn MoodCheckIn(current: Mood, on_change: EventHandler<Mood>) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,
            style: "max-width: 420px; margin: 0 auto;",

            h3 {
                class: CssClasses::CARD_TITLE,
                style: "justify-content: center;",
                span { "How are you feeling today?" }
                span { "🎭" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",
                for mood in Mood::ALL {
                    button {
                        key: "{mood}",
                        class: get_button_class("outline", false),
                        style: "display: flex; flex-direction: column; align-items: center; gap: 6px; height: 80px; {mood_button_style(mood, mood == current)}",
                        onclick: move |_| on_change.call(mood),
                        span { style: "font-size: 24px;", "{mood.emoji()}" }
                        span { style: "font-size: 12px;", "{mood.label()}" }
                    }
                }
            }

            div {
                style: "margin-top: 16px; padding: 12px; background: #eff6ff; border-radius: 8px; text-align: center; font-size: 14px; color: #1d4ed8;",
                "Great! I'll adjust my responses to match your "
                strong { "{mood_label_lower(current)}" }
                " mood! 🤖✨"
            }
        }
    }
}

fn mood_label_lower(mood: Mood) -> String {
    mood.label().to_lowercase()
}
