use dioxus::prelude::*;

use crate::content::Variant;
use crate::gui::hooks::use_session;
use crate::gui::styles::theme::{get_button_class, get_message_class, CssClasses};
use crate::tutor::{replies, ChatMessage, Role};

/// 学習バディとのチャット画面
#[component]
pub fn ChatPanel(role: Role) -> Element {
    let handle = use_session();
    let (variant, messages, is_typing) = {
        let session = handle.snapshot.read();
        (
            session.variant(),
            session.conversation.messages().to_vec(),
            session.conversation.is_typing(),
        )
    };
    let mut input_value = use_signal(String::new);

    let store = handle.store.clone();
    let mut send = move || {
        let text = input_value();
        match store.send_message(&text) {
            Ok(Some(id)) => {
                tracing::debug!("💬 Sent message {}", id);
                input_value.set(String::new());
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("⚠️ Message not sent: {}", e),
        }
    };
    let mut send_on_enter = send.clone();

    // Enhanced は応答待ちの間は入力できない
    let input_locked = variant == Variant::Enhanced && is_typing;
    let send_disabled = input_locked || input_value().trim().is_empty();

    let (heading, intro, card_title, quick_label, placeholder) = match variant {
        Variant::Classic => (
            "Your AI Study Buddy",
            "I'm here to help, encourage, and make learning fun! Ask me anything! 🤖✨",
            "BrainBuddy Assistant",
            "Quick questions:".to_string(),
            "Ask me anything about your studies...",
        ),
        Variant::Enhanced => (
            "Your Enhanced AI Learning Companion",
            "I adapt to your emotions, remember our conversations, and provide personalized help! 🤖✨",
            "BrainBuddy AI Assistant",
            format!("Quick questions for {}s:", role),
            role.chat_placeholder(),
        ),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h2 { style: "font-size: 30px; font-weight: 700; margin: 0 0 12px 0;", "{heading}" }
                p { style: "font-size: 18px; color: #4b5563;", "{intro}" }
            }

            div {
                class: CssClasses::CARD,
                style: "max-width: 900px; width: 100%; margin: 0 auto; display: flex; flex-direction: column; gap: 16px; box-sizing: border-box;",

                div {
                    class: CssClasses::CARD_TITLE,
                    span { "🧠 {card_title}" }
                    div {
                        style: "margin-left: auto; display: flex; gap: 8px;",
                        if variant == Variant::Enhanced {
                            span { class: CssClasses::BADGE, style: "background: #dcfce7; color: #166534;", "💚 Emotion-Aware" }
                        }
                        span { class: CssClasses::BADGE, style: "background: #f3e8ff; color: #6b21a8;", "✨ AI-Powered" }
                    }
                }

                div {
                    class: CssClasses::CHAT_LOG,
                    for message in messages.iter() {
                        MessageBubble {
                            key: "{message.id}",
                            message: message.clone(),
                            show_mood: variant == Variant::Enhanced,
                        }
                    }
                    if is_typing {
                        div {
                            class: CssClasses::TYPING_INDICATOR,
                            span { class: CssClasses::TYPING_DOT }
                            span { class: CssClasses::TYPING_DOT }
                            span { class: CssClasses::TYPING_DOT }
                            span { style: "margin-left: 8px;", "AI is thinking..." }
                        }
                    }
                }

                div {
                    p { style: "font-size: 14px; font-weight: 600; margin: 0 0 8px 0;", "{quick_label}" }
                    div {
                        class: CssClasses::QUICK_QUESTIONS,
                        for question in replies::quick_questions(variant, role).iter().copied() {
                            button {
                                key: "{question}",
                                class: get_button_class("outline", false),
                                style: "font-size: 12px; padding: 6px 12px;",
                                onclick: move |_| input_value.set(question.to_string()),
                                "{question}"
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        class: CssClasses::FORM_INPUT,
                        style: "flex: 1;",
                        value: "{input_value}",
                        placeholder,
                        disabled: input_locked,
                        oninput: move |evt: FormEvent| input_value.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !input_locked {
                                send_on_enter();
                            }
                        },
                    }
                    button {
                        class: get_button_class("primary", false),
                        disabled: send_disabled,
                        onclick: move |_| send(),
                        "➤"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage, show_mood: bool) -> Element {
    rsx! {
        div {
            class: get_message_class(message.sender),
            if show_mood && message.is_bot() {
                if let Some(mood) = message.mood {
                    div {
                        style: "display: flex; align-items: center; gap: 4px; margin-bottom: 4px; font-size: 11px; color: #6b7280;",
                        span { style: "width: 8px; height: 8px; border-radius: 50%; background: #10b981; display: inline-block;" }
                        "Responding to your {mood} mood"
                    }
                }
            }
            div { "{message.text}" }
            div { class: CssClasses::MESSAGE_TIME, "{message.display_time()}" }
        }
    }
}
