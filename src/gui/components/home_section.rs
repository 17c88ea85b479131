use dioxus::prelude::*;

use crate::gui::{
    components::{GamificationPanel, MoodCheckIn, RobotMascot},
    hooks::use_session,
    navigation::Section,
};
use crate::gui::styles::theme::{get_button_class, CssClasses};
use crate::tutor::Mood;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📤",
        title: "Smart Content Upload",
        description: "Upload PDFs, images, notes, or videos and watch AI create 15+ personalized quiz questions!",
    },
    Feature {
        icon: "💬",
        title: "AI Learning Buddy",
        description: "Chat with your intelligent companion that understands your emotions and learning style!",
    },
    Feature {
        icon: "🎯",
        title: "Adaptive Quizzes",
        description: "Choose difficulty levels, question types, and get instant feedback with detailed explanations!",
    },
    Feature {
        icon: "🏆",
        title: "Gamified Learning",
        description: "Earn XP, unlock avatars, complete quests, and climb leaderboards while you learn!",
    },
];

/// ホーム（マスコット・ヒーロー・気分チェックイン・機能紹介・ゲーミフィケーション）
#[component]
pub fn HomeSection() -> Element {
    let handle = use_session();
    let (mood, stats) = {
        let session = handle.snapshot.read();
        (session.mood, session.stats.clone())
    };

    let nav_store = handle.store.clone();
    let go_to = move |section: Section| {
        if let Err(e) = nav_store.navigate(section) {
            tracing::warn!("⚠️ Navigation failed: {}", e);
        }
    };
    let go_quiz = go_to.clone();
    let go_chat = go_to;

    let mood_store = handle.store.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 48px;",

            section {
                style: "text-align: center; display: flex; flex-direction: column; gap: 24px; align-items: center;",
                RobotMascot { mood }
                h2 {
                    style: "font-size: 48px; font-weight: 800; margin: 0;",
                    "Learn Like You "
                    span { class: CssClasses::APP_TITLE, style: "font-size: 48px;", "Play!" }
                }
                p {
                    style: "font-size: 20px; color: #4b5563; max-width: 640px; margin: 0;",
                    "Welcome to BrainBuddy - where AI meets education! Upload any content and transform it into engaging quizzes, flowcharts, and summaries."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    button {
                        class: get_button_class("primary", false),
                        style: "font-size: 18px; padding: 14px 32px;",
                        onclick: move |_| go_quiz(Section::Quiz),
                        "Start Learning Now! 🚀"
                    }
                    button {
                        class: get_button_class("outline", false),
                        style: "font-size: 18px; padding: 14px 32px; border-color: #3b82f6; color: #3b82f6;",
                        onclick: move |_| go_chat(Section::Chat),
                        "Meet Your AI Buddy 🤖"
                    }
                }
            }

            section {
                MoodCheckIn {
                    current: mood,
                    on_change: move |mood: Mood| mood_store.set_mood(mood),
                }
            }

            section {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px;",
                for feature in FEATURES.iter() {
                    div {
                        key: "{feature.title}",
                        class: CssClasses::CARD,
                        div {
                            style: "width: 64px; height: 64px; border-radius: 50%; background: linear-gradient(90deg, #3b82f6, #8b5cf6); display: flex; align-items: center; justify-content: center; font-size: 32px; margin-bottom: 16px;",
                            "{feature.icon}"
                        }
                        h3 { class: CssClasses::CARD_TITLE, "{feature.title}" }
                        p { style: "color: #4b5563; font-size: 17px;", "{feature.description}" }
                    }
                }
            }

            GamificationPanel { stats }
        }
    }
}
