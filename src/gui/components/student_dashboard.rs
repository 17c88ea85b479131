use dioxus::prelude::*;

use crate::gamification::dashboard::{
    is_top_score, mood_recommendations, recent_quizzes, weekly_progress, NEXT_GOAL,
};
use crate::gui::{
    components::{gamification_panel::StatCard, user_stats::format_points},
    hooks::use_session,
    navigation::Section,
};
use crate::gui::styles::theme::{get_badge_class, get_button_class, CssClasses};

/// 生徒ダッシュボード
#[component]
pub fn StudentDashboard() -> Element {
    let handle = use_session();
    let (stats, mood) = {
        let session = handle.snapshot.read();
        (session.stats.clone(), session.mood)
    };
    let progression = stats.progression();
    let recommendations = mood_recommendations(mood);

    let store = handle.store.clone();
    let new_quiz = move |_| {
        if let Err(e) = store.navigate(Section::Quiz) {
            tracing::warn!("⚠️ Navigation failed: {}", e);
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h2 { style: "font-size: 30px; font-weight: 700; margin: 0 0 12px 0;", "Your Learning Dashboard" }
                p {
                    style: "font-size: 18px; color: #4b5563;",
                    "Track your progress, celebrate achievements, and discover new learning paths! 📈"
                }
            }

            div {
                class: CssClasses::STATS_GRID,
                StatCard { icon: "📅", value: stats.streak.to_string(), label: "Day Streak 🔥" }
                StatCard { icon: "🏆", value: format!("Lv.{}", progression.level), label: "Current Level" }
                StatCard { icon: "⭐", value: format_points(stats.points), label: "Total Points" }
                StatCard { icon: "🎖️", value: stats.badges.len().to_string(), label: "Badges Earned" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px;",

                div {
                    class: CssClasses::CARD,
                    h3 { class: CssClasses::CARD_TITLE, "📈 Level Progress" }
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 14px; color: #4b5563; margin-bottom: 8px;",
                        span { "Level {progression.level}" }
                        span { "{progression.points_to_next_level} points to Level {progression.next_level()}" }
                    }
                    div {
                        class: CssClasses::PROGRESS_TRACK,
                        div { class: CssClasses::PROGRESS_FILL, style: "width: {progression.progress_percentage}%;" }
                    }
                    div {
                        style: "margin-top: 16px; background: #eff6ff; padding: 16px; border-radius: 10px; font-size: 14px; color: #1e40af;",
                        "🎯 "
                        strong { "Next Goal:" }
                        " {NEXT_GOAL}"
                    }
                }

                div {
                    class: CssClasses::CARD,
                    h3 { class: CssClasses::CARD_TITLE, "📚 Recent Quizzes" }
                    for quiz in recent_quizzes() {
                        div {
                            key: "{quiz.subject}",
                            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px; background: #f9fafb; border-radius: 10px; margin-bottom: 12px;",
                            div {
                                h4 { style: "margin: 0; font-weight: 600;", "{quiz.subject}" }
                                p { style: "margin: 0; font-size: 14px; color: #4b5563;", "{quiz.date}" }
                            }
                            div {
                                style: "display: flex; gap: 8px;",
                                span {
                                    class: get_badge_class(if is_top_score(quiz.score) { "easy" } else { "medium" }),
                                    "{quiz.score}%"
                                }
                                span { class: CssClasses::BADGE, "{quiz.difficulty}" }
                            }
                        }
                    }
                }
            }

            div {
                class: CssClasses::CARD,
                h3 { class: CssClasses::CARD_TITLE, "🎯 This Week's Activity" }
                div {
                    style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 8px; align-items: end;",
                    for day in weekly_progress() {
                        div {
                            key: "{day.day}",
                            style: "text-align: center;",
                            div { style: "font-size: 14px; font-weight: 500; color: #4b5563; margin-bottom: 8px;", "{day.day}" }
                            div {
                                style: "height: {day.bar_height()}px; width: 100%; border-radius: 8px; background: linear-gradient(0deg, #3b82f6, #10b981); margin-bottom: 8px;",
                            }
                            div { style: "font-size: 12px; color: #6b7280;", "{day.quizzes} quizzes" }
                            div { style: "font-size: 12px; font-weight: 500;", "{day.points}pts" }
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px;",

                div {
                    class: CssClasses::CARD,
                    h3 { class: CssClasses::CARD_TITLE, "{mood.emoji()} Current Mood: {mood.label()}" }
                    p {
                        style: "color: #4b5563;",
                        "Based on your {mood} mood, here are some personalized recommendations:"
                    }
                    for tip in recommendations.iter() {
                        div {
                            key: "{tip}",
                            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; margin-bottom: 6px;",
                            div { style: "width: 8px; height: 8px; border-radius: 50%; background: {mood.accent_color()};" }
                            span { "{tip}" }
                        }
                    }
                }

                div {
                    class: CssClasses::CARD,
                    h3 { class: CssClasses::CARD_TITLE, "🎯 Quick Actions" }
                    div {
                        style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                        button { class: get_button_class("primary", false), onclick: new_quiz, "📚 New Quiz" }
                        button { class: get_button_class("outline", false), "👥 Study Group" }
                        button { class: get_button_class("outline", false), "🏆 Leaderboard" }
                        button { class: get_button_class("outline", false), "🎖️ Achievements" }
                    }
                }
            }
        }
    }
}
