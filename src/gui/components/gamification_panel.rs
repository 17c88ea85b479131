use dioxus::prelude::*;

use crate::gamification::{Achievement, UserStats};
use crate::gui::components::user_stats::format_points;
use crate::gui::styles::theme::{get_badge_class, CssClasses};

/// 学習の進み具合（統計カード・レベル進捗・実績一覧）
#[component]
pub fn GamificationPanel(stats: UserStats) -> Element {
    let progression = stats.progression();

    rsx! {
        section {
            class: CssClasses::GAMIFICATION_PANEL,
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h3 { style: "font-size: 24px; font-weight: 700; margin: 0 0 8px 0;", "Your Learning Journey" }
                p { style: "color: #4b5563;", "Keep up the amazing work! 🌟" }
            }

            div {
                class: CssClasses::STATS_GRID,
                StatCard { icon: "📅", value: stats.streak.to_string(), label: "Day Streak 🔥" }
                StatCard { icon: "⭐", value: format_points(stats.points), label: "Brain Points ⭐" }
                StatCard { icon: "🏆", value: format!("Level {}", progression.level), label: "Learning Level 🏆" }
                StatCard { icon: "🎯", value: stats.badges.len().to_string(), label: "Badges Earned 🎖️" }
            }

            LevelProgress { stats: stats.clone() }

            div {
                class: CssClasses::CARD,
                h4 { class: CssClasses::CARD_TITLE, "⭐ Your Achievements" }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px;",
                    for achievement in Achievement::ALL {
                        AchievementRow {
                            key: "{achievement.name()}",
                            achievement,
                            earned: stats.has_badge(achievement.name()),
                        }
                    }
                }
            }
        }
    }
}

/// レベル進捗バー
#[component]
pub fn LevelProgress(stats: UserStats) -> Element {
    let progression = stats.progression();

    rsx! {
        div {
            class: CssClasses::CARD,
            h4 { class: CssClasses::CARD_TITLE, "🏆 Level Progress" }
            div {
                style: "display: flex; justify-content: space-between; font-size: 14px; color: #4b5563; margin-bottom: 8px;",
                span { "Level {progression.level}" }
                span { "{progression.points_to_next_level} points to Level {progression.next_level()}" }
            }
            div {
                class: CssClasses::PROGRESS_TRACK,
                div {
                    class: CssClasses::PROGRESS_FILL,
                    style: "width: {progression.progress_percentage}%;",
                }
            }
        }
    }
}

#[component]
pub fn StatCard(icon: &'static str, value: String, label: &'static str) -> Element {
    rsx! {
        div {
            class: format!("{} {}", CssClasses::CARD, CssClasses::STAT_ITEM),
            div { style: "font-size: 32px; margin-bottom: 8px;", "{icon}" }
            div { class: CssClasses::STAT_VALUE, "{value}" }
            div { class: CssClasses::STAT_LABEL, "{label}" }
        }
    }
}

#[component]
fn AchievementRow(achievement: Achievement, earned: bool) -> Element {
    let row_style = if earned {
        "border: 2px solid #86efac; background: #f0fdf4; box-shadow: 0 2px 8px rgba(0,0,0,0.06);"
    } else {
        "border: 2px solid #e5e7eb; background: #f9fafb;"
    };

    rsx! {
        div {
            style: "padding: 16px; border-radius: 10px; display: flex; align-items: center; gap: 12px; {row_style}",
            span { style: "font-size: 24px;", "{achievement.icon()}" }
            div {
                h5 { style: "margin: 0; font-weight: 700;", "{achievement.name()}" }
                p { style: "margin: 0; font-size: 14px; color: #4b5563;", "{achievement.description()}" }
            }
            if earned {
                span { class: get_badge_class("earned"), style: "margin-left: auto;", "Earned! ✅" }
            }
        }
    }
}
