use dioxus::prelude::*;

use crate::gamification::UserStats;
use crate::gui::styles::theme::{get_badge_class, CssClasses};

/// ヘッダーの統計表示（ポイント・レベル・連続日数）
#[component]
pub fn UserStatsBar(stats: UserStats) -> Element {
    rsx! {
        div {
            class: CssClasses::USER_STATS,
            style: "display: flex; align-items: center; gap: 16px;",

            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span { style: "font-size: 18px;", "⭐" }
                span { style: "font-weight: 700;", "{format_points(stats.points)}" }
            }
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span { style: "font-size: 18px;", "🏆" }
                span { style: "font-weight: 700;", "Lv.{stats.level()}" }
            }
            span { class: get_badge_class("streak"), "🔥 {stats.streak} day streak" }
        }
    }
}

/// 3桁区切りのポイント表記
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
