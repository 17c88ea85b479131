use dioxus::prelude::*;
use std::time::Duration;

use crate::gui::styles::theme::CssClasses;
use crate::tutor::Mood;

const BLINK_INTERVAL: Duration = Duration::from_millis(3000);
const BLINK_LENGTH: Duration = Duration::from_millis(150);

/// 気分に合わせて色と口が変わるロボットのマスコット
#[component]
pub fn RobotMascot(mood: Mood) -> Element {
    let mut is_blinking = use_signal(|| false);

    // まばたき（3秒ごとに150ms）
    use_hook(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(BLINK_INTERVAL).await;
                is_blinking.set(true);
                tokio::time::sleep(BLINK_LENGTH).await;
                is_blinking.set(false);
            }
        })
    });

    let color = mood.mascot_color();
    let eye_radius = if is_blinking() { "2" } else { "8" };

    rsx! {
        div {
            class: CssClasses::MASCOT,

            svg {
                width: "200",
                height: "200",
                view_box: "0 0 200 200",

                // 胴体
                rect { x: "50", y: "80", width: "100", height: "80", rx: "20", fill: "#f8fafc", stroke: "#e2e8f0", stroke_width: "3" }
                // 頭
                rect { x: "60", y: "40", width: "80", height: "60", rx: "15", fill: "#ffffff", stroke: "#e2e8f0", stroke_width: "3" }
                // 目
                circle { cx: "80", cy: "65", r: eye_radius, fill: color }
                circle { cx: "120", cy: "65", r: eye_radius, fill: color }

                // 口
                match mood {
                    Mood::Happy => rsx! {
                        path { d: "M 85 85 Q 100 95 115 85", stroke: color, stroke_width: "3", fill: "none", stroke_linecap: "round" }
                    },
                    Mood::Excited => rsx! {
                        circle { cx: "100", cy: "85", r: "6", fill: color }
                    },
                    Mood::Calm => rsx! {
                        line { x1: "85", y1: "85", x2: "115", y2: "85", stroke: color, stroke_width: "3", stroke_linecap: "round" }
                    },
                    Mood::Curious => rsx! {
                        ellipse { cx: "100", cy: "85", rx: "8", ry: "4", fill: color }
                    },
                    Mood::Tired | Mood::Confused => rsx! {},
                }

                // アンテナ
                line { x1: "100", y1: "40", x2: "100", y2: "25", stroke: "#64748b", stroke_width: "3", stroke_linecap: "round" }
                circle { cx: "100", cy: "20", r: "5", fill: color }

                // 腕
                rect { x: "30", y: "95", width: "25", height: "8", rx: "4", fill: "#f1f5f9", stroke: "#e2e8f0", stroke_width: "2" }
                rect { x: "145", y: "95", width: "25", height: "8", rx: "4", fill: "#f1f5f9", stroke: "#e2e8f0", stroke_width: "2" }

                // 胸のパネルとボタン
                rect { x: "75", y: "100", width: "50", height: "30", rx: "8", fill: "#f8fafc", stroke: "#cbd5e1", stroke_width: "2" }
                circle { cx: "90", cy: "115", r: "3", fill: color }
                circle { cx: "110", cy: "115", r: "3", fill: "#64748b" }

                // 脚
                rect { x: "70", y: "160", width: "12", height: "25", rx: "6", fill: "#f1f5f9", stroke: "#e2e8f0", stroke_width: "2" }
                rect { x: "118", y: "160", width: "12", height: "25", rx: "6", fill: "#f1f5f9", stroke: "#e2e8f0", stroke_width: "2" }
            }

            if let Some(bubble) = mood.mascot_bubble() {
                div { class: CssClasses::MASCOT_BUBBLE, "{bubble}" }
            }
        }
    }
}
