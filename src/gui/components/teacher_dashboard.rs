use dioxus::prelude::*;

use crate::gamification::dashboard::{alerts, class_stats, recent_activity, student_roster};
use crate::gui::components::gamification_panel::StatCard;
use crate::gui::styles::theme::{get_alert_class, get_badge_class, get_button_class, CssClasses};

/// 教師・管理者ダッシュボード
#[component]
pub fn TeacherDashboard(is_admin: bool) -> Element {
    let stats = class_stats();

    let (heading, intro) = if is_admin {
        (
            "Administrator Dashboard",
            "Manage platform settings and monitor overall system performance",
        )
    } else {
        (
            "Teacher Dashboard",
            "Monitor student progress, create assignments, and track class performance",
        )
    };

    let users_label = if is_admin { "Total Users" } else { "Students" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h2 { style: "font-size: 30px; font-weight: 700; margin: 0 0 12px 0;", "{heading}" }
                p { style: "font-size: 18px; color: #4b5563;", "{intro}" }
            }

            div {
                class: CssClasses::STATS_GRID,
                StatCard { icon: "👥", value: stats.total_students.to_string(), label: users_label }
                StatCard { icon: "📈", value: stats.active_today.to_string(), label: "Active Today" }
                StatCard { icon: "📊", value: format!("{}%", stats.average_score), label: "Avg. Score" }
                StatCard { icon: "📚", value: stats.completed_quizzes.to_string(), label: "Quizzes Done" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px;",

                div {
                    class: CssClasses::CARD,
                    h3 {
                        class: CssClasses::CARD_TITLE,
                        if is_admin { "👥 Top Performers" } else { "👥 Student Performance" }
                    }
                    for student in student_roster() {
                        div {
                            key: "{student.name}",
                            style: "display: flex; justify-content: space-between; padding: 12px; background: #f9fafb; border-radius: 10px; margin-bottom: 12px;",
                            div {
                                style: "flex: 1;",
                                div {
                                    style: "display: flex; align-items: center; gap: 12px;",
                                    div {
                                        style: "width: 32px; height: 32px; border-radius: 50%; background: linear-gradient(90deg, #3b82f6, #10b981); color: white; font-weight: 700; display: flex; align-items: center; justify-content: center;",
                                        "{initial(student.name)}"
                                    }
                                    div {
                                        h4 { style: "margin: 0; font-weight: 600;", "{student.name}" }
                                        p { style: "margin: 0; font-size: 14px; color: #4b5563;", "Level {student.level} • {student.points} points" }
                                    }
                                }
                                div {
                                    style: "margin-top: 8px;",
                                    div {
                                        style: "display: flex; justify-content: space-between; font-size: 12px; color: #6b7280; margin-bottom: 4px;",
                                        span { "Progress" }
                                        span { "{student.progress}%" }
                                    }
                                    div {
                                        class: CssClasses::PROGRESS_TRACK,
                                        style: "height: 8px;",
                                        div { class: CssClasses::PROGRESS_FILL, style: "width: {student.progress}%;" }
                                    }
                                }
                            }
                            div {
                                style: "text-align: right; margin-left: 16px;",
                                span {
                                    class: get_badge_class(if student.streak > 10 { "streak" } else { "" }),
                                    "🔥 {student.streak}"
                                }
                                p { style: "font-size: 12px; color: #6b7280; margin: 4px 0 0 0;", "{student.last_active}" }
                            }
                        }
                    }
                }

                div {
                    class: CssClasses::CARD,
                    h3 { class: CssClasses::CARD_TITLE, "🕒 Recent Activity" }
                    for entry in recent_activity() {
                        div {
                            key: "{entry.student}-{entry.time}",
                            style: "display: flex; align-items: center; gap: 12px; padding: 12px; background: #f9fafb; border-radius: 10px; margin-bottom: 12px;",
                            div { style: "width: 8px; height: 8px; border-radius: 50%; background: #10b981;" }
                            div {
                                style: "flex: 1;",
                                p { style: "margin: 0; font-size: 14px;", strong { "{entry.student}" } " {entry.action}" }
                                div {
                                    style: "display: flex; align-items: center; gap: 8px; margin-top: 4px;",
                                    span { style: "font-size: 12px; color: #6b7280;", "{entry.time}" }
                                    if let Some(score) = entry.score {
                                        span { class: CssClasses::BADGE, "{score}%" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: CssClasses::CARD,
                h3 { class: CssClasses::CARD_TITLE, "⚙️ Quick Actions" }
                div {
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                    button { class: get_button_class("primary", false), "📚 Create Assignment" }
                    button { class: get_button_class("outline", false), "📄 Generate Report" }
                    button { class: get_button_class("outline", false), "📊 View Analytics" }
                    button {
                        class: get_button_class("outline", false),
                        if is_admin { "⚙️ System Settings" } else { "⚙️ Class Settings" }
                    }
                }
            }

            div {
                class: CssClasses::CARD,
                style: "border-color: #fed7aa;",
                h3 {
                    class: CssClasses::CARD_TITLE,
                    if is_admin { "⚠️ System Alerts" } else { "⚠️ Attention Needed" }
                }
                for alert in alerts(is_admin) {
                    div {
                        key: "{alert.title}",
                        class: get_alert_class(alert.is_warning),
                        style: "margin-bottom: 12px;",
                        span { style: "font-size: 20px;", if alert.is_warning { "⚠️" } else { "📈" } }
                        div {
                            p { style: "margin: 0; font-size: 14px; font-weight: 600;", "{alert.title}" }
                            p { style: "margin: 0; font-size: 12px; color: #6b7280;", "{alert.detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// アバター用の頭文字
fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(initial("Alice Johnson"), "A");
        assert_eq!(initial(""), "");
    }
}
