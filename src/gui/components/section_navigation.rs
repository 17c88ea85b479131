use dioxus::prelude::*;

use crate::gui::{
    components::{ChatPanel, HomeSection, QuizGenerator, StudentDashboard, TeacherDashboard},
    navigation::Section,
};
use crate::gui::styles::theme::CssClasses;
use crate::tutor::{DashboardKind, Role};

/// セクションナビゲーションコンポーネント
#[component]
pub fn SectionNavigation(active: Section, on_change: EventHandler<Section>) -> Element {
    rsx! {
        nav {
            class: CssClasses::SECTION_NAV,

            for section in Section::ALL {
                SectionButton {
                    key: "{section}",
                    section,
                    is_active: section == active,
                    on_click: move |_| on_change.call(section),
                }
            }
        }
    }
}

/// 個別のセクションボタン
#[component]
fn SectionButton(section: Section, is_active: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let button_style = if is_active {
        "
            display: flex;
            align-items: center;
            gap: 6px;
            padding: 8px 16px;
            border: none;
            border-radius: 9999px;
            background: #3b82f6;
            color: white;
            font-weight: 600;
            font-size: 14px;
            cursor: pointer;
            box-shadow: 0 4px 12px rgba(59, 130, 246, 0.35);
            transition: all 0.3s ease;
        "
    } else {
        "
            display: flex;
            align-items: center;
            gap: 6px;
            padding: 8px 16px;
            border: none;
            border-radius: 9999px;
            background: transparent;
            color: #4b5563;
            font-weight: 500;
            font-size: 14px;
            cursor: pointer;
            transition: all 0.3s ease;
        "
    };

    rsx! {
        button {
            style: "{button_style}",
            onclick: on_click,

            span { "{section.icon()}" }
            span { style: "white-space: nowrap;", "{section.label()}" }
        }
    }
}

/// セクション本体
#[component]
pub fn SectionContent(section: Section, role: Role) -> Element {
    tracing::debug!("🖥️ SectionContent: {} as {}", section, role);

    rsx! {
        div {
            class: CssClasses::SECTION_CONTENT,
            style: "max-width: 1100px; margin: 0 auto;",

            match section {
                Section::Home => rsx! { HomeSection {} },
                Section::Quiz => rsx! { QuizGenerator {} },
                Section::Chat => rsx! { ChatPanel { role } },
                Section::Dashboard => match role.dashboard() {
                    DashboardKind::Student => rsx! { StudentDashboard {} },
                    DashboardKind::Teacher { is_admin } => rsx! { TeacherDashboard { is_admin } },
                },
            }
        }
    }
}
