use dioxus::prelude::*;

use crate::gui::hooks::use_session;
use crate::gui::styles::theme::{get_button_class, CssClasses};
use crate::tutor::Role;

/// ロール選択画面
#[component]
pub fn RoleSelector() -> Element {
    let handle = use_session();

    rsx! {
        div {
            class: CssClasses::ROLE_SELECTOR,
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px;",

            div {
                style: "max-width: 1100px; margin: 0 auto;",

                div {
                    style: "text-align: center; margin-bottom: 48px;",
                    div {
                        class: CssClasses::MASCOT,
                        style: "width: 80px; height: 80px; border-radius: 50%; background: linear-gradient(90deg, #3b82f6, #10b981); display: flex; align-items: center; justify-content: center; font-size: 44px; margin: 0 auto 24px auto;",
                        "🧠"
                    }
                    h1 {
                        style: "font-size: 48px; font-weight: 800; margin: 0 0 16px 0;",
                        "Welcome to "
                        span { class: CssClasses::APP_TITLE, style: "font-size: 48px;", "BrainBuddy" }
                    }
                    p {
                        style: "font-size: 20px; color: #4b5563; max-width: 640px; margin: 0 auto;",
                        "Choose your role to get started with personalized learning experiences"
                    }
                }

                div {
                    class: CssClasses::CARD_GRID,
                    for role in Role::ALL {
                        RoleCard {
                            key: "{role}",
                            role,
                            on_select: {
                                let store = handle.store.clone();
                                move |role: Role| store.select_role(role)
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: Role, on_select: EventHandler<Role>) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,
            style: "text-align: center;",

            div {
                style: "width: 80px; height: 80px; border-radius: 50%; background: linear-gradient(90deg, #8b5cf6, #ec4899); display: flex; align-items: center; justify-content: center; font-size: 40px; margin: 0 auto 16px auto;",
                "{role.icon()}"
            }
            h2 { style: "font-size: 24px; font-weight: 700; margin: 0 0 8px 0;", "{role.title()}" }
            p { style: "color: #4b5563; font-size: 16px;", "{role.description()}" }

            div {
                style: "text-align: left; margin: 16px 0;",
                for feature in role.features().iter() {
                    div {
                        key: "{feature}",
                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                        div { style: "width: 8px; height: 8px; border-radius: 50%; background: #10b981;" }
                        span { "{feature}" }
                    }
                }
            }

            button {
                class: get_button_class("primary", false),
                style: "width: 100%; font-size: 16px;",
                onclick: move |_| on_select.call(role),
                "Continue as {role.title()} 🚀"
            }
        }
    }
}
