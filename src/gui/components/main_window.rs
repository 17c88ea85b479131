use dioxus::prelude::*;

use crate::gui::{
    components::{RoleSelector, SectionContent, SectionNavigation, UserStatsBar},
    hooks::use_session_provider,
    navigation::Section,
    session_store::SessionStore,
};
use crate::gui::styles::theme::{get_button_class, get_embedded_css, CssClasses};

/// メインウィンドウコンポーネント
///
/// `SessionStore` はアプリ側でコンテキストに登録しておく。
#[component]
pub fn MainWindow() -> Element {
    let store = use_context::<SessionStore>();
    let handle = use_session_provider(store);

    let (role, section, stats) = {
        let session = handle.snapshot.read();
        (
            session.navigator.role(),
            session.navigator.current(),
            session.stats.clone(),
        )
    };

    tracing::debug!(
        "🖥️ MainWindow: Rendering with role={:?}, section={:?}",
        role,
        section
    );

    let nav_store = handle.store.clone();
    let switch_handle = handle.clone();

    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: CssClasses::MAIN_WINDOW,

            match role {
                None => rsx! { RoleSelector {} },
                Some(role) => rsx! {
                    // ヘッダー
                    header {
                        class: CssClasses::APP_HEADER,

                        div {
                            style: "display: flex; align-items: center; gap: 12px;",
                            div {
                                style: "width: 40px; height: 40px; border-radius: 50%; background: linear-gradient(90deg, #3b82f6, #10b981); display: flex; align-items: center; justify-content: center; font-size: 22px;",
                                "🧠"
                            }
                            h1 { class: CssClasses::APP_TITLE, "BrainBuddy" }
                            span { class: CssClasses::ROLE_BADGE, "{role.badge()}" }
                        }

                        SectionNavigation {
                            active: section.unwrap_or_default(),
                            on_change: move |next: Section| {
                                tracing::info!("🔄 Section switched: {:?} → {}", section, next);
                                if let Err(e) = nav_store.navigate(next) {
                                    tracing::warn!("⚠️ Navigation failed: {}", e);
                                }
                            },
                        }

                        div {
                            style: "display: flex; align-items: center; gap: 16px;",
                            UserStatsBar { stats }
                            button {
                                class: get_button_class("outline", false),
                                style: "padding: 6px 12px;",
                                onclick: move |_| {
                                    switch_handle.store.switch_user();
                                    switch_handle.refresh();
                                },
                                "👤 Switch User"
                            }
                        }
                    }

                    // コンテンツエリア
                    main {
                        class: CssClasses::MAIN_CONTENT,
                        SectionContent { section: section.unwrap_or_default(), role }
                    }

                    // フッター
                    footer {
                        class: CssClasses::APP_FOOTER,
                        p { style: "margin: 0;", "Made with ❤️ for young learners everywhere" }
                        p { style: "margin: 8px 0 0 0; font-size: 12px;", "BrainBuddy - Where Education Meets Innovation" }
                    }
                },
            }
        }
    }
}
