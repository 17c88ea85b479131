//! セッションストア用カスタムフック
//!
//! `SessionStore` の変更通知を購読し、描画用のスナップショットSignalを更新する。

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::gui::{
    models::Session,
    session_store::SessionStore,
    state_broadcaster::SessionChange,
};

/// セッションハンドル
///
/// `store` で操作し、`snapshot` で描画する。
#[derive(Clone)]
pub struct SessionHandle {
    pub store: SessionStore,
    pub snapshot: Signal<Session>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store && self.snapshot == other.snapshot
    }
}

impl SessionHandle {
    /// 通知を待たずにスナップショットを取り直す
    pub fn refresh(&self) {
        let mut snapshot = self.snapshot;
        snapshot.set(self.store.snapshot());
    }
}

/// ルートでハンドルを作成してコンテキストに登録する
pub fn use_session_provider(store: SessionStore) -> SessionHandle {
    let initial = store.clone();
    let snapshot = use_signal(move || initial.snapshot());
    let handle = use_context_provider(|| SessionHandle { store, snapshot });

    let sync_handle = handle.clone();
    use_effect(move || {
        let store = sync_handle.store.clone();
        let mut snapshot = sync_handle.snapshot;

        spawn(async move {
            let mut rx = store.subscribe();
            let mut event_count = 0u64;
            tracing::info!("📡 [SESSION_SYNC] Subscribed to session changes");

            loop {
                match rx.recv().await {
                    Ok(change) => {
                        event_count += 1;
                        match &change {
                            SessionChange::MessageAdded { count, .. } => {
                                tracing::debug!(
                                    "📬 [SESSION_SYNC] MessageAdded #{}: count={}",
                                    event_count,
                                    count
                                );
                            }
                            SessionChange::BadgeEarned(name) => {
                                tracing::info!("🏅 [SESSION_SYNC] Badge earned: {}", name);
                            }
                            other => {
                                tracing::trace!("🔧 [SESSION_SYNC] {:?}", other);
                            }
                        }
                        snapshot.set(store.snapshot());
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "⚠️ [SESSION_SYNC] Lagged: skipped {} events, resyncing",
                            skipped
                        );
                        snapshot.set(store.snapshot());
                    }
                    Err(RecvError::Closed) => {
                        tracing::error!("❌ [SESSION_SYNC] Broadcaster closed, sync loop ended");
                        break;
                    }
                }
            }
        });
    });

    handle
}

/// 子コンポーネントからハンドルを取得
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
