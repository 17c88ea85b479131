//! セッション変更のブロードキャスト
//!
//! SessionStoreで発生した変更をプッシュ型でUIに通知する。
//! タイマー経由の非同期な変更（遅延応答・パイプライン進行）もこの経路で反映される。

use tokio::sync::broadcast;

use crate::gui::navigation::Section;
use crate::tutor::{ChatMessage, Mood, Role};

/// セッション変更イベント
///
/// 各イベントは必要最小限のデータのみを含む。
#[derive(Clone, Debug, PartialEq)]
pub enum SessionChange {
    /// ロールが選択・解除された
    RoleChanged(Option<Role>),

    /// 表示セクションが切り替わった
    SectionChanged(Section),

    /// 気分が変わった
    MoodChanged(Mood),

    /// メッセージが追加された
    MessageAdded {
        /// 現在のメッセージ数
        count: usize,
        latest: ChatMessage,
    },

    /// 入力中表示が切り替わった
    TypingChanged(bool),

    /// パイプラインの状態が変わった
    PipelineChanged {
        /// 状態名（idle/uploading/generating/ready/failed）
        state: &'static str,
    },

    /// クイズ設定が更新された
    SettingsChanged,

    /// クイズの解答が進んだ
    QuizProgressed { answered: usize, total: usize },

    /// ポイント・レベルが更新された
    StatsUpdated { points: u32, level: u32 },

    /// バッジを獲得した
    BadgeEarned(String),

    /// ユーザー切り替えでセッションが破棄された
    SessionReset,
}

/// セッション変更のブロードキャスター
pub struct SessionBroadcaster {
    sender: broadcast::Sender<SessionChange>,
}

impl SessionBroadcaster {
    /// バッファサイズは256。遅いサブスクライバーは古いイベントを取りこぼす（lagged）
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.sender.subscribe()
    }

    /// 変更を通知する。サブスクライバーがいない場合は破棄される
    pub fn broadcast(&self, change: SessionChange) {
        let _ = self.sender.send(change);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_subscription() {
        let broadcaster = SessionBroadcaster::new();
        assert_eq!(broadcaster.subscriber_count(), 0);

        let _rx1 = broadcaster.subscribe();
        let _rx2 = broadcaster.subscribe();
        assert_eq!(broadcaster.subscriber_count(), 2);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_receive_same_event() {
        let broadcaster = SessionBroadcaster::new();
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();

        broadcaster.broadcast(SessionChange::MoodChanged(Mood::Curious));

        for rx in [&mut rx1, &mut rx2] {
            let received = tokio::time::timeout(Duration::from_millis(100), rx.recv())
                .await
                .expect("timeout")
                .expect("receive error");
            assert_eq!(received, SessionChange::MoodChanged(Mood::Curious));
        }
    }

    #[tokio::test]
    async fn test_broadcast_without_subscribers_is_dropped() {
        let broadcaster = SessionBroadcaster::new();
        broadcaster.broadcast(SessionChange::SessionReset);

        let mut rx = broadcaster.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
