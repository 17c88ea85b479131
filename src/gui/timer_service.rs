//! タイマーサービス
//!
//! ボット応答の遅延やパイプラインの各ステップなど、時間ベースの処理を管理する
//! - IDをキーにした単発タスク
//! - 同じIDで再登録すると古いタスクをキャンセル
//! - キャンセル済みタスクは絶対に実行されない

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::GuiError;

/// タイマータスクのID
pub type TimerId = String;

/// タイマータスクの種類
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// ボットの遅延応答
    BotReply,
    /// コンテンツ生成パイプラインのステップ
    PipelineStep,
    /// カスタムタスク
    Custom(String),
}

/// タイマータスクの内部状態
#[derive(Debug)]
struct TimerTask {
    kind: TimerKind,
    /// 同じIDの再登録と区別するための通し番号
    seq: u64,
    cancel_sender: Option<oneshot::Sender<()>>,
    scheduled_at: Instant,
    delay: Duration,
}

/// タイマー統計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerStats {
    /// 総登録タスク数
    pub total_tasks: u64,
    /// アクティブタスク数
    pub active_tasks: u64,
    /// 完了タスク数
    pub completed_tasks: u64,
    /// キャンセルタスク数
    pub cancelled_tasks: u64,
}

#[derive(Debug, Default)]
struct Registry {
    tasks: HashMap<TimerId, TimerTask>,
    next_seq: u64,
    stats: TimerStats,
}

/// タイマーサービス
#[derive(Debug, Clone, Default)]
pub struct TimerService {
    registry: Arc<Mutex<Registry>>,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 単発タスクを登録
    ///
    /// `delay` 経過後に `task` を一度だけ実行する。同じIDのタスクが既にあれば
    /// キャンセルしてから登録する。tokioランタイム外では `GuiError::Timer` を返す。
    pub fn schedule_once<F>(
        &self,
        id: impl Into<TimerId>,
        kind: TimerKind,
        delay: Duration,
        task: F,
    ) -> Result<(), GuiError>
    where
        F: FnOnce() + Send + 'static,
    {
        let id = id.into();
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| GuiError::Timer(format!("no async runtime for task {}: {}", id, e)))?;

        self.cancel(&id);

        let (cancel_sender, mut cancel_receiver) = oneshot::channel();

        let seq = {
            let mut registry = self.registry.lock();
            registry.next_seq += 1;
            let seq = registry.next_seq;
            registry.tasks.insert(
                id.clone(),
                TimerTask {
                    kind: kind.clone(),
                    seq,
                    cancel_sender: Some(cancel_sender),
                    scheduled_at: Instant::now(),
                    delay,
                },
            );
            registry.stats.total_tasks += 1;
            registry.stats.active_tasks += 1;
            seq
        };

        let registry = Arc::clone(&self.registry);
        let task_id = id.clone();

        handle.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {},
                _ = &mut cancel_receiver => return,
            }

            // 登録が残っている場合のみ実行（キャンセルとの競合はロックで判定）
            if Self::complete_task(&registry, &task_id, seq) {
                task();
            }
        });

        tracing::debug!(
            "⏱️ [TIMER] Scheduled task: {} ({:?}) in {}ms",
            id,
            kind,
            delay.as_millis()
        );
        Ok(())
    }

    /// タスクの完了処理。自分の登録が残っていれば取り除いて true
    fn complete_task(registry: &Mutex<Registry>, task_id: &str, seq: u64) -> bool {
        let mut registry = registry.lock();
        let is_current = registry
            .tasks
            .get(task_id)
            .is_some_and(|task| task.seq == seq);

        if is_current {
            registry.tasks.remove(task_id);
            registry.stats.active_tasks = registry.stats.active_tasks.saturating_sub(1);
            registry.stats.completed_tasks += 1;
            tracing::debug!("⏱️ [TIMER] Task fired: {}", task_id);
        }

        is_current
    }

    /// タスクをキャンセル
    pub fn cancel(&self, task_id: &str) -> bool {
        let sender = {
            let mut registry = self.registry.lock();
            let sender = registry
                .tasks
                .remove(task_id)
                .and_then(|mut task| task.cancel_sender.take());
            if sender.is_some() {
                registry.stats.active_tasks = registry.stats.active_tasks.saturating_sub(1);
                registry.stats.cancelled_tasks += 1;
            }
            sender
        };

        match sender {
            Some(sender) => {
                let _ = sender.send(());
                tracing::debug!("⏱️ [TIMER] Cancelled task: {}", task_id);
                true
            }
            None => false,
        }
    }

    /// 特定種類のタスクをすべてキャンセル
    pub fn cancel_kind(&self, kind: &TimerKind) -> u32 {
        let task_ids: Vec<TimerId> = {
            let registry = self.registry.lock();
            registry
                .tasks
                .iter()
                .filter(|(_, task)| &task.kind == kind)
                .map(|(id, _)| id.clone())
                .collect()
        };

        let cancelled = task_ids.iter().filter(|id| self.cancel(id)).count() as u32;

        if cancelled > 0 {
            tracing::info!("⏱️ [TIMER] Cancelled {} tasks of kind {:?}", cancelled, kind);
        }

        cancelled
    }

    /// 全タスクをキャンセル
    pub fn cancel_all(&self) -> u32 {
        let task_ids: Vec<TimerId> = self.registry.lock().tasks.keys().cloned().collect();

        let cancelled = task_ids.iter().filter(|id| self.cancel(id)).count() as u32;

        if cancelled > 0 {
            tracing::info!("⏱️ [TIMER] Cancelled all {} tasks", cancelled);
        }

        cancelled
    }

    /// アクティブなタスク一覧
    pub fn active_tasks(&self) -> Vec<(TimerId, TimerKind)> {
        self.registry
            .lock()
            .tasks
            .iter()
            .map(|(id, task)| (id.clone(), task.kind.clone()))
            .collect()
    }

    pub fn is_active(&self, task_id: &str) -> bool {
        self.registry.lock().tasks.contains_key(task_id)
    }

    /// タスクの残り時間
    pub fn remaining(&self, task_id: &str) -> Option<Duration> {
        self.registry
            .lock()
            .tasks
            .get(task_id)
            .map(|task| task.delay.saturating_sub(task.scheduled_at.elapsed()))
    }

    pub fn stats(&self) -> TimerStats {
        self.registry.lock().stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_task_fires_after_delay() {
        let service = TimerService::new();
        let counter = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&counter);

        service
            .schedule_once(
                "t1",
                TimerKind::BotReply,
                Duration::from_millis(1500),
                move || {
                    c.fetch_add(1, Ordering::SeqCst);
                },
            )
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(service.is_active("t1"));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!service.is_active("t1"));
        assert_eq!(service.stats().completed_tasks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_never_runs() {
        let service = TimerService::new();
        let counter = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&counter);

        service
            .schedule_once(
                "t1",
                TimerKind::BotReply,
                Duration::from_millis(100),
                move || {
                    c.fetch_add(1, Ordering::SeqCst);
                },
            )
            .unwrap();

        assert!(service.cancel("t1"));
        assert!(!service.cancel("t1"));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(service.stats().cancelled_tasks, 1);
        assert_eq!(service.stats().active_tasks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_same_id_replaces_task() {
        let service = TimerService::new();
        let counter = Arc::new(AtomicU32::new(0));

        for value in [1, 10] {
            let c = Arc::clone(&counter);
            service
                .schedule_once(
                    "same",
                    TimerKind::PipelineStep,
                    Duration::from_millis(100),
                    move || {
                        c.fetch_add(value, Ordering::SeqCst);
                    },
                )
                .unwrap();
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_kind_only_affects_matching_tasks() {
        let service = TimerService::new();
        let noop = || {};

        service
            .schedule_once("a", TimerKind::BotReply, Duration::from_secs(1), noop)
            .unwrap();
        service
            .schedule_once("b", TimerKind::BotReply, Duration::from_secs(1), noop)
            .unwrap();
        service
            .schedule_once("c", TimerKind::PipelineStep, Duration::from_secs(1), noop)
            .unwrap();

        assert_eq!(service.cancel_kind(&TimerKind::BotReply), 2);
        let remaining = service.active_tasks();
        assert_eq!(remaining, vec![("c".to_string(), TimerKind::PipelineStep)]);

        assert_eq!(service.cancel_all(), 1);
        assert!(service.active_tasks().is_empty());
    }

    #[test]
    fn test_schedule_outside_runtime_fails() {
        let service = TimerService::new();
        let result =
            service.schedule_once("x", TimerKind::Custom("test".into()), Duration::ZERO, || {});
        assert!(matches!(result, Err(GuiError::Timer(_))));
        assert!(service.active_tasks().is_empty());
    }
}
