//! セッションストア
//!
//! 1ユーザー分のセッションを保持し、すべての操作をここで受け付ける。
//! 状態は `Arc<RwLock<Session>>` で共有し、変更は `SessionBroadcaster` で通知する。
//! 遅延応答とパイプラインの進行は `TimerService` のキャンセル可能なタスクで駆動する。

use chrono::{Local, NaiveDate};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use crate::content::{
    AnswerOutcome, PipelineError, PipelineState, PipelineTiming, QuizAttempt, QuizError,
    QuizSettings, UploadSource, Variant,
};
use crate::gamification::Achievement;
use crate::gui::config_manager::AppConfig;
use crate::gui::models::Session;
use crate::gui::navigation::{NavigationError, Section};
use crate::gui::state_broadcaster::{SessionBroadcaster, SessionChange};
use crate::gui::timer_service::{TimerKind, TimerService};
use crate::tutor::{replies, Conversation, MessageId, Mood, ReplyEngine, ReplyMode, Role};
use crate::BrainBuddyResult;

const UPLOAD_TASK: &str = "pipeline:upload";
const GENERATION_TASK: &str = "pipeline:generate";

/// セッションの動作設定
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub variant: Variant,
    pub reply_mode: ReplyMode,
    pub reply_delay: Duration,
    pub pipeline_timing: PipelineTiming,
    pub quiz_defaults: QuizSettings,
    pub rng_seed: Option<u64>,
}

impl SessionOptions {
    /// バリアントの既定値
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            reply_mode: variant.default_reply_mode(),
            reply_delay: Duration::from_millis(1500),
            pipeline_timing: PipelineTiming::for_variant(variant),
            quiz_defaults: QuizSettings::default(),
            rng_seed: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            variant: config.variant,
            reply_mode: config.effective_reply_mode(),
            reply_delay: config.timing.reply_delay(),
            pipeline_timing: config.timing.pipeline_timing(config.variant),
            quiz_defaults: config
                .quiz_defaults
                .with_question_count(config.quiz_defaults.question_count),
            rng_seed: config.rng_seed,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..self
        }
    }

    pub fn with_reply_mode(self, reply_mode: ReplyMode) -> Self {
        Self { reply_mode, ..self }
    }

    fn new_session(&self) -> Session {
        Session::new(
            self.variant,
            self.pipeline_timing,
            self.quiz_defaults.clone(),
        )
    }
}

/// セッションストア
///
/// クローンは同じセッションを指す（タイマータスクへの受け渡し用）。
#[derive(Clone)]
pub struct SessionStore {
    session: Arc<RwLock<Session>>,
    broadcaster: Arc<SessionBroadcaster>,
    timers: TimerService,
    engine: Arc<Mutex<ReplyEngine>>,
    options: Arc<SessionOptions>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.session, &other.session)
    }
}

impl SessionStore {
    pub fn new(options: SessionOptions) -> Self {
        let engine = ReplyEngine::from_seed_option(options.variant, options.rng_seed);

        tracing::info!(
            variant = %options.variant,
            reply_mode = ?options.reply_mode,
            seeded = options.rng_seed.is_some(),
            "🏗️ Session store created"
        );

        Self {
            session: Arc::new(RwLock::new(options.new_session())),
            broadcaster: Arc::new(SessionBroadcaster::new()),
            timers: TimerService::new(),
            engine: Arc::new(Mutex::new(engine)),
            options: Arc::new(options),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(SessionOptions::from_config(config))
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn variant(&self) -> Variant {
        self.options.variant
    }

    pub fn timers(&self) -> &TimerService {
        &self.timers
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.broadcaster.subscribe()
    }

    /// 現在の状態のコピー
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// 読み取り専用で状態を参照
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.read())
    }

    // ---- ロール・画面遷移 ----

    /// ロールを選択してホームへ。会話はロールと気分に応じた挨拶から始まる
    pub fn select_role(&self, role: Role) {
        let dropped = self.timers.cancel_kind(&TimerKind::BotReply);
        if dropped > 0 {
            tracing::debug!("🤖 Dropped {} pending replies on role change", dropped);
        }

        {
            let mut session = self.session.write();
            let mood = session.mood;
            session.navigator.select_role(role);
            session.conversation = Conversation::with_greeting(
                replies::greeting(self.options.variant, role, mood),
                mood,
            );
        }

        tracing::info!("👤 Role selected: {}", role);
        self.broadcaster
            .broadcast(SessionChange::RoleChanged(Some(role)));
        self.broadcaster
            .broadcast(SessionChange::SectionChanged(Section::Home));
    }

    /// ユーザー切り替え
    ///
    /// 保留中のタイマーをすべてキャンセルし、セッションを初期状態に戻す。
    pub fn switch_user(&self) {
        let cancelled = self.timers.cancel_all();
        *self.session.write() = self.options.new_session();

        tracing::info!("🔄 User switched (cancelled {} pending tasks)", cancelled);
        self.broadcaster.broadcast(SessionChange::SessionReset);
        self.broadcaster.broadcast(SessionChange::RoleChanged(None));
    }

    pub fn navigate(&self, section: Section) -> Result<(), NavigationError> {
        self.session.write().navigator.navigate(section)?;
        tracing::debug!("🧭 Section: {}", section);
        self.broadcaster
            .broadcast(SessionChange::SectionChanged(section));
        Ok(())
    }

    pub fn set_mood(&self, mood: Mood) {
        let previous = std::mem::replace(&mut self.session.write().mood, mood);
        if previous != mood {
            tracing::info!("😊 Mood changed: {} → {}", previous, mood);
        }
        self.broadcaster.broadcast(SessionChange::MoodChanged(mood));
    }

    // ---- チャット ----

    /// メッセージを送信
    ///
    /// 空白のみの入力は何もしない（Ok(None)）。Delayedモードでは保留中の応答を
    /// キャンセルし、最新のメッセージにだけ応答する。
    pub fn send_message(&self, text: &str) -> BrainBuddyResult<Option<MessageId>> {
        if text.trim().is_empty() {
            tracing::debug!("💬 Ignoring blank message");
            return Ok(None);
        }

        let (role, mood, id, count, latest, earned) = {
            let mut session = self.session.write();
            let role = session
                .navigator
                .role()
                .ok_or(NavigationError::RoleRequired(Section::Chat))?;
            let mood = session.mood;

            let id = session.conversation.push_user(text);
            session.achievements.record_question();
            session.stats.record_activity(today());
            let earned = evaluate_achievements(&mut session);

            let count = session.conversation.len();
            let latest = session.conversation.last().cloned();
            (role, mood, id, count, latest, earned)
        };

        tracing::info!(message_id = %id, role = %role, mood = %mood, "💬 User message sent");
        if let Some(latest) = latest {
            self.broadcaster
                .broadcast(SessionChange::MessageAdded { count, latest });
        }
        self.broadcast_badges(&earned);

        match self.options.reply_mode {
            ReplyMode::Immediate => self.deliver_reply(role, mood, text),
            ReplyMode::Delayed => self.schedule_reply(id, role, mood, text),
        }

        Ok(Some(id))
    }

    fn schedule_reply(&self, id: MessageId, role: Role, mood: Mood, text: &str) {
        let superseded = self.timers.cancel_kind(&TimerKind::BotReply);
        if superseded > 0 {
            tracing::debug!("🤖 Superseded {} pending replies", superseded);
        }

        self.set_typing(true);

        let store = self.clone();
        let pending_text = text.to_string();
        let scheduled = self.timers.schedule_once(
            format!("bot_reply:{}", id),
            TimerKind::BotReply,
            self.options.reply_delay,
            move || store.deliver_reply(role, mood, &pending_text),
        );

        if let Err(e) = scheduled {
            tracing::warn!("⚠️ Could not delay reply, answering immediately: {}", e);
            self.deliver_reply(role, mood, text);
        }
    }

    fn deliver_reply(&self, role: Role, mood: Mood, text: &str) {
        let Some(reply) = self.engine.lock().generate_reply(role, mood, text) else {
            self.set_typing(false);
            return;
        };

        let (count, latest) = {
            let mut session = self.session.write();
            session.conversation.push_bot(reply, mood);
            session.conversation.set_typing(false);
            (
                session.conversation.len(),
                session.conversation.last().cloned(),
            )
        };

        if let Some(latest) = latest {
            self.broadcaster
                .broadcast(SessionChange::MessageAdded { count, latest });
        }
        self.broadcaster
            .broadcast(SessionChange::TypingChanged(false));
    }

    /// 保留中の応答が届くまで待つ
    ///
    /// 入力中でなければすぐに true。`limit` 内に届かなければ false。
    pub async fn wait_for_reply(&self, limit: Duration) -> bool {
        let mut changes = self.subscribe();
        if !self.with_session(|s| s.conversation.is_typing()) {
            return true;
        }

        let waited = tokio::time::timeout(limit, async {
            loop {
                match changes.recv().await {
                    Ok(SessionChange::TypingChanged(false)) => return true,
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(_)) => {
                        if !self.with_session(|s| s.conversation.is_typing()) {
                            return true;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => return false,
                }
            }
        })
        .await;

        match waited {
            Ok(arrived) => arrived,
            Err(_) => {
                tracing::warn!("⏱️ No reply within {:?}", limit);
                false
            }
        }
    }

    fn set_typing(&self, typing: bool) {
        self.session.write().conversation.set_typing(typing);
        self.broadcaster
            .broadcast(SessionChange::TypingChanged(typing));
    }

    // ---- コンテンツ生成パイプライン ----

    /// アップロードを開始し、タイマーでパイプラインを進める
    pub fn start_upload(&self, source: UploadSource) -> BrainBuddyResult<String> {
        let (file, timing) = {
            let mut session = self.session.write();
            let file = session.pipeline.begin_upload(&source)?;
            (file, session.pipeline.timing())
        };
        self.broadcast_pipeline();

        let store = self.clone();
        let scheduled = self.timers.schedule_once(
            UPLOAD_TASK,
            TimerKind::PipelineStep,
            timing.upload_delay,
            move || store.finish_upload(),
        );

        if let Err(e) = scheduled {
            self.session.write().pipeline.cancel();
            self.broadcast_pipeline();
            return Err(e.into());
        }

        Ok(file)
    }

    fn finish_upload(&self) {
        let (is_generating, timing) = {
            let mut session = self.session.write();
            let advanced = session
                .pipeline
                .finish_upload()
                .map(|state| matches!(state, PipelineState::Generating { .. }));
            match advanced {
                Ok(is_generating) => (is_generating, session.pipeline.timing()),
                Err(e) => {
                    tracing::warn!("⚠️ Upload step skipped: {}", e);
                    return;
                }
            }
        };
        self.broadcast_pipeline();

        if !is_generating {
            return;
        }

        let (wait, times_out) = timing.generation_wait();
        let store = self.clone();
        let scheduled = self.timers.schedule_once(
            GENERATION_TASK,
            TimerKind::PipelineStep,
            wait,
            move || store.finish_generation(times_out),
        );

        if let Err(e) = scheduled {
            tracing::error!("❌ Could not schedule generation step: {}", e);
            self.session.write().pipeline.cancel();
            self.broadcast_pipeline();
        }
    }

    fn finish_generation(&self, timed_out: bool) {
        let result = {
            let mut session = self.session.write();
            if timed_out {
                session.pipeline.time_out().map(|_| ())
            } else {
                session.pipeline.finish_generation().map(|_| ())
            }
        };

        match result {
            Ok(()) => self.broadcast_pipeline(),
            Err(e) => tracing::warn!("⚠️ Generation step skipped: {}", e),
        }
    }

    /// 失敗したパイプラインを Idle に戻す
    pub fn reset_pipeline(&self) -> Result<(), PipelineError> {
        {
            let mut session = self.session.write();
            session.pipeline.reset()?;
            session.attempt = None;
            session.last_outcome = None;
        }
        tracing::info!("🔁 Pipeline reset");
        self.broadcast_pipeline();
        Ok(())
    }

    fn broadcast_pipeline(&self) {
        let state = self.session.read().pipeline.state().name();
        self.broadcaster
            .broadcast(SessionChange::PipelineChanged { state });
    }

    // ---- クイズ ----

    /// 設定を丸ごと置き換える（問題数は範囲内に丸める）
    pub fn update_settings(&self, settings: QuizSettings) -> QuizSettings {
        let settings = settings.with_question_count(settings.question_count);
        self.session.write().settings = settings.clone();
        tracing::debug!(?settings, "⚙️ Quiz settings updated");
        self.broadcaster.broadcast(SessionChange::SettingsChanged);
        settings
    }

    /// 生成済みの問題でクイズを開始（やり直しも可）
    pub fn start_quiz(&self) -> BrainBuddyResult<usize> {
        let total = {
            let mut session = self.session.write();
            let PipelineState::Ready { questions, .. } = session.pipeline.state() else {
                return Err(QuizError::NotReady.into());
            };
            let attempt =
                QuizAttempt::new(questions.clone(), session.settings.include_explanations);
            let total = attempt.questions().len();
            session.attempt = Some(attempt);
            session.last_outcome = None;
            total
        };

        tracing::info!("📝 Quiz started with {} questions", total);
        self.broadcaster
            .broadcast(SessionChange::QuizProgressed { answered: 0, total });
        Ok(total)
    }

    /// 現在の問題に解答し、ポイントと実績を更新
    pub fn answer_question(&self, choice: usize) -> BrainBuddyResult<AnswerOutcome> {
        let (outcome, answered, total, points, level, earned) = {
            let mut session = self.session.write();
            let attempt = session.attempt.as_mut().ok_or(QuizError::NotReady)?;
            let outcome = attempt.answer(choice)?;
            let answered = attempt.answered();
            let total = attempt.questions().len();
            let finished = attempt.is_complete().then(|| attempt.score_percent());

            if let Some(level) = session.stats.award_points(outcome.points) {
                tracing::info!("🎉 Reached level {}", level);
            }

            let earned = match finished {
                Some(score) => {
                    tracing::info!("🏁 Quiz finished with {}%", score);
                    let date = today();
                    session.achievements.record_quiz(date, score);
                    session.stats.record_activity(date);
                    evaluate_achievements(&mut session)
                }
                None => Vec::new(),
            };

            session.last_outcome = Some(outcome.clone());
            (
                outcome,
                answered,
                total,
                session.stats.points,
                session.stats.level(),
                earned,
            )
        };

        self.broadcaster
            .broadcast(SessionChange::QuizProgressed { answered, total });
        self.broadcaster
            .broadcast(SessionChange::StatsUpdated { points, level });
        self.broadcast_badges(&earned);

        Ok(outcome)
    }

    fn broadcast_badges(&self, earned: &[Achievement]) {
        for achievement in earned {
            self.broadcaster
                .broadcast(SessionChange::BadgeEarned(achievement.name().to_string()));
        }
    }
}

fn evaluate_achievements(session: &mut Session) -> Vec<Achievement> {
    let Session {
        achievements,
        stats,
        ..
    } = session;
    achievements.evaluate(stats)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
