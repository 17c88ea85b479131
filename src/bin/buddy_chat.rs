//! ターミナル版の学習バディチャット
//!
//! デスクトップ版と同じ SessionStore と応答テーブルを使う。

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use brainbuddy::{
    content::Variant,
    gui::{
        config_manager::{AppConfig, ConfigManager, LogConfig},
        utils, SessionChange, SessionOptions, SessionStore,
    },
    tutor::{Mood, ReplyMode, Role, Sender},
};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

/// 応答待ちの猶予（応答遅延に加算）
const REPLY_GRACE: Duration = Duration::from_millis(500);
/// 表示タスクが残りのイベントを出し切るまでの上限
const PRINTER_DRAIN: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "buddy-chat")]
#[command(about = "Chat with your BrainBuddy study companion from the terminal")]
#[command(version)]
struct Cli {
    /// Who is chatting (student, teacher, admin)
    #[arg(short, long, default_value = "student")]
    role: Role,

    /// Current mood (happy, excited, calm, curious, tired, confused)
    #[arg(short, long, default_value = "happy")]
    mood: Mood,

    /// Product variant (classic, enhanced); defaults to the configured one
    #[arg(long)]
    variant: Option<Variant>,

    /// Seed for reproducible replies
    #[arg(long)]
    seed: Option<u64>,

    /// Reply without the thinking delay
    #[arg(long)]
    immediate: bool,

    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the conversation to this file as JSON when the chat ends
    #[arg(long, value_name = "FILE")]
    transcript: Option<PathBuf>,

    /// Log level for stderr output
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let manager = match &self.config {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new()?,
        };
        manager
            .load_config()
            .with_context(|| format!("Failed to load {}", manager.config_path().display()))
    }

    fn session_options(&self, config: &AppConfig) -> SessionOptions {
        let mut config = config.clone();
        if let Some(variant) = self.variant {
            config.variant = variant;
            // バリアントを切り替えた場合は生成時間もその既定値に従う
            config.timing.generation_delay_ms = None;
            config.reply_mode = None;
        }

        let mut options = SessionOptions::from_config(&config);
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        if self.immediate {
            options = options.with_reply_mode(ReplyMode::Immediate);
        }
        options
    }
}

/// 入力行の解釈
#[derive(Debug, PartialEq)]
enum Input<'a> {
    /// `/mood <name>` で気分を変える（不明な名前は happy）
    SetMood(Mood),
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim().strip_prefix("/mood") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
            Input::SetMood(Mood::from_str_lossy(rest.trim()))
        }
        _ => Input::Message(line),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    utils::init_logging(&LogConfig {
        log_level: cli.log_level.clone(),
        enable_file_logging: false,
        ..LogConfig::default()
    })?;

    let config = cli.load_config().unwrap_or_else(|e| {
        tracing::warn!("⚠️ {:#}, using defaults", e);
        AppConfig::default()
    });

    let store = SessionStore::new(cli.session_options(&config));
    let mut changes = store.subscribe();

    store.set_mood(cli.mood);
    store.select_role(cli.role);

    println!(
        "🧠 BrainBuddy ({}) | {} {} | {} {}",
        store.variant(),
        cli.role.icon(),
        cli.role.title(),
        cli.mood.emoji(),
        cli.mood.label()
    );
    for question in brainbuddy::tutor::replies::quick_questions(store.variant(), cli.role) {
        println!("  💡 {}", question);
    }
    println!("Type a message and press Enter. /mood <name> changes your mood. Ctrl+D to quit.\n");

    if let Some(greeting) = store.with_session(|s| s.conversation.last().cloned()) {
        println!("🤖 {}", greeting.text);
    }

    // ボットのメッセージだけを表示する
    let mut printer = tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(SessionChange::MessageAdded { latest, .. }) if latest.sender == Sender::Bot => {
                    println!("🤖 {}", latest.text);
                }
                Ok(SessionChange::TypingChanged(true)) => println!("   ...thinking"),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("⚠️ Missed {} session events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_input(&line) {
            Input::SetMood(mood) => {
                store.set_mood(mood);
                println!("{} Mood set to {}", mood.emoji(), mood.label());
            }
            Input::Message(text) => {
                if let Err(e) = store.send_message(text) {
                    eprintln!("⚠️ {}", e);
                }
            }
        }
    }

    // 入力終了時に保留中の応答があれば届くまで待つ
    let limit = store.options().reply_delay + REPLY_GRACE;
    store.wait_for_reply(limit).await;

    let asked = store.with_session(|s| s.conversation.user_message_count());
    if let Some(path) = &cli.transcript {
        let messages = store.with_session(|s| s.conversation.messages().to_vec());
        let json = serde_json::to_string_pretty(&messages).context("Failed to encode transcript")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
        tracing::info!("💾 Transcript saved to {}", path.display());
    }

    store.timers().cancel_all();
    drop(store);
    // 送信側がすべて閉じると表示タスクは受信済みのイベントを出し切って終わる
    if tokio::time::timeout(PRINTER_DRAIN, &mut printer).await.is_err() {
        tracing::debug!("⏱️ Printer still running, stopping it");
        printer.abort();
    }

    println!("\n👋 Bye! You asked {} question(s) today.", asked);
    Ok(())
}
