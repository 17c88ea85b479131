//! チャット送信と遅延応答の統合テスト

use std::time::Duration;

use brainbuddy::content::Variant;
use brainbuddy::gui::{SessionChange, SessionOptions, SessionStore};
use brainbuddy::tutor::{replies, Mood, ReplyMode, Role, Sender};

fn delayed_store() -> SessionStore {
    let store = SessionStore::new(
        SessionOptions::for_variant(Variant::Enhanced)
            .with_seed(42)
            .with_reply_mode(ReplyMode::Delayed),
    );
    store.select_role(Role::Student);
    store
}

fn message_count(store: &SessionStore) -> usize {
    store.with_session(|s| s.conversation.len())
}

#[tokio::test(start_paused = true)]
async fn test_delayed_reply_arrives_after_delay() {
    let store = delayed_store();
    store.set_mood(Mood::Curious);
    assert_eq!(message_count(&store), 1);

    store.send_message("Why is the sky blue?").unwrap();

    // ユーザーのメッセージは即座に追加され、入力中表示になる
    assert_eq!(message_count(&store), 2);
    assert!(store.with_session(|s| s.conversation.is_typing()));

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert_eq!(message_count(&store), 2);

    tokio::time::sleep(Duration::from_millis(2)).await;
    let session = store.snapshot();
    assert_eq!(session.conversation.len(), 3);
    assert!(!session.conversation.is_typing());

    let reply = session.conversation.last().unwrap();
    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(reply.mood, Some(Mood::Curious));
    let pool = replies::candidates(Variant::Enhanced, Role::Student, Mood::Curious);
    assert!(pool.contains(&reply.text.as_str()));
}

#[tokio::test(start_paused = true)]
async fn test_blank_message_schedules_nothing() {
    let store = delayed_store();

    assert_eq!(store.send_message("").unwrap(), None);
    assert_eq!(store.send_message("  \t ").unwrap(), None);

    assert_eq!(message_count(&store), 1);
    assert!(!store.with_session(|s| s.conversation.is_typing()));
    assert!(store.timers().active_tasks().is_empty());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(message_count(&store), 1);
}

#[tokio::test(start_paused = true)]
async fn test_superseding_send_answers_only_newest() {
    let store = delayed_store();

    store.send_message("first").unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    store.send_message("second").unwrap();

    // 最初の応答予定時刻を過ぎても応答はない
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(message_count(&store), 3);
    assert!(store.with_session(|s| s.conversation.is_typing()));

    // 2通目から 1500ms で1件だけ応答
    tokio::time::sleep(Duration::from_millis(901)).await;
    let session = store.snapshot();
    let senders: Vec<Sender> = session
        .conversation
        .messages()
        .iter()
        .map(|m| m.sender)
        .collect();
    assert_eq!(
        senders,
        vec![Sender::Bot, Sender::User, Sender::User, Sender::Bot]
    );
    assert_eq!(store.timers().stats().cancelled_tasks, 1);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(message_count(&store), 4);
}

#[tokio::test(start_paused = true)]
async fn test_switch_user_drops_pending_reply() {
    let store = delayed_store();
    store.send_message("hello?").unwrap();

    store.switch_user();
    tokio::time::sleep(Duration::from_secs(3)).await;

    let session = store.snapshot();
    assert!(session.conversation.is_empty());
    assert!(!session.conversation.is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_role_change_drops_pending_reply() {
    let store = delayed_store();
    store.send_message("Is this on the test?").unwrap();

    store.select_role(Role::Teacher);
    assert!(store.timers().active_tasks().is_empty());
    tokio::time::sleep(Duration::from_secs(3)).await;

    let session = store.snapshot();
    assert_eq!(session.conversation.len(), 1);
    assert_eq!(session.conversation.messages()[0].sender, Sender::Bot);
    assert!(!session.conversation.is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_reply_returns_once_bot_answers() {
    let store = delayed_store();
    assert!(store.wait_for_reply(Duration::from_millis(10)).await);

    store.send_message("Why is the sky blue?").unwrap();
    assert!(store.wait_for_reply(Duration::from_secs(5)).await);

    let session = store.snapshot();
    assert_eq!(session.conversation.len(), 3);
    assert_eq!(session.conversation.last().unwrap().sender, Sender::Bot);
    assert!(!session.conversation.is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_reply_gives_up_after_limit() {
    let store = delayed_store();
    store.send_message("Still there?").unwrap();

    assert!(!store.wait_for_reply(Duration::from_millis(500)).await);
    assert!(store.with_session(|s| s.conversation.is_typing()));
}

#[tokio::test]
async fn test_immediate_mode_replies_in_same_step() {
    let store = SessionStore::new(SessionOptions::for_variant(Variant::Classic).with_seed(3));
    store.set_mood(Mood::Tired);
    store.select_role(Role::Teacher);

    store.send_message("Can we take a break?").unwrap();

    let session = store.snapshot();
    assert_eq!(session.conversation.len(), 3);
    let reply = &session.conversation.messages()[2];
    // Classic は気分だけで応答を選ぶ
    let pool = replies::candidates(Variant::Classic, Role::Teacher, Mood::Tired);
    assert!(pool.contains(&reply.text.as_str()));
    assert!(store.timers().active_tasks().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_message_events_are_broadcast() {
    let store = delayed_store();
    let mut changes = store.subscribe();

    store.send_message("What is photosynthesis?").unwrap();
    tokio::time::sleep(Duration::from_millis(1600)).await;

    let mut events = Vec::new();
    while let Ok(change) = changes.try_recv() {
        events.push(change);
    }

    let added: Vec<Sender> = events
        .iter()
        .filter_map(|change| match change {
            SessionChange::MessageAdded { latest, .. } => Some(latest.sender),
            _ => None,
        })
        .collect();
    assert_eq!(added, vec![Sender::User, Sender::Bot]);
    assert!(events.contains(&SessionChange::TypingChanged(true)));
    assert_eq!(
        events.last(),
        Some(&SessionChange::TypingChanged(false))
    );
}
