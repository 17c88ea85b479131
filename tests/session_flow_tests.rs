//! ロール選択・画面遷移・ユーザー切り替えの統合テスト

use brainbuddy::content::{QuizDifficulty, QuizSettings, Variant};
use brainbuddy::gamification::UserStats;
use brainbuddy::gui::{NavigationError, Section, SessionChange, SessionOptions, SessionStore};
use brainbuddy::tutor::{replies, Mood, Role, Sender};
use brainbuddy::BrainBuddyError;

fn store() -> SessionStore {
    SessionStore::new(SessionOptions::for_variant(Variant::Enhanced).with_seed(9))
}

#[test]
fn test_nothing_reachable_before_role() {
    let store = store();

    for section in Section::ALL {
        assert_eq!(
            store.navigate(section),
            Err(NavigationError::RoleRequired(section))
        );
    }
    assert!(matches!(
        store.send_message("hi"),
        Err(BrainBuddyError::Navigation(_))
    ));
    assert_eq!(store.with_session(|s| s.navigator.current()), None);
}

#[test]
fn test_select_role_unlocks_navigation() {
    let store = store();
    store.select_role(Role::Student);

    assert_eq!(
        store.with_session(|s| s.navigator.current()),
        Some(Section::Home)
    );
    for section in Section::ALL {
        store.navigate(section).unwrap();
        assert_eq!(
            store.with_session(|s| s.navigator.current()),
            Some(section)
        );
    }
}

#[test]
fn test_greeting_follows_role_and_mood() {
    let store = store();
    store.set_mood(Mood::Excited);
    store.select_role(Role::Teacher);

    let session = store.snapshot();
    let greeting = session.conversation.last().unwrap();
    assert_eq!(greeting.sender, Sender::Bot);
    assert_eq!(greeting.mood, Some(Mood::Excited));
    assert_eq!(
        greeting.text,
        replies::greeting(Variant::Enhanced, Role::Teacher, Mood::Excited)
    );
}

#[test]
fn test_switch_user_returns_to_role_selection() {
    let store = store();
    store.select_role(Role::Admin);
    store.navigate(Section::Dashboard).unwrap();
    store.set_mood(Mood::Confused);
    store.update_settings(QuizSettings::default().with_difficulty(QuizDifficulty::Hard));

    let mut changes = store.subscribe();
    store.switch_user();

    let session = store.snapshot();
    assert_eq!(session.navigator.role(), None);
    assert_eq!(session.navigator.current(), None);
    assert_eq!(session.mood, Mood::Happy);
    assert_eq!(session.settings, QuizSettings::default());
    assert_eq!(session.stats, UserStats::sample());
    assert!(session.attempt.is_none());

    assert_eq!(changes.try_recv().unwrap(), SessionChange::SessionReset);
    assert_eq!(changes.try_recv().unwrap(), SessionChange::RoleChanged(None));

    assert!(store.navigate(Section::Home).is_err());
}

#[test]
fn test_settings_edits_keep_other_fields() {
    let store = store();

    let settings = store.snapshot().settings;
    let settings = store.update_settings(settings.with_question_count_input("25"));
    let settings = store.update_settings(settings.with_explanations(false));
    let settings = store.update_settings(settings.with_question_count_input("lots"));

    assert_eq!(settings.question_count, 25);
    assert!(!settings.include_explanations);
    assert_eq!(settings.difficulty, QuizSettings::default().difficulty);
    assert_eq!(settings.time_limit_minutes, 20);
    assert_eq!(store.snapshot().settings, settings);

    let settings = store.update_settings(settings.with_question_count(1));
    assert_eq!(settings.question_count, 5);
}

#[test]
fn test_sample_progression() {
    let stats = store().snapshot().stats;
    let progression = stats.progression();

    assert_eq!(stats.points, 1250);
    assert_eq!(progression.level, 3);
    assert_eq!(progression.progress_percentage, 50.0);
    assert_eq!(progression.points_to_next_level, 250);
}

#[test]
fn test_mood_change_is_broadcast() {
    let store = store();
    let mut changes = store.subscribe();

    store.set_mood(Mood::Calm);

    assert_eq!(changes.try_recv().unwrap(), SessionChange::MoodChanged(Mood::Calm));
    assert_eq!(store.with_session(|s| s.mood), Mood::Calm);
}
