//! コンテンツ生成パイプラインの統合テスト
//!
//! 仮想時間（start_paused）で固定遅延どおりに遷移することを確認する。

use std::path::PathBuf;
use std::time::Duration;

use brainbuddy::content::{PipelineError, PipelineState, UploadSource, Variant};
use brainbuddy::gui::{SessionOptions, SessionStore};
use brainbuddy::tutor::Role;

fn store_for(variant: Variant) -> SessionStore {
    let store = SessionStore::new(SessionOptions::for_variant(variant).with_seed(1));
    store.select_role(Role::Student);
    store
}

fn state_name(store: &SessionStore) -> &'static str {
    store.with_session(|s| s.pipeline.state().name())
}

#[tokio::test(start_paused = true)]
async fn test_enhanced_pipeline_ready_after_fixed_delays() {
    let store = store_for(Variant::Enhanced);

    let file = store.start_upload(UploadSource::Placeholder).unwrap();
    assert_eq!(file, "advanced-biology-notes.pdf");
    assert_eq!(state_name(&store), "uploading");

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(state_name(&store), "uploading");

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(state_name(&store), "generating");

    // 500 + 4000 = 4500ms で Ready
    tokio::time::sleep(Duration::from_millis(4499 - 501)).await;
    assert_eq!(state_name(&store), "generating");

    tokio::time::sleep(Duration::from_millis(2)).await;
    let session = store.snapshot();
    match session.pipeline.state() {
        PipelineState::Ready { file, questions } => {
            assert_eq!(file, "advanced-biology-notes.pdf");
            assert_eq!(questions.len(), 3);
            assert!(questions.iter().all(|q| q.explanation().is_some()));
        }
        other => panic!("expected ready, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_classic_pipeline_uses_shorter_generation() {
    let store = store_for(Variant::Classic);

    let file = store.start_upload(UploadSource::Placeholder).unwrap();
    assert_eq!(file, "sample-notes.pdf");

    tokio::time::sleep(Duration::from_millis(3499)).await;
    assert_eq!(state_name(&store), "generating");

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(state_name(&store), "ready");
    store.with_session(|s| {
        let PipelineState::Ready { questions, .. } = s.pipeline.state() else {
            panic!("pipeline not ready");
        };
        assert!(questions.iter().all(|q| q.explanation().is_none()));
    });
}

#[tokio::test(start_paused = true)]
async fn test_ready_is_terminal() {
    let store = store_for(Variant::Enhanced);
    store.start_upload(UploadSource::Placeholder).unwrap();

    tokio::time::sleep(Duration::from_millis(4600)).await;
    assert_eq!(state_name(&store), "ready");

    let err = store.start_upload(UploadSource::Placeholder).unwrap_err();
    assert!(matches!(
        err,
        brainbuddy::BrainBuddyError::Pipeline(PipelineError::AlreadyStarted)
    ));
    assert!(store.reset_pipeline().is_err());
    assert_eq!(state_name(&store), "ready");
}

#[tokio::test(start_paused = true)]
async fn test_second_upload_while_busy_is_rejected() {
    let store = store_for(Variant::Enhanced);
    store.start_upload(UploadSource::Placeholder).unwrap();

    assert!(store.start_upload(UploadSource::Placeholder).is_err());
    assert_eq!(store.timers().active_tasks().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unsupported_file_fails_and_can_reset() {
    let store = store_for(Variant::Enhanced);

    let file = store
        .start_upload(UploadSource::Picked(PathBuf::from("/home/kid/holiday.mp4")))
        .unwrap();
    assert_eq!(file, "holiday.mp4");

    tokio::time::sleep(Duration::from_millis(501)).await;
    store.with_session(|s| match s.pipeline.state() {
        PipelineState::Failed { error, .. } => assert_eq!(
            error,
            &PipelineError::UnsupportedFormat {
                file: "holiday.mp4".to_string()
            }
        ),
        other => panic!("expected failure, got {:?}", other),
    });

    // 生成タイマーは登録されない
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(state_name(&store), "failed");

    store.reset_pipeline().unwrap();
    assert_eq!(state_name(&store), "idle");

    store
        .start_upload(UploadSource::Picked(PathBuf::from("notes.MD")))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(4501)).await;
    assert_eq!(state_name(&store), "ready");
}

#[tokio::test(start_paused = true)]
async fn test_generation_timeout() {
    let mut options = SessionOptions::for_variant(Variant::Enhanced);
    options.pipeline_timing.generation_timeout = Duration::from_millis(1000);
    let store = SessionStore::new(options);
    store.select_role(Role::Teacher);

    store.start_upload(UploadSource::Placeholder).unwrap();

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert_eq!(state_name(&store), "generating");

    tokio::time::sleep(Duration::from_millis(2)).await;
    store.with_session(|s| {
        assert_eq!(
            s.pipeline.state(),
            &PipelineState::Failed {
                file: "advanced-biology-notes.pdf".to_string(),
                error: PipelineError::Timeout { after_ms: 1000 },
            }
        );
    });

    // 本来の完了時刻を過ぎても Ready にはならない
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(state_name(&store), "failed");
}

#[tokio::test(start_paused = true)]
async fn test_switch_user_cancels_pipeline() {
    let store = store_for(Variant::Enhanced);
    store.start_upload(UploadSource::Placeholder).unwrap();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(state_name(&store), "generating");

    store.switch_user();
    assert_eq!(state_name(&store), "idle");
    assert_eq!(store.timers().active_tasks().len(), 0);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(state_name(&store), "idle");
}

#[tokio::test(start_paused = true)]
async fn test_quiz_attempt_awards_points() {
    let store = store_for(Variant::Enhanced);
    store.start_upload(UploadSource::Placeholder).unwrap();
    tokio::time::sleep(Duration::from_millis(4501)).await;

    let questions = store.with_session(|s| match s.pipeline.state() {
        PipelineState::Ready { questions, .. } => questions.clone(),
        _ => Vec::new(),
    });
    assert_eq!(store.start_quiz().unwrap(), questions.len());

    let points_before = store.with_session(|s| s.stats.points);
    let mut expected = 0;
    for question in &questions {
        let outcome = store.answer_question(question.correct_index()).unwrap();
        assert!(outcome.correct);
        assert!(outcome.explanation.is_some());
        expected += question.difficulty().points();
    }

    let session = store.snapshot();
    assert_eq!(session.stats.points, points_before + expected);
    let attempt = session.attempt.as_ref().unwrap();
    assert!(attempt.is_complete());
    assert_eq!(attempt.score_percent(), 100);

    assert!(store.answer_question(0).is_err());
}
