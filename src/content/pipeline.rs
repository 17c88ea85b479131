//! コンテンツ生成パイプライン
//!
//! `Idle → Uploading → Generating → Ready` の線形な状態機械。遷移はすべて
//! タイマー駆動で、アップロードされたファイルの内容は読まない（ファイル名のみ使用）。
//! 対応外の形式と生成タイムアウトは `Failed` に遷移し、`reset()` で Idle に戻れる。
//! `Ready` はセッション内の終端状態。

use std::path::PathBuf;
use std::time::Duration;

use super::{question_bank, QuizQuestion, Variant};

/// 受け付けるファイル拡張子
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["pdf", "doc", "docx", "txt", "md", "png", "jpg", "jpeg"];

/// アップロード元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// 「ファイルを選択」ボタン（固定のプレースホルダー名）
    Placeholder,
    /// ファイルダイアログで選ばれたパス（名前のみ使用）
    Picked(PathBuf),
}

impl UploadSource {
    pub fn file_name(&self, variant: Variant) -> String {
        match self {
            UploadSource::Placeholder => variant.placeholder_filename().to_string(),
            UploadSource::Picked(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// パイプラインエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("an upload is already in progress or finished")]
    AlreadyStarted,

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("unsupported file format: {file}")]
    UnsupportedFormat { file: String },

    #[error("content generation timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
}

/// パイプラインの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Uploading {
        file: String,
    },
    Generating {
        file: String,
    },
    Ready {
        file: String,
        questions: Vec<QuizQuestion>,
    },
    Failed {
        file: String,
        error: PipelineError,
    },
}

impl PipelineState {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Uploading { .. } => "uploading",
            PipelineState::Generating { .. } => "generating",
            PipelineState::Ready { .. } => "ready",
            PipelineState::Failed { .. } => "failed",
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            PipelineState::Idle => None,
            PipelineState::Uploading { file }
            | PipelineState::Generating { file }
            | PipelineState::Ready { file, .. }
            | PipelineState::Failed { file, .. } => Some(file),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PipelineState::Ready { .. })
    }

    /// タイマーが進行中か
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            PipelineState::Uploading { .. } | PipelineState::Generating { .. }
        )
    }
}

/// 各フェーズの所要時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTiming {
    pub upload_delay: Duration,
    pub generation_delay: Duration,
    pub generation_timeout: Duration,
}

impl PipelineTiming {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            upload_delay: Duration::from_millis(500),
            generation_delay: variant.generation_delay(),
            generation_timeout: Duration::from_secs(30),
        }
    }

    /// 生成フェーズの待ち時間と、その後にタイムアウトとなるか
    pub fn generation_wait(&self) -> (Duration, bool) {
        if self.generation_timeout < self.generation_delay {
            (self.generation_timeout, true)
        } else {
            (self.generation_delay, false)
        }
    }

    /// Ready までの合計時間
    pub fn total(&self) -> Duration {
        self.upload_delay + self.generation_delay
    }
}

/// コンテンツ生成パイプライン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPipeline {
    variant: Variant,
    timing: PipelineTiming,
    state: PipelineState,
}

impl ContentPipeline {
    pub fn new(variant: Variant, timing: PipelineTiming) -> Self {
        Self {
            variant,
            timing,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn timing(&self) -> PipelineTiming {
        self.timing
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Idle → Uploading
    pub fn begin_upload(&mut self, source: &UploadSource) -> Result<String, PipelineError> {
        if !matches!(self.state, PipelineState::Idle) {
            return Err(PipelineError::AlreadyStarted);
        }

        let file = source.file_name(self.variant);
        tracing::info!("📁 Upload started: {}", file);
        self.state = PipelineState::Uploading { file: file.clone() };
        Ok(file)
    }

    /// Uploading → Generating（対応外の形式なら Failed）
    pub fn finish_upload(&mut self) -> Result<&PipelineState, PipelineError> {
        let PipelineState::Uploading { file } = &self.state else {
            return Err(self.invalid("finish upload"));
        };
        let file = file.clone();

        self.state = if is_supported(&file) {
            tracing::info!("🧠 Generating content from {}", file);
            PipelineState::Generating { file }
        } else {
            tracing::warn!("⚠️ Unsupported upload format: {}", file);
            PipelineState::Failed {
                error: PipelineError::UnsupportedFormat { file: file.clone() },
                file,
            }
        };
        Ok(&self.state)
    }

    /// Generating → Ready
    pub fn finish_generation(&mut self) -> Result<&PipelineState, PipelineError> {
        let PipelineState::Generating { file } = &self.state else {
            return Err(self.invalid("finish generation"));
        };

        let file = file.clone();
        let questions = question_bank(self.variant);
        tracing::info!("🎉 Quiz ready: {} questions from {}", questions.len(), file);
        self.state = PipelineState::Ready { file, questions };
        Ok(&self.state)
    }

    /// Generating → Failed(Timeout)
    pub fn time_out(&mut self) -> Result<&PipelineState, PipelineError> {
        let PipelineState::Generating { file } = &self.state else {
            return Err(self.invalid("time out"));
        };

        let file = file.clone();
        let after_ms = self.timing.generation_timeout.as_millis() as u64;
        tracing::warn!("⏱️ Generation timed out after {}ms: {}", after_ms, file);
        self.state = PipelineState::Failed {
            file,
            error: PipelineError::Timeout { after_ms },
        };
        Ok(&self.state)
    }

    /// Failed → Idle（Ready は終端なので戻れない）
    pub fn reset(&mut self) -> Result<(), PipelineError> {
        match self.state {
            PipelineState::Failed { .. } => {
                self.state = PipelineState::Idle;
                Ok(())
            }
            _ => Err(self.invalid("reset")),
        }
    }

    /// 進行中の処理を破棄して Idle に戻す
    ///
    /// アップロードか生成の途中だった場合は true。
    pub fn cancel(&mut self) -> bool {
        let was_busy = self.state.is_busy();
        if was_busy {
            tracing::debug!("🛑 Pipeline cancelled in state {}", self.state.name());
        }
        self.state = PipelineState::Idle;
        was_busy
    }

    fn invalid(&self, action: &'static str) -> PipelineError {
        PipelineError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

fn is_supported(file: &str) -> bool {
    std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> ContentPipeline {
        ContentPipeline::new(Variant::Enhanced, PipelineTiming::for_variant(Variant::Enhanced))
    }

    #[test]
    fn test_cancel_reports_in_flight_work() {
        let mut p = pipeline();
        assert!(!p.cancel());

        p.begin_upload(&UploadSource::Placeholder).unwrap();
        assert!(p.state().is_busy());
        assert!(p.cancel());
        assert_eq!(p.state(), &PipelineState::Idle);

        p.begin_upload(&UploadSource::Placeholder).unwrap();
        p.finish_upload().unwrap();
        p.finish_generation().unwrap();
        assert!(!p.state().is_busy());
        assert!(!p.cancel());
    }

    #[test]
    fn test_linear_happy_path() {
        let mut p = pipeline();
        let file = p.begin_upload(&UploadSource::Placeholder).unwrap();
        assert_eq!(file, "advanced-biology-notes.pdf");
        assert_eq!(p.state().name(), "uploading");

        p.finish_upload().unwrap();
        assert_eq!(p.state().name(), "generating");

        p.finish_generation().unwrap();
        match p.state() {
            PipelineState::Ready { questions, .. } => assert_eq!(questions.len(), 3),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut p = pipeline();
        p.begin_upload(&UploadSource::Placeholder).unwrap();
        p.finish_upload().unwrap();
        p.finish_generation().unwrap();

        assert_eq!(
            p.begin_upload(&UploadSource::Placeholder),
            Err(PipelineError::AlreadyStarted)
        );
        assert!(p.reset().is_err());
        assert!(p.state().is_ready());
    }

    #[test]
    fn test_out_of_order_transitions_are_rejected() {
        let mut p = pipeline();
        assert_eq!(
            p.finish_generation().unwrap_err(),
            PipelineError::InvalidTransition {
                action: "finish generation",
                state: "idle"
            }
        );
        assert!(p.finish_upload().is_err());
    }

    #[test]
    fn test_unsupported_format_fails_and_can_reset() {
        let mut p = pipeline();
        p.begin_upload(&UploadSource::Picked(PathBuf::from("/tmp/song.mp3")))
            .unwrap();
        p.finish_upload().unwrap();
        assert!(matches!(
            p.state(),
            PipelineState::Failed {
                error: PipelineError::UnsupportedFormat { .. },
                ..
            }
        ));

        p.reset().unwrap();
        assert_eq!(p.state(), &PipelineState::Idle);
    }

    #[test]
    fn test_picked_file_uses_name_only() {
        let source = UploadSource::Picked(PathBuf::from("/home/me/notes/Chapter 1.PDF"));
        assert_eq!(source.file_name(Variant::Classic), "Chapter 1.PDF");
        assert!(is_supported("Chapter 1.PDF"));
        assert!(!is_supported("README"));
    }

    #[test]
    fn test_generation_wait() {
        let mut timing = PipelineTiming::for_variant(Variant::Classic);
        assert_eq!(timing.generation_wait(), (Duration::from_millis(3000), false));
        assert_eq!(timing.total(), Duration::from_millis(3500));

        timing.generation_timeout = Duration::from_millis(1000);
        assert_eq!(timing.generation_wait(), (Duration::from_millis(1000), true));
    }
}
