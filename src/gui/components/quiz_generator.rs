//! クイズ生成画面
//!
//! アップロード → 生成 → プレビュー → 解答 の流れを表示する。状態遷移そのものは
//! `SessionStore` のパイプラインが受け持ち、ここでは現在の状態を描画するだけ。

use dioxus::prelude::*;

use crate::content::pipeline::SUPPORTED_EXTENSIONS;
use crate::content::{
    AnswerOutcome, ContentType, PipelineState, QuestionType, QuizAttempt, QuizDifficulty,
    QuizQuestion, QuizSettings, UploadSource, Variant,
};
use crate::gui::{hooks::use_session, session_store::SessionStore};
use crate::gui::styles::theme::{get_button_class, get_difficulty_class, CssClasses};

/// プレビューに出す問題数
const PREVIEW_COUNT: usize = 3;

#[component]
pub fn QuizGenerator() -> Element {
    let handle = use_session();
    let session = handle.snapshot.read().clone();
    let variant = session.variant();
    let mut error = use_signal(|| None::<String>);

    let title = match variant {
        Variant::Classic => "AI Quiz Generator",
        Variant::Enhanced => "Enhanced Quiz Generator",
    };

    let body = match session.pipeline.state() {
        PipelineState::Idle => rsx! {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 32px;",
                UploadPanel {
                    variant,
                    on_error: move |message: String| error.set(Some(message)),
                }
                if variant.has_settings_form() {
                    QuizSettingsForm { settings: session.settings.clone() }
                }
            }
        },
        PipelineState::Uploading { file } => rsx! {
            div {
                class: CssClasses::CARD,
                style: "max-width: 640px; margin: 0 auto; text-align: center;",
                div { class: CssClasses::SPINNER }
                h3 { class: CssClasses::CARD_TITLE, style: "justify-content: center;", "📤 Uploading {file}..." }
            }
        },
        PipelineState::Generating { .. } => rsx! {
            GeneratingCard { variant, settings: session.settings.clone() }
        },
        PipelineState::Ready { file, questions } => match &session.attempt {
            Some(attempt) => rsx! {
                QuizRunner {
                    attempt: attempt.clone(),
                    last_outcome: session.last_outcome.clone(),
                }
            },
            None => rsx! {
                QuizPreview {
                    variant,
                    file: file.clone(),
                    questions: questions.clone(),
                    settings: session.settings.clone(),
                }
            },
        },
        PipelineState::Failed { file, error: failure } => {
            let store = handle.store.clone();
            rsx! {
                div {
                    class: CssClasses::CARD,
                    style: "max-width: 640px; margin: 0 auto; text-align: center;",
                    h3 { class: CssClasses::CARD_TITLE, style: "justify-content: center;", "😕 Something went wrong with {file}" }
                    p { class: CssClasses::ERROR_MESSAGE, "{failure}" }
                    button {
                        class: get_button_class("primary", false),
                        style: "margin-top: 16px;",
                        onclick: move |_| {
                            if let Err(e) = store.reset_pipeline() {
                                tracing::warn!("⚠️ Pipeline reset failed: {}", e);
                            }
                        },
                        "Try Another File 🔁"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h2 { style: "font-size: 30px; font-weight: 700; margin: 0 0 12px 0;", "{title}" }
                p { style: "font-size: 18px; color: #4b5563;", "{session.mood.quiz_message(variant)}" }
            }

            if let Some(message) = error() {
                div {
                    class: CssClasses::ERROR_MESSAGE,
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    span { "{message}" }
                    button {
                        class: get_button_class("outline", false),
                        onclick: move |_| error.set(None),
                        "✕"
                    }
                }
            }

            {body}
        }
    }
}

/// アップロード欄
#[component]
fn UploadPanel(variant: Variant, on_error: EventHandler<String>) -> Element {
    let handle = use_session();

    let placeholder_store = handle.store.clone();
    let choose_placeholder = move |_| {
        if let Err(e) = placeholder_store.start_upload(UploadSource::Placeholder) {
            tracing::warn!("⚠️ Upload failed: {}", e);
            on_error.call(e.to_string());
        }
    };

    let picker_store = handle.store.clone();
    let browse = move |_| {
        let store = picker_store.clone();
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Choose learning content")
                .add_filter("Learning content", SUPPORTED_EXTENSIONS)
                .pick_file()
                .await;

            let Some(file) = picked else {
                tracing::debug!("📁 File selection cancelled");
                return;
            };

            if let Err(e) = store.start_upload(UploadSource::Picked(file.path().to_path_buf())) {
                tracing::warn!("⚠️ Upload failed: {}", e);
                on_error.call(e.to_string());
            }
        });
    };

    let (title, subtitle) = match variant {
        Variant::Classic => (
            "Upload Your Study Materials",
            Some("Upload PDFs, images, or notes and I'll create personalized quizzes for you!"),
        ),
        Variant::Enhanced => ("📤 Upload Learning Content", None),
    };

    rsx! {
        div {
            class: CssClasses::CARD,

            h3 { class: CssClasses::CARD_TITLE, style: "justify-content: center;", "{title}" }
            if let Some(subtitle) = subtitle {
                p { style: "text-align: center; color: #4b5563;", "{subtitle}" }
            }

            div {
                style: "border: 2px dashed #d1d5db; border-radius: 10px; padding: 32px; text-align: center; margin: 16px 0;",
                div { style: "font-size: 48px; color: #9ca3af;", "📤" }
                p { style: "color: #4b5563;", "Drag and drop your files here, or click to browse" }
                div {
                    style: "display: flex; gap: 12px; justify-content: center;",
                    button { class: get_button_class("primary", false), onclick: choose_placeholder, "Choose Files 📁" }
                    button { class: get_button_class("outline", false), onclick: browse, "Browse..." }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 16px;",
                match variant {
                    Variant::Classic => rsx! {
                        SourceHint { icon: "📄", title: "PDFs & Documents", detail: "Upload your study notes" }
                        SourceHint { icon: "🖼️", title: "Images & Screenshots", detail: "Upload textbook pages" }
                        SourceHint { icon: "✍️", title: "Handwritten Notes", detail: "Upload your handwriting" }
                    },
                    Variant::Enhanced => rsx! {
                        SourceHint { icon: "📄", title: "PDFs & Docs", detail: "" }
                        SourceHint { icon: "🖼️", title: "Images & Notes", detail: "" }
                    },
                }
            }
        }
    }
}

#[component]
fn SourceHint(icon: &'static str, title: &'static str, detail: &'static str) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 16px; background: #eff6ff; border-radius: 10px;",
            div { style: "font-size: 28px;", "{icon}" }
            p { style: "font-weight: 600; color: #1d4ed8; margin: 4px 0;", "{title}" }
            if !detail.is_empty() {
                p { style: "font-size: 13px; color: #2563eb; margin: 0;", "{detail}" }
            }
        }
    }
}

/// 現在の設定を取り出して変更を適用する
fn apply_settings(store: &SessionStore, change: impl FnOnce(&QuizSettings) -> QuizSettings) {
    let current = store.with_session(|session| session.settings.clone());
    store.update_settings(change(&current));
}

/// クイズ設定フォーム
#[component]
fn QuizSettingsForm(settings: QuizSettings) -> Element {
    let handle = use_session();

    let difficulty_store = handle.store.clone();
    let count_store = handle.store.clone();
    let explanations_store = handle.store.clone();
    let content_store = handle.store.clone();
    let time_store = handle.store.clone();
    let types_store = handle.store.clone();

    rsx! {
        div {
            class: CssClasses::CARD,
            h3 { class: CssClasses::CARD_TITLE, "⚙️ Quiz Settings" }

            div {
                class: CssClasses::FORM_GROUP,
                label { class: CssClasses::FORM_LABEL, r#for: "difficulty", "Difficulty Level" }
                select {
                    id: "difficulty",
                    class: CssClasses::FORM_INPUT,
                    value: "{settings.difficulty.id()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(difficulty) = QuizDifficulty::from_id(&evt.value()) {
                            apply_settings(&difficulty_store, |s| s.with_difficulty(difficulty));
                        }
                    },
                    for difficulty in QuizDifficulty::ALL {
                        option {
                            key: "{difficulty.id()}",
                            value: "{difficulty.id()}",
                            selected: difficulty == settings.difficulty,
                            "{difficulty.label()}"
                        }
                    }
                }
            }

            div {
                class: CssClasses::FORM_GROUP,
                label { class: CssClasses::FORM_LABEL, r#for: "questionCount", "Number of Questions" }
                input {
                    id: "questionCount",
                    class: CssClasses::FORM_INPUT,
                    r#type: "number",
                    min: "5",
                    max: "50",
                    value: "{settings.question_count}",
                    onchange: move |evt: FormEvent| {
                        let input = evt.value();
                        apply_settings(&count_store, |s| s.with_question_count_input(&input));
                    },
                }
            }

            div {
                class: CssClasses::FORM_GROUP,
                span { class: CssClasses::FORM_LABEL, "Question Types" }
                for question_type in QuestionType::ALL {
                    label {
                        key: "{question_type.id()}",
                        class: CssClasses::CHECKBOX_LABEL,
                        input {
                            r#type: "checkbox",
                            checked: settings.question_types.contains(&question_type),
                            onchange: {
                                let store = types_store.clone();
                                move |evt: FormEvent| {
                                    let enabled = evt.checked();
                                    apply_settings(&store, |s| s.with_question_type(question_type, enabled));
                                }
                            },
                        }
                        "{question_type.label()}"
                    }
                }
            }

            div {
                class: CssClasses::FORM_GROUP,
                label {
                    class: CssClasses::CHECKBOX_LABEL,
                    input {
                        r#type: "checkbox",
                        checked: settings.include_explanations,
                        onchange: move |evt: FormEvent| {
                            let enabled = evt.checked();
                            apply_settings(&explanations_store, |s| s.with_explanations(enabled));
                        },
                    }
                    "Include explanations"
                }
            }

            div {
                class: CssClasses::FORM_GROUP,
                label { class: CssClasses::FORM_LABEL, r#for: "timeLimit", "Time Limit (minutes)" }
                input {
                    id: "timeLimit",
                    class: CssClasses::FORM_INPUT,
                    r#type: "number",
                    min: "1",
                    value: "{settings.time_limit_minutes}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(minutes) = evt.value().parse::<u32>() {
                            apply_settings(&time_store, |s| s.with_time_limit(minutes));
                        }
                    },
                }
            }

            div {
                class: CssClasses::FORM_GROUP,
                label { class: CssClasses::FORM_LABEL, r#for: "contentType", "Content Type" }
                select {
                    id: "contentType",
                    class: CssClasses::FORM_INPUT,
                    value: "{settings.content_type.id()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(content_type) = ContentType::from_id(&evt.value()) {
                            apply_settings(&content_store, |s| s.with_content_type(content_type));
                        }
                    },
                    for content_type in ContentType::ALL {
                        option {
                            key: "{content_type.id()}",
                            value: "{content_type.id()}",
                            selected: content_type == settings.content_type,
                            "{content_type.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GeneratingCard(variant: Variant, settings: QuizSettings) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,
            style: "max-width: 640px; margin: 0 auto; text-align: center; padding: 32px;",
            div { class: CssClasses::SPINNER }
            match variant {
                Variant::Classic => rsx! {
                    h3 { style: "font-size: 20px; font-weight: 700;", "Creating Your Perfect Quiz! 🎯" }
                    p { style: "color: #4b5563;", "Analyzing your content and generating personalized questions..." }
                },
                Variant::Enhanced => rsx! {
                    h3 { style: "font-size: 20px; font-weight: 700;", "🧠 AI is analyzing your content..." }
                    p { style: "color: #4b5563;", "{settings.generation_summary()}" }
                    div {
                        style: "background: #eff6ff; padding: 16px; border-radius: 10px; color: #1d4ed8; font-size: 14px;",
                        "⭐ Processing with advanced AI algorithms"
                    }
                },
            }
        }
    }
}

/// 生成済みクイズのプレビュー
#[component]
fn QuizPreview(
    variant: Variant,
    file: String,
    questions: Vec<QuizQuestion>,
    settings: QuizSettings,
) -> Element {
    let handle = use_session();
    let mut show_all = use_signal(|| false);

    let visible = match variant {
        Variant::Classic => questions.len(),
        Variant::Enhanced if show_all() => questions.len(),
        Variant::Enhanced => questions.len().min(PREVIEW_COUNT),
    };
    let show_explanations = variant == Variant::Enhanced && settings.include_explanations;

    let start_label = match variant {
        Variant::Classic => "Start Quiz! 🚀".to_string(),
        Variant::Enhanced => format!("▶️ Start Full Quiz ({} questions)", settings.question_count),
    };

    let start_store = handle.store.clone();
    let start = move |_| match start_store.start_quiz() {
        Ok(total) => tracing::debug!("📝 Started quiz from preview ({} questions)", total),
        Err(e) => tracing::warn!("⚠️ Could not start quiz: {}", e),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                class: CssClasses::CARD,
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 8px;",
                    match variant {
                        Variant::Classic => rsx! {
                            h3 { class: CssClasses::CARD_TITLE, "Quiz Generated! 🎉" }
                            div {
                                style: "display: flex; gap: 8px;",
                                span { class: CssClasses::BADGE, "⏱️ 15 mins" }
                                span { class: CssClasses::BADGE, "{questions.len()} Questions" }
                            }
                        },
                        Variant::Enhanced => rsx! {
                            h3 { class: CssClasses::CARD_TITLE, "🎉 Your Personalized Quiz is Ready!" }
                            div {
                                style: "display: flex; gap: 8px;",
                                span { class: CssClasses::BADGE, "⏱️ {settings.time_limit_minutes} mins" }
                                span { class: CssClasses::BADGE, "{settings.question_count} Questions" }
                                span { class: CssClasses::BADGE, "{settings.difficulty.title()}" }
                            }
                        },
                    }
                }
                match variant {
                    Variant::Classic => rsx! {
                        p { style: "color: #4b5563;", "Based on your uploaded content: " strong { "{file}" } }
                    },
                    Variant::Enhanced => rsx! {
                        p { style: "color: #4b5563;", "Generated from: " strong { "{file}" } " • AI-powered content analysis" }
                    },
                }
            }

            for (index, question) in questions.iter().take(visible).enumerate() {
                QuestionCard {
                    key: "{index}",
                    heading: match variant {
                        Variant::Classic => format!("Question {}", index + 1),
                        Variant::Enhanced => format!("Question {} of {}", index + 1, settings.question_count),
                    },
                    question: question.clone(),
                    show_explanation: show_explanations,
                }
            }

            div {
                style: "text-align: center; display: flex; gap: 16px; justify-content: center;",
                button {
                    class: get_button_class("primary", false),
                    style: "font-size: 18px; padding: 14px 32px;",
                    onclick: start,
                    "{start_label}"
                }
                if variant == Variant::Enhanced {
                    button {
                        class: get_button_class("outline", false),
                        style: "font-size: 18px; padding: 14px 32px;",
                        onclick: move |_| show_all.set(true),
                        "Preview All Questions"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(heading: String, question: QuizQuestion, show_explanation: bool) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { class: CssClasses::CARD_TITLE, "{heading}" }
                span { class: get_difficulty_class(question.difficulty()), "{question.difficulty()}" }
            }
            p { style: "font-size: 18px; font-weight: 500;", "{question.prompt()}" }
            div {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                for (index, option) in question.options().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: get_button_class("outline", false),
                        style: "text-align: left; cursor: default;",
                        span { style: "font-weight: 700; color: #3b82f6; margin-right: 8px;", "{QuizQuestion::option_label(index)}." }
                        "{option}"
                    }
                }
            }
            if show_explanation {
                if let Some(explanation) = question.explanation() {
                    div {
                        style: "margin-top: 16px; background: #f0fdf4; padding: 16px; border-radius: 10px; border-left: 4px solid #10b981; font-size: 14px; color: #166534;",
                        strong { "Explanation: " }
                        "{explanation}"
                    }
                }
            }
        }
    }
}

/// クイズの解答画面
#[component]
fn QuizRunner(attempt: QuizAttempt, last_outcome: Option<AnswerOutcome>) -> Element {
    let handle = use_session();
    let total = attempt.questions().len();

    let restart_store = handle.store.clone();
    let restart = move |_| {
        if let Err(e) = restart_store.start_quiz() {
            tracing::warn!("⚠️ Could not restart quiz: {}", e);
        }
    };

    let feedback = last_outcome.map(|outcome| {
        let (style, headline) = if outcome.correct {
            (
                "background: #f0fdf4; border-left: 4px solid #10b981; color: #166534;",
                format!("✅ Correct! +{} points", outcome.points),
            )
        } else {
            (
                "background: #fef2f2; border-left: 4px solid #ef4444; color: #991b1b;",
                format!(
                    "❌ Not quite. The answer was {}.",
                    QuizQuestion::option_label(outcome.correct_index)
                ),
            )
        };
        rsx! {
            div {
                style: "padding: 16px; border-radius: 10px; {style}",
                p { style: "margin: 0; font-weight: 600;", "{headline}" }
                if let Some(explanation) = outcome.explanation {
                    p { style: "margin: 8px 0 0 0; font-size: 14px;", strong { "Explanation: " } "{explanation}" }
                }
            }
        }
    });

    let Some(question) = attempt.current().cloned() else {
        return rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                {feedback}
                div {
                    class: CssClasses::CARD,
                    style: "text-align: center;",
                    h3 { class: CssClasses::CARD_TITLE, style: "justify-content: center;", "🏁 Quiz Complete!" }
                    p { style: "font-size: 40px; font-weight: 800; margin: 8px 0;", "{attempt.score_percent()}%" }
                    p { style: "color: #4b5563;", "{attempt.correct_count()} of {total} correct" }
                    button { class: get_button_class("primary", false), onclick: restart, "Try Again 🔁" }
                }
            }
        };
    };

    let answer_store = handle.store.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            {feedback}
            div {
                class: CssClasses::CARD,
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h4 { class: CssClasses::CARD_TITLE, "Question {attempt.current_index() + 1} of {total}" }
                    span { class: get_difficulty_class(question.difficulty()), "{question.difficulty()}" }
                }
                p { style: "font-size: 18px; font-weight: 500;", "{question.prompt()}" }
                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                    for (index, option) in question.options().iter().enumerate() {
                        button {
                            key: "{index}",
                            class: get_button_class("outline", false),
                            style: "text-align: left;",
                            onclick: {
                                let store = answer_store.clone();
                                move |_| {
                                    if let Err(e) = store.answer_question(index) {
                                        tracing::warn!("⚠️ Answer rejected: {}", e);
                                    }
                                }
                            },
                            span { style: "font-weight: 700; color: #3b82f6; margin-right: 8px;", "{QuizQuestion::option_label(index)}." }
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}
