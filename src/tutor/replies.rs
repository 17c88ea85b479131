//! 応答テーブルと応答選択エンジン
//!
//! 応答は固定テーブルからの一様ランダム選択で決まり、入力テキストの内容は
//! 「応答するかどうか」の判定（空白のみなら応答しない）にだけ使われる。
//! 乱数源は注入可能で、シードを固定すればテストで再現できる。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Mood, Role};
use crate::content::Variant;

/// 応答候補のプール
pub type ReplyPool = &'static [&'static str];

type MoodTable = &'static [(Mood, ReplyPool)];

const CLASSIC_REPLIES: MoodTable = &[
    (
        Mood::Happy,
        &[
            "That's a fantastic question! 😊 Let me help you with that!",
            "I love your enthusiasm! Here's what I think...",
            "Great thinking! Let me break this down for you in a fun way!",
        ],
    ),
    (
        Mood::Excited,
        &[
            "AMAZING question! 🚀 This is going to be so cool to explore!",
            "Your excitement is contagious! Let's dive deep into this!",
            "WOW! I can't wait to share what I know about this!",
        ],
    ),
    (
        Mood::Calm,
        &[
            "That's a thoughtful question 😌 Let me explain this peacefully...",
            "I appreciate your calm approach to learning. Here's my take...",
            "Let's explore this together at a comfortable pace...",
        ],
    ),
    (
        Mood::Curious,
        &[
            "Ooh, your curiosity is wonderful! 🤔 Let me satisfy that wonder...",
            "I love how you think! Here's something that might interest you...",
            "Your questions always make me think deeper! Here's what I've learned...",
        ],
    ),
    (
        Mood::Tired,
        &[
            "I'll keep this simple and clear for you 😴 Here's the main point...",
            "No worries, let me explain this in an easy way...",
            "Let's make this quick and helpful - here's what you need to know...",
        ],
    ),
    (
        Mood::Confused,
        &[
            "Let me clear that up for you! 💡 Step by step...",
            "I understand the confusion - let me explain this differently...",
            "Don't worry, this is actually simpler than it seems! Here's how...",
        ],
    ),
];

const ENHANCED_STUDENT_REPLIES: MoodTable = &[
    (
        Mood::Happy,
        &[
            "That's such a wonderful question! 😊 Let me help you understand this in the most fun way possible!",
            "I love your enthusiasm! Here's what I think, and I bet you'll find it super interesting!",
            "Great thinking! Let me break this down into bite-sized, delicious pieces of knowledge!",
        ],
    ),
    (
        Mood::Excited,
        &[
            "AMAZING question! 🚀 This is going to blow your mind - are you ready for some serious brain fireworks?",
            "Your excitement is absolutely contagious! Let's dive into this like explorers discovering treasure!",
            "WOW! I can practically see your brain growing! Here's the incredible answer you're looking for!",
        ],
    ),
    (
        Mood::Calm,
        &[
            "That's a very thoughtful question 😌 Let me explain this gently and clearly...",
            "I appreciate your calm, focused approach. Here's my peaceful explanation...",
            "Let's explore this together like a quiet walk through a garden of knowledge...",
        ],
    ),
    (
        Mood::Curious,
        &[
            "Your curiosity makes my circuits sparkle! ✨ Here's something that will feed that wonderful wondering mind...",
            "I LOVE how your brain works! Let me share something that might make you even more curious...",
            "Questions like yours are why I love being an AI teacher! Here's the fascinating answer...",
        ],
    ),
];

const ENHANCED_TEACHER_REPLIES: MoodTable = &[(
    Mood::Happy,
    &[
        "Excellent question! Here's a comprehensive answer that might help with your curriculum planning.",
        "I'm happy to help! This information should be useful for your teaching objectives.",
        "Great to assist a fellow educator! Here's what I recommend based on best practices.",
    ],
)];

type GreetingTable = &'static [(Mood, &'static str)];

const CLASSIC_GREETINGS: GreetingTable = &[
    (Mood::Happy, "Hi there! 😊 I'm so happy to see you! What would you like to learn about today?"),
    (
        Mood::Excited,
        "WOW! 🤩 You seem excited and I LOVE that energy! What amazing topic should we explore?",
    ),
    (
        Mood::Calm,
        "Hello, my friend 😌 I can sense you're feeling peaceful today. Let's learn something interesting together, shall we?",
    ),
    (
        Mood::Curious,
        "Ooh, I can see that curious spark in you! 🤔 What's got you wondering today? I'm here to help explore!",
    ),
    (
        Mood::Tired,
        "Hey there 😴 Feeling a bit tired? That's okay! Let's take it easy and learn something fun without any pressure.",
    ),
    (
        Mood::Confused,
        "Hi! 😕 I can help clear things up for you. What's been puzzling you? Let's work through it step by step!",
    ),
];

const ENHANCED_STUDENT_GREETINGS: GreetingTable = &[
    (
        Mood::Happy,
        "Hi there, bright learner! 😊 I'm your AI study buddy and I'm SO excited to help you learn amazing things today!",
    ),
    (
        Mood::Excited,
        "WOW! 🤩 Your energy is incredible! I can't wait to explore the most fascinating topics with you!",
    ),
    (
        Mood::Calm,
        "Hello, my peaceful friend 😌 I sense your calm energy. Let's learn something beautiful together at your own pace.",
    ),
    (
        Mood::Curious,
        "Ooh, I can see that wonderful curiosity in you! 🤔 What mysteries of the world shall we uncover today?",
    ),
    (
        Mood::Tired,
        "Hey there, sleepy scholar 😴 No worries, we'll take it nice and easy. Learning can be gentle and fun!",
    ),
    (
        Mood::Confused,
        "Hi! 😕 I'm here to help clear up any confusion. We'll work through everything step by step together!",
    ),
];

const ENHANCED_TEACHER_GREETINGS: GreetingTable = &[
    (
        Mood::Happy,
        "Hello, dedicated educator! 😊 I'm here to help you create engaging content and track student progress.",
    ),
    (
        Mood::Excited,
        "Fantastic to meet you! 🤩 Let's create some amazing learning experiences for your students!",
    ),
    (
        Mood::Calm,
        "Welcome, thoughtful teacher 😌 I'm ready to assist you with curriculum planning and student analytics.",
    ),
    (
        Mood::Curious,
        "Great to see your curiosity! 🤔 Let me help you discover new ways to engage your students.",
    ),
    (
        Mood::Tired,
        "Hello! 😴 I understand teaching can be exhausting. Let me help lighten your workload.",
    ),
    (
        Mood::Confused,
        "Hi there! 😕 I'm here to help you navigate the platform and answer any questions you have.",
    ),
];

const CLASSIC_QUICK_QUESTIONS: &[&str] = &[
    "Help me understand this topic",
    "Create a quiz for me",
    "Explain this concept simply",
    "What should I study next?",
    "I'm feeling stuck",
];

const STUDENT_QUICK_QUESTIONS: &[&str] = &[
    "Help me understand this topic better",
    "Create a fun quiz for me",
    "Explain this concept simply",
    "What should I study next?",
    "I'm feeling stuck, help!",
    "Make learning fun!",
];

const EDUCATOR_QUICK_QUESTIONS: &[&str] = &[
    "Create assignment templates",
    "Generate progress reports",
    "Suggest teaching strategies",
    "Help with curriculum planning",
    "Student engagement tips",
];

fn lookup<T: Copy>(table: &'static [(Mood, T)], mood: Mood) -> Option<T> {
    table
        .iter()
        .find_map(|(key, value)| (*key == mood).then_some(*value))
}

/// ユーザー種別ごとの応答テーブル（未定義なら None）
fn reply_table(variant: Variant, role: Role) -> Option<MoodTable> {
    match (variant, role) {
        (Variant::Classic, _) => Some(CLASSIC_REPLIES),
        (Variant::Enhanced, Role::Student) => Some(ENHANCED_STUDENT_REPLIES),
        (Variant::Enhanced, Role::Teacher) => Some(ENHANCED_TEACHER_REPLIES),
        (Variant::Enhanced, Role::Admin) => None,
    }
}

fn greeting_table(variant: Variant, role: Role) -> Option<GreetingTable> {
    match (variant, role) {
        (Variant::Classic, _) => Some(CLASSIC_GREETINGS),
        (Variant::Enhanced, Role::Student) => Some(ENHANCED_STUDENT_GREETINGS),
        (Variant::Enhanced, Role::Teacher) => Some(ENHANCED_TEACHER_GREETINGS),
        (Variant::Enhanced, Role::Admin) => None,
    }
}

/// 応答候補を解決する
///
/// ユーザー種別が未定義なら Student、気分が未定義なら Happy にフォールバックする。
pub fn candidates(variant: Variant, role: Role, mood: Mood) -> ReplyPool {
    let table = reply_table(variant, role)
        .or_else(|| reply_table(variant, Role::Student))
        .unwrap_or(CLASSIC_REPLIES);

    lookup(table, mood)
        .or_else(|| lookup(table, Mood::Happy))
        .unwrap_or(&[])
}

/// 会話開始時の挨拶
pub fn greeting(variant: Variant, role: Role, mood: Mood) -> &'static str {
    let table = greeting_table(variant, role)
        .or_else(|| greeting_table(variant, Role::Student))
        .unwrap_or(CLASSIC_GREETINGS);

    lookup(table, mood)
        .or_else(|| lookup(table, Mood::Happy))
        .unwrap_or("Hello! I'm your AI study buddy! What would you like to learn about today?")
}

/// 入力欄の下に並べるクイック質問
pub fn quick_questions(variant: Variant, role: Role) -> &'static [&'static str] {
    match (variant, role) {
        (Variant::Classic, _) => CLASSIC_QUICK_QUESTIONS,
        (Variant::Enhanced, Role::Student) => STUDENT_QUICK_QUESTIONS,
        (Variant::Enhanced, Role::Teacher | Role::Admin) => EDUCATOR_QUICK_QUESTIONS,
    }
}

/// 応答選択エンジン
#[derive(Debug)]
pub struct ReplyEngine {
    variant: Variant,
    rng: StdRng,
}

impl ReplyEngine {
    /// エントロピーから乱数源を初期化
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            rng: StdRng::from_entropy(),
        }
    }

    /// シード固定の乱数源で初期化（再現可能）
    pub fn with_seed(variant: Variant, seed: u64) -> Self {
        Self::with_rng(variant, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(variant: Variant, rng: StdRng) -> Self {
        Self { variant, rng }
    }

    /// 設定のシード有無に応じて初期化
    pub fn from_seed_option(variant: Variant, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(variant, seed),
            None => Self::new(variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn candidates(&self, role: Role, mood: Mood) -> ReplyPool {
        candidates(self.variant, role, mood)
    }

    pub fn greeting(&self, role: Role, mood: Mood) -> &'static str {
        greeting(self.variant, role, mood)
    }

    /// 応答を生成する
    ///
    /// 空白のみの入力には None を返す。
    pub fn generate_reply(&mut self, role: Role, mood: Mood, text: &str) -> Option<&'static str> {
        if text.trim().is_empty() {
            return None;
        }

        let reply = self.candidates(role, mood).choose(&mut self.rng).copied();

        tracing::debug!(
            role = %role,
            mood = %mood,
            input_length = text.len(),
            "🤖 Reply selected"
        );

        reply
    }
}
