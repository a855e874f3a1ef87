use crate::constants::prompts::{
    DEFAULT_LEVEL, DEFAULT_QUIZ_COUNT, DEFAULT_SUMMARY_POINTS, EXPLAIN_PROMPT_BODY, QUIZ_RULES,
    QUIZ_STRICT_FORMAT,
};

/// The three kinds of study request the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Explain,
    Summarize,
    Quiz,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Explain => "explain",
            PromptKind::Summarize => "summarize",
            PromptKind::Quiz => "quiz",
        }
    }
}

pub fn explain_prompt(topic: &str, level: Option<&str>) -> String {
    let level = level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LEVEL);

    format!(
        "Explain the topic \"{topic}\" in EXTREMELY DETAILED words for a {level} student.\n\n{EXPLAIN_PROMPT_BODY}"
    )
}

pub fn summarize_prompt(notes: &str, max_points: Option<u32>) -> String {
    let points = max_points.unwrap_or(DEFAULT_SUMMARY_POINTS);

    format!(
        "Summarize the following notes into:\n\n\
         1) A detailed 400-500 word structured summary.\n\
         2) {points} concise bullet takeaways at the end.\n\n\
         Use bold formatting for important terms.\n\n\
         Notes:\n{notes}"
    )
}

/// The strict format embedded here is what `quiz_parser` reads back.
pub fn quiz_prompt(source: &str, count: Option<u32>) -> String {
    let count = count.unwrap_or(DEFAULT_QUIZ_COUNT);

    format!(
        "Create exactly {count} multiple-choice questions based on the following content.\n\n\
         STRICT FORMAT:\n\n{QUIZ_STRICT_FORMAT}\n\n{QUIZ_RULES}\n\n\
         Content:\n{source}"
    )
}
