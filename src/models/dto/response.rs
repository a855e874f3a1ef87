use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{OptionLabel, QuizOption, QuizQuestion},
    services::quiz_parser,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub timestamp: DateTime<Utc>,
    pub has_api_key: bool,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub topic: String,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDto {
    pub question_text: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
    pub correct_label: Option<OptionLabel>,
    pub explanation: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<QuizQuestion> for QuizQuestionDto {
    fn from(question: QuizQuestion) -> Self {
        let warnings = quiz_parser::lint(&question)
            .iter()
            .map(ToString::to_string)
            .collect();

        QuizQuestionDto {
            question_text: question.question_text,
            options: question.options,
            correct_answer: question.correct_answer,
            correct_label: question.correct_label,
            explanation: question.explanation,
            warnings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// Raw model output, kept for clients that parse it themselves.
    pub questions: String,
    pub parsed: Vec<QuizQuestionDto>,
}

#[derive(Debug, Serialize)]
pub struct ParsedQuizResponse {
    pub parsed: Vec<QuizQuestionDto>,
}
