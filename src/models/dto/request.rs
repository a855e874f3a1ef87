use serde::Deserialize;
use validator::Validate;

// Missing string fields deserialize to "" so both cases fail the same length check.

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ExplainRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing topic"))]
    pub topic: String,

    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing notes"))]
    pub notes: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "maxPoints must be between 1 and 20"))]
    pub max_points: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing source"))]
    pub source: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "count must be between 1 and 20"))]
    pub count: Option<u32>,
}

/// Parse quiz text the client already holds, without calling the model.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ParseQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing questions"))]
    pub questions: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "count must be between 1 and 20"))]
    pub count: Option<u32>,
}
