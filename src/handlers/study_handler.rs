use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{ExplainRequest, ParseQuizRequest, QuizRequest, SummarizeRequest},
        response::{ExplainResponse, ParsedQuizResponse, QuizQuestionDto, QuizResponse, SummaryResponse},
    },
    services::quiz_parser::{self, DEFAULT_MAX_QUESTIONS},
};

fn log_failure(req: &HttpRequest, operation: &str, err: AppError) -> AppError {
    log::warn!("[{}] {} failed: {}", get_request_id(req), operation, err);
    err
}

fn parse_and_lint(raw: &str, count: Option<u32>, request_id: &str) -> Vec<QuizQuestionDto> {
    let max_questions = count.map_or(DEFAULT_MAX_QUESTIONS, |c| c as usize);

    quiz_parser::parse(raw, max_questions)
        .into_iter()
        .enumerate()
        .map(|(i, question)| {
            let dto = QuizQuestionDto::from(question);
            for warning in &dto.warnings {
                log::warn!("[{}] quiz question {}: {}", request_id, i + 1, warning);
            }
            dto
        })
        .collect()
}

#[post("/api/explain")]
pub async fn explain(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<ExplainRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(|e| log_failure(&req, "explain", e.into()))?;

    let result = state
        .study_service
        .explain(&request.topic, request.level.as_deref())
        .await
        .map_err(|e| log_failure(&req, "explain", e))?;

    Ok(HttpResponse::Ok().json(ExplainResponse {
        topic: request.topic,
        result,
    }))
}

#[post("/api/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(|e| log_failure(&req, "summarize", e.into()))?;

    let summary = state
        .study_service
        .summarize(&request.notes, request.max_points)
        .await
        .map_err(|e| log_failure(&req, "summarize", e))?;

    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

#[post("/api/quiz")]
pub async fn quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(|e| log_failure(&req, "quiz", e.into()))?;

    let questions = state
        .study_service
        .quiz(&request.source, request.count)
        .await
        .map_err(|e| log_failure(&req, "quiz", e))?;

    let parsed = parse_and_lint(&questions, request.count, &get_request_id(&req));
    Ok(HttpResponse::Ok().json(QuizResponse { questions, parsed }))
}

#[post("/api/quiz/parse")]
pub async fn parse_quiz(
    req: HttpRequest,
    request: web::Json<ParseQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(|e| log_failure(&req, "quiz parse", e.into()))?;

    let parsed = parse_and_lint(&request.questions, request.count, &get_request_id(&req));
    Ok(HttpResponse::Ok().json(ParsedQuizResponse { parsed }))
}
