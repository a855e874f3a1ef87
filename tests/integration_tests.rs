use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use study_buddy_server::{
    app_state::AppState,
    config::Config,
    errors::CompletionError,
    handlers::{configure, json_config},
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    models::domain::{CompletionRequest, CompletionResult, OptionLabel},
    services::{completion_client::CompletionClient, quiz_parser},
};

const PHOTOSYNTHESIS_QUIZ: &str = "Q1: What pigment absorbs light?
A) Hemoglobin
B) Chlorophyll
C) Melanin
D) Keratin
Correct Answer: B
Detailed Explanation: Chlorophyll absorbs red and blue light.

Q2: Where do the light reactions occur?
A) Thylakoid membranes
B) Stroma
C) Mitochondria
D) Nucleus
Correct Answer: A
Detailed Explanation: The thylakoids hold the photosystems.

Q3: Which gas is released?
A) Nitrogen
B) Carbon dioxide
C) Oxygen
D) Methane
Correct Answer: C
Detailed Explanation: Splitting water releases oxygen.
";

/// Scripted completion backend that records what it was asked.
struct StubCompletionClient {
    reply: Result<String, CompletionError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletionClient {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: CompletionError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request);
        self.reply.clone().map(|text| CompletionResult { text })
    }
}

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "GROQ_API_KEY" => Some("integration-key".to_string()),
        _ => None,
    })
    .expect("config with api key should load")
}

macro_rules! init_app {
    ($client:expr) => {{
        let state = AppState::with_client(test_config(), $client.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(200 * 1024))
                .wrap(RequestIdMiddleware)
                .configure(configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn quiz_end_to_end_yields_three_parsed_questions() {
    let client = StubCompletionClient::replying(PHOTOSYNTHESIS_QUIZ);
    let app = init_app!(client);

    let req = test::TestRequest::post()
        .uri("/api/quiz")
        .set_json(json!({"source": "Photosynthesis", "count": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    let body: Value = test::read_body_json(resp).await;

    let raw = body["questions"].as_str().expect("questions should be a string");
    let questions = quiz_parser::parse(raw, 3);
    assert_eq!(questions.len(), 3);

    let labels: Vec<_> = questions.iter().map(|q| q.correct_label).collect();
    assert_eq!(
        labels,
        vec![Some(OptionLabel::B), Some(OptionLabel::A), Some(OptionLabel::C)]
    );
    assert_eq!(questions[0].explanation, "Chlorophyll absorbs red and blue light.");
    assert_eq!(questions[1].explanation, "The thylakoids hold the photosystems.");
    assert_eq!(questions[2].explanation, "Splitting water releases oxygen.");
    assert_eq!(body["parsed"].as_array().map(Vec::len), Some(3));

    assert_eq!(client.call_count(), 1);
    let requests = client.requests.lock().await;
    assert!(requests[0].user_prompt.contains("Create exactly 3 multiple-choice questions"));
    assert!(requests[0].user_prompt.ends_with("Photosynthesis"));
}

#[actix_web::test]
async fn explain_without_topic_is_rejected_before_upstream() {
    let client = StubCompletionClient::replying("unused");
    let app = init_app!(client);

    let req = test::TestRequest::post()
        .uri("/api/explain")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(client.call_count(), 0);
}

#[actix_web::test]
async fn summarize_upstream_503_surfaces_as_500() {
    let client = StubCompletionClient::failing(CompletionError::Upstream {
        status: 503,
        body: "{\"error\":\"overloaded\"}".to_string(),
    });
    let app = init_app!(client);

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .set_json(json!({"notes": "Cells divide by mitosis.", "maxPoints": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("503"));
    assert!(body.get("summary").is_none());
    assert_eq!(client.call_count(), 1);
}

#[actix_web::test]
async fn summarize_passes_point_count_into_prompt() {
    let client = StubCompletionClient::replying("- point one");
    let app = init_app!(client);

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .set_json(json!({"notes": "Cells divide by mitosis.", "maxPoints": 3}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["summary"], "- point one");
    let requests = client.requests.lock().await;
    assert!(requests[0].user_prompt.contains("3 concise bullet takeaways"));
}

#[actix_web::test]
async fn health_reports_api_key_without_upstream_call() {
    let client = StubCompletionClient::replying("unused");
    let app = init_app!(client);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["hasApiKey"], true);
    assert!(body["timestamp"].is_string());
    assert_eq!(client.call_count(), 0);
}

#[actix_web::test]
async fn parse_endpoint_respects_count() {
    let client = StubCompletionClient::replying("unused");
    let app = init_app!(client);

    let req = test::TestRequest::post()
        .uri("/api/quiz/parse")
        .set_json(json!({"questions": PHOTOSYNTHESIS_QUIZ, "count": 2}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let parsed = body["parsed"].as_array().unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1]["questionText"], "Where do the light reactions occur?");
    assert_eq!(client.call_count(), 0);
}
