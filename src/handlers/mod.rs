pub mod health_handler;
pub mod study_handler;

use actix_web::{guard, web};

use crate::errors::AppError;

pub use health_handler::{health_check, index, preflight};
pub use study_handler::{explain, parse_quiz, quiz, summarize};

/// Registers every route on an app or scope. The `OPTIONS` catch-all goes last.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .service(explain)
        .service(summarize)
        .service(quiz)
        .service(parse_quiz)
        .service(
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(preflight),
        );
}

/// JSON extractor settings; body errors come back as `{error, code}` 400s.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::from(err).into())
}
