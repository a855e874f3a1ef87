use actix_web::{middleware::Logger, web, App, HttpServer};

use study_buddy_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure, json_config},
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    log::info!("{}", config.describe());

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = web::Data::new(AppState::new(config));

    log::info!("Starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(state.config.json_body_limit))
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
