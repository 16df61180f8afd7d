use actix_web::{middleware::Logger, web, App, HttpServer};

use handout_viewer::{app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to initialize application: {}", err);
            return Err(std::io::Error::other(err.to_string()));
        }
    };

    log::info!("Starting handout viewer on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
