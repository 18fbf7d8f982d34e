use actix_web::error::{self as actix_error, JsonPayloadError, PathError};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;
mod blog_post;
mod blogs;
mod config;
mod db;
mod error;
#[cfg(test)]
mod test_helper;
use config::Config;
use db::PostDatabase;
use error::ApiError;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_error::Error {
    let detail = err.to_string();
    let resp = match &err {
        JsonPayloadError::ContentType => {
            HttpResponse::UnsupportedMediaType().json(ApiError::new(detail))
        }
        _ => HttpResponse::BadRequest().json(ApiError::new(detail)),
    };
    actix_error::InternalError::from_response(err, resp).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_error::Error {
    let resp = HttpResponse::BadRequest().json(ApiError::new("malformatted id"));
    actix_error::InternalError::from_response(err, resp).into()
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blogs::list_blogs)
        .service(blogs::create_blog)
        .service(blogs::get_blog)
        .service(blogs::update_blog)
        .service(blogs::delete_blog)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .default_service(web::route().to(blogs::unknown_endpoint));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = PostDatabase::create(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;
    let db = web::Data::new(db);

    tracing::info!("Server running on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(db.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
