use std::future::Future;

use actix_cors::Cors;
use actix_web::{
    dev::ServiceResponse,
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::header::{self, HeaderValue},
    web, Error as ActixError, HttpRequest, HttpResponse,
};

use errors::Error;

pub mod categories;
pub mod questions;
pub mod quizzes;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(
            web::scope("/categories")
                .route("", web::get().to(categories::get_all))
                .route("/{id}/questions", web::get().to(categories::questions)),
        )
        .service(
            web::scope("/questions")
                .route("", web::get().to(questions::get_all))
                .service(
                    web::resource("/search")
                        .app_data(web::JsonConfig::default().error_handler(search_json_error))
                        .route(web::post().to(questions::search)),
                )
                .route("/{id}", web::delete().to(questions::delete)),
        )
        .service(
            web::resource("/add_questions")
                .app_data(web::JsonConfig::default().error_handler(create_json_error))
                .route(web::post().to(questions::create)),
        )
        .service(web::resource("/quizzes").route(web::post().to(quizzes::next)));
}

pub fn cors(client_host: Option<&str>) -> Cors {
    let cors = match client_host {
        Some(host) => Cors::default().allowed_origin(host),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}

/// Sets the access control headers the web client expects on every response,
/// overwriting whatever the CORS middleware wrote on preflight.
pub async fn access_control_headers<B, F>(res: F) -> Result<ServiceResponse<B>, ActixError>
where
    F: Future<Output = Result<ServiceResponse<B>, ActixError>>,
{
    let mut res = res.await?;
    let headers = res.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );

    Ok(res)
}

pub async fn not_found() -> Result<HttpResponse, Error> {
    Err(Error::NotFound("No such route".into()))
}

fn json_error(err: JsonPayloadError, _: &HttpRequest) -> ActixError {
    Error::BadRequest(err.to_string()).into()
}

// an unreadable search body is treated like a missing search term
fn search_json_error(err: JsonPayloadError, _: &HttpRequest) -> ActixError {
    Error::NotFound(err.to_string()).into()
}

fn create_json_error(err: JsonPayloadError, _: &HttpRequest) -> ActixError {
    Error::UnprocessableEntity(err.to_string()).into()
}

fn path_error(err: PathError, _: &HttpRequest) -> ActixError {
    Error::NotFound(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _: &HttpRequest) -> ActixError {
    Error::BadRequest(err.to_string()).into()
}
