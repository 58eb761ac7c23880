use crate::application::TestGenerationUseCase;
use crate::domain::error::{AppError, ErrorBody};
use crate::domain::test_request::GenerateRequest;
use crate::domain::test_suite::SuiteCategory;
use crate::infrastructure::config::ServerConfig;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{header, Method};
use actix_web::{get, web, App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub generate_use_case: Arc<TestGenerationUseCase>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

async fn generate(data: web::Data<HttpState>, req: web::Json<GenerateRequest>) -> HttpResponse {
    let request_id = Uuid::new_v4();
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Generating test cases (request_id={} language={})",
            request_id,
            req.language_hint().unwrap_or("-")
        ),
    );

    match data.generate_use_case.execute(&req).await {
        Ok(document) => {
            let counts: Vec<String> = SuiteCategory::ALL
                .iter()
                .map(|category| format!("{}={}", category.id(), document.cases(*category).len()))
                .collect();
            add_log(
                &data.logs,
                "INFO",
                "HttpApi",
                &format!(
                    "Test cases generated (request_id={} {})",
                    request_id,
                    counts.join(" ")
                ),
            );
            HttpResponse::Ok().json(document)
        }
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Generation failed (request_id={}): {}", request_id, e),
            );
            e.error_response()
        }
    }
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody {
        error: "Method Not Allowed".to_string(),
    })
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    match data.logs.lock() {
        Ok(logs) => HttpResponse::Ok().json(&*logs),
        Err(_) => AppError::Internal("Log buffer is unavailable".to_string()).error_response(),
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorBody {
        error: format!("Invalid request body: {}", err),
    };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/generate")
                        .route(web::post().to(generate))
                        .route(web::method(Method::OPTIONS).to(preflight))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(get_logs)
                .service(health),
        );
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    match level {
        "ERROR" => tracing::error!(source, "{}", message),
        "WARN" => tracing::warn!(source, "{}", message),
        _ => tracing::info!(source, "{}", message),
    }

    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    // A poisoned buffer only loses the in-app feed; tracing already has the line.
    if let Ok(mut logs) = logs.lock() {
        logs.push(entry);
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    }
}

pub fn start_server(
    state: web::Data<HttpState>,
    server_config: &ServerConfig,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run();

    Ok(server)
}
