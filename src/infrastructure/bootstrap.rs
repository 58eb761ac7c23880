use std::sync::{Arc, Mutex};

use actix_web::web;
use tracing::info;

use crate::application::TestGenerationUseCase;
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::interfaces::http::{add_log, HttpState, LogEntry};

pub fn setup(config: AppConfig) -> web::Data<HttpState> {
    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));

    let config_service = Arc::new(ConfigService::new(config));
    report_credentials(&config_service, &logs);

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new(
        config_service.config().llm.timeout_secs,
    ));
    let generate_use_case = Arc::new(TestGenerationUseCase::new(
        config_service.clone(),
        llm_client,
    ));

    info!(
        model = %config_service.config().llm.model,
        response_language = %config_service.response_language(),
        "Test generation ready"
    );

    web::Data::new(HttpState {
        generate_use_case,
        logs,
    })
}

// The key is re-resolved per request; this only tells the operator early.
fn report_credentials(config_service: &ConfigService, logs: &Arc<Mutex<Vec<LogEntry>>>) {
    match config_service.resolve_api_key() {
        Ok(_) => add_log(logs, "INFO", "Config", "Gemini API key found"),
        Err(err) => add_log(
            logs,
            "WARN",
            "Config",
            &format!("{} Requests will fail until it is set.", err),
        ),
    }
}
