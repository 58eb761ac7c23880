mod hashing;
mod llm_output;
mod prompts;

use crate::domain::error::{AppError, Result};
use crate::domain::test_request::GenerateRequest;
use crate::domain::test_suite::{SuiteCategory, TestSuiteDocument};
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::preview_text;
use std::sync::Arc;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use hashing::prompt_digest;
use llm_output::parse_test_suite;
use prompts::{build_system_prompt, build_user_prompt};

pub struct TestGenerationUseCase {
    config_service: Arc<ConfigService>,
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl TestGenerationUseCase {
    pub fn new(
        config_service: Arc<ConfigService>,
        llm_client: Arc<dyn LLMClient + Send + Sync>,
    ) -> Self {
        Self {
            config_service,
            llm_client,
        }
    }

    pub async fn execute(&self, request: &GenerateRequest) -> Result<TestSuiteDocument> {
        request
            .validate()
            .map_err(|errors| AppError::ValidationError(validation_message(&errors)))?;

        let config = self.config_service.llm_config()?;
        let system_prompt = build_system_prompt(self.config_service.response_language());
        let user_prompt = build_user_prompt(&request.feature_description, request.language_hint());
        let digest = prompt_digest(&config.model, &system_prompt, &user_prompt);

        info!(
            model = %config.model,
            prompt_digest = %digest,
            language = request.language_hint().unwrap_or("-"),
            "Requesting test cases"
        );

        let raw_output = self
            .llm_client
            .generate(&config, &system_prompt, &user_prompt)
            .await?;

        let document = parse_test_suite(&raw_output).map_err(|err| {
            error!(
                prompt_digest = %digest,
                error = %err,
                output_preview = %preview_text(&raw_output, 200),
                "Model response could not be turned into test cases"
            );
            err
        })?;

        info!(
            prompt_digest = %digest,
            unit = document.cases(SuiteCategory::Unit).len(),
            integration = document.cases(SuiteCategory::Integration).len(),
            e2e = document.cases(SuiteCategory::E2e).len(),
            "Generated test cases"
        );

        Ok(document)
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| "Invalid request.".to_string())
}
