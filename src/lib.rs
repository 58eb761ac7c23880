mod application;
mod domain;
mod infrastructure;
mod interfaces;
mod shared;

pub mod app;

pub use application::TestGenerationUseCase;
pub use domain::error::{AppError, ErrorBody, Result};
pub use domain::test_request::GenerateRequest;
pub use domain::test_suite::{SuiteCategory, TestCase, TestSuiteDocument, EMPTY_CATEGORY_MESSAGE};
pub use shared::json_extract::extract_balanced_json;
