pub mod error;
pub mod llm_config;
pub mod test_request;
pub mod test_suite;
