pub mod completion_client;
pub mod prompt_builder;
pub mod quiz_parser;
pub mod study_service;
