pub mod chat_service;
pub mod fact_service;
pub mod lenient_json;
pub mod model_service;
pub mod question_service;
pub mod response_sanitizer;
pub mod topic_rotator;
