pub mod ai_provider_error;
pub mod audit_provider_error;
pub mod commands;
pub mod score_rating;
