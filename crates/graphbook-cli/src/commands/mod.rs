//! CLI command implementations

pub mod auth;
pub mod documents;
pub mod kg;
pub mod llm;
pub mod qa;
pub mod search;
pub mod status;
