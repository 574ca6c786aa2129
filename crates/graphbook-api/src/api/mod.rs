//! Per-service API adapters
//!
//! Each submodule groups the endpoints of one backend service as methods
//! on [`crate::ApiClient`], together with the wire DTOs they exchange.

pub mod documents;
pub mod kg;
pub mod llm;
pub mod qa;
pub mod search;
pub mod system;
