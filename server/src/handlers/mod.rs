//! Handlers Layer
//!
//! HTTP handlers that bridge API clients to the repositories.

mod error;
mod skill_handlers;

pub use error::{ApiError, ApiResult};
pub use skill_handlers::*;
