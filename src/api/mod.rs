//! HTTP API module for the timecard parsing engine.
//!
//! This module provides the REST endpoint through which a request handler
//! consumes the parser: extracted timecard text in, parsed pay period plus
//! derived pay figures out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ParseRequest;
pub use response::{ApiError, ParseResponse};
pub use state::AppState;
