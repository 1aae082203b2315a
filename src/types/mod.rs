//! Request and response types for the HTTP surface

pub mod query;
pub mod response;

pub use query::{AddParams, QueryParams};
pub use response::{AddResponse, HealthResponse, QueryResponse};
