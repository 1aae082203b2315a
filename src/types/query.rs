//! Query-parameter request shapes
//!
//! Both endpoints take their input as URL query parameters; a missing
//! required field is rejected by the extractor before the handler runs.

use serde::Deserialize;

/// Parameters for `POST /query`
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// The natural-language question
    pub q: String,
}

/// Parameters for `POST /add`
#[derive(Debug, Deserialize)]
pub struct AddParams {
    /// Raw text to store as a new document
    pub text: String,
}
