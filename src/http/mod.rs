//! HTTP protocol layer module
//!
//! Response builders and query-string decoding, decoupled from the handlers.

pub mod query;
pub mod response;

// Re-export commonly used items
pub use query::Query;
pub use response::{
    build_404_response, build_bytes_response, build_error_response, build_html_response,
    build_json_response, build_text_response,
};
