//! Utility modules supporting research operations.

mod http;

pub use http::HttpClient;
