pub mod cors;
pub mod endpoint;
pub mod response;

pub use endpoint::{serve_dashboard, serve_flow};
pub use response::{error_response, json_response};
