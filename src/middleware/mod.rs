pub mod cors;
pub mod host;
pub mod request_id;

pub use cors::cors_layer;
pub use host::host_allowlist;
pub use request_id::{request_id, request_logging};
