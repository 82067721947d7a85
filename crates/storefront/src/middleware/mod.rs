//! Request middleware and extractors.

pub mod admin;
pub mod rate_limit;
pub mod request_id;

pub use admin::RequireAdmin;
pub use request_id::request_id_middleware;
