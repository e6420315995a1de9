pub mod config;
pub mod inbound;

pub use inbound::http::middleware::AuthenticatedToken;
