//! Token authentication library
//!
//! Parses the HTTP `Token` authentication scheme and decides whether a
//! request is authenticated or must be challenged:
//! - Header tokenizing (`Token token="...", key="value"`)
//! - Token and option extraction
//! - 401 challenge responses
//!
//! Requests and responses are reached through the [`AuthorizationSource`] and
//! [`ResponseSink`] traits, implemented for the `http` crate's types.
//!
//! # Examples
//!
//! ## Tokenizing a header
//! ```
//! use token_auth::header::tokenize;
//! use token_auth::ParamPair;
//!
//! let pairs = tokenize("Token abc123; nonce=\"42\"");
//! assert_eq!(pairs[0], ParamPair::new("token", "abc123"));
//! assert_eq!(pairs[1], ParamPair::new("nonce", "42"));
//! ```
//!
//! ## Authenticate or challenge
//! ```
//! use http::header::AUTHORIZATION;
//! use http::HeaderMap;
//! use http::Response;
//! use http::StatusCode;
//! use token_auth::TokenAuthenticator;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
//!
//! let mut response = Response::new(String::new());
//! let mut outcome = None;
//! TokenAuthenticator::new(&headers, Some(&mut response))
//!     .authenticate_or_challenge_with_realm("Admin", |result| outcome = Some(result));
//!
//! assert!(outcome.unwrap().is_err());
//! assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
//! assert_eq!(response.headers()["www-authenticate"], "Basic realm=\"Admin\"");
//! ```

pub mod authenticator;
pub mod challenge;
pub mod credentials;
pub mod errors;
pub mod header;
pub mod request;
pub mod response;

// Re-export commonly used items
pub use authenticator::AuthenticationOutcome;
pub use authenticator::TokenAuthenticator;
pub use challenge::ChallengeResponse;
pub use challenge::DEFAULT_REALM;
pub use credentials::ParsedAuthentication;
pub use credentials::TokenOptions;
pub use errors::AuthenticationError;
pub use header::ParamPair;
pub use request::AuthorizationSource;
pub use response::ResponseSink;
