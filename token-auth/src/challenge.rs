use http::StatusCode;

use crate::response::ResponseSink;

/// Header carrying the challenge.
pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";

/// Realm used when the caller does not name one.
pub const DEFAULT_REALM: &str = "Application";

/// Body written with every challenge.
pub const ACCESS_DENIED_BODY: &str = "HTTP Basic: Access denied.\n";

/// The 401 response that asks a client to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResponse {
    realm: String,
}

impl ChallengeResponse {
    pub fn new(realm: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
        }
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// `WWW-Authenticate` header value, e.g. `Basic realm="Application"`.
    pub fn header_value(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub fn body(&self) -> &'static str {
        ACCESS_DENIED_BODY
    }

    /// Write the challenge to a sink: header, status, then body.
    pub fn apply<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        sink.set_header(WWW_AUTHENTICATE, &self.header_value());
        sink.set_status(self.status());
        sink.send(self.body());
    }
}

impl Default for ChallengeResponse {
    fn default() -> Self {
        Self::new(DEFAULT_REALM)
    }
}
