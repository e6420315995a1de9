use http::HeaderName;
use http::HeaderValue;
use http::Response;
use http::StatusCode;

/// Destination for a challenge response.
///
/// Calls arrive in a fixed order: header, status, then body.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: StatusCode);

    fn send(&mut self, body: &str);
}

impl ResponseSink for Response<String> {
    fn set_header(&mut self, name: &str, value: &str) {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(header = %name, error = %e, "Skipping invalid header name");
                return;
            }
        };

        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers_mut().insert(name, value);
            }
            Err(e) => {
                tracing::warn!(header = %name, error = %e, "Skipping invalid header value");
            }
        }
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn send(&mut self, body: &str) {
        *self.body_mut() = body.to_string();
    }
}
