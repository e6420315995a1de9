use http::header::AUTHORIZATION;
use http::HeaderMap;
use http::Request;

/// Anything an `Authorization` header can be read from.
pub trait AuthorizationSource {
    /// Raw `Authorization` header value, if present and readable as text.
    fn authorization(&self) -> Option<&str>;
}

impl AuthorizationSource for HeaderMap {
    fn authorization(&self) -> Option<&str> {
        let value = self.get(AUTHORIZATION)?;

        match value.to_str() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!("Authorization header is not visible ASCII, ignoring");
                None
            }
        }
    }
}

impl<B> AuthorizationSource for Request<B> {
    fn authorization(&self) -> Option<&str> {
        self.headers().authorization()
    }
}

impl AuthorizationSource for Option<String> {
    fn authorization(&self) -> Option<&str> {
        self.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_header_map_authorization() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.authorization(), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));
        assert_eq!(headers.authorization(), Some("Token abc"));
    }

    #[test]
    fn test_header_map_opaque_value_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Token \xff").expect("obs-text is a valid header value"),
        );

        assert_eq!(headers.authorization(), None);
    }

    #[test]
    fn test_request_authorization() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Token token=\"abc\"")
            .body(())
            .expect("Failed to build request");

        assert_eq!(request.authorization(), Some("Token token=\"abc\""));
    }

    #[test]
    fn test_optional_string_authorization() {
        assert_eq!(Some("Token abc".to_string()).authorization(), Some("Token abc"));
        assert_eq!(None::<String>.authorization(), None);
    }
}
