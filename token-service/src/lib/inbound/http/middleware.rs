use axum::extract::Request;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::http::Response as HttpResponse;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use token_auth::AuthenticationError;
use token_auth::ParsedAuthentication;
use token_auth::TokenAuthenticator;
use token_auth::TokenOptions;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the accepted token in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedToken {
    pub token: String,
    pub options: TokenOptions,
}

impl From<ParsedAuthentication> for AuthenticatedToken {
    fn from(parsed: ParsedAuthentication) -> Self {
        Self {
            token: parsed.token,
            options: parsed.options,
        }
    }
}

/// Middleware that requires a Token `Authorization` header.
///
/// Requests without one get the challenge response for the configured realm.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let mut challenge = HttpResponse::new(String::new());
    let mut outcome = None;

    TokenAuthenticator::new(req.headers(), Some(&mut challenge))
        .authenticate_or_challenge_with_realm(&state.realm, |result| outcome = Some(result));

    match outcome {
        Some(Ok(parsed)) => {
            tracing::debug!(
                options = parsed.options.len(),
                "Token authentication succeeded"
            );
            req.extensions_mut().insert(AuthenticatedToken::from(parsed));
            Ok(next.run(req).await)
        }
        Some(Err(AuthenticationError::AccessDenied)) => {
            tracing::warn!(
                realm = %state.realm,
                uri = %req.uri(),
                "Token authentication failed"
            );
            challenge.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
            Err(challenge.into_response())
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "Token authentication could not run");
            Err(ApiError::from(e).into_response())
        }
        None => {
            tracing::error!("Token authentication returned without a result");
            Err(
                ApiError::InternalServerError("Authentication did not complete".to_string())
                    .into_response(),
            )
        }
    }
}
