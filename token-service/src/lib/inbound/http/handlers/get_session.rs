use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;
use token_auth::TokenOptions;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedToken;

/// Echo the credentials the token middleware accepted.
pub async fn get_session(
    Extension(authenticated): Extension<AuthenticatedToken>,
) -> ApiSuccess<GetSessionResponseData> {
    ApiSuccess::new(StatusCode::OK, authenticated.into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetSessionResponseData {
    pub token: String,
    pub options: TokenOptions,
}

impl From<AuthenticatedToken> for GetSessionResponseData {
    fn from(authenticated: AuthenticatedToken) -> Self {
        Self {
            token: authenticated.token,
            options: authenticated.options,
        }
    }
}
