use crate::challenge::ChallengeResponse;
use crate::challenge::DEFAULT_REALM;
use crate::credentials::ParsedAuthentication;
use crate::errors::AuthenticationError;
use crate::header::has_token_scheme;
use crate::header::tokenize;
use crate::request::AuthorizationSource;
use crate::response::ResponseSink;

/// Value handed to the completion handler.
pub type AuthenticationOutcome = Result<ParsedAuthentication, AuthenticationError>;

/// Token authentication coordinator for a single request.
///
/// Reads the `Authorization` header from the request and, when asked to,
/// writes a 401 challenge to the response. Every entry point that takes a
/// completion handler calls it exactly once before returning.
pub struct TokenAuthenticator<'a, R: ?Sized, S: ?Sized> {
    request: &'a R,
    response: Option<&'a mut S>,
}

impl<'a, R> TokenAuthenticator<'a, R, dyn ResponseSink + 'a>
where
    R: AuthorizationSource + ?Sized,
{
    /// Create an authenticator with nowhere to send a challenge.
    ///
    /// Only `extract_token` and `authenticate` are useful on the result;
    /// the challenge entry points report `MissingResponseSink`.
    pub fn without_response(request: &'a R) -> Self {
        Self {
            request,
            response: None,
        }
    }
}

impl<'a, R, S> TokenAuthenticator<'a, R, S>
where
    R: AuthorizationSource + ?Sized,
    S: ResponseSink + ?Sized,
{
    /// Create an authenticator for one request/response exchange.
    ///
    /// # Arguments
    /// * `request` - Source of the `Authorization` header
    /// * `response` - Sink for a challenge, if the caller has one
    pub fn new(request: &'a R, response: Option<&'a mut S>) -> Self {
        Self { request, response }
    }

    /// Parse the token and options from the `Authorization` header.
    ///
    /// # Returns
    /// `None` when the header is missing or does not use the Token scheme.
    /// A header with an empty token still parses, with `token` set to `""`.
    pub fn extract_token(&self) -> Option<ParsedAuthentication> {
        let header = self.request.authorization()?;

        if !has_token_scheme(header) {
            tracing::debug!("Authorization header does not use the Token scheme");
            return None;
        }

        Some(ParsedAuthentication::from_pairs(tokenize(header)))
    }

    /// Authenticate the request and report through `on_result`.
    ///
    /// # Arguments
    /// * `on_result` - Completion handler
    /// * `fail_on_missing` - Report `TokenNotFound` to `on_result` when no token is present
    ///
    /// # Returns
    /// True if a non-empty token was found. When false and `fail_on_missing`
    /// is off, `on_result` is not called.
    pub fn authenticate<F>(&self, on_result: F, fail_on_missing: bool) -> bool
    where
        F: FnOnce(AuthenticationOutcome),
    {
        match self.authenticated() {
            Some(parsed) => {
                on_result(Ok(parsed));
                true
            }
            None => {
                if fail_on_missing {
                    on_result(Err(AuthenticationError::TokenNotFound));
                }
                false
            }
        }
    }

    /// Authenticate the request or challenge it in the default realm.
    pub fn authenticate_or_challenge<F>(&mut self, on_result: F)
    where
        F: FnOnce(AuthenticationOutcome),
    {
        self.authenticate_or_challenge_with_realm(DEFAULT_REALM, on_result)
    }

    /// Authenticate the request, or send a 401 challenge for `realm`.
    ///
    /// # Arguments
    /// * `realm` - Protection space echoed in `WWW-Authenticate`
    /// * `on_result` - Completion handler
    ///
    /// # Errors
    /// Delivered through `on_result`:
    /// * `MissingResponseSink` - No response was supplied; nothing is written
    /// * `AccessDenied` - No usable token; the challenge has been written
    pub fn authenticate_or_challenge_with_realm<F>(&mut self, realm: &str, on_result: F)
    where
        F: FnOnce(AuthenticationOutcome),
    {
        if self.response.is_none() {
            tracing::warn!("Token authentication challenge requested without a response");
            on_result(Err(AuthenticationError::MissingResponseSink));
            return;
        }

        if let Some(parsed) = self.authenticated() {
            on_result(Ok(parsed));
            return;
        }

        let error = match self.request_token_authentication(realm) {
            Ok(()) => AuthenticationError::AccessDenied,
            Err(e) => e,
        };
        on_result(Err(error));
    }

    /// Write a 401 challenge for `realm` to the response.
    ///
    /// # Errors
    /// * `MissingResponseSink` - No response was supplied
    pub fn request_token_authentication(
        &mut self,
        realm: &str,
    ) -> Result<(), AuthenticationError> {
        let response = self
            .response
            .as_deref_mut()
            .ok_or(AuthenticationError::MissingResponseSink)?;

        tracing::debug!(realm = %realm, "Sending Token authentication challenge");
        ChallengeResponse::new(realm).apply(response);

        Ok(())
    }

    fn authenticated(&self) -> Option<ParsedAuthentication> {
        let parsed = self.extract_token().filter(ParsedAuthentication::has_token);

        match &parsed {
            Some(parsed) => tracing::debug!(options = parsed.options.len(), "Token found"),
            None => tracing::debug!("No token in Authorization header"),
        }

        parsed
    }
}
