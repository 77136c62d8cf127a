use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

impl ApiClient {
    /// `POST /auth/login`. A token in the response body replaces the current
    /// session; the rest of the response passes through to the caller.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.post_json("auth/login", credentials).await?;

        if !response.token.is_empty() && !self.session().set_session_from_token(&response.token) {
            tracing::warn!("login response carried a token that does not decode");
        }

        Ok(response)
    }

    /// `POST /auth/signup`. Does not establish a session; the user logs in
    /// afterwards.
    pub async fn signup(&self, registration: &SignupRequest) -> ClientResult<SignupResponse> {
        self.post_json("auth/signup", registration).await
    }
}
