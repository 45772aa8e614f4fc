/*
[INPUT]:  Credentials, registration data, OAuth provider names
[OUTPUT]: Tokens, the authenticated user, connected social accounts
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When adding new auth endpoints or changing auth payloads
*/

use serde_json::Value;

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{
    LoginParams, LoginResponse, RegisterParams, RegisterResponse, SocialAccount,
    SupportedProvider, User,
};

/// Authentication endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Create a new account
    ///
    /// POST /auth/register
    pub async fn register(&self, params: &RegisterParams) -> Result<RegisterResponse> {
        let request = ApiRequest::post("auth/register").json(params)?;
        self.client.execute(request).await
    }

    /// Exchange email and password for an access token
    ///
    /// POST /auth/login
    pub async fn login(&self, params: &LoginParams) -> Result<LoginResponse> {
        let request = ApiRequest::post("auth/login").json(params)?;
        self.client.execute(request).await
    }

    /// GET /auth/user
    pub async fn user(&self) -> Result<User> {
        self.client.execute(ApiRequest::get("auth/user")).await
    }

    /// Invalidate the current session
    ///
    /// POST /auth/logout
    pub async fn logout(&self) -> Result<()> {
        self.client.execute_empty(ApiRequest::post("auth/logout")).await
    }

    /// GET /auth/supported-providers
    pub async fn supported_providers(&self) -> Result<Vec<SupportedProvider>> {
        self.client
            .execute(ApiRequest::get("auth/supported-providers"))
            .await
    }

    /// GET /auth/social-accounts
    pub async fn social_accounts(&self) -> Result<Vec<SocialAccount>> {
        self.client
            .execute(ApiRequest::get("auth/social-accounts"))
            .await
    }

    /// Remove a connected social account
    ///
    /// DELETE /auth/social-accounts/{provider}
    pub async fn disconnect_social(&self, provider: &str) -> Result<()> {
        let path = endpoint(&["auth", "social-accounts", provider])?;
        self.client.execute_empty(ApiRequest::delete(path)).await
    }

    /// OAuth redirect target for a provider; the shape varies by provider.
    ///
    /// GET /auth/{provider}/redirect
    pub async fn oauth_redirect(&self, provider: &str) -> Result<Value> {
        let path = endpoint(&["auth", provider, "redirect"])?;
        self.client.execute(ApiRequest::get(path)).await
    }
}
