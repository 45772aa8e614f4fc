/*
[INPUT]:  Verification and recovery codes, password change data
[OUTPUT]: 2FA status, setup secrets and recovery codes
[POS]:    HTTP layer - two-factor authentication endpoints
[UPDATE]: When adding new 2FA endpoints or changing payloads
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{ChangePasswordParams, RecoveryCodes, TwoFactorEnableResponse, TwoFactorStatus};

/// Two-factor authentication endpoints
#[derive(Debug, Clone, Copy)]
pub struct TwoFactorApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn two_factor(&self) -> TwoFactorApi<'_> {
        TwoFactorApi { client: self }
    }
}

impl TwoFactorApi<'_> {
    /// GET /profile/2fa/status
    pub async fn status(&self) -> Result<TwoFactorStatus> {
        self.client
            .execute(ApiRequest::get("profile/2fa/status"))
            .await
    }

    /// Start 2FA setup
    ///
    /// POST /profile/2fa/enable
    pub async fn enable(&self) -> Result<TwoFactorEnableResponse> {
        self.client
            .execute(ApiRequest::post("profile/2fa/enable"))
            .await
    }

    /// Finish 2FA setup with a code from the authenticator
    ///
    /// POST /profile/2fa/confirm
    pub async fn confirm(&self, code: &str) -> Result<Value> {
        let request = ApiRequest::post("profile/2fa/confirm").json(&json!({ "code": code }))?;
        self.client.execute(request).await
    }

    /// POST /profile/2fa/disable
    pub async fn disable(&self, twofa_code: &str) -> Result<Value> {
        let request =
            ApiRequest::post("profile/2fa/disable").json(&json!({ "twofa_code": twofa_code }))?;
        self.client.execute(request).await
    }

    /// GET /profile/2fa/qr-code
    pub async fn qr_code(&self) -> Result<TwoFactorEnableResponse> {
        self.client
            .execute(ApiRequest::get("profile/2fa/qr-code"))
            .await
    }

    /// GET /profile/2fa/recovery-codes
    pub async fn recovery_codes(&self) -> Result<RecoveryCodes> {
        self.client
            .execute(ApiRequest::get("profile/2fa/recovery-codes"))
            .await
    }

    /// POST /profile/2fa/disable-by-recovery-code
    pub async fn disable_by_recovery(&self, recovery_code: &str) -> Result<Value> {
        let request = ApiRequest::post("profile/2fa/disable-by-recovery-code")
            .json(&json!({ "recovery_code": recovery_code }))?;
        self.client.execute(request).await
    }

    /// POST /profile/password
    pub async fn change_password(&self, params: &ChangePasswordParams) -> Result<Value> {
        let request = ApiRequest::post("profile/password").json(params)?;
        self.client.execute(request).await
    }
}
