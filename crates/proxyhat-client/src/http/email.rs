/*
[INPUT]:  New email address, confirmation token
[OUTPUT]: Email change status messages
[POS]:    HTTP layer - email change endpoints
[UPDATE]: When the email change flow changes
*/

use serde_json::json;

use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{EmailChangeResponse, RequestEmailChangeParams};

/// Email change endpoints
#[derive(Debug, Clone, Copy)]
pub struct EmailApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn email(&self) -> EmailApi<'_> {
        EmailApi { client: self }
    }
}

impl EmailApi<'_> {
    /// POST /profile/email/request-change
    pub async fn request_change(
        &self,
        params: &RequestEmailChangeParams,
    ) -> Result<EmailChangeResponse> {
        let request = ApiRequest::post("profile/email/request-change").json(params)?;
        self.client.execute(request).await
    }

    /// POST /profile/email/confirm-change
    pub async fn confirm_change(&self, token: &str) -> Result<EmailChangeResponse> {
        let request =
            ApiRequest::post("profile/email/confirm-change").json(&json!({ "token": token }))?;
        self.client.execute(request).await
    }

    /// POST /profile/email/cancel-change
    pub async fn cancel_change(&self) -> Result<EmailChangeResponse> {
        self.client
            .execute(ApiRequest::post("profile/email/cancel-change"))
            .await
    }

    /// POST /profile/email/resend-verification
    pub async fn resend_verification(&self) -> Result<EmailChangeResponse> {
        self.client
            .execute(ApiRequest::post("profile/email/resend-verification"))
            .await
    }
}
