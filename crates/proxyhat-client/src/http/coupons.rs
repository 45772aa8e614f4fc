/*
[INPUT]:  Coupon codes with optional plan/order context
[OUTPUT]: Coupon validation and redemption results
[POS]:    HTTP layer - coupon endpoints
[UPDATE]: When adding new coupon endpoints or changing payloads
*/

use serde_json::json;

use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{CouponParams, CouponResponse};

/// Coupon endpoints
#[derive(Debug, Clone, Copy)]
pub struct CouponsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn coupons(&self) -> CouponsApi<'_> {
        CouponsApi { client: self }
    }
}

impl CouponsApi<'_> {
    /// POST /coupon/validate
    pub async fn validate(&self, params: &CouponParams) -> Result<CouponResponse> {
        let request = ApiRequest::post("coupon/validate").json(params)?;
        self.client.execute(request).await
    }

    /// POST /coupon/apply
    pub async fn apply(&self, params: &CouponParams) -> Result<CouponResponse> {
        let request = ApiRequest::post("coupon/apply").json(params)?;
        self.client.execute(request).await
    }

    /// POST /coupon/redeem
    pub async fn redeem(&self, code: &str) -> Result<CouponResponse> {
        let request = ApiRequest::post("coupon/redeem").json(&json!({ "code": code }))?;
        self.client.execute(request).await
    }
}
