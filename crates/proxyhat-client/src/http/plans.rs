/*
[INPUT]:  Plan names
[OUTPUT]: Regular and subscription plans, pricing tables
[POS]:    HTTP layer - plan and pricing endpoints
[UPDATE]: When adding new plan kinds or pricing endpoints
*/

use serde_json::Value;

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{RegularPlan, SubscriptionPlan};

/// Plan and pricing endpoints
#[derive(Debug, Clone, Copy)]
pub struct PlansApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn plans(&self) -> PlansApi<'_> {
        PlansApi { client: self }
    }
}

impl PlansApi<'_> {
    /// One-time plans
    ///
    /// GET /regular-options
    pub async fn list_regular(&self) -> Result<Vec<RegularPlan>> {
        self.client.execute(ApiRequest::get("regular-options")).await
    }

    /// GET /subscription-plans
    pub async fn list_subscriptions(&self) -> Result<Vec<SubscriptionPlan>> {
        self.client
            .execute(ApiRequest::get("subscription-plans"))
            .await
    }

    /// GET /plans/regular/{name}
    pub async fn get_regular(&self, name: &str) -> Result<RegularPlan> {
        let path = endpoint(&["plans", "regular", name])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// GET /plans/subscription/{name}
    pub async fn get_subscription(&self, name: &str) -> Result<SubscriptionPlan> {
        let path = endpoint(&["plans", "subscription", name])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// GET /pricing/regular
    pub async fn pricing_regular(&self) -> Result<Vec<Value>> {
        self.client.execute(ApiRequest::get("pricing/regular")).await
    }

    /// GET /pricing/subscriptions
    pub async fn pricing_subscriptions(&self) -> Result<Vec<Value>> {
        self.client
            .execute(ApiRequest::get("pricing/subscriptions"))
            .await
    }
}
