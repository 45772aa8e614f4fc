/*
[INPUT]:  Analytics period and optional date range
[OUTPUT]: Traffic/request time series, totals and domain breakdowns
[POS]:    HTTP layer - analytics endpoints (POST with JSON filter body)
[UPDATE]: When adding new analytics reports
*/

use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{AnalyticsParams, DomainBreakdownResponse, TimeSeriesResponse, TotalResponse};

/// Analytics endpoints. Every call defaults the period to `24h`.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi { client: self }
    }
}

impl AnalyticsApi<'_> {
    /// POST /traffic
    pub async fn traffic(&self, params: Option<AnalyticsParams>) -> Result<TimeSeriesResponse> {
        self.report("traffic", params).await
    }

    /// POST /traffic/period-total
    pub async fn traffic_total(&self, params: Option<AnalyticsParams>) -> Result<TotalResponse> {
        self.report("traffic/period-total", params).await
    }

    /// POST /requests
    pub async fn requests(&self, params: Option<AnalyticsParams>) -> Result<TimeSeriesResponse> {
        self.report("requests", params).await
    }

    /// POST /requests/period-total
    pub async fn requests_total(&self, params: Option<AnalyticsParams>) -> Result<TotalResponse> {
        self.report("requests/period-total", params).await
    }

    /// POST /domain-breakdown
    pub async fn domain_breakdown(
        &self,
        params: Option<AnalyticsParams>,
    ) -> Result<DomainBreakdownResponse> {
        self.report("domain-breakdown", params).await
    }

    async fn report<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: Option<AnalyticsParams>,
    ) -> Result<T> {
        let params = AnalyticsParams::or_default(params);
        let request = ApiRequest::post(path).json(&params)?;
        self.client.execute(request).await
    }
}
