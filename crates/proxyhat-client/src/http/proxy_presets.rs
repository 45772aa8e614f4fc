/*
[INPUT]:  Preset ids and create/update parameters
[OUTPUT]: Saved proxy presets
[POS]:    HTTP layer - proxy preset endpoints
[UPDATE]: When adding new preset endpoints or changing payloads
*/

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{CreateProxyPresetParams, ProxyPreset, UpdateProxyPresetParams};

/// Proxy preset endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProxyPresetsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn proxy_presets(&self) -> ProxyPresetsApi<'_> {
        ProxyPresetsApi { client: self }
    }
}

impl ProxyPresetsApi<'_> {
    /// GET /proxy-presets
    pub async fn list(&self) -> Result<Vec<ProxyPreset>> {
        self.client.execute(ApiRequest::get("proxy-presets")).await
    }

    /// POST /proxy-presets
    pub async fn create(&self, params: &CreateProxyPresetParams) -> Result<ProxyPreset> {
        let request = ApiRequest::post("proxy-presets").json(params)?;
        self.client.execute(request).await
    }

    /// GET /proxy-presets/{id}
    pub async fn get(&self, id: &str) -> Result<ProxyPreset> {
        let path = endpoint(&["proxy-presets", id])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// PUT /proxy-presets/{id}
    pub async fn update(&self, id: &str, params: &UpdateProxyPresetParams) -> Result<ProxyPreset> {
        let path = endpoint(&["proxy-presets", id])?;
        let request = ApiRequest::put(path).json(params)?;
        self.client.execute(request).await
    }

    /// DELETE /proxy-presets/{id}
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = endpoint(&["proxy-presets", id])?;
        self.client.execute_empty(ApiRequest::delete(path)).await
    }
}
