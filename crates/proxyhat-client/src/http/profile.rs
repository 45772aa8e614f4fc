/*
[INPUT]:  Preference maps and API key ids/names
[OUTPUT]: User preferences and API keys
[POS]:    HTTP layer - profile endpoints
[UPDATE]: When adding new profile endpoints or changing payloads
*/

use serde_json::{Map, Value, json};

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{ApiKey, Preferences};

/// Profile and API key endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi { client: self }
    }
}

impl ProfileApi<'_> {
    /// GET /profile/preferences
    pub async fn preferences(&self) -> Result<Preferences> {
        self.client
            .execute(ApiRequest::get("profile/preferences"))
            .await
    }

    /// PUT /profile/preferences
    pub async fn update_preferences(&self, preferences: &Map<String, Value>) -> Result<Preferences> {
        let request = ApiRequest::put("profile/preferences").json(preferences)?;
        self.client.execute(request).await
    }

    /// GET /profile/api-keys
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>> {
        self.client.execute(ApiRequest::get("profile/api-keys")).await
    }

    /// Create an API key. The plain-text token is only returned here.
    ///
    /// POST /profile/api-keys
    pub async fn create_api_key(&self, name: Option<&str>) -> Result<ApiKey> {
        let mut request = ApiRequest::post("profile/api-keys");
        if let Some(name) = name {
            request = request.json(&json!({ "name": name }))?;
        }
        self.client.execute(request).await
    }

    /// DELETE /profile/api-keys/{id}
    pub async fn delete_api_key(&self, id: &str) -> Result<()> {
        let path = endpoint(&["profile", "api-keys", id])?;
        self.client.execute_empty(ApiRequest::delete(path)).await
    }

    /// POST /profile/api-keys/{id}/regenerate
    pub async fn regenerate_api_key(&self, id: &str) -> Result<ApiKey> {
        let path = endpoint(&["profile", "api-keys", id, "regenerate"])?;
        self.client.execute(ApiRequest::post(path)).await
    }
}
