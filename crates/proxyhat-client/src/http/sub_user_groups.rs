/*
[INPUT]:  Group ids and create/update parameters
[OUTPUT]: Sub-user group records
[POS]:    HTTP layer - sub-user group endpoints
[UPDATE]: When adding new group endpoints or changing payloads
*/

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{CreateSubUserGroupParams, SubUserGroup, UpdateSubUserGroupParams};

/// Sub-user group endpoints
#[derive(Debug, Clone, Copy)]
pub struct SubUserGroupsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn sub_user_groups(&self) -> SubUserGroupsApi<'_> {
        SubUserGroupsApi { client: self }
    }
}

impl SubUserGroupsApi<'_> {
    /// GET /sub-user-groups
    pub async fn list(&self) -> Result<Vec<SubUserGroup>> {
        self.client.execute(ApiRequest::get("sub-user-groups")).await
    }

    /// POST /sub-user-groups
    pub async fn create(&self, params: &CreateSubUserGroupParams) -> Result<SubUserGroup> {
        let request = ApiRequest::post("sub-user-groups").json(params)?;
        self.client.execute(request).await
    }

    /// GET /sub-user-groups/{id}
    pub async fn get(&self, id: &str) -> Result<SubUserGroup> {
        let path = endpoint(&["sub-user-groups", id])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// PUT /sub-user-groups/{id}
    pub async fn update(&self, id: &str, params: &UpdateSubUserGroupParams) -> Result<SubUserGroup> {
        let path = endpoint(&["sub-user-groups", id])?;
        let request = ApiRequest::put(path).json(params)?;
        self.client.execute(request).await
    }

    /// DELETE /sub-user-groups/{id}
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = endpoint(&["sub-user-groups", id])?;
        self.client.execute_empty(ApiRequest::delete(path)).await
    }
}
