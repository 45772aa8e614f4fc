/*
[INPUT]:  Sub-user ids and create/update parameters
[OUTPUT]: Sub-user records and bulk operation summaries
[POS]:    HTTP layer - sub-user endpoints
[UPDATE]: When adding new sub-user endpoints or changing payloads
*/

use serde_json::Value;

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::requests::SubUserIds;
use crate::types::{
    BulkDeleteResponse, CreateSubUserParams, ResetUsageResponse, SubUser, UpdateSubUserParams,
};

/// Sub-user endpoints
#[derive(Debug, Clone, Copy)]
pub struct SubUsersApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn sub_users(&self) -> SubUsersApi<'_> {
        SubUsersApi { client: self }
    }
}

impl SubUsersApi<'_> {
    /// GET /sub-users
    pub async fn list(&self) -> Result<Vec<SubUser>> {
        self.client.execute(ApiRequest::get("sub-users")).await
    }

    /// POST /sub-users
    pub async fn create(&self, params: &CreateSubUserParams) -> Result<SubUser> {
        let request = ApiRequest::post("sub-users").json(params)?;
        self.client.execute(request).await
    }

    /// GET /sub-users/{id}
    pub async fn get(&self, id: &str) -> Result<SubUser> {
        let path = endpoint(&["sub-users", id])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// PUT /sub-users/{id}
    pub async fn update(&self, id: &str, params: &UpdateSubUserParams) -> Result<SubUser> {
        let path = endpoint(&["sub-users", id])?;
        let request = ApiRequest::put(path).json(params)?;
        self.client.execute(request).await
    }

    /// DELETE /sub-users/{id}
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = endpoint(&["sub-users", id])?;
        self.client.execute_empty(ApiRequest::delete(path)).await
    }

    /// Reset traffic usage for the given sub-users
    ///
    /// POST /sub-users/reset/usage
    pub async fn reset_usage(&self, ids: &[String]) -> Result<ResetUsageResponse> {
        let body = SubUserIds { ids, group_id: None };
        let request = ApiRequest::post("sub-users/reset/usage").json(&body)?;
        self.client.execute(request).await
    }

    /// POST /sub-users/bulk-delete
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<BulkDeleteResponse> {
        let body = SubUserIds { ids, group_id: None };
        let request = ApiRequest::post("sub-users/bulk-delete").json(&body)?;
        self.client.execute(request).await
    }

    /// Move sub-users into a group, or out of any group when `group_id` is `None`
    ///
    /// POST /sub-users/bulk-move-to-group
    pub async fn bulk_move_to_group(&self, ids: &[String], group_id: Option<&str>) -> Result<Value> {
        let body = SubUserIds { ids, group_id };
        let request = ApiRequest::post("sub-users/bulk-move-to-group").json(&body)?;
        self.client.execute(request).await
    }
}
