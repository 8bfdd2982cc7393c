//! HTTP implementation of the transport traits.
//!
//! One [`ApiClient`] holds a shared `reqwest::Client`; per-entity
//! handles implementing [`TemplateApi`] / [`GroupApi`] are cheap
//! clones of it. Authentication, retry and caching are deliberately
//! out of scope here and belong to outer layers.

use crate::error::{ApiError, Result};
use crate::types::{
    ChangeStatusRequest, CreateReply, DetailReply, ListGroupRequest, ListTemplateRequest,
    UpdateRequest,
};
use crate::{GroupApi, TemplateApi};
use argus_common::enums::Status;
use argus_common::types::{
    GroupItem, GroupMutation, ListReply, TemplateItem, TemplateMutation,
};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Entry point for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client reusing an existing `reqwest::Client`
    /// (connection pool sharing).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Handle for strategy template operations.
    pub fn templates(&self) -> TemplateClient {
        TemplateClient {
            http: self.http.clone(),
            base: format!("{}/v1/strategy/template", self.base_url),
        }
    }

    /// Handle for strategy group operations.
    pub fn groups(&self) -> GroupClient {
        GroupClient {
            http: self.http.clone(),
            base: format!("{}/v1/strategy/group", self.base_url),
        }
    }
}

/// [`TemplateApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct TemplateClient {
    http: reqwest::Client,
    base: String,
}

/// [`GroupApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct GroupClient {
    http: reqwest::Client,
    base: String,
}

/// Maps the response status, then decodes the JSON body.
async fn read_json<T: DeserializeOwned>(
    resp: Response,
    entity: &'static str,
    id: i64,
) -> Result<T> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound { entity, id });
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            code: status.as_u16(),
            message,
        });
    }
    let body = resp.text().await?;
    tracing::debug!(entity, id, bytes = body.len(), "<-- response");
    Ok(serde_json::from_str(&body)?)
}

/// Like [`read_json`] but for endpoints whose success body is empty.
async fn read_unit(resp: Response, entity: &'static str, id: i64) -> Result<()> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound { entity, id });
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            code: status.as_u16(),
            message,
        });
    }
    Ok(())
}

#[async_trait]
impl TemplateApi for TemplateClient {
    async fn list(&self, req: &ListTemplateRequest) -> Result<ListReply<TemplateItem>> {
        let url = format!("{}/list", self.base);
        tracing::debug!(%url, keyword = %req.keyword, status = req.status.code(), "--> list templates");
        let resp = self.http.post(&url).json(req).send().await?;
        read_json(resp, "strategy_template", 0).await
    }

    async fn get(&self, id: i64) -> Result<TemplateItem> {
        let url = format!("{}/{id}", self.base);
        let resp = self.http.get(&url).send().await?;
        let reply: DetailReply<TemplateItem> = read_json(resp, "strategy_template", id).await?;
        Ok(reply.detail)
    }

    async fn create(&self, payload: &TemplateMutation) -> Result<i64> {
        let resp = self.http.post(&self.base).json(payload).send().await?;
        let reply: CreateReply = read_json(resp, "strategy_template", 0).await?;
        Ok(reply.id)
    }

    async fn update(&self, id: i64, payload: &TemplateMutation) -> Result<()> {
        let url = format!("{}/{id}", self.base);
        let envelope = UpdateRequest { update: payload };
        let resp = self.http.put(&url).json(&envelope).send().await?;
        read_unit(resp, "strategy_template", id).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/{id}", self.base);
        let resp = self.http.delete(&url).send().await?;
        read_unit(resp, "strategy_template", id).await
    }

    async fn change_status(&self, ids: &[i64], status: Status) -> Result<()> {
        let url = format!("{}/status", self.base);
        let body = ChangeStatusRequest {
            ids: ids.to_vec(),
            status,
        };
        let resp = self.http.put(&url).json(&body).send().await?;
        read_unit(resp, "strategy_template", ids.first().copied().unwrap_or(0)).await
    }
}

#[async_trait]
impl GroupApi for GroupClient {
    async fn list(&self, req: &ListGroupRequest) -> Result<ListReply<GroupItem>> {
        let url = format!("{}/list", self.base);
        tracing::debug!(%url, keyword = %req.keyword, status = req.status.code(), "--> list groups");
        let resp = self.http.post(&url).json(req).send().await?;
        read_json(resp, "strategy_group", 0).await
    }

    async fn get(&self, id: i64) -> Result<GroupItem> {
        let url = format!("{}/{id}", self.base);
        let resp = self.http.get(&url).send().await?;
        let reply: DetailReply<GroupItem> = read_json(resp, "strategy_group", id).await?;
        Ok(reply.detail)
    }

    async fn create(&self, payload: &GroupMutation) -> Result<i64> {
        let resp = self.http.post(&self.base).json(payload).send().await?;
        let reply: CreateReply = read_json(resp, "strategy_group", 0).await?;
        Ok(reply.id)
    }

    async fn update(&self, id: i64, payload: &GroupMutation) -> Result<()> {
        let url = format!("{}/{id}", self.base);
        let envelope = UpdateRequest { update: payload };
        let resp = self.http.put(&url).json(&envelope).send().await?;
        read_unit(resp, "strategy_group", id).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/{id}", self.base);
        let resp = self.http.delete(&url).send().await?;
        read_unit(resp, "strategy_group", id).await
    }

    async fn change_status(&self, ids: &[i64], status: Status) -> Result<()> {
        let url = format!("{}/status", self.base);
        let body = ChangeStatusRequest {
            ids: ids.to_vec(),
            status,
        };
        let resp = self.http.put(&url).json(&body).send().await?;
        read_unit(resp, "strategy_group", ids.first().copied().unwrap_or(0)).await
    }
}
