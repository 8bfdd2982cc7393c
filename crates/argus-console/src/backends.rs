//! Adapters wiring the transport traits to the controller seams.
//!
//! One backend struct per entity implements [`ListBackend`],
//! [`EditBackend`] and [`RowActions`], so a screen assembles its three
//! controllers from a single `Arc`.

use crate::actions::RowActions;
use crate::editor::{EditBackend, SubmitError};
use crate::form::{
    decode_group, decode_template, encode_group, encode_template, GroupForm, TemplateForm,
};
use crate::list::ListBackend;
use argus_api::types::{ListGroupRequest, ListTemplateRequest};
use argus_api::{GroupApi, TemplateApi};
use argus_common::enums::Status;
use argus_common::types::{GroupItem, ListReply, Pagination, TemplateItem};
use async_trait::async_trait;
use std::sync::Arc;

/// Search filter of the template list screen. Wildcards mean "no
/// filter applied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFilter {
    pub keyword: String,
    pub status: Status,
}

impl Default for TemplateFilter {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            status: Status::All,
        }
    }
}

/// Search filter of the group list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFilter {
    pub keyword: String,
    pub status: Status,
}

impl Default for GroupFilter {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            status: Status::All,
        }
    }
}

pub struct TemplateBackend {
    api: Arc<dyn TemplateApi>,
}

impl TemplateBackend {
    pub fn new(api: Arc<dyn TemplateApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListBackend for TemplateBackend {
    type Item = TemplateItem;
    type Filter = TemplateFilter;

    async fn fetch(
        &self,
        filter: &TemplateFilter,
        pagination: &Pagination,
    ) -> argus_api::error::Result<ListReply<TemplateItem>> {
        let req = ListTemplateRequest {
            pagination: pagination.clone(),
            keyword: filter.keyword.clone(),
            status: filter.status,
        };
        self.api.list(&req).await
    }
}

#[async_trait]
impl EditBackend for TemplateBackend {
    type Form = TemplateForm;

    async fn load(&self, id: i64) -> argus_api::error::Result<TemplateForm> {
        let item = self.api.get(id).await?;
        Ok(decode_template(item))
    }

    async fn create(&self, form: &TemplateForm) -> Result<(), SubmitError> {
        let payload = encode_template(form)?;
        self.api.create(&payload).await?;
        Ok(())
    }

    async fn update(&self, id: i64, form: &TemplateForm) -> Result<(), SubmitError> {
        let payload = encode_template(form)?;
        self.api.update(id, &payload).await?;
        Ok(())
    }
}

#[async_trait]
impl RowActions for TemplateBackend {
    async fn change_status(&self, ids: &[i64], status: Status) -> argus_api::error::Result<()> {
        self.api.change_status(ids, status).await
    }

    async fn delete(&self, id: i64) -> argus_api::error::Result<()> {
        self.api.delete(id).await
    }
}

pub struct GroupBackend {
    api: Arc<dyn GroupApi>,
}

impl GroupBackend {
    pub fn new(api: Arc<dyn GroupApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListBackend for GroupBackend {
    type Item = GroupItem;
    type Filter = GroupFilter;

    async fn fetch(
        &self,
        filter: &GroupFilter,
        pagination: &Pagination,
    ) -> argus_api::error::Result<ListReply<GroupItem>> {
        let req = ListGroupRequest {
            pagination: pagination.clone(),
            keyword: filter.keyword.clone(),
            status: filter.status,
        };
        self.api.list(&req).await
    }
}

#[async_trait]
impl EditBackend for GroupBackend {
    type Form = GroupForm;

    async fn load(&self, id: i64) -> argus_api::error::Result<GroupForm> {
        let item = self.api.get(id).await?;
        Ok(decode_group(item))
    }

    async fn create(&self, form: &GroupForm) -> Result<(), SubmitError> {
        let payload = encode_group(form)?;
        self.api.create(&payload).await?;
        Ok(())
    }

    async fn update(&self, id: i64, form: &GroupForm) -> Result<(), SubmitError> {
        let payload = encode_group(form)?;
        self.api.update(id, &payload).await?;
        Ok(())
    }
}

#[async_trait]
impl RowActions for GroupBackend {
    async fn change_status(&self, ids: &[i64], status: Status) -> argus_api::error::Result<()> {
        self.api.change_status(ids, status).await
    }

    async fn delete(&self, id: i64) -> argus_api::error::Result<()> {
        self.api.delete(id).await
    }
}
