//! Transport seam for the argus alerting-strategy console.
//!
//! The console core never owns authoritative state: it only issues
//! list/get/create/update/delete/status-change calls through the
//! [`TemplateApi`] and [`GroupApi`] traits and treats its in-memory
//! collection as a cache invalidated by any mutation. The default
//! implementation ([`http::ApiClient`]) speaks JSON over HTTP via
//! `reqwest`; tests substitute recording mocks.

pub mod error;
pub mod http;
pub mod types;

use argus_common::enums::Status;
use argus_common::types::{
    GroupItem, GroupMutation, ListReply, TemplateItem, TemplateMutation,
};
use async_trait::async_trait;
use error::Result;
use types::{ListGroupRequest, ListTemplateRequest};

/// Remote operations over strategy templates.
///
/// Updates use partial-update semantics: the payload is wrapped in an
/// `{update: ...}` envelope on the wire and fields omitted from it are
/// left unchanged server-side.
#[async_trait]
pub trait TemplateApi: Send + Sync {
    /// Fetches one page of templates matching the filter.
    async fn list(&self, req: &ListTemplateRequest) -> Result<ListReply<TemplateItem>>;

    /// Fetches the full template by id.
    ///
    /// # Errors
    ///
    /// Returns [`error::ApiError::NotFound`] if the template no longer exists.
    async fn get(&self, id: i64) -> Result<TemplateItem>;

    /// Creates a template and returns the server-assigned id.
    async fn create(&self, payload: &TemplateMutation) -> Result<i64>;

    /// Partially updates the template identified by `id`.
    async fn update(&self, id: i64, payload: &TemplateMutation) -> Result<()>;

    /// Deletes the template. Irreversible.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Flips the status of the given templates without touching any
    /// other field. `status` must be a concrete value, never `All`.
    async fn change_status(&self, ids: &[i64], status: Status) -> Result<()>;
}

/// Remote operations over strategy groups. Same surface and semantics
/// as [`TemplateApi`].
#[async_trait]
pub trait GroupApi: Send + Sync {
    async fn list(&self, req: &ListGroupRequest) -> Result<ListReply<GroupItem>>;

    async fn get(&self, id: i64) -> Result<GroupItem>;

    async fn create(&self, payload: &GroupMutation) -> Result<i64>;

    async fn update(&self, id: i64, payload: &GroupMutation) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;

    async fn change_status(&self, ids: &[i64], status: Status) -> Result<()>;
}
