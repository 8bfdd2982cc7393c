//! Row-level action dispatch.
//!
//! Maps a table row's action selection to the corresponding mutation
//! and refresh policy. Delete is the only action gated behind an
//! explicit confirmation; a cancelled confirmation performs zero
//! network calls.

use crate::editor::{EditBackend, EditSessionController};
use crate::list::RefreshTarget;
use crate::notify::Notifier;
use argus_common::enums::Status;
use argus_common::i18n::{DEFAULT_LOCALE, TRANSLATIONS};
use async_trait::async_trait;
use std::sync::Arc;

/// Row action selected from the table's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKey {
    Enable,
    Disable,
    Edit,
    Detail,
    Delete,
    /// Accepted but not wired to anything yet.
    OperationLog,
}

/// The mutations a row action needs. Implemented by the per-entity
/// adapters in [`crate::backends`].
#[async_trait]
pub trait RowActions: Send + Sync + 'static {
    async fn change_status(&self, ids: &[i64], status: Status) -> argus_api::error::Result<()>;

    async fn delete(&self, id: i64) -> argus_api::error::Result<()>;
}

/// Out-of-band confirmation step for destructive actions.
#[async_trait]
pub trait ConfirmGate: Send + Sync {
    async fn confirm(&self, title: &str, content: &str) -> bool;
}

/// Fixed-answer gate for headless flows and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmGate for AutoConfirm {
    async fn confirm(&self, _title: &str, _content: &str) -> bool {
        self.0
    }
}

pub struct ActionDispatcher<A: RowActions, E: EditBackend> {
    actions: Arc<A>,
    editor: Arc<EditSessionController<E>>,
    list: Arc<dyn RefreshTarget>,
    gate: Arc<dyn ConfirmGate>,
    notifier: Arc<dyn Notifier>,
    locale: String,
}

impl<A: RowActions, E: EditBackend> ActionDispatcher<A, E> {
    pub fn new(
        actions: Arc<A>,
        editor: Arc<EditSessionController<E>>,
        list: Arc<dyn RefreshTarget>,
        gate: Arc<dyn ConfirmGate>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            actions,
            editor,
            list,
            gate,
            notifier,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    fn text(&self, key: &'static str) -> &'static str {
        TRANSLATIONS.get(&self.locale, key, key)
    }

    /// Executes `key` against the row identified by `id`.
    ///
    /// Mutations refetch the list on success. Errors surface through
    /// the notifier and leave local state unchanged; retry is by
    /// re-invoking the same action.
    pub async fn dispatch(&self, id: i64, key: ActionKey) -> argus_api::error::Result<()> {
        match key {
            ActionKey::Enable => self.set_status(id, Status::Enable).await,
            ActionKey::Disable => self.set_status(id, Status::Disable).await,
            ActionKey::Edit => self.editor.open(Some(id)).await,
            ActionKey::Detail => self.editor.open_detail(id).await,
            ActionKey::Delete => self.delete(id).await,
            ActionKey::OperationLog => Ok(()),
        }
    }

    async fn set_status(&self, id: i64, status: Status) -> argus_api::error::Result<()> {
        if let Err(err) = self.actions.change_status(&[id], status).await {
            tracing::warn!(id, status = status.code(), error = %err, "status change failed");
            self.notifier.error(&err.to_string());
            return Err(err);
        }
        self.notifier.success(self.text("console.status.success"));
        self.list.refresh().await;
        Ok(())
    }

    async fn delete(&self, id: i64) -> argus_api::error::Result<()> {
        let confirmed = self
            .gate
            .confirm(
                self.text("console.delete.confirm.title"),
                self.text("console.delete.confirm.content"),
            )
            .await;
        if !confirmed {
            self.notifier.info(self.text("console.delete.cancelled"));
            return Ok(());
        }
        if let Err(err) = self.actions.delete(id).await {
            tracing::warn!(id, error = %err, "delete failed");
            self.notifier.error(&err.to_string());
            return Err(err);
        }
        self.notifier.success(self.text("console.delete.success"));
        self.list.refresh().await;
        Ok(())
    }
}
