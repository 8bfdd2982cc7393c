//! Edit session controller: the transient state of one create/edit
//! modal.
//!
//! A session binds at most one entity id. `open` with no id starts
//! create mode over form defaults; with an id it fetches the entity
//! and decodes it into form shape. Submit validates first, then
//! dispatches to create (no bound id) or partial update (bound id).
//! A failed submit leaves the session open with nothing cleared.

use crate::form::ValidationErrors;
use crate::list::RefreshTarget;
use crate::notify::Notifier;
use argus_common::i18n::{DEFAULT_LOCALE, TRANSLATIONS};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Why a submit attempt did not persist.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Submit arrived with no open session to bind it to.
    #[error("Edit: no open session")]
    Closed,

    /// The session was opened in read-only detail mode; detail
    /// sessions never mutate.
    #[error("Edit: session is read-only")]
    ReadOnly,

    /// Caught before any network call; reported inline per field.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The transport rejected the call; the session stays open and the
    /// attempt is retryable by re-submitting.
    #[error(transparent)]
    Api(#[from] argus_api::error::ApiError),
}

/// Entity-specific half of an edit session: load/decode, validate,
/// and the create/update dispatch. Implementations in
/// [`crate::backends`] wrap the transport traits and apply the
/// `{update: ...}` envelope.
#[async_trait]
pub trait EditBackend: Send + Sync + 'static {
    type Form: Clone + Default + Send + Sync + 'static;

    /// Fetches the entity and translates it into form shape.
    async fn load(&self, id: i64) -> argus_api::error::Result<Self::Form>;

    /// Validates, encodes and creates. Must not hit the network on
    /// validation failure.
    async fn create(&self, form: &Self::Form) -> Result<(), SubmitError>;

    /// Validates, encodes and partially updates `id`.
    async fn update(&self, id: i64, form: &Self::Form) -> Result<(), SubmitError>;
}

/// Transient modal state.
#[derive(Debug, Clone)]
pub struct EditState<F> {
    /// Entity bound to this session; `None` in create mode.
    pub open_id: Option<i64>,
    /// Detail mode: the form renders but rejects edits.
    pub read_only: bool,
    /// Current form values; `None` while no session is open.
    pub form: Option<F>,
}

impl<F> Default for EditState<F> {
    fn default() -> Self {
        Self {
            open_id: None,
            read_only: false,
            form: None,
        }
    }
}

pub struct EditSessionController<B: EditBackend> {
    backend: Arc<B>,
    list: Arc<dyn RefreshTarget>,
    notifier: Arc<dyn Notifier>,
    locale: String,
    state: Mutex<EditState<B::Form>>,
}

impl<B: EditBackend> EditSessionController<B> {
    pub fn new(
        backend: Arc<B>,
        list: Arc<dyn RefreshTarget>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            list,
            notifier,
            locale: DEFAULT_LOCALE.to_string(),
            state: Mutex::new(EditState::default()),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Runs `f` against the session state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&EditState<B::Form>) -> R) -> R {
        f(&self.state.lock().unwrap())
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().form.is_some()
    }

    /// Opens the modal: create mode when `id` is `None`, edit mode
    /// otherwise. A failed entity fetch (e.g. the record disappeared)
    /// notifies and leaves the session closed.
    pub async fn open(&self, id: Option<i64>) -> argus_api::error::Result<()> {
        self.open_session(id, false).await
    }

    /// Opens the modal bound to `id` in read-only detail mode.
    pub async fn open_detail(&self, id: i64) -> argus_api::error::Result<()> {
        self.open_session(Some(id), true).await
    }

    async fn open_session(&self, id: Option<i64>, read_only: bool) -> argus_api::error::Result<()> {
        let Some(id) = id else {
            let mut state = self.state.lock().unwrap();
            *state = EditState {
                open_id: None,
                read_only: false,
                form: Some(B::Form::default()),
            };
            return Ok(());
        };
        match self.backend.load(id).await {
            Ok(form) => {
                let mut state = self.state.lock().unwrap();
                *state = EditState {
                    open_id: Some(id),
                    read_only,
                    form: Some(form),
                };
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to open edit session");
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Discards all in-progress edits and clears the session.
    pub fn close(&self) {
        *self.state.lock().unwrap() = EditState::default();
    }

    /// Validates and persists `form`. Create when no id is bound,
    /// partial update otherwise. On success the session closes and the
    /// bound list refetches; on failure everything stays as-is so the
    /// user can retry.
    ///
    /// Rejected without any network call when no session is open or
    /// the session was opened in read-only detail mode.
    pub async fn submit(&self, form: &B::Form) -> Result<(), SubmitError> {
        let open_id = {
            let state = self.state.lock().unwrap();
            if state.form.is_none() {
                return Err(SubmitError::Closed);
            }
            if state.read_only {
                return Err(SubmitError::ReadOnly);
            }
            state.open_id
        };
        let (result, message_key) = match open_id {
            None => (
                self.backend.create(form).await,
                "console.create.success",
            ),
            Some(id) => (
                self.backend.update(id, form).await,
                "console.update.success",
            ),
        };
        match result {
            Ok(()) => {
                self.close();
                self.notifier
                    .success(TRANSLATIONS.get(&self.locale, message_key, message_key));
                self.list.refresh().await;
                Ok(())
            }
            Err(err) => {
                if let SubmitError::Api(api_err) = &err {
                    tracing::warn!(error = %api_err, "submit failed");
                    self.notifier.error(&api_err.to_string());
                }
                Err(err)
            }
        }
    }
}
