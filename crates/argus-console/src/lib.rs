//! Client-side orchestration core for the alerting-strategy console.
//!
//! The console models a paginated, filterable collection of strategy
//! entities (templates, groups and their nested alert levels) and the
//! mutations over it. Three controllers own all the state:
//!
//! - [`list::ListQueryController`] — filter/pagination state plus the
//!   debounced list fetch that reconciles the displayed collection;
//! - [`editor::EditSessionController`] — the transient state of one
//!   create/edit modal, including the translation between the ordered
//!   level sequence the form manipulates and the keyed level map the
//!   wire expects;
//! - [`actions::ActionDispatcher`] — row-level actions
//!   (enable/disable/edit/detail/delete) and their refresh policy.
//!
//! The controllers never own authoritative state: every mutation
//! invalidates the in-memory collection and refetches it from the
//! transport, and in-flight responses replace the collection wholesale
//! (last write wins).

pub mod actions;
pub mod backends;
pub mod editor;
pub mod form;
pub mod list;
pub mod notify;


pub use actions::{ActionDispatcher, ActionKey, AutoConfirm, ConfirmGate, RowActions};
pub use backends::{GroupBackend, GroupFilter, TemplateBackend, TemplateFilter};
pub use editor::{EditBackend, EditSessionController, SubmitError};
pub use form::{FieldError, ValidationErrors};
pub use list::{ListBackend, ListQueryController, RefreshTarget, SEARCH_DEBOUNCE};
pub use notify::{NoticeKind, Notifier, TracingNotifier};
