//! Shared vocabulary for the argus alerting-strategy console.
//!
//! Holds the closed enumeration vocabularies with their display
//! metadata, the strategy entity model (templates, groups and their
//! nested alert levels), pagination shapes, and the i18n message
//! registry used for user-facing notifications.

pub mod enums;
pub mod i18n;
pub mod types;
