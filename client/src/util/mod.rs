//! Browser-facing helpers for pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` backs the session slot with `localStorage`, `notify` raises
//! self-dismissing toasts, and `auth` runs auth calls against the shared
//! context and keeps the reactive mirror in step.

pub mod auth;
pub mod notify;
pub mod storage;
