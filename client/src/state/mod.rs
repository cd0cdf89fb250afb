//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so components depend on small
//! focused models. Both are plain structs held in `RwSignal`s provided by
//! `App`; neither owns behavior beyond simple bookkeeping.

pub mod auth;
pub mod toast;
