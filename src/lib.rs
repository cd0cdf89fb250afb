//! # veritas
//!
//! Session, authentication and route-protection core for the Veritas
//! academic-integrity client.
//!
//! ARCHITECTURE
//! ============
//! `store` owns the single persisted session slot, `ops` turns user intent
//! into sessions after a simulated delay, `context` is the only writer that
//! ties the two together, and `guard` decides whether a navigation may render.
//! The Leptos shell in `client/` consumes this crate through an
//! `AuthContext` handle provided as reactive context.

pub mod cancel;
pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod nav;
pub mod ops;
pub mod route;
pub mod session;
pub mod storage;
pub mod store;

mod delay;

pub use cancel::CancelToken;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::{AuthError, StorageError};
pub use guard::GuardDecision;
pub use route::Route;
pub use session::{Role, Session};
