//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, the view-scoped
//! cancel token) and delegates auth work to `util::auth::spawn_auth`.

pub mod classroom;
pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod settings;
pub mod sign_in;
pub mod sign_up;
