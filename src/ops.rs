//! Simulated auth operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no credential backend. Each operation validates its input, waits
//! the configured latency and then succeeds deterministically. These functions
//! never touch the session store; `AuthContext` applies their results.
//!
//! KNOWN GAPS
//! ==========
//! `change_password` does not verify the current password because nothing
//! stores one. Wire it to a real verifier before connecting a backend.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use uuid::Uuid;

use crate::config::AuthConfig;
use crate::delay::pause;
use crate::error::AuthError;
use crate::session::{Role, Session, name_from_email};

/// Minimum accepted length for a new password, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Acknowledgement shown after a reset request. It never states whether an
/// account exists for the address.
pub const RESET_ACKNOWLEDGEMENT: &str = "If an account exists for that email, a password reset link is on its way.";

fn require_credentials(email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(email.to_owned())
}

/// Sign in with email and password as `role`.
///
/// # Errors
///
/// `InvalidCredentials` when either field is empty.
pub async fn sign_in(config: &AuthConfig, email: &str, password: &str, role: Role) -> Result<Session, AuthError> {
    let email = require_credentials(email, password)?;
    pause(config.latency).await;

    let id = Uuid::new_v4().to_string();
    let display_name = name_from_email(&email);
    Ok(Session::new(id, display_name, email, role))
}

/// Create an account and sign in as `role`.
///
/// # Errors
///
/// `InvalidCredentials` when email or password is empty, `Validation` when
/// the name is blank.
pub async fn sign_up(
    config: &AuthConfig,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Session, AuthError> {
    let email = require_credentials(email, password)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AuthError::validation("Please enter your name."));
    }
    pause(config.latency).await;

    Ok(Session::new(Uuid::new_v4().to_string(), name, email, role))
}

/// Sign in through the social provider button. Always succeeds with the
/// configured placeholder identity.
///
/// # Errors
///
/// Never fails today; the signature matches the other operations.
pub async fn social_sign_in(config: &AuthConfig, role: Role) -> Result<Session, AuthError> {
    pause(config.latency).await;

    let identity = &config.social_identity;
    Ok(Session::new(
        identity.id.clone(),
        identity.display_name.clone(),
        identity.email.clone(),
        role,
    ))
}

/// Request a password reset link.
///
/// # Errors
///
/// `Validation` when the address has no `@`.
pub async fn reset_password(config: &AuthConfig, email: &str) -> Result<&'static str, AuthError> {
    if !email.contains('@') {
        return Err(AuthError::validation("Please enter a valid email address."));
    }
    pause(config.latency).await;
    Ok(RESET_ACKNOWLEDGEMENT)
}

/// Check a new password against its confirmation.
///
/// # Errors
///
/// `Validation` when `new` is shorter than [`MIN_PASSWORD_LEN`] or differs
/// from `confirm`. Length is checked first.
pub async fn change_password(config: &AuthConfig, current: &str, new: &str, confirm: &str) -> Result<(), AuthError> {
    let _ = current;
    validate_new_password(new, confirm)?;
    pause(config.latency).await;
    Ok(())
}

pub(crate) fn validate_new_password(new: &str, confirm: &str) -> Result<(), AuthError> {
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    if new != confirm {
        return Err(AuthError::validation("Passwords do not match."));
    }
    Ok(())
}
