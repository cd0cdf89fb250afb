//! Navigation targets and their access rules.

use crate::session::Role;

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

impl Access {
    /// Role the guard must match, if any.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Access::Role(role) => Some(role),
            Access::Public | Access::Authenticated => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    ForgotPassword,
    Settings,
    Classroom,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::SignIn,
        Route::SignUp,
        Route::ForgotPassword,
        Route::Settings,
        Route::Classroom,
        Route::Dashboard,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Settings => "/settings",
            Route::Classroom => "/classroom",
            Route::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Route::Landing | Route::SignIn | Route::SignUp | Route::ForgotPassword => Access::Public,
            Route::Settings => Access::Authenticated,
            Route::Classroom => Access::Role(Role::Teacher),
            Route::Dashboard => Access::Role(Role::Student),
        }
    }

    /// Parse a location path, ignoring any query string, fragment or
    /// trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Whether the guard ever turns a visitor away from this route.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self.access(), Access::Public)
    }
}

/// Default landing surface for a signed-in role.
#[must_use]
pub const fn landing_for(role: Role) -> Route {
    match role {
        Role::Teacher => Route::Classroom,
        Role::Student => Route::Dashboard,
    }
}
