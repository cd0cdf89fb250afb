//! Navigation items visible to each kind of viewer.

use crate::route::Route;
use crate::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

const fn item(label: &'static str, route: Route) -> NavItem {
    NavItem { label, route }
}

const SIGNED_OUT: &[NavItem] = &[
    item("Home", Route::Landing),
    item("Sign in", Route::SignIn),
    item("Sign up", Route::SignUp),
];

const TEACHER: &[NavItem] = &[item("Classroom", Route::Classroom), item("Settings", Route::Settings)];

const STUDENT: &[NavItem] = &[item("Dashboard", Route::Dashboard), item("Settings", Route::Settings)];

/// Items for a viewer with `role`, or the signed-out set when `None`.
#[must_use]
pub fn nav_items(role: Option<Role>) -> &'static [NavItem] {
    match role {
        None => SIGNED_OUT,
        Some(Role::Teacher) => TEACHER,
        Some(Role::Student) => STUDENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{GuardDecision, check};
    use crate::session::Session;

    #[test]
    fn every_item_passes_the_guard() {
        for role in Role::ALL {
            let session = Session::new("u1", "U", "u@x.edu", role);
            for item in nav_items(Some(role)) {
                assert_eq!(check(Some(&session), item.route), GuardDecision::Allow, "{role} {item:?}");
            }
        }
        for item in nav_items(None) {
            assert_eq!(check(None, item.route), GuardDecision::Allow, "{item:?}");
        }
    }

    #[test]
    fn first_item_is_role_landing() {
        for role in Role::ALL {
            assert_eq!(nav_items(Some(role))[0].route, crate::route::landing_for(role));
        }
    }

    #[test]
    fn teacher_never_sees_student_dashboard() {
        assert!(nav_items(Some(Role::Teacher)).iter().all(|i| i.route != Route::Dashboard));
    }
}
