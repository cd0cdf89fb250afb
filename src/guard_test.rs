use super::*;

fn teacher() -> Session {
    Session::new("t1", "Tess", "tess@school.edu", Role::Teacher)
}

fn student() -> Session {
    Session::new("s1", "Sam", "sam@school.edu", Role::Student)
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn unauthenticated_goes_to_sign_in() {
    assert_eq!(evaluate(None, Some(Role::Teacher)), GuardDecision::SignIn);
    assert_eq!(evaluate(None, None), GuardDecision::SignIn);
}

#[test]
fn wrong_role_goes_to_own_landing() {
    assert_eq!(
        evaluate(Some(&student()), Some(Role::Teacher)),
        GuardDecision::Redirect(Route::Dashboard)
    );
    assert_eq!(
        evaluate(Some(&teacher()), Some(Role::Student)),
        GuardDecision::Redirect(Route::Classroom)
    );
}

#[test]
fn matching_or_unspecified_role_is_allowed() {
    assert_eq!(evaluate(Some(&teacher()), Some(Role::Teacher)), GuardDecision::Allow);
    assert_eq!(evaluate(Some(&student()), None), GuardDecision::Allow);
}

#[test]
fn student_never_lands_on_teacher_route() {
    let target = evaluate(Some(&student()), Some(Role::Teacher)).target();
    assert_ne!(target, Some(Route::Classroom));
    assert_eq!(target, Some(Route::Dashboard));
}

// =============================================================
// check (route table)
// =============================================================

#[test]
fn public_routes_always_allowed() {
    for route in [Route::Landing, Route::SignIn, Route::SignUp, Route::ForgotPassword] {
        assert_eq!(check(None, route), GuardDecision::Allow);
        assert_eq!(check(Some(&student()), route), GuardDecision::Allow);
    }
}

#[test]
fn settings_needs_any_session() {
    assert_eq!(check(None, Route::Settings), GuardDecision::SignIn);
    assert_eq!(check(Some(&teacher()), Route::Settings), GuardDecision::Allow);
    assert_eq!(check(Some(&student()), Route::Settings), GuardDecision::Allow);
}

#[test]
fn unauthenticated_teacher_route_goes_to_sign_in() {
    assert_eq!(check(None, Route::Classroom), GuardDecision::SignIn);
}

#[test]
fn role_routes_follow_role() {
    assert_eq!(check(Some(&teacher()), Route::Classroom), GuardDecision::Allow);
    assert_eq!(check(Some(&student()), Route::Dashboard), GuardDecision::Allow);
    assert_eq!(
        check(Some(&teacher()), Route::Dashboard),
        GuardDecision::Redirect(Route::Classroom)
    );
}

#[test]
fn role_landing_is_allowed_for_that_role() {
    for session in [teacher(), student()] {
        let landing = landing_for(session.role);
        assert_eq!(check(Some(&session), landing), GuardDecision::Allow);
    }
}

// =============================================================
// Route parsing
// =============================================================

#[test]
fn from_path_round_trips_every_route() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_trailing_slash_and_query() {
    assert_eq!(Route::from_path("/classroom/"), Some(Route::Classroom));
    assert_eq!(Route::from_path("/dashboard?tab=exams#top"), Some(Route::Dashboard));
    assert_eq!(Route::from_path(""), Some(Route::Landing));
}

#[test]
fn from_path_unknown_is_none() {
    assert_eq!(Route::from_path("/reports"), None);
}
