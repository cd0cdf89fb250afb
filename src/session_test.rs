use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
}

#[test]
fn role_rejects_unknown_string_on_deserialize() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn role_from_str_is_case_insensitive() {
    assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
    assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
}

#[test]
fn role_from_str_unknown_errors() {
    assert_eq!("admin".parse::<Role>(), Err(UnknownRole("admin".to_owned())));
}

#[test]
fn role_display_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_serializes_camel_case_layout() {
    let session = Session::new("u1", "Ada", "ada@example.edu", Role::Teacher);
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "u1",
            "displayName": "Ada",
            "email": "ada@example.edu",
            "role": "teacher",
        })
    );
}

#[test]
fn session_with_blank_id_is_invalid() {
    assert!(!Session::new("  ", "Ada", "ada@example.edu", Role::Student).is_valid());
    assert!(Session::new("u1", "Ada", "ada@example.edu", Role::Student).is_valid());
}

// =============================================================
// name_from_email
// =============================================================

#[test]
fn name_from_email_uses_local_part() {
    assert_eq!(name_from_email("jane.doe@school.edu"), "jane.doe");
}

#[test]
fn name_from_email_without_at_uses_whole_value() {
    assert_eq!(name_from_email("jane"), "jane");
}

#[test]
fn name_from_email_blank_local_falls_back() {
    assert_eq!(name_from_email("@school.edu"), "user");
}
