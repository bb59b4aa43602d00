use super::*;

fn make_student() -> Student {
    Student {
        id: "s-1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        created_at: Some("2024-01-01T00:00:00.000Z".to_owned()),
        updated_at: None,
    }
}

// =============================================================
// Student
// =============================================================

#[test]
fn student_deserializes_camel_case_fields() {
    let json = serde_json::json!({
        "id": "s-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "createdAt": "2024-01-01T00:00:00.000Z",
    });
    let student: Student = serde_json::from_value(json).unwrap();
    assert_eq!(student, make_student());
}

#[test]
fn student_numeric_id_is_normalized_to_string() {
    let json = serde_json::json!({
        "id": 42,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
    });
    let student: Student = serde_json::from_value(json).unwrap();
    assert_eq!(student.id, "42");
    assert_eq!(student.created_at, None);
}

#[test]
fn student_rejects_object_id() {
    let json = serde_json::json!({
        "id": {"oid": "x"},
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
    });
    assert!(serde_json::from_value::<Student>(json).is_err());
}

#[test]
fn full_name_joins_and_trims() {
    assert_eq!(make_student().full_name(), "Ada Lovelace");
    let mut student = make_student();
    student.last_name = "  ".to_owned();
    assert_eq!(student.full_name(), "Ada");
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn new_student_serializes_camel_case_with_password() {
    let payload = NewStudent {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "x".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "x",
        })
    );
}

#[test]
fn login_response_carries_student_and_token() {
    let json = serde_json::json!({
        "student": {"id": "s-1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
        "token": "tok-123",
    });
    let resp: LoginResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.token, "tok-123");
    assert_eq!(resp.student.email, "ada@example.com");
}

#[test]
fn register_response_message_is_optional() {
    let resp: RegisterResponse = serde_json::from_value(serde_json::json!({"success": false})).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message, None);
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({"error": "nope"})).unwrap();
    assert_eq!(body.message, None);
}
