use super::*;

#[test]
fn build_new_student_trims_profile_fields() {
    let student = build_new_student(" Ada ", "Lovelace ", " ada@example.com", "x").unwrap();
    assert_eq!(
        student,
        NewStudent {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "x".to_owned(),
        }
    );
}

#[test]
fn build_new_student_requires_every_field() {
    assert_eq!(build_new_student("", "Lovelace", "a@b.com", "x"), Err("Fill in every field."));
    assert_eq!(build_new_student("Ada", "  ", "a@b.com", "x"), Err("Fill in every field."));
    assert_eq!(build_new_student("Ada", "Lovelace", "", "x"), Err("Fill in every field."));
    assert_eq!(build_new_student("Ada", "Lovelace", "a@b.com", ""), Err("Fill in every field."));
}
