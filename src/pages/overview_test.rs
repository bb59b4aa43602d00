use super::*;
use crate::session::test_support::make_student;

#[test]
fn greeting_uses_first_name() {
    let state = Session { user: Some(make_student()), ..Session::default() };
    assert_eq!(greeting(&state), "Welcome back, Ada");
}

#[test]
fn greeting_without_student_is_generic() {
    assert_eq!(greeting(&Session::default()), "Welcome back");
}
