use super::*;

#[test]
fn none_and_debug_are_forbidden() {
    let interner = StringInterner::new();
    let names = ForbiddenNames::new(&interner);
    assert_eq!(names.forbidden(interner.intern("None")), Some("None"));
    assert_eq!(names.forbidden(interner.intern("__debug__")), Some("__debug__"));
}

#[test]
fn ordinary_names_pass() {
    let interner = StringInterner::new();
    let names = ForbiddenNames::new(&interner);
    assert_eq!(names.forbidden(interner.intern("x")), None);
    assert_eq!(names.forbidden(interner.intern("True")), None);
    assert_eq!(names.forbidden(interner.intern("none")), None);
}
