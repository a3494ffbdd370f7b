use super::*;

#[test]
fn complete_form_passes() {
    assert!(form_is_complete("Ada", "ada@example.com", "Hello", "A message."));
}

#[test]
fn any_missing_field_fails() {
    assert!(!form_is_complete("", "ada@example.com", "Hello", "A message."));
    assert!(!form_is_complete("Ada", "", "Hello", "A message."));
    assert!(!form_is_complete("Ada", "ada@example.com", "", "A message."));
    assert!(!form_is_complete("Ada", "ada@example.com", "Hello", ""));
}

#[test]
fn whitespace_only_fields_do_not_count() {
    assert!(!form_is_complete("   ", "ada@example.com", "Hello", "A message."));
    assert!(!form_is_complete("Ada", "ada@example.com", "Hello", "\n\t "));
}
