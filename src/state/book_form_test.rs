use super::*;

fn filled_form() -> BookFormState {
    BookFormState {
        title: "  Dune  ".to_owned(),
        author: "Frank Herbert".to_owned(),
        description: "Sand.".to_owned(),
        ..BookFormState::default()
    }
}

#[test]
fn book_form_default_is_idle_and_empty() {
    let form = BookFormState::default();
    assert!(form.title.is_empty());
    assert!(!form.submitting);
    assert_eq!(form.error, None);
    assert_eq!(form.draft(), None);
}

#[test]
fn draft_requires_every_field() {
    let mut form = filled_form();
    form.author.clear();
    assert_eq!(form.draft(), None);

    let mut form = filled_form();
    form.description = "   ".to_owned();
    assert_eq!(form.draft(), None);
}

#[test]
fn draft_trims_fields() {
    let draft = filled_form().draft().expect("all fields present");
    assert_eq!(draft.title, "Dune");
    assert_eq!(draft.author, "Frank Herbert");
    assert_eq!(draft.description, "Sand.");
}

#[test]
fn editing_any_field_clears_error() {
    let mut form = BookFormState::default();

    form.error = Some("old".to_owned());
    form.set_title("Dune".to_owned());
    assert_eq!(form.error, None);

    form.error = Some("old".to_owned());
    form.set_author("Frank Herbert".to_owned());
    assert_eq!(form.error, None);

    form.error = Some("old".to_owned());
    form.set_description("Sand.".to_owned());
    assert_eq!(form.error, None);
}

#[test]
fn begin_submit_rejects_reentry() {
    let mut form = filled_form();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    form.fail_submit("Failed to add book. Please try again.");
    assert!(!form.submitting);
    assert!(form.begin_submit());
}

#[test]
fn reset_after_success_drops_draft() {
    let mut form = filled_form();
    assert!(form.begin_submit());
    form.reset_after_success();
    assert!(form.title.is_empty());
    assert!(form.author.is_empty());
    assert!(form.description.is_empty());
    assert!(!form.submitting);
    assert_eq!(form.error, None);
}
