use super::*;

#[test]
fn book_deserializes_from_service_json() {
    let book: Book = serde_json::from_str(
        r#"{"id":"b1","title":"Dune","author":"Frank Herbert","description":"Sand."}"#,
    )
    .expect("valid book payload");
    assert_eq!(book.id, "b1");
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.description, "Sand.");
}

#[test]
fn session_deserializes_from_auth_response() {
    let session: Session = serde_json::from_str(
        r#"{"token":"tok-123","user":{"id":"u1","name":"Ada","email":"ada@example.com"}}"#,
    )
    .expect("valid auth payload");
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user.name, "Ada");
}

#[test]
fn user_tolerates_missing_email() {
    let user: User = serde_json::from_str(r#"{"id":"u2","name":"Grace"}"#).expect("valid user payload");
    assert_eq!(user.email, "");
}

#[test]
fn book_draft_serializes_expected_fields() {
    let draft = BookDraft {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        description: "Sand.".to_owned(),
    };
    let value = serde_json::to_value(&draft).expect("draft serializes");
    assert_eq!(
        value,
        serde_json::json!({"title": "Dune", "author": "Frank Herbert", "description": "Sand."})
    );
}
