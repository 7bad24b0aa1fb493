use std::str::FromStr;

use fgadoc_content::{Content, Error};
use fgadoc_ir::{OperationKind, OperationModel, Problem};
use tempfile::TempDir;

const PAGE: &str = r#"
title = "Checking access"

[[snippet]]
name = "check-anne"
operation = "check"
store_id = "01HVMMBCMGZNT3SED4Z17ECXCA"
authorization_model_id = "01HVMMBD0F5N7XQ8Z2Y4W6V3TR"
tuple_key = { user = "user:anne", relation = "reader", object = "document:roadmap" }
context = { ip_address = "127.0.0.1", trusted = true }

[[snippet]]
name = "read-changes"
operation = "read_changes"
store_id = "01HVMMBCMGZNT3SED4Z17ECXCA"
type = "document"
page_size = 25

[[snippet]]
name = "write-model"
operation = "write_authorization_model"
store_id = "01HVMMBCMGZNT3SED4Z17ECXCA"

[snippet.authorization_model]
schema_version = "1.1"
type_definitions = [{ type = "user" }]
"#;

#[test]
fn test_parse_page() {
    let content = Content::from_str(PAGE).unwrap();

    assert_eq!(content.title.as_deref(), Some("Checking access"));
    let names: Vec<&str> = content.snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["check-anne", "read-changes", "write-model"]);
    assert_eq!(content.snippets[1].input.kind(), OperationKind::ReadChanges);
    assert_eq!(
        content.kinds(),
        vec![
            (OperationKind::Check, 1),
            (OperationKind::ReadChanges, 1),
            (OperationKind::WriteAuthorizationModel, 1),
        ]
    );
}

#[test]
fn test_validate_page() {
    let content = Content::from_str(PAGE).unwrap();
    let snippets = content.validate().unwrap();

    assert_eq!(snippets.len(), 3);
    let OperationModel::Check(check) = &snippets[0].model else {
        panic!("expected a check model, got {:?}", snippets[0].model);
    };
    assert_eq!(check.tuple_key().user(), "user:anne");
    let keys: Vec<&str> = check
        .context()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["ip_address", "trusted"]);

    let OperationModel::ReadChanges(changes) = &snippets[1].model else {
        panic!("expected a read changes model");
    };
    assert_eq!(changes.object_type(), Some("document"));
    assert_eq!(changes.page_size(), Some(25));
}

#[test]
fn test_validate_collects_every_error() {
    let src = r#"
[[snippet]]
name = "no-store"
operation = "expand"
relation = "reader"
object = "document:roadmap"

[[snippet]]
name = "fine"
operation = "read"
store_id = "01H"

[[snippet]]
name = "bad-user"
operation = "list_objects"
store_id = "01H"
user = "anne"
relation = "reader"
type = "document"
"#;
    let content = Content::from_str(src).unwrap();
    let errors = content.validate().unwrap_err();

    assert_eq!(errors.len(), 2);
    let first = errors[0].invalid_input().unwrap();
    assert_eq!(first.operation, OperationKind::Expand);
    assert_eq!(first.field, "store_id");
    assert_eq!(first.problem, Problem::Missing);
    assert!(matches!(
        *errors[0],
        Error::InvalidOperation { ref name, span: Some(_), .. } if name == "no-store"
    ));

    let second = errors[1].invalid_input().unwrap();
    assert_eq!(second.operation, OperationKind::ListObjects);
    assert_eq!(second.field, "user");
    assert!(matches!(second.problem, Problem::Malformed(_)));
}

#[test]
fn test_empty_file_has_no_snippets() {
    let content = Content::from_str("").unwrap();
    assert!(content.title.is_none());
    assert!(content.snippets.is_empty());
    assert!(content.validate().unwrap().is_empty());
}

#[test]
fn test_parse_error_has_span() {
    let err = Content::from_str("[[snippet]\nname = ").unwrap_err();
    assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
}

#[test]
fn test_unknown_operation_is_parse_error() {
    let src = r#"
[[snippet]]
name = "delete-store"
operation = "delete_store"
store_id = "01H"
"#;
    let err = Content::from_str(src).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_duplicate_names() {
    let src = r#"
[[snippet]]
name = "check"
operation = "read"
store_id = "01H"

[[snippet]]
name = "check"
operation = "read"
store_id = "01H"
"#;
    let err = Content::from_str(src).unwrap_err();
    let Error::DuplicateName {
        name,
        first_span,
        second_span,
        ..
    } = *err
    else {
        panic!("expected a duplicate name error");
    };
    assert_eq!(name, "check");
    let (first, second) = (first_span.unwrap(), second_span.unwrap());
    assert!(first.offset() < second.offset());
    assert_eq!(&src[second.offset()..second.offset() + second.len()], "check");
}

#[test]
fn test_invalid_name() {
    let src = r#"
[[snippet]]
name = "check anne"
operation = "read"
store_id = "01H"
"#;
    let err = Content::from_str(src).unwrap_err();
    assert!(matches!(
        *err,
        Error::InvalidName { ref name, span: Some(_), .. } if name == "check anne"
    ));
}

#[test]
fn test_json_content() {
    let src = r#"{
  "title": "Listing users",
  "snippet": [
    {
      "name": "list-users",
      "operation": "list_users",
      "store_id": "01H",
      "object": { "type": "document", "id": "roadmap" },
      "relation": "reader",
      "user_filters": [{ "type": "user" }, { "type": "team", "relation": "member" }]
    }
  ]
}"#;
    let content = Content::from_str_with_filename(src, "users.json").unwrap();
    let snippets = content.validate().unwrap();

    let OperationModel::ListUsers(list) = &snippets[0].model else {
        panic!("expected a list users model");
    };
    assert_eq!(list.object().id(), "roadmap");
    assert_eq!(list.user_filters().len(), 2);
    assert_eq!(list.user_filters()[1].relation(), Some("member"));
}

#[test]
fn test_json_parse_error_has_span() {
    let src = "{\n  \"snippet\": [\n    {,}\n  ]\n}";
    let err = Content::from_str_with_filename(src, "broken.json").unwrap_err();
    let Error::Json { span, .. } = *err else {
        panic!("expected a JSON parse error");
    };
    assert!(span.unwrap().offset() > src.find('{').unwrap());
}

#[test]
fn test_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.toml");
    std::fs::write(&path, PAGE).unwrap();

    let content = Content::from_file(&path).unwrap();
    assert_eq!(content.snippets.len(), 3);
    assert_eq!(content.source().filename(), path.display().to_string());
    assert_eq!(content.source().src(), PAGE);
}

#[test]
fn test_from_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Content::from_file(&path).unwrap_err();
    assert!(matches!(*err, Error::Io { path: ref p, .. } if p == &path));
}
