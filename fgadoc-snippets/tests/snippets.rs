//! Generation tests across the whole (operation × language) matrix.

use fgadoc_codegen::{
    CodegenError, Language, LanguageDescriptor, LanguageRegistry, SnippetLanguage,
};
use fgadoc_core::QuoteStyle;
use fgadoc_ir::{
    CheckInput, Context, ExpandInput, FgaObjectInput, ListObjectsInput, ListUsersInput,
    OperationKind, OperationModel, ReadChangesInput, ReadInput, ReadTupleKeyInput, TupleKeyInput,
    UserTypeFilterInput, WriteAuthorizationModelInput, WriteInput,
};
use fgadoc_snippets::{SnippetGenerator, backend};
use serde_json::json;

const STORE_ID: &str = "01HVMMBCMGZNT3SED4Z17ECXCA";
const MODEL_ID: &str = "01HVMMBD0F5N7XQ8Z2Y4W6V3TR";

fn generator() -> SnippetGenerator {
    SnippetGenerator::new(LanguageRegistry::builtin())
}

fn anne_views_roadmap() -> TupleKeyInput {
    TupleKeyInput::new("user:anne", "viewer", "document:roadmap")
}

fn contextual() -> Option<Vec<TupleKeyInput>> {
    Some(vec![TupleKeyInput::new(
        "user:anne",
        "member",
        "team:writers",
    )])
}

fn context() -> Option<Context> {
    Some(
        [
            ("ip_address".to_string(), json!("127.0.0.1")),
            ("trusted".to_string(), json!(true)),
        ]
        .into_iter()
        .collect(),
    )
}

fn authorization_model() -> serde_json::Value {
    json!({
        "schema_version": "1.1",
        "type_definitions": [
            {"type": "user"},
            {
                "type": "document",
                "relations": {"viewer": {"this": {}}},
                "metadata": {
                    "relations": {
                        "viewer": {"directly_related_user_types": [{"type": "user"}]}
                    }
                }
            }
        ]
    })
}

/// The smallest valid model of each kind.
fn minimal(kind: OperationKind) -> OperationModel {
    let store_id = STORE_ID.to_string();
    let model = match kind {
        OperationKind::Check => OperationModel::check(CheckInput {
            store_id,
            tuple_key: anne_views_roadmap(),
            ..Default::default()
        }),
        OperationKind::Expand => OperationModel::expand(ExpandInput {
            store_id,
            relation: "viewer".into(),
            object: "document:roadmap".into(),
            ..Default::default()
        }),
        OperationKind::ListObjects => OperationModel::list_objects(ListObjectsInput {
            store_id,
            user: "user:anne".into(),
            relation: "viewer".into(),
            object_type: "document".into(),
            ..Default::default()
        }),
        OperationKind::ListUsers => OperationModel::list_users(ListUsersInput {
            store_id,
            object: FgaObjectInput {
                object_type: "document".into(),
                id: "roadmap".into(),
            },
            relation: "viewer".into(),
            user_filters: vec![UserTypeFilterInput {
                user_type: "user".into(),
                relation: None,
            }],
            ..Default::default()
        }),
        OperationKind::ReadChanges => OperationModel::read_changes(ReadChangesInput {
            store_id,
            ..Default::default()
        }),
        OperationKind::Read => OperationModel::read(ReadInput {
            store_id,
            ..Default::default()
        }),
        OperationKind::Write => OperationModel::write(WriteInput {
            store_id,
            writes: Some(vec![anne_views_roadmap()]),
            ..Default::default()
        }),
        OperationKind::WriteAuthorizationModel => {
            OperationModel::write_authorization_model(WriteAuthorizationModelInput {
                store_id,
                authorization_model: authorization_model(),
            })
        }
    };
    model.expect("fixture is valid")
}

/// A model of each kind with every optional field supplied.
fn full(kind: OperationKind) -> OperationModel {
    let store_id = STORE_ID.to_string();
    let model_id = Some(MODEL_ID.to_string());
    let model = match kind {
        OperationKind::Check => OperationModel::check(CheckInput {
            store_id,
            authorization_model_id: model_id,
            tuple_key: anne_views_roadmap(),
            contextual_tuples: contextual(),
            context: context(),
        }),
        OperationKind::Expand => OperationModel::expand(ExpandInput {
            store_id,
            authorization_model_id: model_id,
            relation: "viewer".into(),
            object: "document:roadmap".into(),
            contextual_tuples: contextual(),
        }),
        OperationKind::ListObjects => OperationModel::list_objects(ListObjectsInput {
            store_id,
            authorization_model_id: model_id,
            user: "user:anne".into(),
            relation: "viewer".into(),
            object_type: "document".into(),
            contextual_tuples: contextual(),
            context: context(),
        }),
        OperationKind::ListUsers => OperationModel::list_users(ListUsersInput {
            store_id,
            authorization_model_id: model_id,
            object: FgaObjectInput {
                object_type: "document".into(),
                id: "roadmap".into(),
            },
            relation: "viewer".into(),
            user_filters: vec![
                UserTypeFilterInput {
                    user_type: "user".into(),
                    relation: None,
                },
                UserTypeFilterInput {
                    user_type: "team".into(),
                    relation: Some("member".into()),
                },
            ],
            contextual_tuples: contextual(),
            context: context(),
        }),
        OperationKind::ReadChanges => OperationModel::read_changes(ReadChangesInput {
            store_id,
            object_type: Some("document".into()),
            page_size: Some(25),
            continuation_token: Some("eyJwayI6IkxBVEVTVF9OU0NPTkZJR19hdXRoMHN0b3JlIn0=".into()),
        }),
        OperationKind::Read => OperationModel::read(ReadInput {
            store_id,
            tuple_key: Some(ReadTupleKeyInput {
                user: Some("user:anne".into()),
                relation: Some("viewer".into()),
                object: Some("document:".into()),
            }),
            page_size: Some(25),
            continuation_token: Some("eyJwayI6IkxBVEVTVF9OU0NPTkZJR19hdXRoMHN0b3JlIn0=".into()),
        }),
        OperationKind::Write => OperationModel::write(WriteInput {
            store_id,
            authorization_model_id: model_id,
            writes: Some(vec![anne_views_roadmap()]),
            deletes: Some(vec![TupleKeyInput::new(
                "user:bob",
                "viewer",
                "document:roadmap",
            )]),
        }),
        OperationKind::WriteAuthorizationModel => {
            OperationModel::write_authorization_model(WriteAuthorizationModelInput {
                store_id,
                authorization_model: authorization_model(),
            })
        }
    };
    model.expect("fixture is valid")
}

fn generate(model: &OperationModel, language: &str) -> String {
    generator()
        .generate(model, language)
        .unwrap_or_else(|e| panic!("{} failed: {}", language, e))
        .code
}

/// Lowercase with `_` and `-` removed, so `contextual_tuples`,
/// `ContextualTuples` and `--contextual-tuple` all look alike.
fn normalized(code: &str) -> String {
    code.to_lowercase().replace(['_', '-'], "")
}

#[test]
fn test_every_kind_in_every_language() {
    let generator = generator();
    for descriptor in generator.registry().list() {
        let language = Language::from_id(descriptor.id).expect("builtin language");
        for kind in OperationKind::ALL {
            for model in [minimal(kind), full(kind)] {
                let snippet = generator
                    .generate(&model, descriptor.id)
                    .unwrap_or_else(|e| panic!("{} / {}: {}", descriptor.id, kind, e));
                let method = backend(language).method_name(kind);

                assert_eq!(snippet.language, descriptor.id);
                assert_eq!(snippet.highlight, descriptor.profile.highlight);
                assert!(
                    snippet.code.contains(&method),
                    "{} / {}: missing `{}` in\n{}",
                    descriptor.id,
                    kind,
                    method,
                    snippet.code
                );
                assert!(
                    snippet.code.starts_with(descriptor.profile.comment),
                    "{} / {}: first line is not a comment",
                    descriptor.id,
                    kind
                );
                assert!(snippet.code.ends_with('\n'));
            }
        }
    }
}

#[test]
fn test_absent_optionals_are_omitted() {
    for id in LanguageRegistry::builtin().ids() {
        for kind in OperationKind::ALL {
            let code = normalized(&generate(&minimal(kind), id));
            assert!(
                !code.contains("contextualtuple"),
                "{} / {} mentions contextual tuples",
                id,
                kind
            );
            assert!(!code.contains("context:"), "{} / {} has a context", id, kind);
            if kind != OperationKind::WriteAuthorizationModel {
                assert!(
                    !code.contains("modelid"),
                    "{} / {} mentions a model id",
                    id,
                    kind
                );
            }
        }
    }
}

#[test]
fn test_supplied_optionals_are_emitted() {
    for id in LanguageRegistry::builtin().ids() {
        for kind in [
            OperationKind::Check,
            OperationKind::Expand,
            OperationKind::ListObjects,
            OperationKind::ListUsers,
        ] {
            let code = normalized(&generate(&full(kind), id));
            assert!(code.contains("contextualtuple"), "{} / {}", id, kind);
            assert!(code.contains("modelid"), "{} / {}", id, kind);
            assert!(code.contains("team:writers"), "{} / {}", id, kind);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let generator = generator();
    for id in generator.registry().ids() {
        for kind in OperationKind::ALL {
            let model = full(kind);
            let first = generator.generate(&model, id).expect("generates");
            let second = generator.generate(&model, id).expect("generates");
            assert_eq!(first, second, "{} / {}", id, kind);
        }
    }
}

#[test]
fn test_context_keeps_author_order() {
    let model = OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        tuple_key: anne_views_roadmap(),
        context: Some(
            [
                ("zeta".to_string(), json!(1)),
                ("alpha".to_string(), json!({"nested_b": 2, "nested_a": 3})),
            ]
            .into_iter()
            .collect(),
        ),
        ..Default::default()
    })
    .expect("valid");

    for id in LanguageRegistry::builtin().ids() {
        let code = generate(&model, id);
        let position = |needle: &str| {
            code.find(needle)
                .unwrap_or_else(|| panic!("{}: `{}` missing in\n{}", id, needle, code))
        };
        assert!(position("zeta") < position("alpha"), "{}", id);
        assert!(position("nested_b") < position("nested_a"), "{}", id);
    }
}

fn check_with_context(entries: Vec<(&str, serde_json::Value)>) -> OperationModel {
    OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        tuple_key: anne_views_roadmap(),
        context: Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        ),
        ..Default::default()
    })
    .expect("valid")
}

#[test]
fn test_context_without_literal_is_rejected() {
    let null = OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        tuple_key: anne_views_roadmap(),
        context: Some([("ip".to_string(), json!(null))].into_iter().collect()),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(null.field, "context.ip");

    let big = OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        tuple_key: anne_views_roadmap(),
        context: Some([("big".to_string(), json!(u64::MAX))].into_iter().collect()),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(big.field, "context.big");
}

#[test]
fn test_context_numbers_at_the_limits() {
    let model = check_with_context(vec![
        ("max", json!(i64::MAX)),
        ("min", json!(i64::MIN)),
        ("ratio", json!(0.5)),
    ]);

    let java = generate(&model, "java");
    assert!(java.contains("Map.entry(\"max\", 9223372036854775807L)"), "{}", java);
    assert!(java.contains("Map.entry(\"min\", -9223372036854775808L)"), "{}", java);

    let go = generate(&model, "go");
    assert!(go.contains(" 9223372036854775807,"), "{}", go);
    assert!(go.contains(" -9223372036854775808,"), "{}", go);
}

#[test]
fn test_javascript_check() {
    let code = generate(&minimal(OperationKind::Check), "javascript");

    assert!(code.contains("fgaClient.check("));
    assert!(code.contains("\"user:anne\""));
    assert!(code.contains("\"viewer\""));
    assert!(code.contains("\"document:roadmap\""));
    assert!(!code.contains("contextualTuples"));
    insta::assert_snapshot!(code, @r#"
// Requires the FGA_API_URL environment variable
import { OpenFgaClient } from "@openfga/sdk";

const fgaClient = new OpenFgaClient({
  apiUrl: process.env.FGA_API_URL,
  storeId: "01HVMMBCMGZNT3SED4Z17ECXCA",
});

const response = await fgaClient.check({
  user: "user:anne",
  relation: "viewer",
  object: "document:roadmap",
});
console.log(response);
"#);
}

#[test]
fn test_python_check_with_optionals() {
    let code = generate(&full(OperationKind::Check), "python");
    insta::assert_snapshot!(code, @r#"
# Requires the FGA_API_URL environment variable
import asyncio
import os

from openfga_sdk.client import ClientConfiguration, OpenFgaClient
from openfga_sdk.client.models import ClientCheckRequest, ClientTuple


async def main():
    configuration = ClientConfiguration(
        api_url=os.environ["FGA_API_URL"],
        store_id="01HVMMBCMGZNT3SED4Z17ECXCA",
        authorization_model_id="01HVMMBD0F5N7XQ8Z2Y4W6V3TR",
    )
    async with OpenFgaClient(configuration) as fga_client:
        body = ClientCheckRequest(
            user="user:anne",
            relation="viewer",
            object="document:roadmap",
            contextual_tuples=[
                ClientTuple(
                    user="user:anne",
                    relation="member",
                    object="team:writers",
                ),
            ],
            context={
                "ip_address": "127.0.0.1",
                "trusted": True,
            },
        )
        response = await fga_client.check(body)
        print(response)


asyncio.run(main())
"#);
}

#[test]
fn test_cli_check_with_optionals() {
    let code = generate(&full(OperationKind::Check), "cli");
    insta::assert_snapshot!(code, @r#"
# Requires the FGA_API_URL environment variable
fga query check \
  --store-id 01HVMMBCMGZNT3SED4Z17ECXCA \
  --model-id 01HVMMBD0F5N7XQ8Z2Y4W6V3TR \
  user:anne viewer document:roadmap \
  --contextual-tuple 'user:anne member team:writers' \
  --context '{"ip_address":"127.0.0.1","trusted":true}'
"#);
}

#[test]
fn test_curl_check() {
    let model = OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        authorization_model_id: Some(MODEL_ID.into()),
        tuple_key: anne_views_roadmap(),
        ..Default::default()
    })
    .expect("valid");
    let code = generate(&model, "curl");
    insta::assert_snapshot!(code, @r#"
# Requires the FGA_API_URL and FGA_API_TOKEN environment variables
curl -X POST "$FGA_API_URL/stores/01HVMMBCMGZNT3SED4Z17ECXCA/check" \
  -H "Authorization: Bearer $FGA_API_TOKEN" \
  -H "content-type: application/json" \
  -d '{
    "authorization_model_id": "01HVMMBD0F5N7XQ8Z2Y4W6V3TR",
    "tuple_key": {
      "user": "user:anne",
      "relation": "viewer",
      "object": "document:roadmap"
    }
  }'
"#);
}

#[test]
fn test_go_layout() {
    let code = generate(&minimal(OperationKind::Check), "go");
    assert!(code.contains(
        "import (\n\t\"context\"\n\t\"fmt\"\n\t\"os\"\n\n\t. \"github.com/openfga/go-sdk/client\"\n)\n"
    ));
    assert!(code.contains(
        "\t\tApiUrl:  os.Getenv(\"FGA_API_URL\"),\n\t\tStoreId: \"01HVMMBCMGZNT3SED4Z17ECXCA\",\n"
    ));
    assert!(code.contains("\tdata, err := fgaClient.Check(context.Background()).Body(body).Execute()\n"));
    assert!(code.contains("\tfmt.Printf(\"%+v\\n\", data)\n}\n"));

    let list_users = generate(&full(OperationKind::ListUsers), "go");
    assert!(list_users.contains("\topenfga \"github.com/openfga/go-sdk\"\n"));
    assert!(list_users.contains("Relation: openfga.PtrString(\"member\")"));
    assert!(list_users.contains("Context: &map[string]interface{}{"));
}

#[test]
fn test_pagination_is_rendered_as_integers() {
    let read = full(OperationKind::Read);
    assert!(generate(&read, "javascript").contains("pageSize: 25,"));
    assert!(generate(&read, "go").contains("PageSize:          openfga.PtrInt32(25),"));
    assert!(generate(&read, "dotnet").contains("PageSize = 25,"));
    assert!(generate(&read, "python").contains("\"page_size\": 25,"));
    assert!(generate(&read, "java").contains(".pageSize(25)"));
    assert!(generate(&read, "curl").contains("\"page_size\": 25,"));
    assert!(!generate(&read, "cli").contains("25"));

    let changes = generate(&full(OperationKind::ReadChanges), "curl");
    assert!(changes.contains("curl -X GET \"$FGA_API_URL/stores/01HVMMBCMGZNT3SED4Z17ECXCA/changes?type=document&page_size=25&continuation_token=eyJwayI6IkxBVEVTVF9OU0NPTkZJR19hdXRoMHN0b3JlIn0%3D\""));
    assert!(!changes.contains("content-type"));
}

#[test]
fn test_write_with_deletes() {
    let model = full(OperationKind::Write);

    let cli = generate(&model, "cli");
    assert!(cli.contains("fga tuple write \\\n"));
    assert!(cli.contains("fga tuple delete \\\n"));
    assert!(cli.contains("  user:bob viewer document:roadmap\n"));

    assert!(generate(&model, "go").contains("Deletes: []ClientTupleKeyWithoutCondition{"));
    assert!(generate(&model, "dotnet").contains("Deletes = new List<ClientTupleKeyWithoutCondition> {"));
    assert!(generate(&model, "java").contains(".deletes(List.of("));
    assert!(generate(&model, "curl").contains("\"deletes\": {\n      \"tuple_keys\": ["));
}

#[test]
fn test_authorization_model_payloads() {
    let model = minimal(OperationKind::WriteAuthorizationModel);

    let go = generate(&model, "go");
    assert!(go.contains("\"encoding/json\""));
    assert!(go.contains("json.Unmarshal([]byte(`{\n  \"schema_version\": \"1.1\",\n"));

    let dotnet = generate(&model, "dotnet");
    assert!(dotnet.contains("using System.Text.Json;"));
    assert!(dotnet.contains("@\"{\n  \"\"schema_version\"\": \"\"1.1\"\",\n"));

    let java = generate(&model, "java");
    assert!(java.contains("new ObjectMapper().readValue(\"\"\"\n"));
    assert!(java.contains("\"\"\", WriteAuthorizationModelRequest.class);"));

    let javascript = generate(&model, "javascript");
    assert!(javascript.contains("  schema_version: \"1.1\",\n"));
    assert!(javascript.contains("directly_related_user_types: ["));

    let python = generate(&model, "python");
    assert!(python.contains("import json\n"));
    assert!(python.contains("body = json.loads(\n"));

    let cli = generate(&model, "cli");
    assert!(cli.contains("--format json \\\n"));
    assert!(cli.contains("'{\"schema_version\":\"1.1\",\"type_definitions\":["));
}

#[test]
fn test_strings_are_escaped() {
    let model = OperationModel::check(CheckInput {
        store_id: STORE_ID.into(),
        tuple_key: anne_views_roadmap(),
        context: Some(
            [("quote".to_string(), json!("it's \"quoted\""))]
                .into_iter()
                .collect(),
        ),
        ..Default::default()
    })
    .expect("valid");

    assert!(generate(&model, "javascript").contains(r#"quote: "it's \"quoted\"","#));
    assert!(generate(&model, "go").contains(r#""quote": "it's \"quoted\"","#));
    assert!(generate(&model, "cli").contains(r#"--context '{"quote":"it'\''s \"quoted\""}'"#));
    assert!(generate(&model, "curl").contains(r#""quote": "it'\''s \"quoted\"""#));
}

#[test]
fn test_profile_quote_style_is_honored() {
    let mut python = Language::Python.descriptor();
    python.profile.quote = QuoteStyle::Single;
    let registry = LanguageRegistry::new(vec![python]).expect("valid registry");
    let generator = SnippetGenerator::new(registry);

    let code = generator
        .generate(&minimal(OperationKind::Check), "python")
        .expect("generates")
        .code;
    assert!(code.contains("user='user:anne',"));
    assert!(code.contains("os.environ['FGA_API_URL']"));
}

#[test]
fn test_unknown_language() {
    let result = generator().generate(&minimal(OperationKind::Check), "ruby");
    assert_eq!(
        result,
        Err(CodegenError::UnknownLanguage { id: "ruby".into() })
    );
}

#[test]
fn test_registry_entry_without_backend() {
    let ruby = LanguageDescriptor {
        id: "ruby",
        label: "Ruby",
        profile: Language::Python.descriptor().profile,
    };
    let registry = LanguageRegistry::new(vec![Language::Python.descriptor(), ruby])
        .expect("valid registry");
    let generator = SnippetGenerator::new(registry);

    assert!(generator.generate(&minimal(OperationKind::Check), "python").is_ok());
    assert_eq!(
        generator.generate(&minimal(OperationKind::Write), "ruby"),
        Err(CodegenError::UnsupportedOperationForLanguage {
            operation: OperationKind::Write,
            language: "ruby".into(),
        })
    );
}
