use crate::ComputedRewrite;
use crate::ast;
use crate::registry::ComputedFieldDescriptor;
use crate::registry::ComputedFieldRegistry;
use crate::registry::ComputedFieldRegistryBuilder;
use crate::rewrite::RewriteError;
use crate::rewrite::replace_computed_with_fragments;

fn setup_registry() -> ComputedFieldRegistry {
    let mut builder = ComputedFieldRegistryBuilder::new();

    builder
        .add_computed_field_str(
            "User",
            "fullName",
            "fragment FullNameDeps on User { firstName lastName }",
        )
        .unwrap();

    builder
        .add_computed_field_str(
            "User",
            "displayName",
            r#"
            fragment DisplayNameDeps on User {
                fullName @computed(type: "User")
                honorific
            }
            "#,
        )
        .unwrap();

    builder.build().unwrap()
}

fn rewrite(registry: &ComputedFieldRegistry, source: &str) -> ast::Document {
    let document = ast::parse(source).unwrap();
    replace_computed_with_fragments(document, registry).unwrap()
}

fn assert_rewrites_to(
    registry: &ComputedFieldRegistry,
    source: &str,
    expected: &str,
) {
    assert_eq!(
        rewrite(registry, source).to_string(),
        ast::parse(expected).unwrap().to_string(),
    );
}

#[test]
fn replaces_computed_field_with_dependency_selections() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ id fullName @computed(type: "User") }"#,
        "{ id firstName lastName }",
    );
}

#[test]
fn document_without_computed_fields_is_unchanged() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        "query Profile { user { id name } }",
        "query Profile { user { id name } }",
    );
}

#[test]
fn resolves_nested_computed_fields_in_dependencies() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ displayName @computed(type: "User") }"#,
        "{ firstName lastName honorific }",
    );
}

#[test]
fn no_annotation_survives_at_any_depth() {
    let registry = setup_registry();
    let rewritten = rewrite(
        &registry,
        r#"
        query {
            user {
                displayName @computed(type: "User")
                friends {
                    fullName @computed(type: "User")
                }
            }
        }
        "#,
    );
    assert!(!rewritten.to_string().contains("computed"));
}

#[test]
fn merges_dependency_selections_into_existing_fields() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ firstName fullName @computed(type: "User") }"#,
        "{ firstName lastName }",
    );
}

#[test]
fn lookup_uses_declared_field_name_not_alias() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ name: fullName @computed(type: "User") }"#,
        "{ firstName lastName }",
    );
}

#[test]
fn non_field_selections_move_ahead_of_merged_fields() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ id ...userFields fullName @computed(type: "User") }"#,
        "{ ...userFields id firstName lastName }",
    );
}

#[test]
fn strips_annotations_from_non_field_selections() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ id ...userFields @computed(type: "User") }"#,
        "{ ...userFields id }",
    );
}

#[test]
fn preserves_unrelated_directives() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"{ id @include(if: true) fullName @computed(type: "User") }"#,
        "{ id @include(if: true) firstName lastName }",
    );
}

#[test]
fn rewrites_fragment_definitions_in_the_document() {
    let registry = setup_registry();
    assert_rewrites_to(
        &registry,
        r#"
        query { user { ...userFields } }
        fragment userFields on User { fullName @computed(type: "User") }
        "#,
        r#"
        query { user { ...userFields } }
        fragment userFields on User { firstName lastName }
        "#,
    );
}

#[test]
fn rewrites_a_single_definition() {
    let registry = setup_registry();
    let document =
        ast::parse(r#"{ fullName @computed(type: "User") }"#).unwrap();
    let definition = document.definitions.into_iter().next().unwrap();

    let rewritten = definition.replace_computed(&registry).unwrap();

    assert_eq!(
        ast::Document {
            definitions: vec![rewritten],
        }
        .to_string(),
        ast::parse("{ firstName lastName }").unwrap().to_string(),
    );
}

#[test]
fn unknown_entity_type_aborts_the_rewrite() {
    let registry = setup_registry();
    let document =
        ast::parse(r#"{ fullName @computed(type: "Ghost") }"#).unwrap();

    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::UnknownEntityType { ref type_name, .. })
            if type_name == "Ghost",
    ));
}

#[test]
fn unknown_computed_field_aborts_the_rewrite() {
    let registry = setup_registry();
    let document =
        ast::parse(r#"{ nickname @computed(type: "User") }"#).unwrap();

    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::UnknownComputedField {
            ref type_name,
            ref field_name,
            ..
        }) if type_name == "User" && field_name == "nickname",
    ));
}

#[test]
fn annotation_without_arguments_is_invalid() {
    let registry = setup_registry();
    let document = ast::parse("{ fullName @computed }").unwrap();

    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::InvalidAnnotation { .. }),
    ));
}

#[test]
fn annotation_with_non_string_argument_is_invalid() {
    let registry = setup_registry();
    let document =
        ast::parse("{ fullName @computed(type: $type) }").unwrap();

    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::InvalidAnnotation { .. }),
    ));
}

#[test]
fn descriptor_without_dependency_is_an_error() {
    let mut builder = ComputedFieldRegistryBuilder::new();
    builder
        .add_field_descriptor("User", "age", ComputedFieldDescriptor::new(None))
        .unwrap();
    let registry = builder.build().unwrap();

    let document = ast::parse(r#"{ age @computed(type: "User") }"#).unwrap();
    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::MissingDependency {
            ref type_name,
            ref field_name,
        }) if type_name == "User" && field_name == "age",
    ));
}

#[test]
fn dependency_starting_with_an_operation_is_malformed() {
    let mut builder = ComputedFieldRegistryBuilder::new();
    builder
        .add_computed_field_str("User", "age", "query { birthDate }")
        .unwrap();
    let registry = builder.build().unwrap();

    let document = ast::parse(r#"{ age @computed(type: "User") }"#).unwrap();
    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::MalformedDependency { .. }),
    ));
}

#[test]
fn dependency_fragment_with_emptied_selection_set_is_malformed() {
    let mut dependency =
        ast::parse("fragment AgeDeps on User { birthDate }").unwrap();
    if let ast::Definition::Fragment(frag_def) = &mut dependency.definitions[0] {
        frag_def.selection_set.items.clear();
    }

    let mut builder = ComputedFieldRegistryBuilder::new();
    builder.add_computed_field("User", "age", dependency).unwrap();
    let registry = builder.build().unwrap();

    let document = ast::parse(r#"{ age @computed(type: "User") }"#).unwrap();
    let result = replace_computed_with_fragments(document, &registry);

    assert!(matches!(
        result,
        Err(RewriteError::MalformedDependency { .. }),
    ));
}
