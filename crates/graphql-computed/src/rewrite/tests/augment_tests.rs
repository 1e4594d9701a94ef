use crate::ast;
use crate::registry::ComputedFieldRegistry;
use crate::registry::ComputedFieldRegistryBuilder;
use crate::rewrite::augment_with_fragments;

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

fn assert_augments_to(
    registry: &ComputedFieldRegistry,
    source: &str,
    expected: &str,
) {
    let document = ast::parse(source).unwrap();
    let augmented = augment_with_fragments(document, registry).unwrap();
    assert_eq!(
        augmented.to_string(),
        ast::parse(expected).unwrap().to_string(),
    );
}

#[test]
fn keeps_the_computed_field_and_appends_its_dependencies() {
    let registry = setup_registry();
    assert_augments_to(
        &registry,
        r#"{ id fullName @computed(type: "User") }"#,
        r#"{ id fullName @computed(type: "User") firstName lastName }"#,
    );
}

#[test]
fn document_without_computed_fields_is_unchanged() {
    let registry = setup_registry();
    assert_augments_to(
        &registry,
        "query Profile { user { id name } }",
        "query Profile { user { id name } }",
    );
}

#[test]
fn nested_dependencies_are_augmented_recursively() {
    let registry = setup_registry();
    assert_augments_to(
        &registry,
        r#"{ displayName @computed(type: "User") }"#,
        r#"
        {
            displayName @computed(type: "User")
            fullName @computed(type: "User")
            firstName
            lastName
            honorific
        }
        "#,
    );
}

#[test]
fn does_not_merge_duplicate_response_keys() {
    let registry = setup_registry();
    assert_augments_to(
        &registry,
        r#"{ firstName fullName @computed(type: "User") }"#,
        r#"{ firstName fullName @computed(type: "User") firstName lastName }"#,
    );
}

#[test]
fn annotations_survive_everywhere_in_the_output() {
    let registry = setup_registry();
    let document = ast::parse(
        r#"
        query {
            user {
                fullName @computed(type: "User")
            }
        }
        "#,
    )
    .unwrap();

    let augmented = augment_with_fragments(document, &registry).unwrap();

    assert!(augmented.to_string().contains(r#"@computed(type: "User")"#));
}

#[test]
fn preserves_unrelated_directives() {
    let registry = setup_registry();
    assert_augments_to(
        &registry,
        r#"{ id @include(if: true) fullName @computed(type: "User") }"#,
        r#"{ id @include(if: true) fullName @computed(type: "User") firstName lastName }"#,
    );
}
