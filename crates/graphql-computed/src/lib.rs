//! Rewrites GraphQL executable documents that mark fields with a
//! `@computed(type: "...")` directive.
//!
//! A computed field is derived from other fields rather than fetched
//! directly. Callers declare each computed field's data dependencies once,
//! as a fragment in a [`ComputedFieldRegistry`], and this crate splices
//! those dependencies into every query that selects the field. Two rewrite
//! strategies are provided:
//!
//! * [`replace_computed_with_fragments`] deletes each annotated field and
//!   splices its dependency selections in its place, producing a document
//!   that is safe to send to a server unaware of the annotation.
//! * [`augment_with_fragments`] keeps each annotated field (annotation
//!   intact) and appends its dependency selections as later siblings, for
//!   consumers that still need to see which fields were computed.
//!
//! Dependency fragments may themselves select computed fields; resolution
//! recurses until none remain.
//!
//! ```
//! use graphql_computed::ComputedFieldRegistryBuilder;
//! use graphql_computed::ast;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = ComputedFieldRegistryBuilder::new();
//! builder.add_computed_field_str(
//!     "User",
//!     "fullName",
//!     "fragment FullNameDeps on User { firstName lastName }",
//! )?;
//! let registry = builder.build().unwrap();
//!
//! let query = ast::parse(
//!     r#"query { user { id fullName @computed(type: "User") } }"#,
//! )?;
//! let rewritten =
//!     graphql_computed::replace_computed_with_fragments(query, &registry)?;
//!
//! assert!(!rewritten.to_string().contains("computed"));
//! # Ok(())
//! # }
//! ```

pub mod ast;
mod registry;
mod rewrite;
pub mod visit;

pub use registry::ComputedFieldDescriptor;
pub use registry::ComputedFieldRegistry;
pub use registry::ComputedFieldRegistryBuilder;
pub use registry::EntityTypeDescriptor;
pub use registry::RegistryBuildError;
pub use rewrite::COMPUTED_DIRECTIVE_NAME;
pub use rewrite::ComputedRewrite;
pub use rewrite::RewriteError;
pub use rewrite::augment_with_fragments;
pub use rewrite::has_computed_annotation;
pub use rewrite::replace_computed_with_fragments;
