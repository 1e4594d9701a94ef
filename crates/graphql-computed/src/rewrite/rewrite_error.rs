use crate::ast;
use thiserror::Error;

/// Errors surfaced while rewriting computed fields.
///
/// Every variant is fatal to the call that raised it: the rewrite aborts
/// immediately and no partially-rewritten document is returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RewriteError {
    #[error("`@computed` directive at {position} is missing its entity-type argument")]
    InvalidAnnotation { position: ast::Pos },

    #[error(
        "`@computed` directive at {position} names entity type \
        '{type_name}', which has no registered computed fields"
    )]
    UnknownEntityType {
        type_name: String,
        position: ast::Pos,
    },

    #[error("No computed field '{field_name}' is registered for entity type '{type_name}'")]
    UnknownComputedField {
        type_name: String,
        field_name: String,
        position: ast::Pos,
    },

    #[error("Computed field '{type_name}.{field_name}' declares no dependency")]
    MissingDependency {
        type_name: String,
        field_name: String,
    },

    #[error(
        "The dependency declared for computed field \
        '{type_name}.{field_name}' must begin with a fragment definition \
        carrying a non-empty selection set"
    )]
    MalformedDependency {
        type_name: String,
        field_name: String,
    },
}
