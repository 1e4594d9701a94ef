use crate::ast;
use crate::rewrite::RewriteError;

/// Name of the
/// [directive](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// that marks a field as computed.
pub const COMPUTED_DIRECTIVE_NAME: &str = "computed";

/// True iff `field` carries a `@computed` directive.
///
/// Selection kinds without a directive list never match; the rewrite only
/// probes fields.
pub fn has_computed_annotation(field: &ast::Field) -> bool {
    computed_directive(field).is_some()
}

/// The first `@computed` directive on `field`, if one is present.
pub(crate) fn computed_directive(field: &ast::Field) -> Option<&ast::Directive> {
    field
        .directives
        .iter()
        .find(|directive| directive.name == COMPUTED_DIRECTIVE_NAME)
}

/// The entity-type name carried by a `@computed` directive's first
/// argument, when that argument exists and holds a string value.
pub(crate) fn type_name_argument(directive: &ast::Directive) -> Option<&str> {
    match directive.arguments.first() {
        Some((_, ast::Value::String(type_name))) => Some(type_name.as_str()),
        _ => None,
    }
}

/// As [`type_name_argument`], but a missing first argument or a non-string
/// argument value is an [`RewriteError::InvalidAnnotation`] error.
/// Arguments past the first are ignored.
pub(crate) fn computed_type_name(
    directive: &ast::Directive,
) -> Result<&str, RewriteError> {
    type_name_argument(directive).ok_or(RewriteError::InvalidAnnotation {
        position: directive.position,
    })
}
