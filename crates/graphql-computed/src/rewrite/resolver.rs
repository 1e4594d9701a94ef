use crate::ast;
use crate::registry::ComputedFieldRegistry;
use crate::rewrite::RewriteError;
use crate::rewrite::RewriteMode;
use crate::rewrite::annotation;
use crate::rewrite::computed_rewrite::rewrite_fragment_definition;

type Result<T> = std::result::Result<T, RewriteError>;

/// Resolves the dependency declared for a computed field.
///
/// `field` is expected to carry a `@computed` directive; lookup uses the
/// field's declared name (aliases are ignored). The returned fragment is a
/// copy of the registry's dependency with this same rewrite already applied
/// to it in `mode`, so the caller can splice its selections without any
/// further resolution.
pub(crate) fn resolve_dependency(
    field: &ast::Field,
    registry: &ComputedFieldRegistry,
    mode: RewriteMode,
) -> Result<ast::FragmentDefinition> {
    let directive = annotation::computed_directive(field).ok_or(
        RewriteError::InvalidAnnotation {
            position: field.position,
        },
    )?;
    let type_name = annotation::computed_type_name(directive)?;

    let descriptor = registry
        .entity_type(type_name)
        .ok_or_else(|| RewriteError::UnknownEntityType {
            type_name: type_name.to_string(),
            position: field.position,
        })?
        .field(field.name.as_str())
        .ok_or_else(|| RewriteError::UnknownComputedField {
            type_name: type_name.to_string(),
            field_name: field.name.clone(),
            position: field.position,
        })?;

    let dependency =
        descriptor
            .dependency()
            .ok_or_else(|| RewriteError::MissingDependency {
                type_name: type_name.to_string(),
                field_name: field.name.clone(),
            })?;

    let frag_def = match dependency.definitions.first() {
        Some(ast::Definition::Fragment(frag_def))
            if !frag_def.selection_set.items.is_empty() =>
        {
            frag_def.clone()
        },
        _ => {
            return Err(RewriteError::MalformedDependency {
                type_name: type_name.to_string(),
                field_name: field.name.clone(),
            });
        },
    };

    log::trace!(
        "Resolving computed field '{}.{}' via fragment '{}'",
        type_name,
        field.name,
        frag_def.name,
    );

    rewrite_fragment_definition(frag_def, registry, mode)
}
