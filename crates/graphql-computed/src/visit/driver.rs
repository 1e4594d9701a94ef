use crate::ast;
use crate::visit::DocumentTransform;
use crate::visit::Edit;

/// Rebuilds `document` by running `transform` over every definition.
pub fn transform_document<T: DocumentTransform>(
    document: ast::Document,
    transform: &mut T,
) -> Result<ast::Document, T::Error> {
    let mut definitions = Vec::with_capacity(document.definitions.len());
    for definition in document.definitions {
        definitions.push(transform_definition(definition, transform)?);
    }
    Ok(ast::Document { definitions })
}

/// Rebuilds a single operation or fragment definition.
pub fn transform_definition<T: DocumentTransform>(
    definition: ast::Definition,
    transform: &mut T,
) -> Result<ast::Definition, T::Error> {
    Ok(match definition {
        ast::Definition::Operation(op_def) =>
            ast::Definition::Operation(transform_operation(op_def, transform)?),

        ast::Definition::Fragment(frag_def) =>
            ast::Definition::Fragment(
                transform_fragment_definition(frag_def, transform)?,
            ),
    })
}

pub fn transform_operation<T: DocumentTransform>(
    operation: ast::OperationDefinition,
    transform: &mut T,
) -> Result<ast::OperationDefinition, T::Error> {
    use ast::OperationDefinition as OpDef;
    Ok(match operation {
        OpDef::SelectionSet(sel_set) =>
            OpDef::SelectionSet(transform_selection_set(sel_set, transform)?),

        OpDef::Query(query) => {
            let ast::Query {
                position,
                name,
                variable_definitions,
                directives,
                selection_set,
            } = query;
            OpDef::Query(ast::Query {
                position,
                name,
                variable_definitions,
                directives: transform_directives(directives, transform)?,
                selection_set: transform_selection_set(selection_set, transform)?,
            })
        },

        OpDef::Mutation(mutation) => {
            let ast::Mutation {
                position,
                name,
                variable_definitions,
                directives,
                selection_set,
            } = mutation;
            OpDef::Mutation(ast::Mutation {
                position,
                name,
                variable_definitions,
                directives: transform_directives(directives, transform)?,
                selection_set: transform_selection_set(selection_set, transform)?,
            })
        },

        OpDef::Subscription(subscription) => {
            let ast::Subscription {
                position,
                name,
                variable_definitions,
                directives,
                selection_set,
            } = subscription;
            OpDef::Subscription(ast::Subscription {
                position,
                name,
                variable_definitions,
                directives: transform_directives(directives, transform)?,
                selection_set: transform_selection_set(selection_set, transform)?,
            })
        },
    })
}

pub fn transform_fragment_definition<T: DocumentTransform>(
    frag_def: ast::FragmentDefinition,
    transform: &mut T,
) -> Result<ast::FragmentDefinition, T::Error> {
    let ast::FragmentDefinition {
        position,
        name,
        type_condition,
        directives,
        selection_set,
    } = frag_def;
    Ok(ast::FragmentDefinition {
        position,
        name,
        type_condition,
        directives: transform_directives(directives, transform)?,
        selection_set: transform_selection_set(selection_set, transform)?,
    })
}

/// Rebuilds a selection set: the set-level hook runs first, then each item
/// passes through the selection hook, with structural edits spliced into
/// the rebuilt item list.
pub fn transform_selection_set<T: DocumentTransform>(
    selection_set: ast::SelectionSet,
    transform: &mut T,
) -> Result<ast::SelectionSet, T::Error> {
    let ast::SelectionSet { span, items } =
        transform.enter_selection_set(selection_set)?;

    let mut transformed_items = Vec::with_capacity(items.len());
    for selection in items {
        match transform.enter_selection(selection)? {
            Edit::Keep(selection) => transformed_items.push(
                transform_selection_children(selection, transform)?,
            ),
            Edit::Replace(selection) => transformed_items.push(selection),
            Edit::Splice(selections) => transformed_items.extend(selections),
            Edit::Delete => (),
        }
    }

    Ok(ast::SelectionSet {
        span,
        items: transformed_items,
    })
}

fn transform_selection_children<T: DocumentTransform>(
    selection: ast::Selection,
    transform: &mut T,
) -> Result<ast::Selection, T::Error> {
    Ok(match selection {
        ast::Selection::Field(field) => {
            let ast::Field {
                position,
                alias,
                name,
                arguments,
                directives,
                selection_set,
            } = field;
            ast::Selection::Field(ast::Field {
                position,
                alias,
                name,
                arguments,
                directives: transform_directives(directives, transform)?,
                selection_set: transform_selection_set(selection_set, transform)?,
            })
        },

        ast::Selection::FragmentSpread(spread) => {
            let ast::FragmentSpread {
                position,
                fragment_name,
                directives,
            } = spread;
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                position,
                fragment_name,
                directives: transform_directives(directives, transform)?,
            })
        },

        ast::Selection::InlineFragment(inline) => {
            let ast::InlineFragment {
                position,
                type_condition,
                directives,
                selection_set,
            } = inline;
            ast::Selection::InlineFragment(ast::InlineFragment {
                position,
                type_condition,
                directives: transform_directives(directives, transform)?,
                selection_set: transform_selection_set(selection_set, transform)?,
            })
        },
    })
}

fn transform_directives<T: DocumentTransform>(
    directives: Vec<ast::Directive>,
    transform: &mut T,
) -> Result<Vec<ast::Directive>, T::Error> {
    let mut transformed = Vec::with_capacity(directives.len());
    for directive in directives {
        match transform.enter_directive(directive)? {
            Edit::Keep(directive) | Edit::Replace(directive) =>
                transformed.push(directive),
            Edit::Splice(directives) => transformed.extend(directives),
            Edit::Delete => (),
        }
    }
    Ok(transformed)
}
