use crate::ast;
use crate::rewrite::RewriteError;
use crate::rewrite::annotation::COMPUTED_DIRECTIVE_NAME;
use crate::visit::DocumentTransform;
use crate::visit::Edit;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// The normalization pass of the replace-mode rewrite.
///
/// Expansion can leave a selection set holding several fields that answer
/// to the same response key; this pass coalesces each such group into one
/// field and strips the now-resolved `computed` directives. Running it over
/// already-normalized output changes nothing.
pub(crate) struct NormalizeSelections;

impl DocumentTransform for NormalizeSelections {
    type Error = RewriteError;

    fn enter_selection_set(
        &mut self,
        selection_set: ast::SelectionSet,
    ) -> Result<ast::SelectionSet, RewriteError> {
        Ok(merge_selection_set(selection_set))
    }

    fn enter_directive(
        &mut self,
        directive: ast::Directive,
    ) -> Result<Edit<ast::Directive>, RewriteError> {
        if directive.name == COMPUTED_DIRECTIVE_NAME {
            Ok(Edit::Delete)
        } else {
            Ok(Edit::Keep(directive))
        }
    }
}

/// Coalesces same-response-key fields within one selection list.
///
/// Fields are grouped by response key and merged in first-seen order.
/// Non-field selections (fragment spreads, inline fragments) keep their
/// relative order and move ahead of the merged fields; the merged fields
/// follow in first-seen-key order. The original interleaving of fields and
/// non-fields is not preserved.
fn merge_selection_set(selection_set: ast::SelectionSet) -> ast::SelectionSet {
    let ast::SelectionSet { span, items } = selection_set;

    let mut non_fields = Vec::new();
    let mut fields_by_key: IndexMap<String, ast::Field> = IndexMap::new();
    for selection in items {
        match selection {
            ast::Selection::Field(field) => {
                match fields_by_key.entry(response_key(&field).to_string()) {
                    Entry::Occupied(mut entry) =>
                        merge_field(entry.get_mut(), field),
                    Entry::Vacant(entry) => {
                        entry.insert(field);
                    },
                }
            },
            selection => non_fields.push(selection),
        }
    }

    let mut items = non_fields;
    items.extend(fields_by_key.into_values().map(ast::Selection::Field));

    ast::SelectionSet { span, items }
}

/// The key this field's value appears under in a response: its alias if one
/// was specified, otherwise its name.
fn response_key(field: &ast::Field) -> &str {
    field.alias.as_deref().unwrap_or(field.name.as_str())
}

/// Folds `next` into `merged`.
///
/// Scalar properties take the later field's value (an unset alias does not
/// clear an earlier one); list properties (arguments, directives, child
/// selections) concatenate, so both occurrences contribute the union of
/// their sub-selections.
fn merge_field(merged: &mut ast::Field, next: ast::Field) {
    let ast::Field {
        position,
        alias,
        name,
        arguments,
        directives,
        selection_set,
    } = next;

    merged.position = position;
    merged.name = name;
    if alias.is_some() {
        merged.alias = alias;
    }
    merged.arguments.extend(arguments);
    merged.directives.extend(directives);
    merged.selection_set.span = selection_set.span;
    merged.selection_set.items.extend(selection_set.items);
}
