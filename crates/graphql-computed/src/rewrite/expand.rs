use crate::ast;
use crate::registry::ComputedFieldRegistry;
use crate::rewrite::RewriteError;
use crate::rewrite::RewriteMode;
use crate::rewrite::annotation;
use crate::rewrite::resolver;
use crate::visit::DocumentTransform;
use crate::visit::Edit;

/// The expansion pass shared by both rewrite modes.
///
/// Each computed field encountered during traversal is resolved through the
/// registry and structurally replaced: replace-mode splices in the resolved
/// fragment's top-level selections, augment-mode splices in the original
/// field followed by those selections. Spliced selections arrive fully
/// resolved from the recursive rewrite inside
/// [`resolver::resolve_dependency`], so the driver's no-re-descent contract
/// leaves nothing unexpanded.
pub(crate) struct ExpandComputed<'reg> {
    pub(crate) mode: RewriteMode,
    pub(crate) registry: &'reg ComputedFieldRegistry,
}

impl DocumentTransform for ExpandComputed<'_> {
    type Error = RewriteError;

    fn enter_selection(
        &mut self,
        selection: ast::Selection,
    ) -> Result<Edit<ast::Selection>, RewriteError> {
        let field = match selection {
            ast::Selection::Field(field) => field,
            selection => return Ok(Edit::Keep(selection)),
        };
        if !annotation::has_computed_annotation(&field) {
            return Ok(Edit::Keep(ast::Selection::Field(field)));
        }

        let frag_def =
            resolver::resolve_dependency(&field, self.registry, self.mode)?;

        let mut selections =
            Vec::with_capacity(frag_def.selection_set.items.len() + 1);
        if self.mode == RewriteMode::Augment {
            selections.push(ast::Selection::Field(field));
        }
        selections.extend(frag_def.selection_set.items);

        Ok(Edit::Splice(selections))
    }
}
