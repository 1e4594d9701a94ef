use crate::ast;
use crate::visit::Edit;

/// A transformation applied while walking an executable document tree.
///
/// Every hook has a no-op default, so implementations override only the
/// node kinds they care about. Hooks fire on entry: `enter_selection_set`
/// runs before the set's items are visited, and the result a hook returns
/// is what the driver proceeds with.
pub trait DocumentTransform {
    type Error;

    fn enter_selection(
        &mut self,
        selection: ast::Selection,
    ) -> Result<Edit<ast::Selection>, Self::Error> {
        Ok(Edit::Keep(selection))
    }

    fn enter_selection_set(
        &mut self,
        selection_set: ast::SelectionSet,
    ) -> Result<ast::SelectionSet, Self::Error> {
        Ok(selection_set)
    }

    fn enter_directive(
        &mut self,
        directive: ast::Directive,
    ) -> Result<Edit<ast::Directive>, Self::Error> {
        Ok(Edit::Keep(directive))
    }
}
