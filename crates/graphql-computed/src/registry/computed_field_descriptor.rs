use crate::ast;

/// Declares how a single computed field is derived.
///
/// The dependency is an executable document whose first definition must be
/// a fragment definition with a non-empty selection set. A descriptor that
/// violates this shape (or carries no dependency at all) is reported as a
/// resolution error the first time a rewrite reaches it; it is never a
/// silent no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedFieldDescriptor {
    pub(super) dependency: Option<ast::Document>,
}
impl ComputedFieldDescriptor {
    pub fn new(dependency: Option<ast::Document>) -> Self {
        Self { dependency }
    }

    /// The dependency document declared for this field, if any.
    pub fn dependency(&self) -> Option<&ast::Document> {
        self.dependency.as_ref()
    }
}
