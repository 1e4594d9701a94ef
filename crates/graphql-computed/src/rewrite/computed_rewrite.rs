use crate::ast;
use crate::registry::ComputedFieldRegistry;
use crate::rewrite::RewriteError;
use crate::rewrite::RewriteMode;
use crate::rewrite::expand::ExpandComputed;
use crate::rewrite::normalize::NormalizeSelections;
use crate::visit;

type Result<T> = std::result::Result<T, RewriteError>;

/// Rewrites `document`, deleting every `@computed`-annotated field and
/// splicing the selections of its (recursively resolved) dependency
/// fragment in its place, then coalescing selections that ended up sharing
/// a response key and stripping the annotation directives.
///
/// The output is safe to execute against a server unaware of the
/// annotation: no `computed` directive survives anywhere in the tree.
pub fn replace_computed_with_fragments(
    document: ast::Document,
    registry: &ComputedFieldRegistry,
) -> Result<ast::Document> {
    document.replace_computed(registry)
}

/// Rewrites `document`, keeping every `@computed`-annotated field (with its
/// annotation directive intact) and appending the selections of its
/// resolved dependency fragment as later siblings in the same selection
/// set.
///
/// Meant for consumers (e.g. a local cache layer) that still need to see
/// which fields were marked as computed, with each field's data
/// dependencies made explicit alongside it. No field merging and no
/// directive stripping is performed in this mode.
pub fn augment_with_fragments(
    document: ast::Document,
    registry: &ComputedFieldRegistry,
) -> Result<ast::Document> {
    document.augment_computed(registry)
}

/// Tree categories the computed-field rewrite applies to.
///
/// Both methods consume the tree and return a rewritten tree of the same
/// node category, leaving the registry untouched.
pub trait ComputedRewrite: Sized {
    /// Applies the replace-mode rewrite
    /// (see [`replace_computed_with_fragments`]).
    fn replace_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self>;

    /// Applies the augment-mode rewrite (see [`augment_with_fragments`]).
    fn augment_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self>;
}

impl ComputedRewrite for ast::Document {
    fn replace_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self> {
        let expanded = visit::transform_document(
            self,
            &mut ExpandComputed {
                mode: RewriteMode::Replace,
                registry,
            },
        )?;
        visit::transform_document(expanded, &mut NormalizeSelections)
    }

    fn augment_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self> {
        visit::transform_document(
            self,
            &mut ExpandComputed {
                mode: RewriteMode::Augment,
                registry,
            },
        )
    }
}

impl ComputedRewrite for ast::Definition {
    fn replace_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self> {
        let expanded = visit::transform_definition(
            self,
            &mut ExpandComputed {
                mode: RewriteMode::Replace,
                registry,
            },
        )?;
        visit::transform_definition(expanded, &mut NormalizeSelections)
    }

    fn augment_computed(
        self,
        registry: &ComputedFieldRegistry,
    ) -> Result<Self> {
        visit::transform_definition(
            self,
            &mut ExpandComputed {
                mode: RewriteMode::Augment,
                registry,
            },
        )
    }
}

/// Applies the whole `mode` rewrite to a single fragment definition.
///
/// Dependency resolution calls this on each dependency fragment it pulls
/// from the registry, so nested computed directives are resolved before the
/// fragment's selections are handed back for splicing.
pub(crate) fn rewrite_fragment_definition(
    frag_def: ast::FragmentDefinition,
    registry: &ComputedFieldRegistry,
    mode: RewriteMode,
) -> Result<ast::FragmentDefinition> {
    let expanded = visit::transform_fragment_definition(
        frag_def,
        &mut ExpandComputed { mode, registry },
    )?;
    match mode {
        RewriteMode::Replace =>
            visit::transform_fragment_definition(
                expanded,
                &mut NormalizeSelections,
            ),
        RewriteMode::Augment => Ok(expanded),
    }
}
