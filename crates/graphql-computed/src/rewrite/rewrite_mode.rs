/// Which rewrite strategy a traversal is driving.
///
/// `Replace` deletes each computed field and splices its dependency
/// selections in its place; `Augment` keeps the field, annotation intact,
/// and appends the dependency selections as later siblings. Dependency
/// resolution recurses in whichever mode the caller selected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RewriteMode {
    Replace,
    Augment,
}
