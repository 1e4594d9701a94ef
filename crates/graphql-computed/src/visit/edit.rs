/// Structural outcome returned from a [`DocumentTransform`] entry hook.
///
/// [`DocumentTransform`]: crate::visit::DocumentTransform
#[derive(Clone, Debug, PartialEq)]
pub enum Edit<T> {
    /// Leave the node in place; the driver descends into its children.
    Keep(T),

    /// Substitute a single replacement node. The replacement is spliced in
    /// place of the original and is not re-descended.
    Replace(T),

    /// Substitute an ordered list of replacement nodes. The parent's child
    /// list grows in place at this position, preserving the relative order
    /// of surrounding siblings. Replacements are not re-descended.
    Splice(Vec<T>),

    /// Remove the node from its parent container.
    Delete,
}
