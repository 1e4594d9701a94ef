use crate::registry::EntityTypeDescriptor;
use indexmap::IndexMap;

/// A caller-owned mapping from entity-type name to the computed fields
/// declared for that type.
///
/// Registries are assembled with a
/// [`ComputedFieldRegistryBuilder`](crate::ComputedFieldRegistryBuilder)
/// and are read-only afterward. The rewrite never mutates a registry:
/// dependency fragments are cloned out of it before their selections are
/// spliced into an output tree, so mutating rewrite output cannot corrupt
/// registry state.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedFieldRegistry {
    pub(super) entity_types: IndexMap<String, EntityTypeDescriptor>,
}
impl ComputedFieldRegistry {
    /// The [`EntityTypeDescriptor`] registered for `type_name`, if any.
    pub fn entity_type(&self, type_name: &str) -> Option<&EntityTypeDescriptor> {
        self.entity_types.get(type_name)
    }

    pub fn entity_types(&self) -> &IndexMap<String, EntityTypeDescriptor> {
        &self.entity_types
    }
}
