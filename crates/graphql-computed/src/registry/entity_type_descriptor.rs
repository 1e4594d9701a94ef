use crate::registry::ComputedFieldDescriptor;
use indexmap::IndexMap;

/// The computed fields declared for a single entity type.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityTypeDescriptor {
    pub(super) fields: IndexMap<String, ComputedFieldDescriptor>,
}
impl EntityTypeDescriptor {
    /// The descriptor registered for `field_name`, if any.
    pub fn field(&self, field_name: &str) -> Option<&ComputedFieldDescriptor> {
        self.fields.get(field_name)
    }

    /// A map from field name to [`ComputedFieldDescriptor`] for every
    /// computed field declared on this type.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain
    /// the same ordering as the order in which fields were registered.
    pub fn fields(&self) -> &IndexMap<String, ComputedFieldDescriptor> {
        &self.fields
    }
}
