mod computed_field_descriptor;
mod computed_field_registry;
mod computed_field_registry_builder;
mod entity_type_descriptor;

pub use computed_field_descriptor::ComputedFieldDescriptor;
pub use computed_field_registry::ComputedFieldRegistry;
pub use computed_field_registry_builder::ComputedFieldRegistryBuilder;
pub use computed_field_registry_builder::RegistryBuildError;
pub use entity_type_descriptor::EntityTypeDescriptor;
