use crate::ast;
use crate::registry::ComputedFieldDescriptor;
use crate::registry::ComputedFieldRegistry;
use crate::registry::EntityTypeDescriptor;
use crate::rewrite::annotation;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<RegistryBuildError>>;

/// Builder for constructing a [`ComputedFieldRegistry`] with validation.
///
/// The `ComputedFieldRegistryBuilder` allows you to incrementally declare
/// computed fields from multiple sources (fragment source strings, parsed
/// documents, pre-built descriptors) and then build an immutable
/// [`ComputedFieldRegistry`] whose dependency graph is known to be acyclic.
///
/// # Example
///
/// ```
/// use graphql_computed::ComputedFieldRegistryBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = ComputedFieldRegistryBuilder::new();
///
/// builder.add_computed_field_str(
///     "User",
///     "fullName",
///     "fragment FullNameDeps on User { firstName lastName }",
/// )?;
///
/// builder.add_computed_field_str(
///     "Post",
///     "excerpt",
///     "fragment ExcerptDeps on Post { body }",
/// )?;
///
/// let registry = builder.build().unwrap();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ComputedFieldRegistryBuilder {
    entity_types: IndexMap<String, EntityTypeDescriptor>,
}

impl ComputedFieldRegistryBuilder {
    /// Create a new empty `ComputedFieldRegistryBuilder`.
    pub fn new() -> Self {
        Self {
            entity_types: IndexMap::new(),
        }
    }

    /// Declare `dependency` as the dependency document of
    /// `type_name.field_name`.
    ///
    /// Returns an error if the same (type, field) pair was already
    /// declared.
    pub fn add_computed_field(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        dependency: ast::Document,
    ) -> std::result::Result<(), RegistryBuildError> {
        self.add_field_descriptor(
            type_name,
            field_name,
            ComputedFieldDescriptor::new(Some(dependency)),
        )
    }

    /// Parse `source` as a dependency fragment document and declare it for
    /// `type_name.field_name`.
    pub fn add_computed_field_str(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        source: impl AsRef<str>,
    ) -> std::result::Result<(), RegistryBuildError> {
        let type_name = type_name.into();
        let field_name = field_name.into();

        let dependency = ast::parse(source.as_ref()).map_err(|err| {
            RegistryBuildError::ParseError {
                type_name: type_name.clone(),
                field_name: field_name.clone(),
                message: err.to_string(),
            }
        })?;

        self.add_computed_field(type_name, field_name, dependency)
    }

    /// Declare a pre-built [`ComputedFieldDescriptor`] for
    /// `type_name.field_name`.
    ///
    /// The descriptor's shape is not validated here; a dependency-less or
    /// malformed descriptor surfaces as a resolution error when a rewrite
    /// first reaches it.
    pub fn add_field_descriptor(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        descriptor: ComputedFieldDescriptor,
    ) -> std::result::Result<(), RegistryBuildError> {
        let type_name = type_name.into();
        let field_name = field_name.into();

        let entity_type = self
            .entity_types
            .entry(type_name.clone())
            .or_insert_with(|| EntityTypeDescriptor {
                fields: IndexMap::new(),
            });

        match entity_type.fields.entry(field_name) {
            Entry::Occupied(entry) => {
                Err(RegistryBuildError::DuplicateComputedField {
                    type_name,
                    field_name: entry.key().clone(),
                })
            },
            Entry::Vacant(entry) => {
                entry.insert(descriptor);
                Ok(())
            },
        }
    }

    /// Build the immutable [`ComputedFieldRegistry`].
    ///
    /// Validates that the declared dependency graph is acyclic: a
    /// dependency fragment that transitively selects its own (type, field)
    /// pair through nested `@computed` directives would otherwise recurse
    /// without bound at rewrite time. Phase-shifted duplicates of the same
    /// cycle (e.g. `A → B → A` found again as `B → A → B`) are reported
    /// once.
    ///
    /// If any validation errors are found, returns all errors at once
    /// rather than failing on the first error.
    pub fn build(self) -> Result<ComputedFieldRegistry> {
        let errors = self.validate_no_cycles();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ComputedFieldRegistry {
            entity_types: self.entity_types,
        })
    }

    fn validate_no_cycles(&self) -> Vec<RegistryBuildError> {
        let mut errors = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();

        for (type_name, entity_type) in &self.entity_types {
            for field_name in entity_type.fields.keys() {
                let mut path = Vec::new();
                let mut visiting = HashSet::new();

                self.check_field_cycles(
                    type_name,
                    field_name,
                    &mut path,
                    &mut visiting,
                    &mut errors,
                    &mut seen_normalized_cycles,
                );
            }
        }

        errors
    }

    fn check_field_cycles(
        &self,
        type_name: &str,
        field_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<RegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        let node = format!("{type_name}.{field_name}");

        // Cycle detected
        if visiting.contains(&node) {
            path.push(node);

            let normalized = Self::normalize_cycle(path);
            if !seen_normalized.contains(&normalized) {
                seen_normalized.insert(normalized);
                errors.push(RegistryBuildError::DependencyCycleDetected {
                    cycle_path: path.clone(),
                });
            }

            path.pop();
            return;
        }

        // Edges into unregistered pairs, missing dependencies, and
        // malformed dependency documents are resolution-time concerns; the
        // cycle walk skips them.
        let Some(descriptor) = self
            .entity_types
            .get(type_name)
            .and_then(|entity_type| entity_type.fields.get(field_name))
        else {
            return;
        };
        let Some(dependency) = descriptor.dependency.as_ref() else {
            return;
        };
        let Some(ast::Definition::Fragment(frag_def)) =
            dependency.definitions.first()
        else {
            return;
        };

        path.push(node.clone());
        visiting.insert(node.clone());

        self.check_selection_set_cycles(
            &frag_def.selection_set,
            path,
            visiting,
            errors,
            seen_normalized,
        );

        path.pop();
        visiting.remove(&node);
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &ast::SelectionSet,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<RegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::Field(field) => {
                    let next = annotation::computed_directive(field)
                        .and_then(annotation::type_name_argument);
                    if let Some(next_type_name) = next {
                        self.check_field_cycles(
                            next_type_name,
                            field.name.as_str(),
                            path,
                            visiting,
                            errors,
                            seen_normalized,
                        );
                    }

                    self.check_selection_set_cycles(
                        &field.selection_set,
                        path,
                        visiting,
                        errors,
                        seen_normalized,
                    );
                },

                ast::Selection::InlineFragment(inline) => {
                    self.check_selection_set_cycles(
                        &inline.selection_set,
                        path,
                        visiting,
                        errors,
                        seen_normalized,
                    );
                },

                // Named spreads inside a dependency refer to fragments the
                // host document supplies; they carry no dependency edge.
                ast::Selection::FragmentSpread(_) => (),
            }
        }
    }

    /// Normalize a cycle to canonical form for deduplication.
    ///
    /// Cycles that are rotations of each other are the same cycle:
    /// `[A, B, C, A]` and `[B, C, A, B]` both normalize to `[A, B, C, A]`.
    /// The cycle body is rotated to lead with its lexicographically
    /// smallest node, then re-closed.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        let Some((_, body)) = cycle.split_last() else {
            return Vec::new();
        };
        if body.is_empty() {
            return cycle.to_vec();
        }

        let lead_idx = body
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = Vec::with_capacity(cycle.len());
        normalized.extend_from_slice(&body[lead_idx..]);
        normalized.extend_from_slice(&body[..lead_idx]);
        normalized.push(normalized[0].clone());

        normalized
    }
}

impl Default for ComputedFieldRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryBuildError {
    #[error("Computed field '{type_name}.{field_name}' is declared more than once")]
    DuplicateComputedField {
        type_name: String,
        field_name: String,
    },

    #[error("Dependency cycle detected: {}", format_cycle_path(.cycle_path))]
    DependencyCycleDetected { cycle_path: Vec<String> },

    #[error("Failed to parse the dependency declared for '{type_name}.{field_name}': {message}")]
    ParseError {
        type_name: String,
        field_name: String,
        message: String,
    },
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
