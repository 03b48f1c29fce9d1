//! Shared enum declarations.
//!
//! Postgres enum types are schema-level objects, so several tables can use the
//! same one. Each distinct enum name gets exactly one declaration, in the order
//! it is first seen, and every referencing field points at that declaration.
//! Enum names and values must be GraphQL names, and a value may appear only
//! once per declaration.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::SchemaError;
use crate::escape::is_name;
use super::definition::{EnumType, FieldType, Model, TypeKind};

/// A single enum declaration in the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    pub values: Vec<String>,
}

/// Distinct enum declarations in first-seen order, with lookup by name.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    declarations: Vec<EnumDeclaration>,
    index: HashMap<String, usize>,
}

impl EnumRegistry {
    /// Walks models then fields in order and registers every enum type found.
    ///
    /// Fails with `EnumValueSetConflict` when a name is reused with a different
    /// set of values. Value order does not matter for the comparison.
    pub fn collect(models: &[Model]) -> Result<Self, SchemaError> {
        let mut registry = Self::default();
        for model in models {
            for field in &model.fields {
                registry.visit(&model.name, &field.name, &field.field_type)?;
            }
        }
        Ok(registry)
    }

    fn visit(&mut self, model: &str, field: &str, field_type: &FieldType) -> Result<(), SchemaError> {
        match &field_type.kind {
            TypeKind::Enum(enum_type) => self.register(model, field, enum_type),
            TypeKind::List(element) => self.visit(model, field, element),
            TypeKind::Scalar(_) | TypeKind::Custom(_) => Ok(()),
        }
    }

    fn register(&mut self, model: &str, field: &str, enum_type: &EnumType) -> Result<(), SchemaError> {
        validate(model, field, enum_type)?;

        if let Some(&position) = self.index.get(&enum_type.name) {
            let existing = &self.declarations[position];
            if value_set(&existing.values) != value_set(&enum_type.values) {
                return Err(SchemaError::EnumValueSetConflict {
                    name: enum_type.name.clone(),
                    model: model.to_string(),
                    field: field.to_string(),
                });
            }
            return Ok(());
        }

        self.index
            .insert(enum_type.name.clone(), self.declarations.len());
        self.declarations.push(EnumDeclaration {
            name: enum_type.name.clone(),
            values: enum_type.values.clone(),
        });
        Ok(())
    }

    /// Returns the declarations in first-seen order.
    pub fn declarations(&self) -> &[EnumDeclaration] {
        &self.declarations
    }

    pub fn get(&self, name: &str) -> Option<&EnumDeclaration> {
        self.index.get(name).map(|&i| &self.declarations[i])
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Checks that the enum renders as a valid GraphQL enum declaration.
fn validate(model: &str, field: &str, enum_type: &EnumType) -> Result<(), SchemaError> {
    if !is_name(&enum_type.name) {
        return Err(SchemaError::InvalidTypeName {
            name: enum_type.name.clone(),
            model: model.to_string(),
            field: field.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for value in &enum_type.values {
        // GraphQL reserves these as literal values.
        if !is_name(value) || matches!(value.as_str(), "true" | "false" | "null") {
            return Err(SchemaError::InvalidEnumValue {
                name: enum_type.name.clone(),
                value: value.clone(),
                model: model.to_string(),
                field: field.to_string(),
            });
        }
        if !seen.insert(value.as_str()) {
            return Err(SchemaError::DuplicateEnumValue {
                name: enum_type.name.clone(),
                value: value.clone(),
                model: model.to_string(),
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

fn value_set(values: &[String]) -> BTreeSet<&str> {
    values.iter().map(String::as_str).collect()
}
