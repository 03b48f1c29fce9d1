//! Schema translation: introspected relational schema to GraphQL SDL.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `Schema`, `Model`, `Field` - the introspected tables and columns
//!    - `FieldType` / `TypeKind` - closed column type shapes plus the NonNull marker
//!    - `DefaultValue` / `Literal` - column defaults, restricted to scalar literals
//!
//! 2. **Type Mapping** (`types.rs`): native scalar names to IDL type expressions.
//!
//! 3. **Default Policy** (`defaults.rs`): which defaults become `@default` directives.
//!
//! 4. **Enum Collection** (`enums.rs`): one shared declaration per enum name.
//!
//! 5. **Compilers** (`compilers/`): the GraphQL SDL emitter.
//!
//! # Scalar Mapping
//!
//! | Native | IDL |
//! |--------|-----|
//! | String | String |
//! | Int | Int |
//! | Float | Float |
//! | Boolean | Boolean |
//! | ID | ID |
//! | AWSDate, AWSTime, AWSDateTime, AWSTimestamp | same |
//! | AWSJSON, AWSEmail, AWSPhone, AWSURL, AWSIPAddress | same |

mod defaults;
mod definition;
mod enums;
mod types;

pub mod compilers;

pub use compilers::{CompiledSchema, GraphqlCompiler, emit};
pub use defaults::default_annotation;
pub use definition::{
    DefaultKind, DefaultValue, Engine, EnumType, Field, FieldType, Literal, Model, Schema,
    TypeKind,
};
pub use enums::{EnumDeclaration, EnumRegistry};
pub use types::{ScalarType, UnknownScalar, idl_type};

use thiserror::Error;

/// Schema construction and emission errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unsupported scalar type '{scalar}' on field '{model}.{field}'")]
    UnsupportedScalarType {
        model: String,
        field: String,
        scalar: String,
    },

    #[error("No model has a primary key; nothing to emit")]
    NoPrimaryKeyModelsFound,

    #[error("Enum '{name}' is redeclared with a different value set on field '{model}.{field}'")]
    EnumValueSetConflict {
        name: String,
        model: String,
        field: String,
    },

    #[error("Enum '{name}' on field '{model}.{field}' has invalid value '{value}'")]
    InvalidEnumValue {
        name: String,
        value: String,
        model: String,
        field: String,
    },

    #[error("Enum '{name}' on field '{model}.{field}' repeats value '{value}'")]
    DuplicateEnumValue {
        name: String,
        value: String,
        model: String,
        field: String,
    },

    #[error("Invalid type name '{name}' on field '{model}.{field}'")]
    InvalidTypeName {
        name: String,
        model: String,
        field: String,
    },

    #[error("Invalid name '{name}' in model '{model}'")]
    InvalidName { model: String, name: String },

    #[error("Type name '{name}' is declared more than once")]
    DuplicateTypeName { name: String },

    #[error("Primary key of model '{model}' references unknown field '{field}'")]
    UnknownPrimaryKeyField { model: String, field: String },

    #[error("Duplicate model '{name}'")]
    DuplicateModel { name: String },

    #[error("Invalid field type: {message}")]
    InvalidFieldType { message: String },
}
