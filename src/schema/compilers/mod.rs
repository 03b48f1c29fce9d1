//! Schema compilers.
//!
//! Generate IDL text from backend-agnostic schema definitions. Output is a pure
//! function of the inputs so that generated documents can be diffed across runs.

pub mod graphql;

pub use graphql::{CompiledSchema, GraphqlCompiler};

use crate::config::DataSourceConfig;

use super::{Schema, SchemaError};

/// Compile `schema` into a GraphQL SDL document.
///
/// Shorthand for [`GraphqlCompiler::compile`] when the skipped model names
/// are not needed.
pub fn emit(schema: &Schema, config: Option<&DataSourceConfig>) -> Result<String, SchemaError> {
    GraphqlCompiler::compile(schema, config).map(|compiled| compiled.sdl)
}
