//! schema_idl library - relational schema to GraphQL SDL translator
//!
//! Provides the schema model, the SDL compiler, data-source routing, and the
//! command execution and output formatting used by the `schema_idl` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod datasource;
pub mod escape;
pub mod logging;
pub mod output;
pub mod schema;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
