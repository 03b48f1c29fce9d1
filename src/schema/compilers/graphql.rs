//! GraphQL SDL compiler.
//!
//! Produces a document in three sections, separated by blank lines:
//! ```graphql
//! input DataSource {            # only when a configuration is supplied
//!   identifier: String = "ID1234567890"
//!   engine: String = "mysql"
//!   connectionUriSecret: String = "CONN_STR"
//! }
//!
//! enum UserStatus {
//!   ACTIVE
//!   INACTIVE
//! }
//!
//! type User @model @primaryKey(fields: ["id"]) {
//!   id: String!
//!   status: UserStatus @default(value: "ACTIVE")
//! }
//! ```

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{DataSourceConfig, VpcConfig};
use crate::escape::{is_name, quote};
use crate::schema::defaults::default_directive;
use crate::schema::enums::{EnumDeclaration, EnumRegistry};
use crate::schema::types::{ScalarType, idl_type};
use crate::schema::{Engine, Field, Model, Schema, SchemaError};

/// A compiled document plus the models left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    pub sdl: String,
    /// Models skipped for lacking a primary key, in schema order.
    pub skipped_models: Vec<String>,
}

/// Compiler for generating GraphQL SDL from schema definitions.
pub struct GraphqlCompiler;

impl GraphqlCompiler {
    /// Compile a whole schema, optionally prefixed by a data-source block.
    ///
    /// Models without a primary key are skipped with a warning. Fails when no
    /// model has a primary key, when two declarations share a type name, or on
    /// the first invalid name, enum, scalar or key.
    pub fn compile(
        schema: &Schema,
        config: Option<&DataSourceConfig>,
    ) -> Result<CompiledSchema, SchemaError> {
        let enums = EnumRegistry::collect(schema.models())?;

        let (keyed, unkeyed) = partition_models(schema.models());
        for model in &unkeyed {
            warn!(model = %model.name, "Skipping model without a primary key");
        }
        if keyed.is_empty() {
            return Err(SchemaError::NoPrimaryKeyModelsFound);
        }
        check_type_names(&enums, &keyed, config)?;

        let mut blocks = Vec::new();
        if let Some(config) = config {
            blocks.extend(Self::compile_config(schema.engine(), config));
        }
        blocks.extend(enums.declarations().iter().map(Self::compile_enum));
        for model in &keyed {
            blocks.push(Self::compile_model(model)?);
        }

        debug!(
            models = keyed.len(),
            enums = enums.len(),
            skipped = unkeyed.len(),
            "Compiled GraphQL schema"
        );

        let mut sdl = blocks.join("\n\n");
        sdl.push('\n');

        Ok(CompiledSchema {
            sdl,
            skipped_models: unkeyed.iter().map(|m| m.name.clone()).collect(),
        })
    }

    /// Generate an enum declaration.
    ///
    /// ```graphql
    /// enum UserStatus {
    ///   ACTIVE
    ///   INACTIVE
    /// }
    /// ```
    pub fn compile_enum(declaration: &EnumDeclaration) -> String {
        let values = declaration
            .values
            .iter()
            .map(|v| format!("  {}", v))
            .collect::<Vec<_>>()
            .join("\n");

        format!("enum {} {{\n{}\n}}", declaration.name, values)
    }

    /// Generate a type declaration for a model with a primary key.
    ///
    /// ```graphql
    /// type User @model @primaryKey(fields: ["id"]) {
    ///   id: String!
    ///   name: String
    /// }
    /// ```
    pub fn compile_model(model: &Model) -> Result<String, SchemaError> {
        let names = std::iter::once(&model.name).chain(model.fields.iter().map(|f| &f.name));
        for name in names {
            if !is_name(name) {
                return Err(SchemaError::InvalidName {
                    model: model.name.clone(),
                    name: name.clone(),
                });
            }
        }

        if let Some(missing) = model.primary_key.iter().find(|key| model.field(key).is_none()) {
            return Err(SchemaError::UnknownPrimaryKeyField {
                model: model.name.clone(),
                field: missing.clone(),
            });
        }

        let fields = model
            .fields
            .iter()
            .map(|f| Self::compile_field(&model.name, f))
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        let key_fields = model
            .primary_key
            .iter()
            .map(|k| quote(k))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "type {} @model @primaryKey(fields: [{}]) {{\n{}\n}}",
            model.name, key_fields, fields
        ))
    }

    /// Generate one field line, with its `@default` directive when eligible.
    pub fn compile_field(model_name: &str, field: &Field) -> Result<String, SchemaError> {
        let type_expr =
            idl_type(&field.field_type).map_err(|unknown| SchemaError::UnsupportedScalarType {
                model: model_name.to_string(),
                field: field.name.clone(),
                scalar: unknown.0,
            })?;

        Ok(format!(
            "  {}: {}{}",
            field.name,
            type_expr,
            default_directive(field)
        ))
    }

    /// Generate the data-source block, plus the subnet input type it uses.
    ///
    /// ```graphql
    /// input DataSource {
    ///   identifier: String = "ID1234567890"
    ///   engine: String = "postgresql"
    ///   connectionUriSecret: String = "CONN_STR"
    ///   sslCertificateSecret: String = "SSL_CERT"
    ///   vpcId: String = "vpc-1"
    ///   securityGroupIds: [String] = ["sg1"]
    ///   subnetAvailabilityZones: [SubnetAvailabilityZone] = [{subnetId: "sb1", availabilityZone: "az1"}]
    /// }
    /// ```
    pub fn compile_config(engine: Engine, config: &DataSourceConfig) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(identifier) = &config.identifier {
            lines.push(format!("  identifier: String = {}", quote(identifier)));
        }
        lines.push(format!("  engine: String = {}", quote(engine.config_name())));
        lines.push(format!(
            "  connectionUriSecret: String = {}",
            quote(&config.secret_names.connection_uri)
        ));
        if let Some(ssl) = &config.secret_names.ssl_certificate {
            lines.push(format!("  sslCertificateSecret: String = {}", quote(ssl)));
        }

        let mut blocks = Vec::new();
        let mut needs_subnet_type = false;
        if let Some(vpc) = &config.vpc_config {
            lines.extend(Self::compile_vpc_lines(vpc));
            needs_subnet_type = !vpc.subnet_availability_zone_config.is_empty();
        }

        blocks.push(format!("input DataSource {{\n{}\n}}", lines.join("\n")));
        if needs_subnet_type {
            blocks.push(
                "input SubnetAvailabilityZone {\n  subnetId: String!\n  availabilityZone: String!\n}"
                    .to_string(),
            );
        }
        blocks
    }

    fn compile_vpc_lines(vpc: &VpcConfig) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(vpc_id) = &vpc.vpc_id {
            lines.push(format!("  vpcId: String = {}", quote(vpc_id)));
        }

        let security_groups = vpc
            .unique_security_group_ids()
            .into_iter()
            .map(quote)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  securityGroupIds: [String] = [{}]", security_groups));

        if !vpc.subnet_availability_zone_config.is_empty() {
            let subnets = vpc
                .subnet_availability_zone_config
                .iter()
                .map(|s| {
                    format!(
                        "{{subnetId: {}, availabilityZone: {}}}",
                        quote(&s.subnet_id),
                        quote(&s.availability_zone)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "  subnetAvailabilityZones: [SubnetAvailabilityZone] = [{}]",
                subnets
            ));
        }

        lines
    }
}

/// Every emitted type name must be unique and must not shadow a built-in scalar.
fn check_type_names(
    enums: &EnumRegistry,
    models: &[&Model],
    config: Option<&DataSourceConfig>,
) -> Result<(), SchemaError> {
    let mut taken = HashSet::new();
    if let Some(config) = config {
        taken.insert("DataSource");
        let has_subnets = config
            .vpc_config
            .as_ref()
            .is_some_and(|vpc| !vpc.subnet_availability_zone_config.is_empty());
        if has_subnets {
            taken.insert("SubnetAvailabilityZone");
        }
    }

    let names = enums
        .declarations()
        .iter()
        .map(|d| d.name.as_str())
        .chain(models.iter().map(|m| m.name.as_str()));
    for name in names {
        if name.parse::<ScalarType>().is_ok() || !taken.insert(name) {
            return Err(SchemaError::DuplicateTypeName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Split models into those with a primary key and those without, keeping order.
pub fn partition_models(models: &[Model]) -> (Vec<&Model>, Vec<&Model>) {
    models.iter().partition(|m| m.has_primary_key())
}
