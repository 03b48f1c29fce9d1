//! Core schema definition types.
//!
//! An introspected relational schema in backend-agnostic form: one `Schema`
//! per database, one `Model` per table and one `Field` per column. These types
//! are the input to the GraphQL compiler.

use std::fmt;

use serde::Deserialize;

use super::SchemaError;

/// Source SQL dialect of an introspected schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Engine {
    #[serde(rename = "MySQL")]
    MySql,
    Postgres,
}

impl Engine {
    /// Returns the engine name used in the data-source configuration block.
    pub fn config_name(&self) -> &'static str {
        match self {
            Engine::MySql => "mysql",
            Engine::Postgres => "postgresql",
        }
    }
}

/// An enum column type with its allowed values in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

/// The shape of a column type, without nullability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Native scalar name, resolved against the IDL scalar table at emission.
    Scalar(String),
    List(Box<FieldType>),
    Enum(EnumType),
    /// Reference to a type declared outside the generated document.
    Custom(String),
}

/// A column type: a `TypeKind` plus the NonNull marker.
///
/// Deserializes from the `kind`-tagged JSON shape produced by introspection,
/// e.g. `{"kind": "NonNull", "type": {"kind": "Scalar", "name": "String"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFieldType")]
pub struct FieldType {
    pub kind: TypeKind,
    pub required: bool,
}

impl FieldType {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::nullable(TypeKind::Scalar(name.into()))
    }

    pub fn list(element: FieldType) -> Self {
        Self::nullable(TypeKind::List(Box::new(element)))
    }

    pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::nullable(TypeKind::Enum(EnumType {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }))
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::nullable(TypeKind::Custom(name.into()))
    }

    /// Marks this type as required.
    pub fn non_null(mut self) -> Self {
        self.required = true;
        self
    }

    fn nullable(kind: TypeKind) -> Self {
        Self {
            kind,
            required: false,
        }
    }
}

/// Wire shape of a field type, validated into `FieldType`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
enum RawFieldType {
    Scalar {
        name: String,
    },
    List {
        #[serde(rename = "type")]
        element: Box<RawFieldType>,
    },
    Enum {
        name: String,
        values: Vec<String>,
    },
    Custom {
        name: String,
    },
    NonNull {
        #[serde(rename = "type")]
        inner: Box<RawFieldType>,
    },
}

impl TryFrom<RawFieldType> for FieldType {
    type Error = SchemaError;

    fn try_from(raw: RawFieldType) -> Result<Self, Self::Error> {
        let field_type = match raw {
            RawFieldType::Scalar { name } => FieldType::scalar(name),
            RawFieldType::List { element } => FieldType::list(FieldType::try_from(*element)?),
            RawFieldType::Enum { name, values } => FieldType::enumeration(name, values),
            RawFieldType::Custom { name } => FieldType::custom(name),
            RawFieldType::NonNull { inner } => {
                if matches!(*inner, RawFieldType::NonNull { .. }) {
                    return Err(SchemaError::InvalidFieldType {
                        message: "NonNull cannot wrap another NonNull".to_string(),
                    });
                }
                FieldType::try_from(*inner)?.non_null()
            }
        };
        Ok(field_type)
    }
}

/// Where a column default comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultKind {
    /// Default expression read from the database catalog.
    DbGenerated,
    /// Default synthesized later in the transform pipeline.
    TransformerGenerated,
}

/// A scalar literal. Only strings, numbers and booleans can be defaults.
///
/// Integers above `i64::MAX` (unsigned BIGINT columns) stay exact as `UInt`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Literal::UInt(value), Literal::Int)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

/// Renders the literal as a GraphQL value.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::UInt(u) => write!(f, "{}", u),
            // Debug keeps a fractional part or exponent, so `1.0` stays a Float.
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::String(s) => write!(f, "{}", crate::escape::quote(s)),
        }
    }
}

/// A column default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultValue {
    pub kind: DefaultKind,
    pub value: Literal,
}

impl DefaultValue {
    pub fn db_generated(value: impl Into<Literal>) -> Self {
        Self {
            kind: DefaultKind::DbGenerated,
            value: value.into(),
        }
    }

    pub fn transformer_generated(value: impl Into<Literal>) -> Self {
        Self {
            kind: DefaultKind::TransformerGenerated,
            value: value.into(),
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
        }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// One table: ordered fields plus an ordered, possibly empty, primary key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// Empty means the table has no primary key.
    #[serde(default)]
    pub primary_key: Vec<String>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn set_primary_key<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = fields.into_iter().map(Into::into).collect();
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An introspected database: the engine plus its tables in introspection order.
///
/// Model names are unique within a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSchema")]
pub struct Schema {
    engine: Engine,
    models: Vec<Model>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    engine: Engine,
    #[serde(default)]
    models: Vec<Model>,
}

impl TryFrom<RawSchema> for Schema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        let mut schema = Schema::new(raw.engine);
        for model in raw.models {
            schema.add_model(model)?;
        }
        Ok(schema)
    }
}

impl Schema {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            models: Vec::new(),
        }
    }

    /// Appends a model, rejecting a name that is already taken.
    pub fn add_model(&mut self, model: Model) -> Result<(), SchemaError> {
        if self.models.iter().any(|m| m.name == model.name) {
            return Err(SchemaError::DuplicateModel { name: model.name });
        }
        self.models.push(model);
        Ok(())
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }
}
