//! Native scalar names and IDL type expressions.

use std::str::FromStr;

use thiserror::Error;

use super::definition::{FieldType, TypeKind};

/// A scalar type the IDL can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    Id,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Email,
    Phone,
    Url,
    IpAddress,
}

/// Scalar name with no IDL mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scalar type '{0}'")]
pub struct UnknownScalar(pub String);

impl FromStr for ScalarType {
    type Err = UnknownScalar;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let scalar = match name {
            "String" => ScalarType::String,
            "Int" => ScalarType::Int,
            "Float" => ScalarType::Float,
            "Boolean" => ScalarType::Boolean,
            "ID" => ScalarType::Id,
            "AWSDate" => ScalarType::Date,
            "AWSTime" => ScalarType::Time,
            "AWSDateTime" => ScalarType::DateTime,
            "AWSTimestamp" => ScalarType::Timestamp,
            "AWSJSON" => ScalarType::Json,
            "AWSEmail" => ScalarType::Email,
            "AWSPhone" => ScalarType::Phone,
            "AWSURL" => ScalarType::Url,
            "AWSIPAddress" => ScalarType::IpAddress,
            other => return Err(UnknownScalar(other.to_string())),
        };
        Ok(scalar)
    }
}

impl ScalarType {
    /// Returns the IDL scalar name for this type.
    pub fn idl_name(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::Id => "ID",
            ScalarType::Date => "AWSDate",
            ScalarType::Time => "AWSTime",
            ScalarType::DateTime => "AWSDateTime",
            ScalarType::Timestamp => "AWSTimestamp",
            ScalarType::Json => "AWSJSON",
            ScalarType::Email => "AWSEmail",
            ScalarType::Phone => "AWSPhone",
            ScalarType::Url => "AWSURL",
            ScalarType::IpAddress => "AWSIPAddress",
        }
    }
}

/// Maps a field type to its IDL type expression.
///
/// Lists render as `[T]`, required types as `T!`, enums and custom types as a
/// bare reference to their name:
/// ```text
/// NonNull(List(Scalar("Int")))  ->  [Int]!
/// Enum("UserStatus")            ->  UserStatus
/// ```
pub fn idl_type(field_type: &FieldType) -> Result<String, UnknownScalar> {
    let base = match &field_type.kind {
        TypeKind::Scalar(name) => name.parse::<ScalarType>()?.idl_name().to_string(),
        TypeKind::List(element) => format!("[{}]", idl_type(element)?),
        TypeKind::Enum(enum_type) => enum_type.name.clone(),
        TypeKind::Custom(name) => name.clone(),
    };

    if field_type.required {
        Ok(format!("{}!", base))
    } else {
        Ok(base)
    }
}
