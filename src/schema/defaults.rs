//! Which column defaults become `@default` directives.
//!
//! Only defaults read from the database catalog are echoed back, and only on
//! scalar or enum columns. Transformer-generated defaults are produced later in
//! the pipeline; list and custom-typed columns cannot carry a scalar literal.

use super::definition::{DefaultKind, Field, Literal, TypeKind};

/// Returns the literal to annotate `field` with, if any.
pub fn default_annotation(field: &Field) -> Option<&Literal> {
    let default = field.default.as_ref()?;

    if default.kind != DefaultKind::DbGenerated {
        return None;
    }

    match field.field_type.kind {
        TypeKind::Scalar(_) | TypeKind::Enum(_) => {}
        TypeKind::List(_) | TypeKind::Custom(_) => return None,
    }

    match &default.value {
        Literal::Float(x) if !x.is_finite() => None,
        literal => Some(literal),
    }
}

/// Renders the `@default` directive for `field`, or an empty string.
pub(crate) fn default_directive(field: &Field) -> String {
    default_annotation(field)
        .map(|literal| format!(" @default(value: {})", literal))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::definition::{DefaultValue, FieldType};
    use rstest::rstest;

    fn field_with(field_type: FieldType, default: Option<DefaultValue>) -> Field {
        Field {
            name: "field".to_string(),
            field_type,
            default,
        }
    }

    #[rstest]
    #[case::string(FieldType::scalar("String"), DefaultValue::db_generated("A squat grey building"))]
    #[case::float(FieldType::scalar("Float"), DefaultValue::db_generated(3.5))]
    #[case::integer(FieldType::scalar("Int"), DefaultValue::db_generated(42))]
    #[case::unsigned_bigint(FieldType::scalar("Int"), DefaultValue::db_generated(u64::MAX))]
    #[case::boolean(FieldType::scalar("Boolean").non_null(), DefaultValue::db_generated(true))]
    #[case::sequence(FieldType::scalar("Int").non_null(), DefaultValue::db_generated("nextval('queue_id_seq'::regclass)"))]
    #[case::enumeration(FieldType::enumeration("Status", ["ON", "OFF"]), DefaultValue::db_generated("ON"))]
    fn test_annotated(#[case] field_type: FieldType, #[case] default: DefaultValue) {
        let field = field_with(field_type, Some(default.clone()));
        assert_eq!(default_annotation(&field), Some(&default.value));
    }

    #[rstest]
    #[case::transformer(FieldType::scalar("Int"), Some(DefaultValue::transformer_generated(42)))]
    #[case::list(FieldType::list(FieldType::scalar("String")), Some(DefaultValue::db_generated(false)))]
    #[case::custom(FieldType::custom("MyCustomType"), Some(DefaultValue::db_generated("Pip")))]
    #[case::required_list(FieldType::list(FieldType::scalar("Int")).non_null(), Some(DefaultValue::db_generated(1)))]
    #[case::not_a_number(FieldType::scalar("Float"), Some(DefaultValue::db_generated(f64::NAN)))]
    #[case::no_default(FieldType::scalar("Int"), None)]
    fn test_not_annotated(#[case] field_type: FieldType, #[case] default: Option<DefaultValue>) {
        let field = field_with(field_type, default);
        assert_eq!(default_annotation(&field), None);
        assert_eq!(default_directive(&field), "");
    }

    #[rstest]
    fn test_directive_rendering() {
        let field = field_with(FieldType::scalar("Int"), Some(DefaultValue::db_generated(42)));
        assert_eq!(default_directive(&field), " @default(value: 42)");

        let field = field_with(FieldType::scalar("String"), Some(DefaultValue::db_generated("x\"y")));
        assert_eq!(default_directive(&field), r#" @default(value: "x\"y")"#);
    }
}
