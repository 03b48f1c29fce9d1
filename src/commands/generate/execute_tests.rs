//! Execute tests for generate command.

#[cfg(test)]
mod tests {
    use super::super::GenerateCmd;
    use crate::fixtures;
    use crate::test_utils::create_temp_json_file;
    use rstest::{fixture, rstest};

    #[fixture]
    fn user_schema() -> tempfile::NamedTempFile {
        create_temp_json_file(fixtures::USER_SCHEMA)
    }

    #[fixture]
    fn mixed_schema() -> tempfile::NamedTempFile {
        create_temp_json_file(fixtures::MIXED_SCHEMA)
    }

    #[fixture]
    fn keyless_schema() -> tempfile::NamedTempFile {
        create_temp_json_file(fixtures::NO_PRIMARY_KEY_SCHEMA)
    }

    #[fixture]
    fn datasource_config() -> tempfile::NamedTempFile {
        create_temp_json_file(fixtures::DATASOURCE_CONFIG)
    }

    // =========================================================================
    // Core functionality tests
    // =========================================================================

    crate::execute_test! {
        test_name: test_generate_user_schema,
        fixtures: [user_schema],
        cmd: GenerateCmd {
            schema: user_schema.path().to_path_buf(),
            config: None,
        },
        assertions: |result| {
            assert_eq!(
                result.sdl,
                "type User @model @primaryKey(fields: [\"id\"]) {\n  id: String!\n  name: String\n}\n"
            );
            assert!(result.skipped_models.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_generate_with_config,
        fixtures: [user_schema, datasource_config],
        cmd: GenerateCmd {
            schema: user_schema.path().to_path_buf(),
            config: Some(datasource_config.path().to_path_buf()),
        },
        assertions: |result| {
            assert!(result.sdl.starts_with("input DataSource {\n  identifier: String = \"ID1234567890\"\n  engine: String = \"mysql\""));
            assert!(result.sdl.contains("  sslCertificateSecret: String = \"SSL_CERT\"\n"));
            assert!(result.sdl.contains("  vpcId: String = \"vpc-123\"\n"));
            assert!(result.sdl.contains("input SubnetAvailabilityZone {"));
            assert!(result.sdl.contains("type User"));
        },
    }

    // User and Test share UserStatus (values reordered); AuditLog has no key.
    crate::execute_test! {
        test_name: test_generate_mixed_schema,
        fixtures: [mixed_schema],
        cmd: GenerateCmd {
            schema: mixed_schema.path().to_path_buf(),
            config: None,
        },
        assertions: |result| {
            assert_eq!(result.skipped_models, vec!["AuditLog"]);
            assert_eq!(result.sdl.matches("enum UserStatus").count(), 1);
            assert!(result.sdl.contains("  id: Int! @default(value: \"nextval('user_id_seq'::regclass)\")\n"));
            assert!(result.sdl.contains("  score: Float\n"));
            assert!(result.sdl.contains("  status: UserStatus\n"));
            assert!(!result.sdl.contains("AuditLog"));
        },
    }

    // =========================================================================
    // Error handling tests
    // =========================================================================

    crate::execute_error_test! {
        test_name: test_generate_without_primary_keys,
        fixtures: [keyless_schema],
        cmd: GenerateCmd {
            schema: keyless_schema.path().to_path_buf(),
            config: None,
        },
        contains: "No model has a primary key",
    }

    crate::execute_error_test! {
        test_name: test_generate_missing_schema_file,
        fixtures: [],
        cmd: GenerateCmd {
            schema: std::path::PathBuf::from("/nonexistent/schema.json"),
            config: None,
        },
        contains: "Failed to read '/nonexistent/schema.json'",
    }

    crate::execute_error_test! {
        test_name: test_generate_invalid_config,
        fixtures: [user_schema],
        cmd: GenerateCmd {
            schema: user_schema.path().to_path_buf(),
            config: Some(std::path::PathBuf::from("/nonexistent/datasource.json")),
        },
        contains: "datasource.json",
    }
}
