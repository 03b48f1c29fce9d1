//! JSON inputs shared by command tests.

/// One MySQL table with a string primary key.
pub const USER_SCHEMA: &str = r#"
{
    "engine": "MySQL",
    "models": [
        {
            "name": "User",
            "fields": [
                { "name": "id", "type": { "kind": "NonNull", "type": { "kind": "Scalar", "name": "String" } } },
                { "name": "name", "type": { "kind": "Scalar", "name": "String" } }
            ],
            "primaryKey": ["id"]
        }
    ]
}
"#;

/// Postgres tables sharing an enum, with defaults and one keyless table.
pub const MIXED_SCHEMA: &str = r#"
{
    "engine": "Postgres",
    "models": [
        {
            "name": "User",
            "fields": [
                {
                    "name": "id",
                    "type": { "kind": "NonNull", "type": { "kind": "Scalar", "name": "Int" } },
                    "default": { "kind": "DB_GENERATED", "value": "nextval('user_id_seq'::regclass)" }
                },
                {
                    "name": "status",
                    "type": { "kind": "NonNull", "type": { "kind": "Enum", "name": "UserStatus", "values": ["ACTIVE", "INACTIVE"] } }
                },
                {
                    "name": "score",
                    "type": { "kind": "Scalar", "name": "Float" },
                    "default": { "kind": "TRANSFORMER_GENERATED", "value": 1.5 }
                }
            ],
            "primaryKey": ["id"]
        },
        {
            "name": "AuditLog",
            "fields": [
                { "name": "message", "type": { "kind": "Scalar", "name": "String" } }
            ],
            "primaryKey": []
        },
        {
            "name": "Test",
            "fields": [
                { "name": "id", "type": { "kind": "NonNull", "type": { "kind": "Scalar", "name": "ID" } } },
                { "name": "status", "type": { "kind": "Enum", "name": "UserStatus", "values": ["INACTIVE", "ACTIVE"] } }
            ],
            "primaryKey": ["id"]
        }
    ]
}
"#;

/// Tables present but none with a primary key.
pub const NO_PRIMARY_KEY_SCHEMA: &str = r#"
{
    "engine": "MySQL",
    "models": [
        { "name": "Log", "fields": [ { "name": "line", "type": { "kind": "Scalar", "name": "String" } } ] }
    ]
}
"#;

/// Data-source configuration with SSL and VPC placement.
pub const DATASOURCE_CONFIG: &str = r#"
{
    "identifier": "ID1234567890",
    "secretNames": { "connectionUri": "CONN_STR", "sslCertificate": "SSL_CERT" },
    "vpcConfig": {
        "vpcId": "vpc-123",
        "securityGroupIds": ["sg0", "sg1"],
        "subnetAvailabilityZoneConfig": [
            { "subnetId": "sb0", "availabilityZone": "az0" },
            { "subnetId": "sb1", "availabilityZone": "az1" }
        ]
    }
}
"#;

/// Valid per-model strategies.
pub const STRATEGIES: &str = r#"
{
    "Todo": { "dbType": "DYNAMODB", "provisionStrategy": "DEFAULT" },
    "Comment": { "dbType": "DYNAMODB", "provisionStrategy": "AMPLIFY_TABLE" },
    "Post": { "dbType": "MYSQL" },
    "Author": { "dbType": "POSTGRES" }
}
"#;

/// Strategies with an unsupported DynamoDB provisioning tag.
pub const INVALID_STRATEGIES: &str = r#"
{
    "Todo": { "dbType": "DYNAMODB", "provisionStrategy": "ON_DEMAND" },
    "Post": { "dbType": "MYSQL" }
}
"#;
