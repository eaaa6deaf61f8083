use lazydefaults_configurator::ModelRegistry;
use lazydefaults_core::{
    ColumnDef, ColumnInfo, ComplexColumnType, LazyOptions, LazyOverrides, ServerDefault,
    SimpleColumnType, TableDef,
};
use lazydefaults_query::{DatabaseBackend, build_create_table};
use rstest::rstest;

fn user_model(options: LazyOverrides) -> TableDef {
    let unicode = ComplexColumnType::Varchar { length: 255 };
    TableDef::new("user")
        .with_column(ColumnDef::new("id", SimpleColumnType::Integer).as_primary_key())
        .with_column(ColumnDef::new("name", unicode.clone()))
        .with_column(
            ColumnDef::new("age", SimpleColumnType::Integer)
                .with_info(ColumnInfo::bounds(Some(13), Some(120)))
                .with_default(16_i64),
        )
        .with_column(ColumnDef::new("is_active", SimpleColumnType::Boolean))
        .with_column(ColumnDef::new("is_admin", SimpleColumnType::Boolean).with_default(true))
        .with_column(ColumnDef::new("hobbies", unicode).with_default("football"))
        .with_column(
            ColumnDef::new("created_at", SimpleColumnType::Timestamp)
                .with_info(ColumnInfo::auto_now()),
        )
        .with_lazy_options(options)
}

fn configured_user(options: LazyOverrides) -> TableDef {
    let mut registry = ModelRegistry::new(LazyOptions::default());
    registry.register(user_model(options)).unwrap();
    registry.configure_all();
    registry.get("user").unwrap().clone()
}

#[rstest]
#[case(DatabaseBackend::Postgres, "CHECK (\"age\" >= 13)", "CHECK (\"age\" <= 120)")]
#[case(DatabaseBackend::MySql, "CHECK (`age` >= 13)", "CHECK (`age` <= 120)")]
#[case(DatabaseBackend::Sqlite, "CHECK (\"age\" >= 13)", "CHECK (\"age\" <= 120)")]
fn creates_min_and_max_check_constraints(
    #[case] backend: DatabaseBackend,
    #[case] min: &str,
    #[case] max: &str,
) {
    let user = configured_user(LazyOverrides::default());
    let sql = build_create_table(backend, &user).build(backend);
    assert!(sql.contains(min), "got: {}", sql);
    assert!(sql.contains(max), "got: {}", sql);
}

#[test]
fn renders_defaults_into_ddl() {
    let user = configured_user(LazyOverrides::default());
    let sql = build_create_table(DatabaseBackend::Postgres, &user).build(DatabaseBackend::Postgres);
    assert!(sql.contains("DEFAULT '16'"), "got: {}", sql);
    assert!(sql.contains("DEFAULT 'football'"), "got: {}", sql);
    assert!(sql.contains("DEFAULT false"), "got: {}", sql);
    assert!(sql.contains("DEFAULT true"), "got: {}", sql);
    assert!(sql.contains("DEFAULT now()"), "got: {}", sql);
}

#[test]
fn configured_columns_match_expectations() {
    let user = configured_user(LazyOverrides::default());
    assert_eq!(
        user.column("age").unwrap().server_default,
        Some(ServerDefault::Literal("16".into()))
    );
    assert!(!user.column("is_active").unwrap().nullable);
    assert!(!user.column("name").unwrap().nullable);
    assert_eq!(
        user.column("created_at").unwrap().server_default,
        Some(ServerDefault::Now)
    );
}

#[rstest]
#[case(DatabaseBackend::Postgres)]
#[case(DatabaseBackend::MySql)]
#[case(DatabaseBackend::Sqlite)]
fn disabled_options_emit_plain_ddl(#[case] backend: DatabaseBackend) {
    let user = configured_user(LazyOverrides::disable_all());
    let sql = build_create_table(backend, &user).build(backend);
    assert!(!sql.contains("CHECK"), "got: {}", sql);
    assert!(!sql.contains("DEFAULT"), "got: {}", sql);

    assert_eq!(user.column("age").unwrap().server_default, None);
    let is_active = user.column("is_active").unwrap();
    assert!(is_active.nullable);
    assert_eq!(is_active.default, None);
    assert_eq!(is_active.server_default, None);
    assert!(user.column("name").unwrap().nullable);
}
