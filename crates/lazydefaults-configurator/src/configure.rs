use lazydefaults_core::{
    ColumnDef, ColumnKind, DefaultValue, LazyOptions, ServerDefault, TableConstraint, TableDef,
};

/// Returns a configured copy of `table`. See [`configure_table`].
pub fn apply_defaults(table: &TableDef, defaults: &LazyOptions) -> TableDef {
    let mut configured = table.clone();
    configure_table(&mut configured, defaults);
    configured
}

/// Derives CHECK constraints, nullability and defaults from column metadata.
///
/// The effective option set is `defaults` overridden by the table's own
/// `lazy_options`. Each behaviour is gated by its own toggle:
///
/// - `min_max_check_constraints`: `info.min` / `info.max` become
///   `CHECK (<column> >= <min>)` / `CHECK (<column> <= <max>)`.
/// - `boolean_defaults`: boolean columns become NOT NULL, default to `false`
///   and mirror the client default as a server boolean literal.
/// - `string_defaults`: text columns become NOT NULL and mirror a text
///   client default as a server string literal.
/// - `integer_defaults`: integer columns with an integer client default
///   mirror it as a server text literal.
/// - `auto_now`: columns with `info.auto_now` default to the current
///   timestamp on both sides.
///
/// Defaults declared explicitly on a column are never replaced. Metadata is
/// not validated here; see [`crate::validate_table`].
pub fn configure_table(table: &mut TableDef, defaults: &LazyOptions) {
    let options = defaults.with_overrides(&table.lazy_options);
    tracing::debug!(table = %table.name, ?options, "configuring model");

    let mut checks = Vec::new();
    for column in &mut table.columns {
        if options.min_max_check_constraints {
            checks.extend(bound_checks(column));
        }

        match column.kind() {
            ColumnKind::Boolean if options.boolean_defaults => apply_boolean_defaults(column),
            ColumnKind::Text if options.string_defaults => apply_string_defaults(column),
            ColumnKind::Integer if options.integer_defaults => apply_integer_defaults(column),
            _ => {}
        }

        if options.auto_now && column.info.auto_now {
            apply_auto_now(column);
        }
    }

    for check in checks {
        let text = check.check_text();
        if table.add_constraint(check) {
            tracing::debug!(table = %table.name, check = ?text, "added check constraint");
        }
    }
}

fn bound_checks(column: &ColumnDef) -> Vec<TableConstraint> {
    let mut checks = Vec::new();
    if let Some(min) = column.info.min {
        checks.push(TableConstraint::min(column.name.clone(), min));
    }
    if let Some(max) = column.info.max {
        checks.push(TableConstraint::max(column.name.clone(), max));
    }
    checks
}

fn apply_boolean_defaults(column: &mut ColumnDef) {
    column.nullable = false;
    let value = column
        .default
        .get_or_insert(DefaultValue::Bool(false))
        .as_bool();

    if column.server_default.is_none() {
        if let Some(value) = value {
            column.server_default = Some(ServerDefault::Boolean(value));
        }
    }
    tracing::trace!(column = %column.name, default = ?column.default, "boolean defaults");
}

fn apply_string_defaults(column: &mut ColumnDef) {
    column.nullable = false;
    if let Some(DefaultValue::Text(text)) = column.default.clone() {
        mirror_literal(column, text);
    }
    tracing::trace!(column = %column.name, server_default = ?column.server_default, "string defaults");
}

fn apply_integer_defaults(column: &mut ColumnDef) {
    if let Some(DefaultValue::Integer(value)) = column.default {
        mirror_literal(column, value.to_string());
    }
    tracing::trace!(column = %column.name, server_default = ?column.server_default, "integer defaults");
}

fn mirror_literal(column: &mut ColumnDef, text: String) {
    column
        .server_default
        .get_or_insert(ServerDefault::Literal(text));
}

fn apply_auto_now(column: &mut ColumnDef) {
    column.default.get_or_insert_with(DefaultValue::now);
    column.server_default.get_or_insert(ServerDefault::Now);
    tracing::trace!(column = %column.name, "auto_now defaults");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazydefaults_core::{
        ColumnInfo, ComplexColumnType, LazyOverrides, SimpleColumnType, TableConstraint,
    };
    use rstest::{fixture, rstest};

    fn varchar() -> ComplexColumnType {
        ComplexColumnType::Varchar { length: 255 }
    }

    #[fixture]
    fn user() -> TableDef {
        TableDef::new("user")
            .with_column(ColumnDef::new("id", SimpleColumnType::Integer).as_primary_key())
            .with_column(ColumnDef::new("name", varchar()))
            .with_column(
                ColumnDef::new("age", SimpleColumnType::Integer)
                    .with_info(ColumnInfo::bounds(Some(13), Some(120)))
                    .with_default(16_i64),
            )
            .with_column(ColumnDef::new("is_active", SimpleColumnType::Boolean))
            .with_column(ColumnDef::new("is_admin", SimpleColumnType::Boolean).with_default(true))
            .with_column(ColumnDef::new("hobbies", varchar()).with_default("football"))
            .with_column(
                ColumnDef::new("created_at", SimpleColumnType::Timestamp)
                    .with_info(ColumnInfo::auto_now()),
            )
    }

    fn configured(table: TableDef) -> TableDef {
        apply_defaults(&table, &LazyOptions::default())
    }

    #[rstest]
    fn creates_min_and_max_check_constraints(user: TableDef) {
        let table = configured(user);
        assert_eq!(
            table.check_exprs().collect::<Vec<_>>(),
            vec!["age >= 13", "age <= 120"]
        );
    }

    #[rstest]
    #[case::min_only(Some(0), None, vec!["score >= 0"])]
    #[case::max_only(None, Some(10), vec!["score <= 10"])]
    #[case::neither(None, None, vec![])]
    fn missing_bound_skips_that_check(
        #[case] min: Option<i64>,
        #[case] max: Option<i64>,
        #[case] expected: Vec<&str>,
    ) {
        let table = configured(TableDef::new("t").with_column(
            ColumnDef::new("score", SimpleColumnType::Integer).with_info(ColumnInfo::bounds(min, max)),
        ));
        assert_eq!(table.check_exprs().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn booleans_not_nullable_and_false(user: TableDef) {
        let table = configured(user);
        let is_active = table.column("is_active").unwrap();
        assert!(!is_active.nullable);
        assert_eq!(is_active.default, Some(DefaultValue::Bool(false)));
        assert_eq!(is_active.server_default, Some(ServerDefault::Boolean(false)));
    }

    #[rstest]
    fn boolean_server_default_mirrors_explicit_default(user: TableDef) {
        let table = configured(user);
        let is_admin = table.column("is_admin").unwrap();
        assert_eq!(is_admin.default, Some(DefaultValue::Bool(true)));
        assert_eq!(is_admin.server_default, Some(ServerDefault::Boolean(true)));
        assert!(!is_admin.nullable);
    }

    #[rstest]
    fn strings_not_nullable(user: TableDef) {
        let table = configured(user);
        let name = table.column("name").unwrap();
        assert!(!name.nullable);
        assert_eq!(name.default, None);
        assert_eq!(name.server_default, None);
    }

    #[rstest]
    fn assigns_string_server_defaults(user: TableDef) {
        let table = configured(user);
        assert_eq!(
            table.column("hobbies").unwrap().server_default,
            Some(ServerDefault::Literal("football".into()))
        );
    }

    #[test]
    fn text_type_counts_as_string() {
        let table = configured(
            TableDef::new("t")
                .with_column(ColumnDef::new("bio", SimpleColumnType::Text).with_default("")),
        );
        let bio = table.column("bio").unwrap();
        assert!(!bio.nullable);
        assert_eq!(bio.server_default, Some(ServerDefault::Literal(String::new())));
    }

    #[rstest]
    fn assigns_int_server_defaults(user: TableDef) {
        let table = configured(user);
        let age = table.column("age").unwrap();
        assert_eq!(age.server_default, Some(ServerDefault::Literal("16".into())));
        // integers keep their declared nullability
        assert!(age.nullable);
    }

    #[rstest]
    fn integer_without_default_is_untouched(user: TableDef) {
        let table = configured(user);
        let id = table.column("id").unwrap();
        assert_eq!(id.default, None);
        assert_eq!(id.server_default, None);
    }

    #[rstest]
    fn assigns_auto_now_defaults(user: TableDef) {
        let table = configured(user);
        let created_at = table.column("created_at").unwrap();
        assert_eq!(created_at.default, Some(DefaultValue::now()));
        assert_eq!(created_at.server_default, Some(ServerDefault::Now));
    }

    #[rstest]
    fn all_toggles_disabled_leaves_columns_alone(user: TableDef) {
        let original = user.clone();
        let table = configured(user.with_lazy_options(LazyOverrides::disable_all()));

        assert_eq!(table.check_exprs().count(), 0);
        assert_eq!(table.columns, original.columns);
        let is_active = table.column("is_active").unwrap();
        assert!(is_active.nullable);
        assert_eq!(is_active.default, None);
        assert_eq!(table.column("is_admin").unwrap().server_default, None);
        assert!(table.column("name").unwrap().nullable);
        assert_eq!(table.column("hobbies").unwrap().server_default, None);
        assert_eq!(table.column("age").unwrap().server_default, None);
        let created_at = table.column("created_at").unwrap();
        assert_eq!(created_at.default, None);
        assert_eq!(created_at.server_default, None);
    }

    #[rstest]
    #[case::checks(LazyOverrides { min_max_check_constraints: Some(false), ..Default::default() })]
    #[case::booleans(LazyOverrides { boolean_defaults: Some(false), ..Default::default() })]
    #[case::strings(LazyOverrides { string_defaults: Some(false), ..Default::default() })]
    #[case::integers(LazyOverrides { integer_defaults: Some(false), ..Default::default() })]
    #[case::auto_now(LazyOverrides { auto_now: Some(false), ..Default::default() })]
    fn disabling_one_toggle_suppresses_only_that_behaviour(
        user: TableDef,
        #[case] overrides: LazyOverrides,
    ) {
        let table = configured(user.with_lazy_options(overrides));
        let effective = LazyOptions::default().with_overrides(&overrides);

        let checks = table.check_exprs().count();
        assert_eq!(checks == 2, effective.min_max_check_constraints);

        let is_active = table.column("is_active").unwrap();
        assert_eq!(!is_active.nullable, effective.boolean_defaults);
        assert_eq!(is_active.server_default.is_some(), effective.boolean_defaults);

        let name = table.column("name").unwrap();
        assert_eq!(!name.nullable, effective.string_defaults);
        let hobbies = table.column("hobbies").unwrap();
        assert_eq!(hobbies.server_default.is_some(), effective.string_defaults);

        let age = table.column("age").unwrap();
        assert_eq!(age.server_default.is_some(), effective.integer_defaults);

        let created_at = table.column("created_at").unwrap();
        assert_eq!(created_at.server_default.is_some(), effective.auto_now);
        assert_eq!(created_at.default.is_some(), effective.auto_now);
    }

    #[test]
    fn project_defaults_apply_before_model_overrides() {
        let table = TableDef::new("t")
            .with_column(ColumnDef::new("flag", SimpleColumnType::Boolean))
            .with_lazy_options(LazyOverrides {
                boolean_defaults: Some(true),
                ..Default::default()
            });
        let configured = apply_defaults(&table, &LazyOptions::all_disabled());
        assert!(!configured.column("flag").unwrap().nullable);
    }

    #[test]
    fn explicit_server_default_is_kept() {
        let table = configured(
            TableDef::new("t").with_column(
                ColumnDef::new("count", SimpleColumnType::BigInt)
                    .with_default(1_i64)
                    .with_server_default(ServerDefault::Expression("0".into())),
            ),
        );
        assert_eq!(
            table.column("count").unwrap().server_default,
            Some(ServerDefault::Expression("0".into()))
        );
    }

    #[test]
    fn non_boolean_default_on_boolean_column_gets_no_server_default() {
        let table = configured(TableDef::new("t").with_column(
            ColumnDef::new("flag", SimpleColumnType::Boolean).with_default("yes"),
        ));
        let flag = table.column("flag").unwrap();
        assert!(!flag.nullable);
        assert_eq!(flag.default, Some(DefaultValue::Text("yes".into())));
        assert_eq!(flag.server_default, None);
    }

    #[rstest]
    #[case::text(DefaultValue::from("abc"))]
    #[case::boolean(DefaultValue::Bool(true))]
    #[case::now(DefaultValue::now())]
    fn non_integer_default_on_integer_column_gets_no_server_default(#[case] default: DefaultValue) {
        let table = configured(TableDef::new("t").with_column(
            ColumnDef::new("n", SimpleColumnType::Integer).with_default(default.clone()),
        ));
        let n = table.column("n").unwrap();
        assert_eq!(n.default, Some(default));
        assert_eq!(n.server_default, None);
    }

    #[rstest]
    #[case::integer(DefaultValue::Integer(7))]
    #[case::boolean(DefaultValue::Bool(false))]
    #[case::now(DefaultValue::now())]
    fn non_text_default_on_string_column_gets_no_server_default(#[case] default: DefaultValue) {
        let table = configured(TableDef::new("t").with_column(
            ColumnDef::new("label", varchar()).with_default(default.clone()),
        ));
        let label = table.column("label").unwrap();
        assert!(!label.nullable);
        assert_eq!(label.default, Some(default));
        assert_eq!(label.server_default, None);
    }

    #[test]
    fn bounds_keep_the_column_name_as_declared() {
        let table = configured(
            TableDef::new("t")
                .with_column(
                    ColumnDef::new("order", SimpleColumnType::Integer)
                        .with_info(ColumnInfo::bounds(Some(0), None)),
                )
                .with_column(
                    ColumnDef::new("Age", SimpleColumnType::Integer)
                        .with_info(ColumnInfo::bounds(Some(13), Some(120))),
                ),
        );
        assert_eq!(
            table.constraints,
            vec![
                TableConstraint::min("order", 0),
                TableConstraint::min("Age", 13),
                TableConstraint::max("Age", 120),
            ]
        );
    }

    #[test]
    fn auto_now_ignores_column_type() {
        let table = configured(TableDef::new("t").with_column(
            ColumnDef::new("stamp", SimpleColumnType::Text).with_info(ColumnInfo::auto_now()),
        ));
        let stamp = table.column("stamp").unwrap();
        assert_eq!(stamp.default, Some(DefaultValue::now()));
        assert_eq!(stamp.server_default, Some(ServerDefault::Now));
    }

    #[test]
    fn configuring_twice_does_not_duplicate_checks() {
        let mut table = TableDef::new("t").with_column(
            ColumnDef::new("n", SimpleColumnType::Integer)
                .with_info(ColumnInfo::bounds(Some(1), None)),
        );
        configure_table(&mut table, &LazyOptions::default());
        configure_table(&mut table, &LazyOptions::default());
        assert_eq!(table.constraints, vec![TableConstraint::min("n", 1)]);
    }

    #[test]
    fn apply_defaults_leaves_input_untouched() {
        let table = TableDef::new("t").with_column(ColumnDef::new("flag", SimpleColumnType::Boolean));
        let _ = apply_defaults(&table, &LazyOptions::default());
        assert!(table.column("flag").unwrap().nullable);
    }
}
