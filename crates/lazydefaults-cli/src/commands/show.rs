use anyhow::{Result, bail};
use colored::Colorize;
use lazydefaults_core::{ColumnDef, DefaultCall, DefaultValue, ServerDefault, TableDef};

use crate::utils::{load_config, load_registry};

pub fn cmd_show(table: Option<String>) -> Result<()> {
    let config = load_config()?;
    let registry = load_registry(&config)?;

    let tables: Vec<&TableDef> = match &table {
        Some(name) => match registry.get(name) {
            Some(t) => vec![t],
            None => bail!("unknown model: {}", name),
        },
        None => registry.tables().collect(),
    };

    if tables.is_empty() {
        println!("{}", "No models found.".bright_yellow());
        return Ok(());
    }

    for (i, t) in tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_table(t);
    }
    Ok(())
}

fn print_table(table: &TableDef) {
    println!("{} {}", "Model:".bright_cyan().bold(), table.name.bright_white().bold());
    for column in &table.columns {
        println!("  {}", describe_column(column));
    }
    let checks: Vec<String> = table.check_exprs().collect();
    if !checks.is_empty() {
        println!("  {}", "checks:".bright_cyan());
        for expr in checks {
            println!("    CHECK ({})", expr.bright_magenta());
        }
    }
}

fn describe_column(column: &ColumnDef) -> String {
    let nullability = if column.nullable { "NULL" } else { "NOT NULL" };
    let mut line = format!("{} {}", column.name, nullability);
    if let Some(default) = &column.default {
        line.push_str(&format!(" default={}", describe_default(default)));
    }
    if let Some(server_default) = &column.server_default {
        line.push_str(&format!(" server_default={}", describe_server_default(server_default)));
    }
    line
}

fn describe_default(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Integer(i) => i.to_string(),
        DefaultValue::Text(s) => format!("{s:?}"),
        DefaultValue::Call {
            call: DefaultCall::Now,
        } => "now".to_string(),
    }
}

fn describe_server_default(default: &ServerDefault) -> String {
    match default {
        ServerDefault::Boolean(b) => b.to_string(),
        ServerDefault::Literal(s) => format!("'{s}'"),
        ServerDefault::Now => "now()".to_string(),
        ServerDefault::Expression(sql) => sql.clone(),
    }
}
