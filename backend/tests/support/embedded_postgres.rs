//! Database reset helpers for the embedded cluster.
//!
//! Dropping and creating databases goes through the synchronous `postgres`
//! client because `DROP DATABASE` cannot run inside a transaction. Schema
//! setup uses the crate's own embedded migrations.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Render a `postgres` error with its SQLSTATE and detail.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop `name` if present and create it empty.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // Separate statements: a multi-statement batch runs in one transaction.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        client
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(())
}
