//! Embedded schema migrations applied at startup.

use diesel::{Connection as _, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness as _, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connect {
        /// Driver message.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Harness message.
        message: String,
    },
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task did not complete: {message}")]
    Task {
        /// Join error text.
        message: String,
    },
}

fn apply(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
        message: err.to_string(),
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

/// Apply pending migrations on a blocking thread and return how many ran.
///
/// Uses a synchronous [`PgConnection`] because the migration harness is not
/// async.
///
/// # Errors
///
/// Returns [`MigrationError`] when connecting or applying fails.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || apply(&url))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })??;
    info!(applied, "database migrations up to date");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::MigrationSource;
    use diesel::pg::Pg;

    #[test]
    fn embeds_the_island_data_migration() {
        let migrations =
            MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("embedded migrations load");
        let names: Vec<String> = migrations.iter().map(|m| m.name().to_string()).collect();
        assert!(
            names.iter().any(|name| name.contains("create_island_data")),
            "got {names:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_server_reports_connect_error() {
        let err = run_pending_migrations("postgres://nobody@127.0.0.1:1/none")
            .await
            .expect_err("port 1 refuses connections");
        assert!(matches!(err, MigrationError::Connect { .. }));
    }
}
