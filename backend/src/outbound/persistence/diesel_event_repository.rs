//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::Event;
use crate::domain::ports::{EventRepository, EventRepositoryError};

use super::diesel_helpers::{INSERT_CHUNK, map_diesel_error, map_pool_error};
use super::models::{EventRow, NewEventRow};
use super::pool::DbPool;
use super::schema::events;

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

async fn load_events(conn: &mut AsyncPgConnection) -> Result<Vec<Event>, diesel::result::Error> {
    let rows: Vec<EventRow> = events::table
        .select(EventRow::as_select())
        .order_by((events::event_date.asc(), events::id.asc()))
        .load(conn)
        .await?;
    let mut loaded: Vec<Event> = rows.into_iter().map(Event::from).collect();
    // NULL times sort last, which the SQL ordering alone does not express.
    loaded.sort_by(Event::chronological);
    Ok(loaded)
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, EventRepositoryError::connection))?;
        load_events(&mut conn).await.map_err(diesel_error)
    }

    async fn replace_all(&self, replacement: &[Event]) -> Result<Vec<Event>, EventRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, EventRepositoryError::connection))?;
        let rows: Vec<NewEventRow<'_>> = replacement.iter().map(NewEventRow::from).collect();

        conn.transaction(|conn| {
            async move {
                diesel::delete(events::table).execute(conn).await?;
                for chunk in rows.chunks(INSERT_CHUNK) {
                    diesel::insert_into(events::table)
                        .values(chunk)
                        .execute(conn)
                        .await?;
                }
                load_events(conn).await
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }
}
