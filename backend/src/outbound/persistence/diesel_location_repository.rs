//! PostgreSQL-backed `LocationRepository` implementation using Diesel ORM.
//!
//! Locations keep the order of the last replace payload via their
//! `position` column. Opening periods for every location are read with a
//! single `IN` query and grouped in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{Location, OpeningPeriod};

use super::diesel_helpers::{INSERT_CHUNK, map_diesel_error, map_pool_error, position};
use super::models::{LocationRow, NewLocationRow, NewOpeningPeriodRow, OpeningPeriodRow};
use super::pool::DbPool;
use super::schema::{locations, opening_periods};

/// Diesel-backed implementation of the location repository port.
#[derive(Clone)]
pub struct DieselLocationRepository {
    pool: DbPool,
}

impl DieselLocationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> LocationRepositoryError {
    map_diesel_error(
        error,
        LocationRepositoryError::query,
        LocationRepositoryError::connection,
    )
}

/// Attach each period to its owning location, preserving row order.
fn assemble(location_rows: Vec<LocationRow>, period_rows: Vec<OpeningPeriodRow>) -> Vec<Location> {
    let mut grouped: HashMap<String, Vec<OpeningPeriod>> = HashMap::new();
    for row in period_rows {
        grouped
            .entry(row.location_id.clone())
            .or_default()
            .push(OpeningPeriod::from(row));
    }
    location_rows
        .into_iter()
        .map(|row| {
            let periods = grouped.remove(&row.id).unwrap_or_default();
            row.into_location(periods)
        })
        .collect()
}

async fn load_locations(
    conn: &mut AsyncPgConnection,
) -> Result<Vec<Location>, diesel::result::Error> {
    let location_rows: Vec<LocationRow> = locations::table
        .select(LocationRow::as_select())
        .order_by((locations::position.asc(), locations::id.asc()))
        .load(conn)
        .await?;
    if location_rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<&str> = location_rows.iter().map(|row| row.id.as_str()).collect();
    let period_rows: Vec<OpeningPeriodRow> = opening_periods::table
        .filter(opening_periods::location_id.eq_any(ids))
        .select(OpeningPeriodRow::as_select())
        .order_by((
            opening_periods::location_id.asc(),
            opening_periods::position.asc(),
        ))
        .load(conn)
        .await?;

    Ok(assemble(location_rows, period_rows))
}

/// Flatten nested periods into insertable rows owned by their location.
fn period_rows(replacement: &[Location]) -> Result<Vec<NewOpeningPeriodRow<'_>>, diesel::result::Error> {
    let mut rows = Vec::new();
    for location in replacement {
        for (index, period) in location.opening_periods.iter().enumerate() {
            rows.push(NewOpeningPeriodRow {
                id: &period.id,
                location_id: &location.id,
                position: position(index)?,
                name: &period.name,
                days: &period.days,
                hours: &period.hours,
            });
        }
    }
    Ok(rows)
}

#[async_trait]
impl LocationRepository for DieselLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, LocationRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, LocationRepositoryError::connection))?;
        load_locations(&mut conn).await.map_err(diesel_error)
    }

    async fn replace_all(
        &self,
        replacement: &[Location],
    ) -> Result<Vec<Location>, LocationRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, LocationRepositoryError::connection))?;
        let location_rows = replacement
            .iter()
            .enumerate()
            .map(|(index, location)| Ok(NewLocationRow::new(location, position(index)?)))
            .collect::<Result<Vec<_>, diesel::result::Error>>()
            .map_err(diesel_error)?;
        let period_rows = period_rows(replacement).map_err(diesel_error)?;

        conn.transaction(|conn| {
            async move {
                // Periods go with their locations through the cascade.
                diesel::delete(locations::table).execute(conn).await?;
                for chunk in location_rows.chunks(INSERT_CHUNK) {
                    diesel::insert_into(locations::table)
                        .values(chunk)
                        .execute(conn)
                        .await?;
                }
                for chunk in period_rows.chunks(INSERT_CHUNK) {
                    diesel::insert_into(opening_periods::table)
                        .values(chunk)
                        .execute(conn)
                        .await?;
                }
                load_locations(conn).await
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }
}
