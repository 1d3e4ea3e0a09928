//! `PostgreSQL` implementation of the `EventRepository` trait.
//!
//! Table layout (see `migrations/`):
//! - PK: `(home_team, event_date)`
//! - `idx_sport_events_city`: `city`
//! - `idx_sport_events_away_team`: `(away_team, event_date)`

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres};
use tracing::{debug, warn};

use matchday_core::error::DomainError;
use matchday_core::event::Event;
use matchday_core::merge::merge_by_event_date;
use matchday_core::repository::EventRepository;

use crate::client::{ClientProvider, PgClientFactory};

const SELECT_COLUMNS: &str = "SELECT home_team, event_date, away_team, city, details FROM sport_events";

/// Row shape of the `sport_events` table.
#[derive(Debug, FromRow)]
struct EventRow {
    home_team: String,
    event_date: i64,
    away_team: String,
    city: String,
    details: serde_json::Value,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            home_team: row.home_team,
            event_date: row.event_date,
            away_team: row.away_team,
            city: row.city,
            details: row.details,
        }
    }
}

fn storage_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Storage(format!("{operation} failed: {e}"))
}

/// PostgreSQL-backed event repository.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    provider: Arc<ClientProvider<PgClientFactory>>,
}

impl PgEventRepository {
    /// Creates a repository over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_provider(Arc::new(ClientProvider::ready(pool)))
    }

    /// Creates a repository that obtains its pool from `provider`, building
    /// it on the first operation.
    #[must_use]
    pub fn with_provider(provider: Arc<ClientProvider<PgClientFactory>>) -> Self {
        Self { provider }
    }

    async fn pool(&self) -> Result<Arc<PgPool>, DomainError> {
        self.provider.get().await
    }

    async fn fetch_events(
        &self,
        sql: &str,
        bind: Option<&str>,
        operation: &'static str,
    ) -> Result<Vec<Event>, DomainError> {
        let pool = self.pool().await?;
        let mut query = sqlx::query_as::<Postgres, EventRow>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query
            .fetch_all(&*pool)
            .await
            .map_err(storage_error(operation))?;
        debug!(operation, rows = rows.len(), "Fetched events");
        Ok(rows.into_iter().map(Event::from).collect())
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        self.fetch_events(SELECT_COLUMNS, None, "scan events").await
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} WHERE city = $1");
        self.fetch_events(&sql, Some(city), "query events by city")
            .await
    }

    async fn find_by_team(&self, team: &str) -> Result<Vec<Event>, DomainError> {
        let home_sql = format!("{SELECT_COLUMNS} WHERE home_team = $1 ORDER BY event_date");
        let away_sql = format!("{SELECT_COLUMNS} WHERE away_team = $1");

        let home = self
            .fetch_events(&home_sql, Some(team), "query events by home team")
            .await?;
        let away = self
            .fetch_events(&away_sql, Some(team), "query events by away team")
            .await?;

        Ok(merge_by_event_date(home, away))
    }

    async fn find_by_team_and_date(
        &self,
        team: &str,
        event_date: i64,
    ) -> Result<Option<Event>, DomainError> {
        let pool = self.pool().await?;
        let sql = format!("{SELECT_COLUMNS} WHERE home_team = $1 AND event_date = $2");
        let row = sqlx::query_as::<Postgres, EventRow>(&sql)
            .bind(team)
            .bind(event_date)
            .fetch_optional(&*pool)
            .await
            .map_err(storage_error("load event"))?;
        Ok(row.map(Event::from))
    }

    async fn save_or_update(&self, event: &Event) -> Result<(), DomainError> {
        let pool = self.pool().await?;
        sqlx::query(
            r"
            INSERT INTO sport_events (home_team, event_date, away_team, city, details)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (home_team, event_date) DO UPDATE
            SET away_team  = EXCLUDED.away_team,
                city       = EXCLUDED.city,
                details    = EXCLUDED.details,
                updated_at = NOW()
            ",
        )
        .bind(&event.home_team)
        .bind(event.event_date)
        .bind(&event.away_team)
        .bind(&event.city)
        .bind(&event.details)
        .execute(&*pool)
        .await
        .map_err(storage_error("upsert event"))?;

        debug!(
            home_team = %event.home_team,
            event_date = event.event_date,
            "Upserted event"
        );
        Ok(())
    }

    async fn delete(&self, team: &str, event_date: i64) -> Result<(), DomainError> {
        // Not atomic with the delete below: a concurrent writer may remove or
        // recreate the row in between.
        let Some(existing) = self.find_by_team_and_date(team, event_date).await? else {
            warn!(
                home_team = %team,
                event_date,
                "Could not delete event, no such team and date combination"
            );
            return Err(DomainError::EventNotFound {
                home_team: team.to_owned(),
                event_date,
            });
        };

        let pool = self.pool().await?;
        sqlx::query("DELETE FROM sport_events WHERE home_team = $1 AND event_date = $2")
            .bind(&existing.home_team)
            .bind(existing.event_date)
            .execute(&*pool)
            .await
            .map_err(storage_error("delete event"))?;

        debug!(home_team = %team, event_date, "Deleted event");
        Ok(())
    }
}
