//! Query handlers for the event service.
//!
//! Each handler validates and decodes its identifier, delegates to the
//! repository, and returns the result unchanged.

use matchday_core::error::DomainError;
use matchday_core::event::Event;
use matchday_core::repository::EventRepository;
use tracing::{info, warn};

use crate::domain::validation::{IdentifierKind, normalize_identifier};

/// Returns every stored event, in no particular order.
///
/// # Errors
///
/// Returns `DomainError::Storage` if the scan fails.
pub async fn get_all_events(repo: &dyn EventRepository) -> Result<Vec<Event>, DomainError> {
    info!("GetAllEvents invoked to scan for all events");
    let events = repo.find_all().await?;
    info!(count = events.len(), "Found events");
    Ok(events)
}

/// Returns every event the team plays in, home or away, oldest first.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the team name is missing, empty,
/// `"undefined"`, or malformed. Returns `DomainError::Storage` if a lookup
/// fails.
pub async fn get_events_for_team(
    team_name: Option<&str>,
    repo: &dyn EventRepository,
) -> Result<Vec<Event>, DomainError> {
    let team = normalize_identifier(team_name, IdentifierKind::Team).inspect_err(|e| {
        warn!(error = %e, "GetEventsForTeam rejected team name");
    })?;
    info!(team = %team, "GetEventsForTeam invoked");

    let events = repo.find_by_team(&team).await?;
    info!(team = %team, count = events.len(), "Found events for team");
    Ok(events)
}

/// Returns every event played in the city.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the city name is missing, empty,
/// `"undefined"`, or malformed. Returns `DomainError::Storage` if the lookup
/// fails.
pub async fn get_events_for_city(
    city_name: Option<&str>,
    repo: &dyn EventRepository,
) -> Result<Vec<Event>, DomainError> {
    let city = normalize_identifier(city_name, IdentifierKind::City).inspect_err(|e| {
        warn!(error = %e, "GetEventsForCity rejected city name");
    })?;
    info!(city = %city, "GetEventsForCity invoked");

    let events = repo.find_by_city(&city).await?;
    info!(city = %city, count = events.len(), "Found events for city");
    Ok(events)
}

/// Returns the event the team hosts on `event_date`, if any.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the team name is invalid. Returns
/// `DomainError::Storage` if the lookup fails.
pub async fn get_event_for_team_and_date(
    team_name: Option<&str>,
    event_date: i64,
    repo: &dyn EventRepository,
) -> Result<Option<Event>, DomainError> {
    let team = normalize_identifier(team_name, IdentifierKind::Team).inspect_err(|e| {
        warn!(error = %e, "GetEventForTeamAndDate rejected team name");
    })?;
    info!(team = %team, event_date, "GetEventForTeamAndDate invoked");

    let event = repo.find_by_team_and_date(&team, event_date).await?;
    info!(team = %team, event_date, found = event.is_some(), "Looked up event");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use matchday_core::error::DomainError;
    use matchday_test_support::{
        FailingEventRepository, InMemoryEventRepository, RecordedCall, RecordingEventRepository,
        event,
    };

    use crate::application::query_handlers::{
        get_all_events, get_event_for_team_and_date, get_events_for_city, get_events_for_team,
    };

    #[tokio::test]
    async fn test_get_all_events_returns_every_stored_event() {
        // Arrange
        let repo = InMemoryEventRepository::with_events([
            event("A", "B", "X", 100),
            event("C", "D", "Y", 200),
        ]);

        // Act
        let events = get_all_events(&repo).await.unwrap();

        // Assert
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn test_get_events_for_team_delegates_decoded_name() {
        // Arrange
        let repo = RecordingEventRepository::new(Vec::new());

        // Act
        get_events_for_team(Some("Real%20Madrid"), &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            repo.calls(),
            vec![RecordedCall::FindByTeam("Real Madrid".to_owned())]
        );
    }

    #[tokio::test]
    async fn test_get_events_for_team_returns_home_and_away_in_date_order() {
        // Arrange
        let repo = InMemoryEventRepository::with_events([
            event("A", "B", "X", 100),
            event("B", "A", "Y", 50),
            event("B", "C", "Y", 75),
        ]);

        // Act
        let events = get_events_for_team(Some("A"), &repo).await.unwrap();

        // Assert
        let dates: Vec<i64> = events.iter().map(|e| e.event_date).collect();
        assert_eq!(dates, vec![50, 100]);
    }

    #[tokio::test]
    async fn test_get_events_for_team_does_not_reorder_repository_results() {
        // Arrange
        let canned = vec![event("A", "B", "X", 300), event("A", "C", "X", 100)];
        let repo = RecordingEventRepository::new(canned.clone());

        // Act
        let events = get_events_for_team(Some("A"), &repo).await.unwrap();

        // Assert
        assert_eq!(events, canned);
    }

    #[tokio::test]
    async fn test_get_events_for_team_rejects_sentinel_without_touching_repository() {
        // Arrange
        let repo = RecordingEventRepository::new(Vec::new());

        // Act
        let result = get_events_for_team(Some("undefined"), &repo).await;

        // Assert
        match result {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(msg, "team name cannot be null or empty");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_events_for_city_rejects_missing_name() {
        // Arrange
        let repo = RecordingEventRepository::new(Vec::new());

        // Act
        let result = get_events_for_city(None, &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_events_for_city_rejects_malformed_encoding() {
        // Arrange
        let repo = RecordingEventRepository::new(Vec::new());

        // Act
        let result = get_events_for_city(Some("New%2York"), &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_events_for_city_delegates_decoded_name() {
        // Arrange
        let repo = RecordingEventRepository::new(Vec::new());

        // Act
        get_events_for_city(Some("New+York"), &repo).await.unwrap();

        // Assert
        assert_eq!(
            repo.calls(),
            vec![RecordedCall::FindByCity("New York".to_owned())]
        );
    }

    #[tokio::test]
    async fn test_get_event_for_team_and_date_returns_none_when_absent() {
        // Arrange
        let repo = InMemoryEventRepository::with_events([event("A", "B", "X", 100)]);

        // Act
        let found = get_event_for_team_and_date(Some("A"), 101, &repo)
            .await
            .unwrap();

        // Assert
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_event_for_team_and_date_returns_stored_event() {
        // Arrange
        let stored = event("A", "B", "X", 100);
        let repo = InMemoryEventRepository::with_events([stored.clone()]);

        // Act
        let found = get_event_for_team_and_date(Some("A"), 100, &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_storage_failures_propagate_unchanged() {
        // Arrange
        let repo = FailingEventRepository;

        // Act
        let all = get_all_events(&repo).await;
        let team = get_events_for_team(Some("A"), &repo).await;
        let city = get_events_for_city(Some("X"), &repo).await;

        // Assert
        for result in [all, team, city] {
            match result {
                Err(DomainError::Storage(msg)) => assert_eq!(msg, "connection refused"),
                other => panic!("expected Storage, got {other:?}"),
            }
        }
    }
}
