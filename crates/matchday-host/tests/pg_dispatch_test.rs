//! Integration tests for request dispatch over PostgreSQL.

mod common;

use matchday_host::dispatch::dispatch;
use matchday_host::request::{EventRequest, EventResponse};
use matchday_test_support::event;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_schedule_round_trip(pool: PgPool) {
    let state = common::pg_state(pool);
    common::save(&state, event("A", "B", "X", 100)).await;
    common::save(&state, event("B", "A", "Y", 50)).await;
    common::save(&state, event("C", "B", "X", 75)).await;

    let for_a = common::list(
        &state,
        EventRequest::GetByTeam {
            team_name: Some("A".to_owned()),
        },
    )
    .await;
    assert_eq!(common::dates(&for_a), vec![50, 100]);

    let for_b = common::list(
        &state,
        EventRequest::GetByTeam {
            team_name: Some("B".to_owned()),
        },
    )
    .await;
    assert_eq!(common::dates(&for_b), vec![50, 75, 100]);

    let mut in_x = common::list(
        &state,
        EventRequest::GetByCity {
            city_name: Some("X".to_owned()),
        },
    )
    .await;
    in_x.sort_by_key(|e| e.event_date);
    assert_eq!(common::dates(&in_x), vec![75, 100]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_round_trip(pool: PgPool) {
    let state = common::pg_state(pool);
    let stored = event("A", "B", "X", 100);
    common::save(&state, stored.clone()).await;
    assert_eq!(common::lookup(&state, "A", 100).await, Some(stored.clone()));

    let response = dispatch(
        &state,
        EventRequest::Delete {
            event: Some(stored.clone()),
        },
    )
    .await
    .unwrap();
    assert_eq!(response, EventResponse::Done);
    assert!(common::lookup(&state, "A", 100).await.is_none());

    let err = dispatch(
        &state,
        EventRequest::Delete {
            event: Some(stored),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.error_code(), "event_not_found");
}
