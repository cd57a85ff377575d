// src/routes/tickets.rs

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::query_as;

use super::{query_failed, ErrorResponse};
use crate::{models::TicketRow, AppState};

#[derive(Deserialize)]
pub struct ListTicketsQ {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
}

/// Lenient date resolution: an absent or unparseable `startDate` means
/// "no filter", never a 4xx.
fn resolve_start_date(raw: Option<String>) -> Option<NaiveDate> {
    raw.and_then(|s| s.parse::<NaiveDate>().ok())
}

pub async fn list_tickets(
    State(state): State<AppState>,
    Query(q): Query<ListTicketsQ>,
) -> Result<Json<Vec<TicketRow>>, ErrorResponse> {
    let rows = if let Some(day) = resolve_start_date(q.start_date) {
        // Matches on the ticket's calendar date or on the UTC calendar
        // date of its creation timestamp.
        query_as::<_, TicketRow>(
            r#"
            SELECT date, created_at, filial, price, ticket_time, status
            FROM public.tickets_und
            WHERE date = $1 OR (created_at AT TIME ZONE 'UTC')::date = $1
            "#,
        )
        .bind(day)
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to fetch tickets"))?
    } else {
        query_as::<_, TicketRow>(
            r#"
            SELECT date, created_at, filial, price, ticket_time, status
            FROM public.tickets_und
            "#,
        )
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to fetch tickets"))?
    };
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_start_date_means_no_filter() {
        assert_eq!(resolve_start_date(None), None);
    }

    #[test]
    fn valid_start_date_is_parsed() {
        assert_eq!(
            resolve_start_date(Some("2024-01-15".to_string())),
            NaiveDate::from_ymd_opt(2024, 1, 15),
        );
    }

    #[test]
    fn malformed_start_date_falls_back_to_no_filter() {
        assert_eq!(resolve_start_date(Some("15/01/2024".to_string())), None);
        assert_eq!(resolve_start_date(Some("".to_string())), None);
        assert_eq!(resolve_start_date(Some("not-a-date".to_string())), None);
    }
}
