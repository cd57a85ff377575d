// src/routes/visits.rs

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::query_as;

use super::{query_failed, ErrorResponse};
use crate::{models::VisitDate, AppState};

#[derive(Deserialize)]
pub struct VisitsQ {
    pub email: Option<String>,
}

/// Dates a user visited the park. The left join keeps tickets without a
/// client, but the equality filter drops them again, so a missing email
/// yields an empty array rather than every ticket.
pub async fn list_visit_dates(
    State(state): State<AppState>,
    Query(q): Query<VisitsQ>,
) -> Result<Json<Vec<VisitDate>>, ErrorResponse> {
    let rows = query_as::<_, VisitDate>(
        r#"
        SELECT t.date, t.filial, t.ticket_time, t.duration, us.email
        FROM public.tickets_und t
        LEFT JOIN public.users us ON t.client_id = us.id
        WHERE us.email = $1
        "#,
    )
    .bind(q.email)
    .fetch_all(&state.pool)
    .await
    .map_err(query_failed("failed to fetch visit dates"))?;
    Ok(Json(rows))
}
