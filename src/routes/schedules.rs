// src/routes/schedules.rs

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use sqlx::query_as;

use super::{query_failed, ErrorResponse};
use crate::{models::ScheduleTemplate, AppState};

#[derive(Deserialize)]
pub struct ListSchedulesQ {
    pub data: Option<String>,
}

/// Absent or unparseable `data` defaults to today's UTC calendar date.
fn resolve_report_date(raw: Option<String>, today: NaiveDate) -> NaiveDate {
    raw.and_then(|s| s.parse::<NaiveDate>().ok()).unwrap_or(today)
}

pub async fn list_schedules(
    State(state): State<AppState>,
    Query(q): Query<ListSchedulesQ>,
) -> Result<Json<Vec<ScheduleTemplate>>, ErrorResponse> {
    let day = resolve_report_date(q.data, Utc::now().date_naive());

    let rows = query_as::<_, ScheduleTemplate>(
        r#"
        SELECT id, date, start_time, end_time, capacity
        FROM public.templates
        WHERE date = $1
        "#,
    )
    .bind(day)
    .fetch_all(&state.pool)
    .await
    .map_err(query_failed("failed to fetch schedules"))?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn absent_data_defaults_to_today() {
        assert_eq!(resolve_report_date(None, today()), today());
    }

    #[test]
    fn explicit_data_overrides_today() {
        assert_eq!(
            resolve_report_date(Some("2024-01-15".to_string()), today()),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
    }

    #[test]
    fn malformed_data_defaults_to_today() {
        assert_eq!(resolve_report_date(Some("tomorrow".to_string()), today()), today());
    }

    #[test]
    fn explicit_today_matches_the_default() {
        assert_eq!(
            resolve_report_date(Some("2024-06-01".to_string()), today()),
            resolve_report_date(None, today()),
        );
    }
}
