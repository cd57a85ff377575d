// src/routes/reports.rs
//
// Grouped read-only reports over tickets. Whether cancelled tickets are
// counted is a deployment choice (INCLUDE_CANCELLED), not hardcoded.

use axum::extract::State;
use axum::Json;
use sqlx::query_as;

use super::{query_failed, ErrorResponse};
use crate::config::AppConfig;
use crate::models::{StatusCount, UnityCount, UnitySales, UserCount};
use crate::AppState;

/// Status filter applied to every grouped report. `None` means count all
/// tickets; `Some(status)` means exclude rows with that exact status.
fn excluded_status(config: &AppConfig) -> Option<&str> {
    if config.include_cancelled {
        None
    } else {
        Some(config.cancelled_status.as_str())
    }
}

pub async fn count_by_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCount>>, ErrorResponse> {
    let rows = if let Some(excluded) = excluded_status(&state.config) {
        query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count, MIN(date) AS date, MAX(created_at) AS created_at
            FROM public.tickets_und
            WHERE status <> $1
            GROUP BY status
            "#,
        )
        .bind(excluded)
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by status"))?
    } else {
        query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count, MIN(date) AS date, MAX(created_at) AS created_at
            FROM public.tickets_und
            GROUP BY status
            "#,
        )
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by status"))?
    };
    Ok(Json(rows))
}

pub async fn count_by_unity(
    State(state): State<AppState>,
) -> Result<Json<Vec<UnityCount>>, ErrorResponse> {
    let rows = if let Some(excluded) = excluded_status(&state.config) {
        query_as::<_, UnityCount>(
            r#"
            SELECT u.var_name AS unity_name, COUNT(t.id) AS count
            FROM public.unities u
            JOIN public.tickets_und t ON u.var_name = t.filial
            WHERE t.status <> $1
            GROUP BY u.var_name
            "#,
        )
        .bind(excluded)
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by unity"))?
    } else {
        query_as::<_, UnityCount>(
            r#"
            SELECT u.var_name AS unity_name, COUNT(t.id) AS count
            FROM public.unities u
            JOIN public.tickets_und t ON u.var_name = t.filial
            GROUP BY u.var_name
            "#,
        )
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by unity"))?
    };
    Ok(Json(rows))
}

pub async fn sum_sales_by_unity(
    State(state): State<AppState>,
) -> Result<Json<Vec<UnitySales>>, ErrorResponse> {
    let rows = if let Some(excluded) = excluded_status(&state.config) {
        query_as::<_, UnitySales>(
            r#"
            SELECT u.var_name AS unity_name, SUM(t.price) AS total_sales
            FROM public.unities u
            JOIN public.tickets_und t ON u.var_name = t.filial
            WHERE t.status <> $1
            GROUP BY u.var_name
            "#,
        )
        .bind(excluded)
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to sum sales by unity"))?
    } else {
        query_as::<_, UnitySales>(
            r#"
            SELECT u.var_name AS unity_name, SUM(t.price) AS total_sales
            FROM public.unities u
            JOIN public.tickets_und t ON u.var_name = t.filial
            GROUP BY u.var_name
            "#,
        )
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to sum sales by unity"))?
    };
    Ok(Json(rows))
}

pub async fn count_by_user(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserCount>>, ErrorResponse> {
    let rows = if let Some(excluded) = excluded_status(&state.config) {
        query_as::<_, UserCount>(
            r#"
            SELECT us.email AS "user", COUNT(*) AS count
            FROM public.tickets_und t
            JOIN public.users us ON t.client_id = us.id
            WHERE t.status <> $1
            GROUP BY us.email
            "#,
        )
        .bind(excluded)
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by user"))?
    } else {
        query_as::<_, UserCount>(
            r#"
            SELECT us.email AS "user", COUNT(*) AS count
            FROM public.tickets_und t
            JOIN public.users us ON t.client_id = us.id
            GROUP BY us.email
            "#,
        )
        .fetch_all(&state.pool)
        .await
        .map_err(query_failed("failed to count tickets by user"))?
    };
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_counts_every_status() {
        let config = AppConfig::default();
        assert_eq!(excluded_status(&config), None);
    }

    #[test]
    fn excluding_cancelled_yields_the_configured_status() {
        let config = AppConfig { include_cancelled: false, ..AppConfig::default() };
        assert_eq!(excluded_status(&config), Some("cancelado"));
    }

    #[test]
    fn custom_cancelled_status_is_honored() {
        let config = AppConfig {
            include_cancelled: false,
            cancelled_status: "void".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(excluded_status(&config), Some("void"));
    }
}
