// src/models/mod.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

// ───────────────────────────────────────
// Listing projections
// ───────────────────────────────────────
#[derive(Debug, Serialize, FromRow)]
pub struct TicketRow {
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub filial: String,
    pub price: Decimal,
    pub ticket_time: NaiveTime,
    pub status: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ScheduleTemplate {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
}

// ───────────────────────────────────────
// Grouped report rows
// ───────────────────────────────────────
#[derive(Debug, Serialize, FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
    /// Earliest ticket date seen for this status.
    pub date: NaiveDate,
    /// Most recent creation timestamp seen for this status.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UnityCount {
    pub unity_name: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UnitySales {
    pub unity_name: String,
    #[serde(rename = "totalSales")]
    pub total_sales: Decimal,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UserCount {
    pub user: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct VisitDate {
    pub date: NaiveDate,
    pub filial: String,
    pub ticket_time: NaiveTime,
    pub duration: Option<i32>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unity_sales_serializes_total_sales_as_camel_case() {
        let row = UnitySales {
            unity_name: "parque-norte".to_string(),
            total_sales: Decimal::new(12550, 2),
        };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["unity_name"], "parque-norte");
        assert_eq!(v["totalSales"], "125.50");
        assert!(v.get("total_sales").is_none());
    }

    #[test]
    fn status_count_field_names_match_contract() {
        let row = StatusCount {
            status: "pago".to_string(),
            count: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap(),
        };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["status"], "pago");
        assert_eq!(v["count"], 3);
        assert_eq!(v["date"], "2024-01-15");
    }

    #[test]
    fn user_count_uses_user_key() {
        let row = UserCount { user: "a@b.com".to_string(), count: 7 };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["user"], "a@b.com");
        assert_eq!(v["count"], 7);
    }
}
