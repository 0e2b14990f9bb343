//! Admin statistics endpoints.

use super::{types::*, ApiClient};
use crate::auth::ApiError;

/// Aggregation buckets for the point graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphInterval {
    Daily,
    Weekly,
    Monthly,
}

impl GraphInterval {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Filters for the admin point ledger.
#[derive(Debug, Clone, Default)]
pub struct PointLogQuery {
    pub user_id: Option<i64>,
    pub nickname: Option<String>,
    pub point_type: Option<String>,
    pub page: i64,
    pub size: i64,
}

impl PointLogQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(user_id) = self.user_id {
            query.push(("userId", user_id.to_string()));
        }
        if let Some(nickname) = &self.nickname {
            query.push(("nickname", nickname.clone()));
        }
        if let Some(point_type) = &self.point_type {
            query.push(("type", point_type.clone()));
        }
        query
    }
}

impl ApiClient {
    /// Platform aggregates for one day (`YYYY-MM-DD`).
    pub async fn daily_statistics(&self, stat_date: &str) -> Result<DailyStatistics, ApiError> {
        self.api_get(&format!("/admin/statistics/date/{stat_date}"), &[])
            .await
    }

    /// Point ledger logs with optional filters, paged.
    pub async fn point_logs(&self, query: &PointLogQuery) -> Result<Page<PointLog>, ApiError> {
        self.api_get("/admin/statistics/points/logs", &query.to_query())
            .await
    }

    /// Aggregated dashboard series at the given interval.
    pub async fn point_graph(&self, interval: GraphInterval) -> Result<PointGraph, ApiError> {
        let query = [("interval", interval.as_str().to_string())];
        self.api_get("/admin/statistics/points/graph", &query).await
    }
}
