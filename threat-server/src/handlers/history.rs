//! Lookup history handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use threatwatch_core::constants::{DEFAULT_HISTORY_VIEW, MAX_HISTORY_SIZE};
use threatwatch_core::{RiskLevel, ThreatRecord};

use crate::lookup::persist_history;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: ThreatRecord,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

/// Recent lookups, newest first, each with its risk label
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> AppResult<Json<HistoryResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_VIEW)
        .min(MAX_HISTORY_SIZE);

    let (recent, total) = {
        let history = state.history.read();
        (history.recent(limit), history.len())
    };

    let entries = recent
        .into_iter()
        .map(|record| HistoryEntry {
            risk_level: state.risk_level(Some(&record)),
            record,
        })
        .collect();

    Ok(Json(HistoryResponse { entries, total }))
}

/// Forget all lookups
pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.history.write().clear();
    persist_history(&state).await;

    tracing::info!("Lookup history cleared");
    StatusCode::NO_CONTENT
}
