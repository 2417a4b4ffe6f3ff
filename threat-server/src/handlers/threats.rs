//! Threat lookup handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use threatwatch_core::{validate_ip, ThreatRecord};

use crate::lookup::lookup_threat;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct ThreatQuery {
    #[serde(default)]
    #[validate(custom(function = "validate_ipv4"))]
    pub ip: String,
}

fn validate_ipv4(ip: &str) -> Result<(), ValidationError> {
    if validate_ip(ip) {
        Ok(())
    } else {
        Err(ValidationError::new("ipv4"))
    }
}

/// Aggregated threat record for `?ip=`
pub async fn lookup(
    State(state): State<AppState>,
    query: Result<Query<ThreatQuery>, QueryRejection>,
) -> AppResult<Json<ThreatRecord>> {
    // Repeated or otherwise undecodable `ip` parameters
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Rejected threat query: {}", rejection.body_text());
        AppError::InvalidIp
    })?;

    if query.ip.trim().is_empty() {
        return Err(AppError::MissingIp);
    }
    query.validate().map_err(|_| AppError::InvalidIp)?;

    let record = lookup_threat(&state, query.ip.trim()).await?;
    Ok(Json(record))
}
