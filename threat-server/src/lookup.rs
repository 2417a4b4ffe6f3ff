//! Threat lookup flow
//!
//! Fans out to the three providers, tolerates individual failures and hands
//! whatever succeeded to the aggregator.

use threatwatch_core::{aggregate, ThreatRecord};

use crate::providers::{self, Provider, ProviderError};
use crate::{AppError, AppResult, AppState};

/// Look up one (already validated) address
pub async fn lookup_threat(state: &AppState, ip: &str) -> AppResult<ThreatRecord> {
    if let Some(record) = state.cache.get(&ip.to_string()) {
        tracing::debug!("Cache hit for {}", ip);
        remember(state, &record).await;
        return Ok(record);
    }

    let (reputation, fraud_signal, geo) = tokio::join!(
        providers::fetch_reputation(&state.http, &state.config, ip),
        providers::fetch_fraud_signal(&state.http, &state.config, ip),
        providers::fetch_geolocation(&state.http, &state.config, ip),
    );

    let answered = {
        let failures: Vec<(Provider, &ProviderError)> = [
            (Provider::AbuseIpDb, reputation.as_ref().err()),
            (Provider::IpQualityScore, fraud_signal.as_ref().err()),
            (Provider::IpApi, geo.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(provider, err)| err.map(|e| (provider, e)))
        .collect();

        // Rate limiting outranks every other outcome
        if failures.iter().any(|(_, err)| err.is_rate_limited()) {
            tracing::warn!("Provider rate limit reached while looking up {}", ip);
            return Err(AppError::RateLimited);
        }

        for (provider, err) in &failures {
            tracing::error!(status = ?err.status_code(), "{} request failed: {}", provider, err);
        }
        3 - failures.len()
    };

    let reputation = reputation.ok();
    let fraud_signal = fraud_signal.ok();
    let geo = geo.ok();

    if reputation.is_none() && fraud_signal.is_none() && geo.is_none() {
        return Err(AppError::AllSourcesFailed);
    }

    let record = aggregate(ip, reputation.as_ref(), fraud_signal.as_ref(), geo.as_ref());

    state
        .cache
        .insert(ip.to_string(), record.clone(), state.config.cache_ttl());
    remember(state, &record).await;

    tracing::info!("Lookup {} complete ({}/3 sources)", ip, answered);

    Ok(record)
}

/// Append to the lookup history and persist it if configured
pub async fn remember(state: &AppState, record: &ThreatRecord) {
    state.history.write().record(record.clone());
    persist_history(state).await;
}

/// Write the current history to `HISTORY_FILE`, if set
///
/// Saves run one at a time on the blocking pool and each one snapshots the
/// history only after taking the save lock, so the file always ends up with
/// the newest state.
pub async fn persist_history(state: &AppState) {
    let Some(path) = state.config.history_file.clone() else {
        return;
    };
    let history = state.history.clone();
    let save_lock = state.save_lock.clone();

    let saved = tokio::task::spawn_blocking(move || {
        let _guard = save_lock.lock();
        let snapshot = history.read().clone();
        snapshot.save_to(&path).map_err(|e| (path, e))
    })
    .await;

    match saved {
        Ok(Ok(())) => {}
        Ok(Err((path, e))) => {
            tracing::warn!("Failed to save lookup history to {}: {}", path.display(), e)
        }
        Err(e) => tracing::warn!("History save task failed: {}", e),
    }
}
