//! AbuseIPDB reputation lookups

use reqwest::{header::ACCEPT, Client};

use threatwatch_core::constants::ABUSE_DB_MAX_AGE_DAYS;
use threatwatch_core::intel::types::ReputationEnvelope;
use threatwatch_core::ReputationPayload;

use super::{check_status, ProviderError};
use crate::config::Config;

/// Query AbuseIPDB `check` for one address
pub async fn fetch_reputation(
    client: &Client,
    config: &Config,
    ip: &str,
) -> Result<ReputationPayload, ProviderError> {
    let key = config
        .abuseipdb_api_key
        .as_deref()
        .ok_or(ProviderError::MissingApiKey("ABUSEIPDB_API_KEY"))?;

    let max_age = ABUSE_DB_MAX_AGE_DAYS.to_string();

    let response = client
        .get(&config.abuseipdb_url)
        .query(&[
            ("ipAddress", ip),
            ("maxAgeInDays", max_age.as_str()),
            ("verbose", "true"),
        ])
        .header(ACCEPT, "application/json")
        .header("Key", key)
        .send()
        .await?;

    let envelope: ReputationEnvelope = check_status(response).await?.json().await?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, http::HeaderMap, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::providers::test_support::{respond, spawn_upstream};

    fn config_for(base: &str) -> Config {
        Config {
            abuseipdb_api_key: Some("test-key".to_string()),
            abuseipdb_url: format!("{}/check", base),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_sends_key_and_query() {
        let router = Router::new().route(
            "/check",
            get(
                |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                    let authorised = headers.get("key").is_some_and(|k| k == "test-key");
                    let expected_query = params.get("ipAddress").map(String::as_str) == Some("8.8.8.8")
                        && params.get("maxAgeInDays").map(String::as_str) == Some("90")
                        && params.get("verbose").map(String::as_str) == Some("true");

                    if !(authorised && expected_query) {
                        return (StatusCode::UNAUTHORIZED, Json(json!({})));
                    }

                    (
                        StatusCode::OK,
                        Json(json!({
                            "data": {
                                "ipAddress": "8.8.8.8",
                                "abuseConfidenceScore": 45,
                                "totalReports": 100,
                                "countryCode": "US",
                                "hostnames": ["google-dns.com"],
                                "isp": "Google LLC"
                            }
                        })),
                    )
                },
            ),
        );
        let base = spawn_upstream(router).await;

        let payload = fetch_reputation(&Client::new(), &config_for(&base), "8.8.8.8")
            .await
            .unwrap();
        assert_eq!(payload.abuse_confidence_score, Some(45));
        assert_eq!(payload.first_hostname(), Some("google-dns.com"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let config = Config {
            abuseipdb_url: "http://127.0.0.1:1/unreachable".to_string(),
            ..Config::default()
        };

        let err = fetch_reputation(&Client::new(), &config, "8.8.8.8")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey("ABUSEIPDB_API_KEY")));
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let router = Router::new().route(
            "/check",
            respond(
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "errors": [{ "detail": "The ip address must be a valid IPv4 or IPv6 address." }] }),
            ),
        );
        let base = spawn_upstream(router).await;

        let err = fetch_reputation(&Client::new(), &config_for(&base), "8.8.8.8")
            .await
            .unwrap_err();
        match err {
            ProviderError::Status { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("valid IPv4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let router = Router::new().route(
            "/check",
            respond(
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "errors": [{ "detail": "Daily rate limit of 1000 requests exceeded" }] }),
            ),
        );
        let base = spawn_upstream(router).await;

        let err = fetch_reputation(&Client::new(), &config_for(&base), "8.8.8.8")
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
    }
}
