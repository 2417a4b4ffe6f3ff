//! ipapi.co geolocation lookups (no key required)

use reqwest::Client;

use threatwatch_core::intel::types::GeoErrorBody;
use threatwatch_core::GeoPayload;

use super::{check_status, ProviderError};
use crate::config::Config;

/// Query ipapi.co for one address
pub async fn fetch_geolocation(
    client: &Client,
    config: &Config,
    ip: &str,
) -> Result<GeoPayload, ProviderError> {
    let url = format!("{}/{}/json/", config.ipapi_url.trim_end_matches('/'), ip);

    let response = client.get(url).send().await?;
    let body = check_status(response).await?.bytes().await?;

    // Failures come back as 200 with `"error": true`
    let status: GeoErrorBody = serde_json::from_slice(&body)?;
    if status.error {
        return Err(ProviderError::Upstream(format!(
            "IPAPI error: {}",
            status.reason.unwrap_or_else(|| "unknown".to_string())
        )));
    }

    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, Router};
    use serde_json::json;

    use super::*;
    use crate::providers::test_support::{respond, spawn_upstream};

    fn config_for(base: &str) -> Config {
        Config {
            ipapi_url: base.to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_parses_geolocation() {
        let router = Router::new().route(
            "/8.8.8.8/json/",
            respond(
                StatusCode::OK,
                json!({
                    "ip": "8.8.8.8",
                    "hostname": "dns.google",
                    "org": "GOOGLE",
                    "country_name": "United States",
                    "latitude": 37.42
                }),
            ),
        );
        let base = spawn_upstream(router).await;

        let payload = fetch_geolocation(&Client::new(), &config_for(&base), "8.8.8.8")
            .await
            .unwrap();
        assert_eq!(payload.hostname.as_deref(), Some("dns.google"));
        assert_eq!(payload.isp, None);
        assert_eq!(payload.org.as_deref(), Some("GOOGLE"));
    }

    #[tokio::test]
    async fn test_in_band_error() {
        let router = Router::new().route(
            "/10.0.0.1/json/",
            respond(
                StatusCode::OK,
                json!({ "ip": "10.0.0.1", "error": true, "reason": "Reserved IP Address" }),
            ),
        );
        let base = spawn_upstream(router).await;

        let err = fetch_geolocation(&Client::new(), &config_for(&base), "10.0.0.1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "IPAPI error: Reserved IP Address");
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let router = Router::new().route(
            "/8.8.8.8/json/",
            respond(StatusCode::TOO_MANY_REQUESTS, json!({ "error": true, "reason": "RateLimited" })),
        );
        let base = spawn_upstream(router).await;

        let err = fetch_geolocation(&Client::new(), &config_for(&base), "8.8.8.8")
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
    }
}
