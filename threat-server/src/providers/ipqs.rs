//! IPQualityScore fraud-signal lookups

use reqwest::Client;

use threatwatch_core::FraudSignalPayload;

use super::{check_status, ProviderError};
use crate::config::Config;

/// Query IPQualityScore for one address
pub async fn fetch_fraud_signal(
    client: &Client,
    config: &Config,
    ip: &str,
) -> Result<FraudSignalPayload, ProviderError> {
    let key = config
        .ipqs_api_key
        .as_deref()
        .ok_or(ProviderError::MissingApiKey("IPQS_API_KEY"))?;

    // Key travels in the path
    let url = format!("{}/{}/{}", config.ipqs_url.trim_end_matches('/'), key, ip);

    let response = client.get(url).send().await?;
    let payload = check_status(response).await?.json().await?;
    Ok(payload)
}
