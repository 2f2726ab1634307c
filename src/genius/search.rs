use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    types::{SearchResponse, SongHit},
    warning,
};

use super::GeniusClient;

/// Searches Genius for songs matching the given text.
///
/// Issues `GET {api}/search?q=<text>` with bearer authentication and returns
/// the hits in provider ranking order. The caller is expected to treat the
/// first element as the best match.
///
/// # Arguments
///
/// * `client` - Shared Genius client with credentials
/// * `text` - Free-text search string, typically `"<title> <artist>"`
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<SongHit>)` - Ranked song hits, possibly empty
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Rate Limiting
///
/// The function handles 429 Too Many Requests responses by reading the
/// `Retry-After` header, sleeping for the indicated delay and retrying when
/// the delay is sane (≤ 120 seconds). Longer delays produce a warning and the
/// response is surfaced as an HTTP error instead of blocking the request for
/// minutes.
pub async fn search_songs(
    client: &GeniusClient,
    text: &str,
) -> Result<Vec<SongHit>, reqwest::Error> {
    let api_url = format!(
        "{uri}/search?q={query}",
        uri = client.api_url,
        query = urlencoding::encode(text)
    );

    loop {
        let response = client
            .http
            .get(&api_url)
            .bearer_auth(&client.access_token)
            .send()
            .await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds.",
                    retry_after
                );
            }
        }

        let response = response.error_for_status()?;
        let json = response.json::<SearchResponse>().await?;

        return Ok(json.response.hits.into_iter().map(|hit| hit.result).collect());
    }
}
