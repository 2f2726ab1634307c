use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::types::{SongDetail, SongResponse};

use super::GeniusClient;

/// Retrieves detailed information for a single song.
///
/// The search response carries title, artist and artwork, but album and
/// release-date detail only appear on the song resource, so a second request
/// is needed to fill out the response payload.
///
/// # Arguments
///
/// * `client` - Shared Genius client with credentials
/// * `id` - Genius song ID taken from a search hit
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SongDetail)` - Album and release date information, fields optional
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
///
/// # Retry Logic
///
/// Implements automatic retry for 502 Bad Gateway errors with a 10-second
/// delay. Other HTTP errors are propagated immediately to the caller.
pub async fn get_song(client: &GeniusClient, id: u64) -> Result<SongDetail, reqwest::Error> {
    let api_url = format!("{uri}/songs/{id}", uri = client.api_url, id = id);

    loop {
        let response = client
            .http
            .get(&api_url)
            .bearer_auth(&client.access_token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<SongResponse>().await?;
        return Ok(json.response.song);
    }
}
