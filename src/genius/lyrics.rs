use scraper::{Html, Node, Selector};

use crate::Res;

use super::GeniusClient;

/// CSS selector for the elements Genius renders lyrics text into.
const LYRICS_CONTAINER: &str = r#"div[data-lyrics-container="true"]"#;

/// Fetches the lyrics text for a song from its public Genius page.
///
/// Genius does not expose lyrics through its API; they only exist in the song
/// page markup. This downloads the page and extracts the text content of
/// every lyrics container element, turning `<br>` elements into newlines.
///
/// # Arguments
///
/// * `client` - Shared Genius client (page fetches are unauthenticated but
///   reuse the connection pool)
/// * `url` - Absolute song page URL from a search hit
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The extracted lyrics text, non-empty
/// - `Err(_)` - Network error, non-success page status, or a page without a
///   recognizable lyrics container (e.g. an instrumental or a layout change)
pub async fn fetch_lyrics(client: &GeniusClient, url: &str) -> Res<String> {
    let response = client.http.get(url).send().await?.error_for_status()?;
    let html = response.text().await?;
    extract_lyrics(&html)
}

/// Pulls the lyrics text out of a song page document.
///
/// Kept synchronous so the non-`Send` parsed document never lives across an
/// await point.
fn extract_lyrics(html: &str) -> Res<String> {
    let selector = Selector::parse(LYRICS_CONTAINER).map_err(|e| e.to_string())?;
    let document = Html::parse_document(html);

    let mut lyrics = String::new();
    for container in document.select(&selector) {
        for node in container.descendants() {
            match node.value() {
                Node::Text(text) => lyrics.push_str(&text.text),
                Node::Element(element) if element.name() == "br" => lyrics.push('\n'),
                _ => {}
            }
        }
        lyrics.push('\n');
    }

    let lyrics = lyrics.trim().to_string();
    if lyrics.is_empty() {
        return Err("page contains no lyrics".into());
    }
    Ok(lyrics)
}
