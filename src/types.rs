use serde::{Deserialize, Serialize};

use crate::genius::GeniusClient;

/// Immutable per-process state shared with every request handler.
pub struct AppState {
    pub proxy_secret: String,
    pub enforce_ip_allowlist: bool,
    pub genius: GeniusClient,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub response: SearchHits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHits {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub result: SongHit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongHit {
    pub id: u64,
    pub url: String,
    pub title: Option<String>,
    pub primary_artist: Option<ArtistRef>,
    pub song_art_image_url: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResponse {
    pub response: SongContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongContainer {
    pub song: SongDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDetail {
    pub album: Option<AlbumRef>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: Option<String>,
    pub cover_art_url: Option<String>,
}

/// Body of a successful lyrics response. Absent provider data is surfaced as
/// `null`, never omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsPayload {
    pub lyrics: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    #[serde(rename = "albumArt")]
    pub album_art: Option<String>,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
    pub image: Option<String>,
}
