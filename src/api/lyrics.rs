use std::{net::SocketAddr, sync::Arc};

use axum::{
    Extension,
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::{
    Res, config,
    error::ApiError,
    genius::{self, GeniusClient},
    types::{AppState, LyricsPayload},
    utils,
};

/// Header the RapidAPI gateway uses to prove a request passed through it.
pub const PROXY_SECRET_HEADER: &str = "x-rapidapi-proxy-secret";

/// Header carrying the original caller address when the service sits behind
/// a proxy.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

const CACHE_CONTROL_VALUE: &str = "public, s-maxage=86400, stale-while-revalidate=43200";

/// The proxied lyrics lookup endpoint.
///
/// Registered for every method on `/` and `/{*query}`; the gate order is
/// secret, caller address, method, query shape, then the provider lookup.
pub async fn lyrics(
    method: Method,
    uri: Uri,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match handle(method, uri, remote, &headers, &state).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn handle(
    method: Method,
    uri: Uri,
    remote: SocketAddr,
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Response, ApiError> {
    let secret = headers
        .get(PROXY_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if secret != Some(state.proxy_secret.as_str()) {
        return Err(ApiError::Unauthorized);
    }

    if state.enforce_ip_allowlist {
        let forwarded = headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|value| value.to_str().ok());
        let caller_ip = utils::client_ip(forwarded).unwrap_or_else(|| remote.ip().to_string());
        if !config::ip_allowed(&caller_ip) {
            return Err(ApiError::Unauthorized);
        }
    }

    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let raw_segments = utils::split_query_segments(uri.path());
    let segments = utils::decode_segments(&raw_segments).map_err(|_| ApiError::BadRequest)?;
    if !utils::validate_query(&segments) {
        return Err(ApiError::BadRequest);
    }

    let payload = match lookup(&state.genius, &segments).await {
        Ok(payload) => payload,
        Err(_) => return Err(ApiError::NotFound),
    };

    let body = serde_json::to_string(&payload).map_err(|_| ApiError::Internal)?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(Body::from(body))
        .map_err(|_| ApiError::Internal)
}

/// Resolves a validated query against the provider: top search hit, song
/// detail, then the lyrics text. Every failure in here means "no lyrics" to
/// the caller.
async fn lookup(client: &GeniusClient, segments: &[String]) -> Res<LyricsPayload> {
    let text = utils::build_search_text(segments);

    let hits = genius::search_songs(client, &text).await?;
    let Some(song) = hits.into_iter().next() else {
        return Err("no matching song".into());
    };

    let detail = genius::get_song(client, song.id).await?;
    let lyrics = genius::fetch_lyrics(client, &song.url).await?;

    let (album, album_art) = match detail.album {
        Some(album) => (album.name, album.cover_art_url),
        None => (None, None),
    };

    Ok(LyricsPayload {
        lyrics: Some(lyrics),
        title: song.title,
        artist: song.primary_artist.and_then(|artist| artist.name),
        album,
        album_art,
        release_date: utils::normalize_release_date(detail.release_date.or(song.release_date)),
        image: song.song_art_image_url,
    })
}
