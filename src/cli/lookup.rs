use crate::{
    error,
    genius::{self, GeniusClient},
    info, success, utils,
};

pub async fn lookup(title: String, artist: Option<String>) {
    let client = GeniusClient::from_env();

    let mut text = title;
    if let Some(artist) = artist {
        text.push(' ');
        text.push_str(&artist);
    }

    info!("Searching for \"{}\"", text);

    let hits = match genius::search_songs(&client, &text).await {
        Ok(hits) => hits,
        Err(e) => error!("Search failed: {}", e),
    };
    let Some(song) = hits.into_iter().next() else {
        error!("No matching song found.");
    };

    let detail = match genius::get_song(&client, song.id).await {
        Ok(detail) => detail,
        Err(e) => error!("Song lookup failed: {}", e),
    };
    let lyrics = match genius::fetch_lyrics(&client, &song.url).await {
        Ok(lyrics) => lyrics,
        Err(e) => error!("Lyrics fetch failed: {}", e),
    };

    if let Some(title) = &song.title {
        success!("{}", title);
    }
    if let Some(artist) = song.primary_artist.as_ref().and_then(|a| a.name.as_deref()) {
        info!("Artist: {}", artist);
    }
    if let Some(album) = detail.album.as_ref().and_then(|a| a.name.as_deref()) {
        info!("Album: {}", album);
    }
    let released = utils::normalize_release_date(detail.release_date.clone().or_else(|| song.release_date.clone()));
    if let Some(date) = released {
        info!("Released: {}", date);
    }

    println!();
    println!("{}", lyrics);
}
