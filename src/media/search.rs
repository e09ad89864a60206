use serde::Deserialize;
use serde_json::Number;

use super::error::Result;
use super::number;
use super::types::{Account, Media, MediaType};

/// Flat post object returned by the legacy search endpoint.
#[derive(Debug, Default, Deserialize)]
struct SearchMedia {
    id: Option<String>,
    code: Option<String>,
    is_video: Option<bool>,
    display_src: Option<String>,
    caption: Option<String>,
    date: Option<Number>,
    comments: Option<Counter>,
    likes: Option<Counter>,
    owner: Option<Owner>,
}

#[derive(Debug, Default, Deserialize)]
struct Counter {
    count: Option<Number>,
}

#[derive(Debug, Default, Deserialize)]
struct Owner {
    id: Option<String>,
}

/// Decodes one post from a search result object.
///
/// Only the owner's id is known for these records.
pub fn from_search_media(data: &[u8]) -> Result<Media> {
    let raw: SearchMedia = serde_json::from_slice(data)?;

    let media_type = if raw.is_video.unwrap_or_default() {
        MediaType::Video
    } else {
        MediaType::Image
    };

    Ok(Media {
        code: raw.code.unwrap_or_default(),
        id: raw.id.unwrap_or_default(),
        caption: raw.caption.unwrap_or_default(),
        comments_count: number::count(raw.comments.as_ref().and_then(|c| c.count.as_ref())),
        likes_count: number::count(raw.likes.as_ref().and_then(|c| c.count.as_ref())),
        date: number::timestamp(raw.date.as_ref()),
        media_type,
        ad: false,
        media_url: raw.display_src.unwrap_or_default(),
        owner: Account {
            id: raw.owner.and_then(|o| o.id).unwrap_or_default(),
            ..Default::default()
        },
        media_list: Vec::new(),
    }
    .with_primary_item())
}
