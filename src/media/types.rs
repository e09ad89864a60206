use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Carousel,
}

/// One visual asset belonging to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub code: String,
}

/// Owner fields embedded in a media payload. How many of them are filled in
/// depends on which endpoint the record came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub private: bool,
}

/// A post, normalized from any of the supported payload shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    pub code: String,
    pub id: String,
    pub caption: String,
    pub comments_count: u32,
    pub likes_count: u32,
    /// Unix timestamp in seconds.
    pub date: u64,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// No payload carries an ad marker yet, so this is always `false`.
    pub ad: bool,
    pub media_url: String,
    pub owner: Account,
    pub media_list: Vec<MediaItem>,
}

impl Media {
    /// Builds a record whose media list holds its primary asset.
    pub(crate) fn with_primary_item(mut self) -> Self {
        self.media_list = vec![MediaItem {
            media_type: self.media_type,
            url: self.media_url.clone(),
            code: self.code.clone(),
        }];
        self
    }
}
