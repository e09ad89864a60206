//! Normalization of Instagram media payloads.
//!
//! Three endpoints return posts in three shapes: the single post page, an
//! account's timeline listing and the legacy search result. Each has its own
//! decoder, and all of them produce the same [`Media`] record.

pub mod client;
pub mod error;
mod graphql;
mod number;
pub mod page;
pub mod refresh;
pub mod search;
pub mod timeline;
pub mod types;

pub use self::client::{Client, FetchError};
pub use self::error::{Error, Result};
pub use self::page::from_media_page;
pub use self::refresh::FetchMedia;
pub use self::search::from_search_media;
pub use self::timeline::from_account_media_list;
pub use self::types::{Account, Media, MediaItem, MediaType};
