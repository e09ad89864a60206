use super::error::{Error, Result};
use super::graphql::ProfilePage;
use super::types::Media;

/// Decodes a single post from a profile page payload.
///
/// The first timeline edge is the post; any further edges are ignored. A page
/// without timeline edges is a [`Error::MalformedPayload`].
pub fn from_media_page(data: &[u8]) -> Result<Media> {
    let (owner, posts) = ProfilePage::from_slice(data)?.into_parts();

    let post = posts
        .into_iter()
        .next()
        .ok_or(Error::MalformedPayload("page has no timeline media"))?;

    Ok(post.into_media(owner))
}
