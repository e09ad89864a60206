use super::error::Result;
use super::graphql::ProfilePage;
use super::types::Media;

/// Decodes every post in an account's media listing, in listing order.
///
/// Each record shares the listing's owner. An empty listing is not an error.
pub fn from_account_media_list(data: &[u8]) -> Result<Vec<Media>> {
    let (owner, posts) = ProfilePage::from_slice(data)?.into_parts();

    Ok(posts
        .into_iter()
        .map(|post| post.into_media(owner.clone()))
        .collect())
}
