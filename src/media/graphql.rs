//! Wire shape of the profile page (`graphql.user`) payload, shared by the page
//! and timeline decoders.
//!
//! Every field is optional here. Absent and `null` values are resolved to
//! empty defaults when a node is turned into a [`Media`], so the canonical
//! record never carries an unknown state.

use serde::Deserialize;
use serde_json::Number;

use super::error::Result;
use super::number;
use super::types::{Account, Media, MediaType};

#[derive(Debug, Default, Deserialize)]
pub(super) struct ProfilePage {
    graphql: Option<Graphql>,
}

#[derive(Debug, Default, Deserialize)]
struct Graphql {
    user: Option<User>,
}

#[derive(Debug, Default, Deserialize)]
struct User {
    id: Option<String>,
    username: Option<String>,
    full_name: Option<String>,
    profile_pic_url: Option<String>,
    is_private: Option<bool>,
    edge_owner_to_timeline_media: Option<Connection<PostNode>>,
}

#[derive(Debug, Default, Deserialize)]
struct Connection<T> {
    edges: Option<Vec<Edge<T>>>,
}

#[derive(Debug, Default, Deserialize)]
struct Edge<T> {
    node: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct Counter {
    count: Option<Number>,
}

#[derive(Debug, Default, Deserialize)]
struct CaptionNode {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PostNode {
    id: Option<String>,
    shortcode: Option<String>,
    taken_at_timestamp: Option<Number>,
    display_url: Option<String>,
    edge_media_to_comment: Option<Counter>,
    edge_media_preview_like: Option<Counter>,
    edge_media_to_caption: Option<Connection<CaptionNode>>,
}

impl ProfilePage {
    pub(super) fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Splits the page into its owner and the timeline nodes, in wire order.
    ///
    /// An edge whose node is missing still yields a (blank) node so that the
    /// output stays aligned with the edges array.
    pub(super) fn into_parts(self) -> (Account, Vec<PostNode>) {
        let user = self.graphql.and_then(|g| g.user).unwrap_or_default();

        let owner = Account {
            id: user.id.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            full_name: user.full_name.unwrap_or_default(),
            profile_pic_url: user.profile_pic_url.unwrap_or_default(),
            private: user.is_private.unwrap_or_default(),
        };

        let posts = user
            .edge_owner_to_timeline_media
            .and_then(|media| media.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.node.unwrap_or_default())
            .collect();

        (owner, posts)
    }
}

impl PostNode {
    pub(super) fn into_media(self, owner: Account) -> Media {
        let caption = self
            .edge_media_to_caption
            .and_then(|captions| captions.edges)
            .and_then(|edges| edges.into_iter().next())
            .and_then(|edge| edge.node)
            .and_then(|node| node.text)
            .unwrap_or_default();

        Media {
            code: self.shortcode.unwrap_or_default(),
            // Page payloads may omit the node id; the user id stands in for it
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| owner.id.clone()),
            caption,
            comments_count: number::count(
                self.edge_media_to_comment.as_ref().and_then(|c| c.count.as_ref()),
            ),
            likes_count: number::count(
                self.edge_media_preview_like.as_ref().and_then(|c| c.count.as_ref()),
            ),
            date: number::timestamp(self.taken_at_timestamp.as_ref()),
            // The profile endpoint only serves still previews, so `__typename`
            // is not trusted here.
            media_type: MediaType::Image,
            ad: false,
            media_url: self.display_url.unwrap_or_default(),
            owner,
            media_list: Vec::new(),
        }
        .with_primary_item()
    }
}
