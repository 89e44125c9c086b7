use super::{PostId, UserId};
use chrono::NaiveDate;

/// A post in a user's feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,

    /// Foreign key into the user collection.
    pub author_id: UserId,

    pub title: String,
    pub content: String,
    pub created_at: NaiveDate,

    /// Users who liked this post, in like order.
    pub like_giver_ids: Vec<UserId>,
}
