//! In-memory dataset and lookups for the social graph.
//!
//! The dataset is built once at startup and never mutated afterwards, so
//! resolvers can borrow it freely without locking. Lookups are linear scans;
//! at this scale an index would cost more than it saves.

use crate::model::{Post, User, UserId};
use chrono::NaiveDate;

/// Immutable snapshot of users and posts, in insertion order.
#[derive(Debug, Clone)]
pub struct Dataset {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl Dataset {
    /// Build a dataset from arbitrary collections.
    ///
    /// Callers are trusted to keep ids unique within each collection.
    /// Foreign keys are not checked: dangling references are legal and
    /// resolve to absence at query time.
    pub fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self { users, posts }
    }

    /// The fixed tutorial snapshot: three users and four posts, heights in
    /// centimetres and weights in kilograms.
    pub fn seed() -> Self {
        let users = vec![
            User {
                id: 1,
                name: Some("Fong".to_string()),
                email: "fong@test.com".to_string(),
                password: "123456".to_string(),
                age: Some(25),
                height: Some(175.0),
                weight: Some(70.0),
                friend_ids: vec![2, 3],
                birth_day: Some(date(1997, 7, 12)),
            },
            User {
                id: 2,
                name: Some("Kevin".to_string()),
                email: "kevin@test.com".to_string(),
                password: "kevin123456".to_string(),
                age: Some(40),
                height: Some(185.0),
                weight: Some(90.0),
                friend_ids: vec![1],
                birth_day: None,
            },
            User {
                id: 3,
                name: Some("Mary".to_string()),
                email: "Mary@test.com".to_string(),
                password: "mary123456".to_string(),
                age: Some(18),
                height: Some(162.0),
                weight: None,
                friend_ids: vec![1],
                birth_day: None,
            },
        ];

        let posts = vec![
            Post {
                id: 1,
                author_id: 1,
                title: "Hello World!!".to_string(),
                content: "This is my first post. Nice to see you guys.".to_string(),
                created_at: date(2018, 10, 15),
                like_giver_ids: vec![1, 3],
            },
            Post {
                id: 2,
                author_id: 2,
                title: "Good Night".to_string(),
                content: "Started earnest brother believe an exposed so. \
                          Me he believing daughters if forfeited at furniture. \
                          Age again and stuff downs spoke. \
                          Late hour new nay able fat each sell. \
                          Nor themselves age introduced frequently use unsatiable devonshire get. \
                          They why quit gay cold rose deal park. \
                          One same they four did ask busy. \
                          Reserved opinions fat him nay position. \
                          Breakfast as zealously incommode do agreeable furniture. \
                          One too nay led fanny allow plate. "
                    .to_string(),
                created_at: date(2018, 10, 11),
                like_giver_ids: vec![2, 3],
            },
            Post {
                id: 3,
                author_id: 3,
                title: "Love U".to_string(),
                content: "好濕。燕 草 如 碧 絲，秦 桑 低 綠 枝。當 君 懷 歸 日，\
                          是 妾 斷 腸 時 。春 風 不 相 識，\t何 事 入 羅 幃 ？"
                    .to_string(),
                created_at: date(2018, 10, 10),
                like_giver_ids: vec![1, 2],
            },
            Post {
                id: 4,
                author_id: 1,
                title: "Love U Too".to_string(),
                content: "This is my first post. Nice to see you guys.".to_string(),
                created_at: date(2018, 10, 10),
                like_giver_ids: vec![1, 2, 3],
            },
        ];

        Self::new(users, posts)
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All posts in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a user by id. Ids are unique, so at most one record matches.
    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The first user whose name equals `name`, or `None`.
    ///
    /// Names are not unique; first match wins.
    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name.as_deref() == Some(name))
    }

    /// All posts by the given author, preserving dataset order.
    pub fn posts_by_author(&self, author_id: UserId) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.author_id == author_id).collect()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
