use async_graphql::{Context, Enum, ID, Object};

use crate::dataset::Dataset;
use crate::model;

use super::scalars::{DateTime, EmailAddress};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum HeightUnit {
    Metre,
    #[default]
    Centimetre,
    Foot,
}

impl From<HeightUnit> for model::HeightUnit {
    fn from(u: HeightUnit) -> Self {
        match u {
            HeightUnit::Metre => model::HeightUnit::Metre,
            HeightUnit::Centimetre => model::HeightUnit::Centimetre,
            HeightUnit::Foot => model::HeightUnit::Foot,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Gram,
    Pound,
}

impl From<WeightUnit> for model::WeightUnit {
    fn from(u: WeightUnit) -> Self {
        match u {
            WeightUnit::Kilogram => model::WeightUnit::Kilogram,
            WeightUnit::Gram => model::WeightUnit::Gram,
            WeightUnit::Pound => model::WeightUnit::Pound,
        }
    }
}

/// A member of the social graph.
pub struct User(model::User);

impl From<model::User> for User {
    fn from(user: model::User) -> Self {
        User(user)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn email(&self) -> EmailAddress {
        EmailAddress(self.0.email.clone())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    /// Height in the requested unit; stored in centimetres.
    async fn height(&self, #[graphql(default)] unit: HeightUnit) -> Option<f64> {
        let unit = model::HeightUnit::from(unit);
        self.0.height.map(|cm| unit.from_centimetres(cm))
    }

    /// Weight in the requested unit; stored in kilograms. An absent stored
    /// weight stays absent no matter which unit is asked for.
    #[graphql(deprecation = "It's secret")]
    async fn weight(&self, #[graphql(default)] unit: WeightUnit) -> Option<f64> {
        let unit = model::WeightUnit::from(unit);
        self.0.weight.map(|kg| unit.from_kilograms(kg))
    }

    /// Friends in `friend_ids` order. Dangling ids come back as null slots
    /// rather than being dropped or raised as errors.
    async fn friends(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Option<User>>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(self
            .0
            .friend_ids
            .iter()
            .map(|&id| dataset.find_user_by_id(id).cloned().map(User::from))
            .collect())
    }

    /// Posts authored by this user, in dataset order.
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset
            .posts_by_author(self.0.id)
            .into_iter()
            .cloned()
            .map(Post::from)
            .collect())
    }

    async fn birth_day(&self) -> Option<DateTime> {
        self.0.birth_day.map(DateTime::from)
    }
}

/// A post in a user's feed.
pub struct Post(model::Post);

impl From<model::Post> for Post {
    fn from(post: model::Post) -> Self {
        Post(post)
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// The author, or null if the author id does not resolve.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset
            .find_user_by_id(self.0.author_id)
            .cloned()
            .map(User::from))
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn created_at(&self) -> DateTime {
        DateTime::from(self.0.created_at)
    }

    /// Users who liked this post, in like order, with the same null-slot
    /// behavior as `User.friends`.
    async fn like_givers(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Option<User>>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(self
            .0
            .like_giver_ids
            .iter()
            .map(|&id| dataset.find_user_by_id(id).cloned().map(User::from))
            .collect())
    }
}
